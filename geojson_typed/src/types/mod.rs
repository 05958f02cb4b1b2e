// Positions, bounding boxes and the validated coordinate containers that the
// geometry variants are built from. Every container validates on construction,
// both from raw JSON (`from_value`) and from Rust values (`TryFrom`).

mod bbox;
mod linestring;
mod macros;
mod multi_polygon;
mod polygon;
mod position;
mod ring;
mod traits;

pub use bbox::*;
pub use linestring::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use position::*;
pub use ring::*;
pub use traits::*;
