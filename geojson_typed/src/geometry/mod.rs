mod collection;
mod envelope;
mod kind;
mod linear_ring;
mod linestring;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod traits;

pub use collection::*;
pub use envelope::*;
pub use kind::*;
pub use linear_ring::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
