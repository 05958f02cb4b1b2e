//! A validating, strongly typed GeoJSON data model.
//!
//! Every entity is built from an untyped [`serde_json::Value`] through a validating
//! `from_value` constructor and is immutable afterwards. Validation failures are
//! reported as a single [`GeoJsonError`] that locates the offending value with a
//! [`JsonPath`].
//!
//! Features and feature collections are generic over the geometry type `G` and the
//! properties type `P`:
//!
//! ```
//! use geojson_typed::{Feature, GeoJsonError, MultiPolygon, Polygon};
//!
//! let json = r#"{
//!   "type": "Feature",
//!   "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]},
//!   "properties": {"name": "triangle"}
//! }"#;
//!
//! let feature = Feature::<Polygon>::from_json_str(json).unwrap();
//! assert_eq!(feature.properties().unwrap()["name"], "triangle");
//!
//! let err = Feature::<MultiPolygon>::from_json_str(json).unwrap_err();
//! assert!(matches!(err, GeoJsonError::GeometryMismatch { .. }));
//! ```

mod adapter;
mod error;
mod feature;
mod geometry;
mod path;
mod raw;
mod reduce;
mod types;

pub use adapter::*;
pub use error::*;
pub use feature::*;
pub use geometry::*;
pub use path::*;
pub use raw::JsonObject;
pub use types::*;
