//! Accepts geometries from objects that can describe themselves as GeoJSON.

use crate::GeometryType;
use serde_json::Value;

/// Something that can describe itself as a raw GeoJSON geometry mapping.
///
/// Implementors outside this crate return `anyhow::Result`, so any error type
/// they use can be surfaced through [`GeoJsonError::Adapter`](crate::GeoJsonError::Adapter).
pub trait GeoInterface {
	fn describe_geometry(&self) -> anyhow::Result<Value>;
}

impl<G: GeometryType> GeoInterface for G {
	fn describe_geometry(&self) -> anyhow::Result<Value> {
		Ok(self.geo_interface())
	}
}

/// An untyped mapping describes itself.
impl GeoInterface for Value {
	fn describe_geometry(&self) -> anyhow::Result<Value> {
		Ok(self.clone())
	}
}
