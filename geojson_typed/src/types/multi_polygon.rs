use super::{CompositeCoordinates, PolygonCoords};
use crate::{JsonPath, Result, raw};
use serde_json::Value;
use std::fmt::Debug;

/// The coordinates of a multi-polygon: a sequence of polygons.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonCoords(Vec<PolygonCoords>);

impl MultiPolygonCoords {
	pub(crate) fn checked(polygons: Vec<PolygonCoords>) -> Result<Self> {
		Ok(Self(polygons))
	}

	pub(crate) fn to_wkt(&self, precision: Option<u8>) -> String {
		let polygons = self.0.iter().map(|p| p.to_wkt(precision)).collect::<Vec<_>>();
		format!("({})", polygons.join(","))
	}
}

impl CompositeCoordinates<PolygonCoords> for MultiPolygonCoords {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let array = raw::expect_array(value, path)?;
		Ok(Self(raw::parse_elements(array, path, PolygonCoords::from_value)?))
	}

	fn as_slice(&self) -> &[PolygonCoords] {
		&self.0
	}

	fn into_inner(self) -> Vec<PolygonCoords> {
		self.0
	}

	fn to_value(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|p| p.to_value(precision)).collect::<Vec<_>>())
	}
}

impl Debug for MultiPolygonCoords {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_try_from_array!(MultiPolygonCoords, PolygonCoords);
