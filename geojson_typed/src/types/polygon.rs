use super::{CompositeCoordinates, LinearRing, positions_to_wkt};
use crate::{JsonPath, Result, raw};
use serde_json::Value;
use std::fmt::Debug;

/// The rings of a polygon: the first ring is the exterior boundary, every
/// following ring is a hole.
///
/// This is purely structural; holes are not checked to lie inside the exterior.
#[derive(Clone, PartialEq)]
pub struct PolygonCoords(Vec<LinearRing>);

impl PolygonCoords {
	/// Rings are validated on their own, so any list of them is a polygon.
	pub(crate) fn checked(rings: Vec<LinearRing>) -> Result<Self> {
		Ok(Self(rings))
	}

	/// The exterior ring, `None` for an empty polygon.
	pub fn exterior(&self) -> Option<&LinearRing> {
		self.0.first()
	}

	/// The holes of the polygon.
	pub fn interiors(&self) -> impl Iterator<Item = &LinearRing> {
		self.0.iter().skip(1)
	}

	pub(crate) fn to_wkt(&self, precision: Option<u8>) -> String {
		let rings = self
			.0
			.iter()
			.map(|ring| positions_to_wkt(ring.as_slice(), precision))
			.collect::<Vec<_>>();
		format!("({})", rings.join(", "))
	}
}

impl CompositeCoordinates<LinearRing> for PolygonCoords {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let array = raw::expect_array(value, path)?;
		Ok(Self(raw::parse_elements(array, path, LinearRing::from_value)?))
	}

	fn as_slice(&self) -> &[LinearRing] {
		&self.0
	}

	fn into_inner(self) -> Vec<LinearRing> {
		self.0
	}

	fn to_value(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|ring| ring.to_value(precision)).collect::<Vec<_>>())
	}
}

impl Debug for PolygonCoords {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_try_from_array!(PolygonCoords, LinearRing);
