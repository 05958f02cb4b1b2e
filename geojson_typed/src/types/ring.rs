use super::{
	CompositeCoordinates, LineStringCoords, Position, check_min_positions, parse_positions, positions_to_value,
};
use crate::{GeoJsonError, JsonPath, Result};
use serde_json::Value;
use std::fmt::Debug;

/// A closed ring of positions, the building block of polygons.
///
/// A ring has at least 4 positions (3 distinct points plus the closing point), and
/// its first and last positions are identical.
#[derive(Clone, PartialEq)]
pub struct LinearRing(Vec<Position>);

impl LinearRing {
	/// Minimum number of positions in a ring, including the closing one.
	pub const MIN_POSITIONS: usize = 4;

	pub(crate) fn checked(positions: Vec<Position>) -> Result<Self> {
		let path = JsonPath::root();
		check_min_positions(positions.len(), Self::MIN_POSITIONS, "a linear ring", &path)?;
		Self::closed(positions, &path)
	}

	fn closed(positions: Vec<Position>, path: &JsonPath) -> Result<Self> {
		match (positions.first(), positions.last()) {
			(Some(first), Some(last)) if first != last => Err(GeoJsonError::RingNotClosed {
				path: path.clone(),
				first: *first,
				last: *last,
			}),
			_ => Ok(Self(positions)),
		}
	}

	/// Builds the closed ring `(x_min y_min, x_max y_min, x_max y_max, x_min y_max, x_min y_min)`.
	pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
		Self::try_from([
			[x_min, y_min],
			[x_max, y_min],
			[x_max, y_max],
			[x_min, y_max],
			[x_min, y_min],
		])
	}
}

impl CompositeCoordinates<Position> for LinearRing {
	/// Validates the minimum count, then every position, then closure.
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let positions = parse_positions(value, Self::MIN_POSITIONS, "a linear ring", path)?;
		Self::closed(positions, path)
	}

	fn as_slice(&self) -> &[Position] {
		&self.0
	}

	fn into_inner(self) -> Vec<Position> {
		self.0
	}

	fn to_value(&self, precision: Option<u8>) -> Value {
		positions_to_value(&self.0, precision)
	}
}

impl Debug for LinearRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<LinearRing> for LineStringCoords {
	fn from(ring: LinearRing) -> Self {
		LineStringCoords::from_closed_ring(ring.0)
	}
}

crate::impl_try_from_array!(LinearRing, Position);
