use super::{CompositeCoordinates, Position};
use crate::{GeoJsonError, JsonPath, Result, raw};
use serde_json::Value;
use std::fmt::Debug;

/// The coordinates of a line: a sequence of at least two positions.
#[derive(Clone, PartialEq)]
pub struct LineStringCoords(Vec<Position>);

impl LineStringCoords {
	/// Minimum number of positions in a line.
	pub const MIN_POSITIONS: usize = 2;

	pub(crate) fn checked(positions: Vec<Position>) -> Result<Self> {
		check_min_positions(positions.len(), Self::MIN_POSITIONS, "a line string", &JsonPath::root())?;
		Ok(Self(positions))
	}

	/// Positions of a validated ring, which always has more than the minimum.
	pub(crate) fn from_closed_ring(positions: Vec<Position>) -> Self {
		Self(positions)
	}
}

/// Fails unless a sequence has at least `min` positions.
pub(crate) fn check_min_positions(len: usize, min: usize, what: &str, path: &JsonPath) -> Result<()> {
	if len < min {
		return Err(GeoJsonError::shape(
			path,
			format!("{what} must have at least {min} positions, found {len}"),
		));
	}
	Ok(())
}

/// Validates a raw array of positions, checking the minimum count before the elements.
pub(crate) fn parse_positions(value: &Value, min: usize, what: &str, path: &JsonPath) -> Result<Vec<Position>> {
	let array = raw::expect_array(value, path)?;
	check_min_positions(array.len(), min, what, path)?;
	raw::parse_elements(array, path, Position::from_value)
}

/// Renders positions as a parenthesized WKT list: `(x y, x y)`.
pub(crate) fn positions_to_wkt(positions: &[Position], precision: Option<u8>) -> String {
	let list = positions.iter().map(|p| p.to_wkt(precision)).collect::<Vec<_>>();
	format!("({})", list.join(", "))
}

pub(crate) fn positions_to_value(positions: &[Position], precision: Option<u8>) -> Value {
	Value::from(positions.iter().map(|p| p.to_value(precision)).collect::<Vec<_>>())
}

impl CompositeCoordinates<Position> for LineStringCoords {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let positions = parse_positions(value, Self::MIN_POSITIONS, "a line string", path)?;
		Ok(Self(positions))
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

impl Debug for LineStringCoords {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_try_from_array!(LineStringCoords, Position);
