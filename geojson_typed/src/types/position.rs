use crate::{GeoJsonError, JsonPath, Result, raw};
use serde_json::Value;
use std::fmt::Debug;

/// A single coordinate tuple: longitude, latitude and an optional elevation.
///
/// All components are finite. Positions are immutable once constructed.
#[derive(Clone, Copy, PartialEq)]
pub struct Position {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Position {
	/// Creates a 2D position.
	pub fn new(x: f64, y: f64) -> Result<Self> {
		Self::checked(x, y, None, &JsonPath::root())
	}

	/// Creates a 3D position.
	pub fn new_3d(x: f64, y: f64, z: f64) -> Result<Self> {
		Self::checked(x, y, Some(z), &JsonPath::root())
	}

	fn checked(x: f64, y: f64, z: Option<f64>, path: &JsonPath) -> Result<Self> {
		if !(x.is_finite() && y.is_finite() && z.is_none_or(f64::is_finite)) {
			return Err(GeoJsonError::shape(path, "position values must be finite"));
		}
		Ok(Self { x, y, z })
	}

	/// Validates a raw `[x, y]` or `[x, y, z]` array.
	pub fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let array = raw::expect_array(value, path)?;
		let numbers = raw::parse_elements(array, path, raw::expect_number)?;
		Self::from_slice(&numbers, path)
	}

	fn from_slice(values: &[f64], path: &JsonPath) -> Result<Self> {
		match *values {
			[x, y] => Self::checked(x, y, None, path),
			[x, y, z] => Self::checked(x, y, Some(z), path),
			_ => Err(GeoJsonError::shape(
				path,
				format!("a position must have 2 or 3 values, found {}", values.len()),
			)),
		}
	}

	/// Longitude or easting.
	pub fn x(&self) -> f64 {
		self.x
	}

	/// Latitude or northing.
	pub fn y(&self) -> f64 {
		self.y
	}

	/// Elevation, if the position is 3D.
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	/// Returns 2 or 3.
	pub fn dimensions(&self) -> usize {
		if self.z.is_some() { 3 } else { 2 }
	}

	/// The values as a vector of 2 or 3 numbers.
	pub fn to_vec(&self) -> Vec<f64> {
		let mut values = vec![self.x, self.y];
		values.extend(self.z);
		values
	}

	/// Returns the position as a JSON array, optionally rounded to `precision` decimals.
	pub fn to_value(&self, precision: Option<u8>) -> Value {
		Value::from(self.to_vec().into_iter().map(|v| round(v, precision)).collect::<Vec<_>>())
	}

	/// Returns the position as WKT coordinates, e.g. `13.38 52.46`.
	pub fn to_wkt(&self, precision: Option<u8>) -> String {
		self
			.to_vec()
			.into_iter()
			.map(|v| format_number(round(v, precision)))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Rounds to `precision` decimals. Values that would overflow while scaling are kept as is.
fn round(value: f64, precision: Option<u8>) -> f64 {
	let Some(prec) = precision else {
		return value;
	};
	let factor = 10f64.powi(i32::from(prec));
	let scaled = value * factor;
	if scaled.is_finite() {
		scaled.round() / factor
	} else {
		value
	}
}

/// Formats a number as the shortest decimal that reads back to the same value,
/// always with a fractional part (`1.0`, `13.38`).
pub(crate) fn format_number(value: f64) -> String {
	format!("{value:?}")
}

impl TryFrom<[f64; 2]> for Position {
	type Error = GeoJsonError;
	fn try_from(value: [f64; 2]) -> Result<Self> {
		Self::new(value[0], value[1])
	}
}

impl TryFrom<[f64; 3]> for Position {
	type Error = GeoJsonError;
	fn try_from(value: [f64; 3]) -> Result<Self> {
		Self::new_3d(value[0], value[1], value[2])
	}
}

impl TryFrom<(f64, f64)> for Position {
	type Error = GeoJsonError;
	fn try_from(value: (f64, f64)) -> Result<Self> {
		Self::new(value.0, value.1)
	}
}

impl TryFrom<&[f64]> for Position {
	type Error = GeoJsonError;
	fn try_from(value: &[f64]) -> Result<Self> {
		Self::from_slice(value, &JsonPath::root())
	}
}

impl From<Position> for Vec<f64> {
	fn from(value: Position) -> Self {
		value.to_vec()
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.to_vec()).finish()
	}
}
