use crate::{Axis, GeoJsonError, JsonPath, Result, raw};
use serde_json::Value;
use std::fmt::Debug;

/// A bounding box attached to a geometry, feature or feature collection.
///
/// The values are stored in GeoJSON order: `[x_min, y_min, x_max, y_max]` for 2D
/// or `[x_min, y_min, z_min, x_max, y_max, z_max]` for 3D. For every axis the minimum
/// is not greater than the maximum.
///
/// A bbox is metadata asserted by the producer of the data. It is never derived from
/// coordinates, and never checked against them.
#[derive(Clone, Copy, PartialEq)]
pub struct BBox {
	min: [f64; 3],
	max: [f64; 3],
	dimensions: usize,
}

impl BBox {
	/// Creates a 2D bbox.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
		Self::checked([x_min, y_min, 0.0], [x_max, y_max, 0.0], 2, &JsonPath::root())
	}

	/// Creates a 3D bbox.
	pub fn new_3d(x_min: f64, y_min: f64, z_min: f64, x_max: f64, y_max: f64, z_max: f64) -> Result<Self> {
		Self::checked([x_min, y_min, z_min], [x_max, y_max, z_max], 3, &JsonPath::root())
	}

	/// Validates a raw 4 or 6 element array.
	pub fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let array = raw::expect_array(value, path)?;
		let numbers = raw::parse_elements(array, path, raw::expect_number)?;
		Self::from_slice(&numbers, path)
	}

	fn from_slice(values: &[f64], path: &JsonPath) -> Result<Self> {
		match *values {
			[x0, y0, x1, y1] => Self::checked([x0, y0, 0.0], [x1, y1, 0.0], 2, path),
			[x0, y0, z0, x1, y1, z1] => Self::checked([x0, y0, z0], [x1, y1, z1], 3, path),
			_ => Err(GeoJsonError::shape(
				path,
				format!("a bbox must have 4 or 6 values, found {}", values.len()),
			)),
		}
	}

	fn checked(min: [f64; 3], max: [f64; 3], dimensions: usize, path: &JsonPath) -> Result<Self> {
		if !min.iter().chain(max.iter()).all(|v| v.is_finite()) {
			return Err(GeoJsonError::shape(path, "bbox values must be finite"));
		}
		for (i, axis) in [Axis::X, Axis::Y, Axis::Z].into_iter().take(dimensions).enumerate() {
			if min[i] > max[i] {
				return Err(GeoJsonError::BBoxOrder {
					path: path.clone(),
					axis,
					min: min[i],
					max: max[i],
				});
			}
		}
		Ok(Self { min, max, dimensions })
	}

	/// Returns 2 or 3.
	pub fn dimensions(&self) -> usize {
		self.dimensions
	}

	pub fn x_min(&self) -> f64 {
		self.min[0]
	}

	pub fn y_min(&self) -> f64 {
		self.min[1]
	}

	pub fn x_max(&self) -> f64 {
		self.max[0]
	}

	pub fn y_max(&self) -> f64 {
		self.max[1]
	}

	/// Elevation range of a 3D bbox.
	pub fn z_range(&self) -> Option<(f64, f64)> {
		(self.dimensions == 3).then_some((self.min[2], self.max[2]))
	}

	/// Returns the values in GeoJSON order.
	pub fn to_vec(&self) -> Vec<f64> {
		let d = self.dimensions;
		self.min[..d].iter().chain(self.max[..d].iter()).copied().collect()
	}

	/// `[x_min, y_min, x_max, y_max]`, or the six-value form for 3D boxes.
	pub fn to_value(&self) -> Value {
		Value::from(self.to_vec())
	}
}

impl TryFrom<&[f64]> for BBox {
	type Error = GeoJsonError;
	fn try_from(value: &[f64]) -> Result<Self> {
		Self::from_slice(value, &JsonPath::root())
	}
}

impl TryFrom<Vec<f64>> for BBox {
	type Error = GeoJsonError;
	fn try_from(value: Vec<f64>) -> Result<Self> {
		Self::from_slice(&value, &JsonPath::root())
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.to_vec()).finish()
	}
}

/// Reads the optional `bbox` member of a GeoJSON object.
pub(crate) fn parse_optional_bbox(object: &raw::JsonObject, path: &JsonPath) -> Result<Option<BBox>> {
	raw::optional_member(object, "bbox")
		.map(|value| BBox::from_value(value, &path.key("bbox")))
		.transpose()
}
