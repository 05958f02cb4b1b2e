use super::{GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, GeometryKind, JsonPath, Position, Result, raw};
use serde_json::Value;

/// A single position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	coordinates: Position,
	bbox: Option<BBox>,
}

impl Point {
	/// Creates a `Point` without a bounding box.
	pub fn new(coordinates: Position) -> Self {
		Self {
			coordinates,
			bbox: None,
		}
	}

	/// Attaches a bbox.
	#[must_use]
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	/// The single position of this point.
	pub fn coordinates(&self) -> &Position {
		&self.coordinates
	}
}

impl GeometryType for Point {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::Point)?;
		let coordinates = raw::parse_member(object, "coordinates", path, Position::from_value)?;
		Ok(Self { coordinates, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::Point
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		geometry_object(self.kind(), "coordinates", self.coordinates.to_value(None), self.bbox())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		tagged_wkt(
			self.kind(),
			self.coordinates.dimensions() == 3,
			Some(format!("({})", self.coordinates.to_wkt(precision))),
		)
	}
}

crate::impl_serde_via_value!(Point);
