use super::{GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, CompositeCoordinates, GeometryKind, JsonPath, LineStringCoords, Result, positions_to_wkt, raw};
use serde_json::Value;

/// Any number of lines, possibly none.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
	coordinates: Vec<LineStringCoords>,
	bbox: Option<BBox>,
}

impl MultiLineString {
	/// Creates a `MultiLineString`. An empty list is allowed.
	pub fn new(coordinates: Vec<LineStringCoords>) -> Self {
		Self {
			coordinates,
			bbox: None,
		}
	}

	/// Attaches a bounding box.
	#[must_use]
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	pub fn coordinates(&self) -> &[LineStringCoords] {
		&self.coordinates
	}
}

impl GeometryType for MultiLineString {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::MultiLineString)?;
		let coordinates = raw::parse_member(object, "coordinates", path, |value, path| {
			raw::parse_elements(raw::expect_array(value, path)?, path, LineStringCoords::from_value)
		})?;
		Ok(Self { coordinates, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::MultiLineString
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		let lines = self.coordinates.iter().map(|line| line.to_value(None)).collect::<Vec<_>>();
		geometry_object(self.kind(), "coordinates", Value::from(lines), self.bbox())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		let is_3d = self
			.coordinates
			.first()
			.and_then(|line| line.first())
			.is_some_and(|p| p.dimensions() == 3);
		let body = (!self.coordinates.is_empty()).then(|| {
			let lines = self
				.coordinates
				.iter()
				.map(|line| positions_to_wkt(line.as_slice(), precision))
				.collect::<Vec<_>>();
			format!("({})", lines.join(", "))
		});
		tagged_wkt(self.kind(), is_3d, body)
	}
}

crate::impl_serde_via_value!(MultiLineString);
