use super::{GeometryType, LineString, geometry_object, parse_header, tagged_wkt};
use crate::{
	BBox, CompositeCoordinates, GeometryKind, JsonPath, LineStringCoords, LinearRing, Result, positions_to_wkt, raw,
};
use serde_json::Value;

/// A `LineString` whose positions form a closed ring.
///
/// It carries the `LineString` discriminant and renders as `LINESTRING`, but only
/// accepts coordinates that are a valid [`LinearRing`]. Use it to narrow a
/// feature to closed outlines. The [`Geometry`](crate::Geometry) envelope never
/// produces it.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRingGeometry {
	coordinates: LinearRing,
	bbox: Option<BBox>,
}

impl LinearRingGeometry {
	/// Wraps an already validated ring.
	pub fn new(coordinates: LinearRing) -> Self {
		Self {
			coordinates,
			bbox: None,
		}
	}

	/// Attaches a bounding box.
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	pub fn coordinates(&self) -> &LinearRing {
		&self.coordinates
	}
}

impl GeometryType for LinearRingGeometry {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::LineString)?;
		let coordinates = raw::parse_member(object, "coordinates", path, LinearRing::from_value)?;
		Ok(Self { coordinates, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::LineString
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		geometry_object(self.kind(), "coordinates", self.coordinates.to_value(None), self.bbox())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		let is_3d = self.coordinates.first().is_some_and(|p| p.dimensions() == 3);
		let body = positions_to_wkt(self.coordinates.as_slice(), precision);
		tagged_wkt(self.kind(), is_3d, Some(body))
	}
}

/// Every closed ring is also a line.
impl From<LinearRingGeometry> for LineString {
	fn from(ring: LinearRingGeometry) -> Self {
		let line = LineStringCoords::from(ring.coordinates);
		match ring.bbox {
			Some(bbox) => LineString::new(line).with_bbox(bbox),
			None => LineString::new(line),
		}
	}
}

crate::impl_serde_via_value!(LinearRingGeometry);
