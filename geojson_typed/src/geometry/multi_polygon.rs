use super::{GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, CompositeCoordinates, GeometryKind, JsonPath, MultiPolygonCoords, Result, raw};
use serde_json::Value;

/// Any number of polygons, possibly none.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
	coordinates: MultiPolygonCoords,
	bbox: Option<BBox>,
}

impl MultiPolygon {
	/// Creates a `MultiPolygon` without a bounding box.
	pub fn new(coordinates: MultiPolygonCoords) -> Self {
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

	pub fn coordinates(&self) -> &MultiPolygonCoords {
		&self.coordinates
	}
}

impl GeometryType for MultiPolygon {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::MultiPolygon)?;
		let coordinates = raw::parse_member(object, "coordinates", path, MultiPolygonCoords::from_value)?;
		Ok(Self { coordinates, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::MultiPolygon
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		geometry_object(self.kind(), "coordinates", self.coordinates.to_value(None), self.bbox())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		let is_3d = self
			.coordinates
			.first()
			.and_then(|polygon| polygon.exterior())
			.and_then(|ring| ring.first())
			.is_some_and(|p| p.dimensions() == 3);
		let body = (!self.coordinates.is_empty()).then(|| self.coordinates.to_wkt(precision));
		tagged_wkt(self.kind(), is_3d, body)
	}
}

crate::impl_serde_via_value!(MultiPolygon);
