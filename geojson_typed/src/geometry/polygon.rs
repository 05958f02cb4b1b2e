use super::{GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, CompositeCoordinates, GeometryKind, JsonPath, LinearRing, PolygonCoords, Result, raw};
use serde_json::Value;

/// A polygon: an exterior ring followed by any number of holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
	coordinates: PolygonCoords,
	bbox: Option<BBox>,
}

impl Polygon {
	/// Creates a `Polygon` without a bounding box.
	pub fn new(coordinates: PolygonCoords) -> Self {
		Self {
			coordinates,
			bbox: None,
		}
	}

	/// Creates the rectangle spanned by the given bounds.
	pub fn from_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
		let ring = LinearRing::from_bounds(x_min, y_min, x_max, y_max)?;
		Ok(Self::new(PolygonCoords::try_from([ring])?))
	}

	/// Attaches a bounding box.
	#[must_use]
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	pub fn coordinates(&self) -> &PolygonCoords {
		&self.coordinates
	}

	/// The exterior ring, `None` for an empty polygon.
	pub fn exterior(&self) -> Option<&LinearRing> {
		self.coordinates.exterior()
	}

	/// The holes of the polygon.
	pub fn interiors(&self) -> impl Iterator<Item = &LinearRing> {
		self.coordinates.interiors()
	}
}

impl GeometryType for Polygon {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::Polygon)?;
		let coordinates = raw::parse_member(object, "coordinates", path, PolygonCoords::from_value)?;
		Ok(Self { coordinates, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::Polygon
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		geometry_object(self.kind(), "coordinates", self.coordinates.to_value(None), self.bbox())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		let is_3d = self
			.exterior()
			.and_then(|ring| ring.first())
			.is_some_and(|p| p.dimensions() == 3);
		let body = (!self.coordinates.is_empty()).then(|| self.coordinates.to_wkt(precision));
		tagged_wkt(self.kind(), is_3d, body)
	}
}

crate::impl_serde_via_value!(Polygon);
