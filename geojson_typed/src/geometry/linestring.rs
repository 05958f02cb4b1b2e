use super::{GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, CompositeCoordinates, GeometryKind, JsonPath, LineStringCoords, Result, positions_to_wkt, raw};
use serde_json::Value;

/// A line through two or more positions.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
	coordinates: LineStringCoords,
	bbox: Option<BBox>,
}

impl LineString {
	/// Creates a `LineString` without a bounding box.
	pub fn new(coordinates: LineStringCoords) -> Self {
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

	pub fn coordinates(&self) -> &LineStringCoords {
		&self.coordinates
	}
}

impl GeometryType for LineString {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::LineString)?;
		let coordinates = raw::parse_member(object, "coordinates", path, LineStringCoords::from_value)?;
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

crate::impl_serde_via_value!(LineString);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoJsonError;
	use serde_json::json;

	#[test]
	fn parse_and_wkt() -> anyhow::Result<()> {
		let value = json!({"type": "LineString", "coordinates": [[0, 0], [1.5, 2]]});
		let geometry = LineString::from_value(&value, &JsonPath::root())?;
		assert_eq!(geometry.wkt(), "LINESTRING (0.0 0.0, 1.5 2.0)");
		Ok(())
	}

	#[test]
	fn too_few_positions() {
		let value = json!({"type": "LineString", "coordinates": [[0, 0]]});
		let err = LineString::from_value(&value, &JsonPath::root()).unwrap_err();
		assert!(matches!(err, GeoJsonError::Shape { .. }));
		assert_eq!(err.path().unwrap().to_string(), "$.coordinates");
	}

	#[test]
	fn round_trip() -> anyhow::Result<()> {
		let geometry = LineString::new(LineStringCoords::try_from([[0.0, 0.0, 1.0], [1.0, 1.0, 2.0]])?)
			.with_bbox(crate::BBox::new_3d(0.0, 0.0, 1.0, 1.0, 1.0, 2.0)?);
		let projected = geometry.geo_interface();
		assert_eq!(LineString::from_value(&projected, &JsonPath::root())?.geo_interface(), projected);
		assert_eq!(geometry.wkt(), "LINESTRING Z (0.0 0.0 1.0, 1.0 1.0 2.0)");
		Ok(())
	}
}
