use super::{GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, GeometryKind, JsonPath, Position, Result, positions_to_value, positions_to_wkt, raw};
use serde_json::Value;

/// Any number of positions, possibly none.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
	coordinates: Vec<Position>,
	bbox: Option<BBox>,
}

impl MultiPoint {
	/// Creates a `MultiPoint`. An empty list is allowed.
	pub fn new(coordinates: Vec<Position>) -> Self {
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

	pub fn coordinates(&self) -> &[Position] {
		&self.coordinates
	}
}

impl GeometryType for MultiPoint {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::MultiPoint)?;
		let coordinates = raw::parse_member(object, "coordinates", path, |value, path| {
			raw::parse_elements(raw::expect_array(value, path)?, path, Position::from_value)
		})?;
		Ok(Self { coordinates, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::MultiPoint
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		geometry_object(self.kind(), "coordinates", positions_to_value(&self.coordinates, None), self.bbox())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		let is_3d = self.coordinates.first().is_some_and(|p| p.dimensions() == 3);
		let body = (!self.coordinates.is_empty()).then(|| positions_to_wkt(&self.coordinates, precision));
		tagged_wkt(self.kind(), is_3d, body)
	}
}

crate::impl_serde_via_value!(MultiPoint);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parse_and_wkt() -> anyhow::Result<()> {
		let value = json!({"type": "MultiPoint", "coordinates": [[1, 2], [3, 4]]});
		let geometry = MultiPoint::from_value(&value, &JsonPath::root())?;
		assert_eq!(geometry.coordinates().len(), 2);
		assert_eq!(geometry.wkt(), "MULTIPOINT (1.0 2.0, 3.0 4.0)");
		Ok(())
	}

	#[test]
	fn empty() -> anyhow::Result<()> {
		let geometry = MultiPoint::from_json_str(r#"{"type": "MultiPoint", "coordinates": []}"#)?;
		assert_eq!(geometry.wkt(), "MULTIPOINT EMPTY");
		Ok(())
	}

	#[test]
	fn three_dimensional() -> anyhow::Result<()> {
		let geometry = MultiPoint::new(vec![Position::new_3d(1.0, 2.0, 3.0)?]);
		assert_eq!(geometry.wkt(), "MULTIPOINT Z (1.0 2.0 3.0)");
		Ok(())
	}

	#[test]
	fn invalid_position_path() {
		let value = json!({"type": "MultiPoint", "coordinates": [[1, 2], [3]]});
		let err = MultiPoint::from_value(&value, &JsonPath::root()).unwrap_err();
		assert_eq!(err.path().unwrap().to_string(), "$.coordinates[1]");
	}
}
