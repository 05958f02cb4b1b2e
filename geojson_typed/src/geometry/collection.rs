use super::{Geometry, GeometryType, geometry_object, parse_header, tagged_wkt};
use crate::{BBox, GeometryKind, JsonPath, Result, raw};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Index;

/// A heterogeneous list of geometries.
///
/// Members are validated as `G`, which defaults to the [`Geometry`] envelope. Use a
/// specific variant to only admit members of that kind.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryCollection<G: GeometryType = Geometry> {
	geometries: Vec<G>,
	bbox: Option<BBox>,
}

impl<G: GeometryType> GeometryCollection<G> {
	/// Creates a collection without a bounding box.
	pub fn new(geometries: Vec<G>) -> Self {
		Self { geometries, bbox: None }
	}

	/// Attaches a bounding box.
	#[must_use]
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	/// Member geometries, in input order.
	pub fn geometries(&self) -> &[G] {
		&self.geometries
	}

	pub fn len(&self) -> usize {
		self.geometries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.geometries.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&G> {
		self.geometries.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, G> {
		self.geometries.iter()
	}

	/// Returns the members, dropping the bounding box.
	pub fn into_inner(self) -> Vec<G> {
		self.geometries
	}
}

impl<G: GeometryType> GeometryType for GeometryCollection<G> {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let (object, bbox) = parse_header(value, path, GeometryKind::GeometryCollection)?;
		let geometries = raw::parse_member(object, "geometries", path, |value, path| {
			raw::parse_elements(raw::expect_array(value, path)?, path, G::from_value)
		})?;
		Ok(Self { geometries, bbox })
	}

	fn kind(&self) -> GeometryKind {
		GeometryKind::GeometryCollection
	}

	fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	fn geo_interface(&self) -> Value {
		let geometries = self.geometries.iter().map(GeometryType::geo_interface).collect::<Vec<_>>();
		geometry_object(self.kind(), "geometries", Value::from(geometries), self.bbox())
	}

	/// Members are rendered with their own tags, e.g. `GEOMETRYCOLLECTION (POINT (1.0 2.0), POLYGON (...))`.
	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		let body = (!self.geometries.is_empty()).then(|| {
			let members = self
				.geometries
				.iter()
				.map(|geometry| geometry.wkt_with_precision(precision))
				.collect::<Vec<_>>();
			format!("({})", members.join(", "))
		});
		tagged_wkt(self.kind(), false, body)
	}
}

impl<G: GeometryType> Index<usize> for GeometryCollection<G> {
	type Output = G;

	fn index(&self, index: usize) -> &G {
		&self.geometries[index]
	}
}

impl<G: GeometryType> IntoIterator for GeometryCollection<G> {
	type Item = G;
	type IntoIter = std::vec::IntoIter<G>;

	fn into_iter(self) -> Self::IntoIter {
		self.geometries.into_iter()
	}
}

impl<'a, G: GeometryType> IntoIterator for &'a GeometryCollection<G> {
	type Item = &'a G;
	type IntoIter = std::slice::Iter<'a, G>;

	fn into_iter(self) -> Self::IntoIter {
		self.geometries.iter()
	}
}

impl<G: GeometryType> Serialize for GeometryCollection<G> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.geo_interface().serialize(serializer)
	}
}

impl<'de, G: GeometryType> Deserialize<'de> for GeometryCollection<G> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Self::from_value(&value, &JsonPath::root()).map_err(serde::de::Error::custom)
	}
}
