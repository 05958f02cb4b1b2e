use super::{Feature, Properties};
use crate::{BBox, Geometry, GeometryType, JsonObject, JsonPath, Result, parse_optional_bbox, raw};
use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Index;

/// An ordered list of features sharing the same geometry and properties types.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureCollection<G = Geometry, P = JsonObject> {
	features: Vec<Feature<G, P>>,
	bbox: Option<BBox>,
}

impl<G: GeometryType, P: Properties> FeatureCollection<G, P> {
	/// Creates a collection without a bounding box.
	pub fn new(features: Vec<Feature<G, P>>) -> Self {
		Self { features, bbox: None }
	}

	/// Attaches a bounding box.
	#[must_use]
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	/// Validates a `FeatureCollection` object.
	///
	/// Every member of `features` is validated as a `Feature<G, P>` at `features[i]`;
	/// the first failure is returned.
	pub fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let object = raw::expect_object(value, path)?;
		raw::check_type(object, "FeatureCollection", path)?;
		let features = raw::parse_member(object, "features", path, |value, path| {
			raw::parse_elements(raw::expect_array(value, path)?, path, Feature::from_value)
		})?;
		let bbox = parse_optional_bbox(object, path)?;
		trace!("{path}: validated a feature collection of {} features", features.len());
		Ok(Self { features, bbox })
	}

	/// Parses JSON text and validates it at the root path.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(&value, &JsonPath::root())
	}

	pub fn features(&self) -> &[Feature<G, P>] {
		&self.features
	}

	pub fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	/// Number of features.
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Feature<G, P>> {
		self.features.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Feature<G, P>> {
		self.features.iter()
	}

	/// Projects the collection into `{type, features, bbox?}`.
	pub fn geo_interface(&self) -> Result<Value> {
		let features = self
			.features
			.iter()
			.map(Feature::geo_interface)
			.collect::<Result<Vec<_>>>()?;
		let mut object = JsonObject::new();
		object.insert("type".to_string(), Value::from("FeatureCollection"));
		object.insert("features".to_string(), Value::from(features));
		if let Some(bbox) = &self.bbox {
			object.insert("bbox".to_string(), bbox.to_value());
		}
		Ok(Value::Object(object))
	}

	/// Serializes the projection to compact JSON text.
	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.geo_interface()?)?)
	}
}

impl<G, P> Index<usize> for FeatureCollection<G, P> {
	type Output = Feature<G, P>;

	fn index(&self, index: usize) -> &Self::Output {
		&self.features[index]
	}
}

impl<G, P> IntoIterator for FeatureCollection<G, P> {
	type Item = Feature<G, P>;
	type IntoIter = std::vec::IntoIter<Feature<G, P>>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

impl<'a, G, P> IntoIterator for &'a FeatureCollection<G, P> {
	type Item = &'a Feature<G, P>;
	type IntoIter = std::slice::Iter<'a, Feature<G, P>>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

impl<G: GeometryType, P: Properties> Serialize for FeatureCollection<G, P> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let value = self.geo_interface().map_err(<S::Error as serde::ser::Error>::custom)?;
		value.serialize(serializer)
	}
}

impl<'de, G: GeometryType, P: Properties> Deserialize<'de> for FeatureCollection<G, P> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Self::from_value(&value, &JsonPath::root()).map_err(serde::de::Error::custom)
	}
}
