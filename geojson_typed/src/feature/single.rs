use super::{FeatureId, Properties};
use crate::{BBox, GeoInterface, Geometry, GeometryType, JsonObject, JsonPath, Result, parse_optional_bbox, raw};
use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A GeoJSON feature with a geometry of type `G` and properties of type `P`.
///
/// Both `geometry` and `properties` may be `null`, but the input must name both keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature<G = Geometry, P = JsonObject> {
	geometry: Option<G>,
	properties: Option<P>,
	id: Option<FeatureId>,
	bbox: Option<BBox>,
}

impl<G: GeometryType, P: Properties> Feature<G, P> {
	/// Creates a feature without `id` or `bbox`.
	pub fn new(geometry: Option<G>, properties: Option<P>) -> Self {
		Self {
			geometry,
			properties,
			id: None,
			bbox: None,
		}
	}

	/// Sets the identifier.
	#[must_use]
	pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the bounding box.
	#[must_use]
	pub fn with_bbox(mut self, bbox: BBox) -> Self {
		self.bbox = Some(bbox);
		self
	}

	/// Builds a feature around a geometry taken from an adapter object.
	pub fn from_geo_interface<S: GeoInterface + ?Sized>(geometry: &S, properties: Option<P>) -> Result<Self> {
		Ok(Self::new(Some(G::from_geo_interface(geometry)?), properties))
	}

	/// Validates a raw feature object.
	pub fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let object = raw::expect_object(value, path)?;
		raw::check_type(object, "Feature", path)?;
		let geometry = raw::parse_member(object, "geometry", path, |value, path| {
			raw::parse_nullable(value, path, G::from_value)
		})?;
		let properties = raw::parse_member(object, "properties", path, |value, path| {
			raw::parse_nullable(value, path, P::from_value)
		})?;
		let id = raw::optional_member(object, "id")
			.map(|value| FeatureId::from_value(value, &path.key("id")))
			.transpose()?;
		let bbox = parse_optional_bbox(object, path)?;

		trace!(
			"{path}: validated a feature with {} geometry",
			geometry.as_ref().map_or("no".to_string(), |g: &G| g.kind().to_string())
		);
		Ok(Self {
			geometry,
			properties,
			id,
			bbox,
		})
	}

	/// Parses JSON text and validates it at the root path.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(&value, &JsonPath::root())
	}

	pub fn geometry(&self) -> Option<&G> {
		self.geometry.as_ref()
	}

	pub fn properties(&self) -> Option<&P> {
		self.properties.as_ref()
	}

	pub fn id(&self) -> Option<&FeatureId> {
		self.id.as_ref()
	}

	pub fn bbox(&self) -> Option<&BBox> {
		self.bbox.as_ref()
	}

	/// Splits the feature into geometry, properties and id.
	pub fn into_parts(self) -> (Option<G>, Option<P>, Option<FeatureId>) {
		(self.geometry, self.properties, self.id)
	}

	/// Projects the feature into a plain GeoJSON mapping.
	///
	/// `id` and `bbox` are present only if they were supplied.
	pub fn geo_interface(&self) -> Result<Value> {
		let mut object = JsonObject::new();
		object.insert("type".to_string(), Value::from("Feature"));
		object.insert(
			"geometry".to_string(),
			self.geometry.as_ref().map_or(Value::Null, GeometryType::geo_interface),
		);
		let properties = match &self.properties {
			Some(properties) => properties.to_value()?,
			None => Value::Null,
		};
		object.insert("properties".to_string(), properties);
		if let Some(id) = &self.id {
			object.insert("id".to_string(), id.to_value());
		}
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

#[cfg(test)]
impl Feature {
	/// A small `Feature` with a polygon and two properties.
	pub fn new_example() -> Self {
		let mut properties = JsonObject::new();
		properties.insert("name".to_string(), Value::from("Kreuzberg"));
		properties.insert("population".to_string(), Value::from(154_000));
		let polygon = crate::Polygon::from_bounds(13.38, 52.46, 13.43, 52.48).map(Geometry::Polygon);
		Self::new(polygon.ok(), Some(properties)).with_id(13_i64)
	}
}

impl<G: GeometryType, P: Properties> Serialize for Feature<G, P> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let value = self.geo_interface().map_err(<S::Error as serde::ser::Error>::custom)?;
		value.serialize(serializer)
	}
}

impl<'de, G: GeometryType, P: Properties> Deserialize<'de> for Feature<G, P> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Self::from_value(&value, &JsonPath::root()).map_err(serde::de::Error::custom)
	}
}
