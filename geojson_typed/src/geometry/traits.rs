use crate::{BBox, GeoInterface, GeoJsonError, GeometryKind, JsonObject, JsonPath, Result, parse_optional_bbox, raw};
use serde_json::Value;
use std::fmt::Debug;

/// A geometry type that features and feature collections can be narrowed to.
///
/// Implemented by each of the seven geometry variants, which accept only their own
/// discriminant, and by the [`Geometry`](crate::Geometry) envelope, which accepts all
/// of them. The check runs on the untyped input at construction time.
pub trait GeometryType: Debug + Clone + Sized {
	/// Validates a raw geometry object.
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self>;

	/// The discriminant of this geometry.
	fn kind(&self) -> GeometryKind;

	/// The bbox supplied at construction, if any.
	fn bbox(&self) -> Option<&BBox>;

	/// Projects the geometry into a plain GeoJSON mapping.
	fn geo_interface(&self) -> Value;

	/// Renders well-known text, optionally rounding coordinates to `precision` decimals.
	fn wkt_with_precision(&self, precision: Option<u8>) -> String;

	/// Renders well-known text.
	fn wkt(&self) -> String {
		self.wkt_with_precision(None)
	}

	/// Builds the geometry from anything that can describe itself as a GeoJSON geometry.
	fn from_geo_interface<S: GeoInterface + ?Sized>(source: &S) -> Result<Self> {
		let value = source.describe_geometry().map_err(GeoJsonError::Adapter)?;
		Self::from_value(&value, &JsonPath::root())
	}

	/// Parses and validates GeoJSON text.
	fn from_json_str(json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(&value, &JsonPath::root())
	}

	/// Serializes the geo-interface projection to GeoJSON text.
	fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.geo_interface())?)
	}
}

/// Reads the discriminant of a raw geometry object.
pub(crate) fn read_kind(object: &JsonObject, path: &JsonPath) -> Result<GeometryKind> {
	raw::read_type(object, path)?
		.parse::<GeometryKind>()
		.map_err(|message| GeoJsonError::shape(&path.key("type"), message))
}

/// Checks the discriminant of a raw geometry against `expected` and reads its bbox.
pub(crate) fn parse_header<'a>(
	value: &'a Value,
	path: &JsonPath,
	expected: GeometryKind,
) -> Result<(&'a JsonObject, Option<BBox>)> {
	let object = raw::expect_object(value, path)?;
	let found = read_kind(object, path)?;
	if found != expected {
		return Err(GeoJsonError::GeometryMismatch {
			path: path.clone(),
			expected,
			found,
		});
	}
	let bbox = parse_optional_bbox(object, path)?;
	Ok((object, bbox))
}

/// Builds `{"type": kind, key: value, "bbox"?: bbox}`.
pub(crate) fn geometry_object(kind: GeometryKind, key: &str, value: Value, bbox: Option<&BBox>) -> Value {
	let mut object = JsonObject::new();
	object.insert("type".to_string(), Value::from(kind.as_str()));
	object.insert(key.to_string(), value);
	if let Some(bbox) = bbox {
		object.insert("bbox".to_string(), bbox.to_value());
	}
	Value::Object(object)
}

/// Joins the WKT tag, the `Z` marker and a parenthesized body, or renders `<TAG> EMPTY`.
pub(crate) fn tagged_wkt(kind: GeometryKind, is_3d: bool, body: Option<String>) -> String {
	match body {
		Some(body) => format!("{}{}{body}", kind.wkt_name(), if is_3d { " Z " } else { " " }),
		None => format!("{} EMPTY", kind.wkt_name()),
	}
}

/// Implements `Serialize` and `Deserialize` through the geo-interface and the
/// validating `from_value` path.
#[macro_export]
macro_rules! impl_serde_via_value {
	($($t:ty),*) => {$(
		impl serde::Serialize for $t {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
				serde::Serialize::serialize(&$crate::GeometryType::geo_interface(self), serializer)
			}
		}

		impl<'de> serde::Deserialize<'de> for $t {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
				let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
				<$t as $crate::GeometryType>::from_value(&value, &$crate::JsonPath::root())
					.map_err(serde::de::Error::custom)
			}
		}
	)*}
}
