//! Accessors over the untyped `serde_json` tree that report failures as [`GeoJsonError`]s.

use crate::{GeoJsonError, JsonPath, Result};
use serde_json::{Map, Value};

/// A free-form JSON object; the default properties type of features.
pub type JsonObject = Map<String, Value>;

/// Returns the JSON type of a value as a lowercase string (`"array"`, `"object"`, ...).
pub(crate) fn type_as_str(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "array",
		Value::Bool(_) => "boolean",
		Value::Null => "null",
		Value::Number(_) => "number",
		Value::Object(_) => "object",
		Value::String(_) => "string",
	}
}

pub(crate) fn expect_object<'a>(value: &'a Value, path: &JsonPath) -> Result<&'a JsonObject> {
	value
		.as_object()
		.ok_or_else(|| GeoJsonError::shape(path, format!("expected an object, found {}", type_as_str(value))))
}

pub(crate) fn expect_array<'a>(value: &'a Value, path: &JsonPath) -> Result<&'a Vec<Value>> {
	value
		.as_array()
		.ok_or_else(|| GeoJsonError::shape(path, format!("expected an array, found {}", type_as_str(value))))
}

pub(crate) fn expect_number(value: &Value, path: &JsonPath) -> Result<f64> {
	value
		.as_f64()
		.ok_or_else(|| GeoJsonError::shape(path, format!("expected a number, found {}", type_as_str(value))))
}

/// Returns the member `key`, failing if the key is absent. A present `null` is returned as is.
pub(crate) fn require_member<'a>(object: &'a JsonObject, key: &str, path: &JsonPath) -> Result<&'a Value> {
	object
		.get(key)
		.ok_or_else(|| GeoJsonError::shape(&path.key(key), format!("missing required member '{key}'")))
}

/// Validates the required member `key` with `parse`.
pub(crate) fn parse_member<T>(
	object: &JsonObject,
	key: &str,
	path: &JsonPath,
	parse: impl FnOnce(&Value, &JsonPath) -> Result<T>,
) -> Result<T> {
	let value = require_member(object, key, path)?;
	parse(value, &path.key(key))
}

/// Validates a value with `parse` unless it is `null`.
pub(crate) fn parse_nullable<T>(
	value: &Value,
	path: &JsonPath,
	parse: impl FnOnce(&Value, &JsonPath) -> Result<T>,
) -> Result<Option<T>> {
	if value.is_null() {
		Ok(None)
	} else {
		parse(value, path).map(Some)
	}
}

/// Returns the member `key` unless it is absent or `null`.
pub(crate) fn optional_member<'a>(object: &'a JsonObject, key: &str) -> Option<&'a Value> {
	object.get(key).filter(|v| !v.is_null())
}

/// Reads the `type` member as a string.
pub(crate) fn read_type<'a>(object: &'a JsonObject, path: &JsonPath) -> Result<&'a str> {
	let value = require_member(object, "type", path)?;
	value.as_str().ok_or_else(|| {
		GeoJsonError::shape(
			&path.key("type"),
			format!("type must be a string, found {}", type_as_str(value)),
		)
	})
}

/// Checks that the `type` member is exactly `name`.
pub(crate) fn check_type(object: &JsonObject, name: &str, path: &JsonPath) -> Result<()> {
	let object_type = read_type(object, path)?;
	if object_type != name {
		return Err(GeoJsonError::shape(
			&path.key("type"),
			format!("type must be '{name}', found '{object_type}'"),
		));
	}
	Ok(())
}

/// Validates every element of an array with `parse`, collecting the results in order.
pub(crate) fn parse_elements<T>(
	values: &[Value],
	path: &JsonPath,
	mut parse: impl FnMut(&Value, &JsonPath) -> Result<T>,
) -> Result<Vec<T>> {
	values
		.iter()
		.enumerate()
		.map(|(index, value)| parse(value, &path.index(index)))
		.collect()
}
