use crate::{GeoJsonError, JsonPath, Result, raw};
use serde_json::Value;
use std::fmt::Display;

/// A feature identifier: a string or an exact integer.
///
/// Integers above `i64::MAX` are kept as `Unsigned`, so every integer that JSON
/// can carry exactly round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeatureId {
	String(String),
	Integer(i64),
	Unsigned(u64),
}

impl FeatureId {
	/// Booleans, floats (including `1.0`), arrays and objects are rejected.
	pub(crate) fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		match value {
			Value::String(s) => Ok(FeatureId::String(s.clone())),
			Value::Number(n) => n
				.as_i64()
				.map(FeatureId::Integer)
				.or_else(|| n.as_u64().map(FeatureId::Unsigned))
				.ok_or_else(|| GeoJsonError::IdentifierType {
					path: path.clone(),
					found: format!("number {n}"),
				}),
			other => Err(GeoJsonError::IdentifierType {
				path: path.clone(),
				found: raw::type_as_str(other).to_string(),
			}),
		}
	}

	pub(crate) fn to_value(&self) -> Value {
		match self {
			FeatureId::String(s) => Value::from(s.as_str()),
			FeatureId::Integer(i) => Value::from(*i),
			FeatureId::Unsigned(u) => Value::from(*u),
		}
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => f.write_str(s),
			FeatureId::Integer(i) => write!(f, "{i}"),
			FeatureId::Unsigned(u) => write!(f, "{u}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<i64> for FeatureId {
	fn from(value: i64) -> Self {
		FeatureId::Integer(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		i64::try_from(value).map_or(FeatureId::Unsigned(value), FeatureId::Integer)
	}
}
