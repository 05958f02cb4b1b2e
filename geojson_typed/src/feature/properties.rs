use crate::{GeoJsonError, JsonPath, Result, raw};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// The payload type of a feature's `properties` member.
///
/// Every serde type qualifies. [`JsonObject`](crate::JsonObject) keeps the object
/// as it was given; a struct applies its own schema.
pub trait Properties: Sized {
	/// Validates a non-null `properties` value.
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self>;

	/// Converts the properties back into a JSON value.
	fn to_value(&self) -> Result<Value>;
}

impl<P: DeserializeOwned + Serialize> Properties for P {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		if !value.is_object() {
			return Err(GeoJsonError::PropertiesSchema {
				path: path.clone(),
				message: format!("expected an object, found {}", raw::type_as_str(value)),
			});
		}
		P::deserialize(value).map_err(|err| GeoJsonError::PropertiesSchema {
			path: path.clone(),
			message: err.to_string(),
		})
	}

	fn to_value(&self) -> Result<Value> {
		Ok(serde_json::to_value(self)?)
	}
}
