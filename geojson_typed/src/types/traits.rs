use crate::{JsonPath, Result};
use serde_json::Value;
use std::fmt::Debug;

/// Read-only access to validated coordinate containers.
///
/// Containers are immutable once validated, so there is no way to push, pop or
/// borrow elements mutably.
pub trait CompositeCoordinates<Item>: Debug + Clone + Sized {
	/// Validates a raw nested JSON array.
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self>;

	/// Returns the elements as a slice.
	fn as_slice(&self) -> &[Item];

	/// Consumes the container and returns its elements.
	fn into_inner(self) -> Vec<Item>;

	/// Converts the container into a JSON array, optionally rounding to `precision` decimals.
	fn to_value(&self, precision: Option<u8>) -> Value;

	/// Returns the number of elements.
	fn len(&self) -> usize {
		self.as_slice().len()
	}

	/// Checks whether the container has no elements.
	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}

	/// Returns an iterator over the elements.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}
}
