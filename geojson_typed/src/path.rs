//! Locations inside a raw JSON tree, used to point validation errors at the offending value.

use std::fmt::{Debug, Display};

#[derive(Clone, PartialEq, Eq)]
enum Segment {
	Key(String),
	Index(usize),
}

/// A path from the root of the validated input to a nested value,
/// rendered as `$.features[0].geometry.coordinates[0][3]`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<Segment>);

impl JsonPath {
	/// The root of the input (`$`).
	pub fn root() -> Self {
		Self(Vec::new())
	}

	/// Returns a new path pointing at the object member `key` below this one.
	pub fn key(&self, key: &str) -> Self {
		let mut segments = self.0.clone();
		segments.push(Segment::Key(key.to_string()));
		Self(segments)
	}

	/// Returns a new path pointing at the array element `index` below this one.
	pub fn index(&self, index: usize) -> Self {
		let mut segments = self.0.clone();
		segments.push(Segment::Index(index));
		Self(segments)
	}

	/// Number of segments below the root.
	pub fn depth(&self) -> usize {
		self.0.len()
	}
}

impl Display for JsonPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("$")?;
		for segment in &self.0 {
			match segment {
				Segment::Key(key) => write!(f, ".{key}")?,
				Segment::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

impl Debug for JsonPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self, f)
	}
}
