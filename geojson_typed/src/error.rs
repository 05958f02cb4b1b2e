//! Error type used by the crate.

use crate::{GeometryKind, JsonPath, Position};
use std::{convert::Infallible, fmt::Display};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = GeoJsonError> = std::result::Result<T, E>;

/// Axis of a bounding box, used to report which axis is out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
	X,
	Y,
	Z,
}

impl Display for Axis {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Axis::X => "x",
			Axis::Y => "y",
			Axis::Z => "z",
		})
	}
}

/// Everything that can go wrong while validating GeoJSON input.
///
/// Structural variants carry the [`JsonPath`] of the offending value.
#[derive(Debug, Error)]
pub enum GeoJsonError {
	/// Wrong discriminant, missing or unexpected member, wrong element count or value type.
	#[error("{path}: {message}")]
	Shape { path: JsonPath, message: String },

	/// The first and last position of a linear ring differ.
	#[error("{path}: first position {first:?} and last position {last:?} must contain identical values")]
	RingNotClosed {
		path: JsonPath,
		first: Position,
		last: Position,
	},

	/// Some bbox axis has its minimum above its maximum.
	#[error("{path}: bbox {axis} minimum {min} is greater than maximum {max}")]
	BBoxOrder {
		path: JsonPath,
		axis: Axis,
		min: f64,
		max: f64,
	},

	/// A feature `id` that is neither a string nor an exact integer.
	#[error("{path}: id must be a string or an integer, found {found}")]
	IdentifierType { path: JsonPath, found: String },

	/// The geometry discriminant does not match the narrowed geometry type.
	#[error("{path}: expected a {expected} geometry, found {found}")]
	GeometryMismatch {
		path: JsonPath,
		expected: GeometryKind,
		found: GeometryKind,
	},

	/// `properties` could not be read as the declared properties type.
	#[error("{path}: properties do not match the schema: {message}")]
	PropertiesSchema { path: JsonPath, message: String },

	/// A legacy geometry adapter failed to describe its geometry.
	#[error("geometry adapter failed: {0}")]
	Adapter(#[source] anyhow::Error),

	/// The JSON text codec failed.
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl From<Infallible> for GeoJsonError {
	fn from(value: Infallible) -> Self {
		match value {}
	}
}

impl GeoJsonError {
	pub(crate) fn shape(path: &JsonPath, message: impl Into<String>) -> Self {
		GeoJsonError::Shape {
			path: path.clone(),
			message: message.into(),
		}
	}

	/// Location of the offending value, if the error is structural.
	pub fn path(&self) -> Option<&JsonPath> {
		use GeoJsonError::*;
		match self {
			Shape { path, .. }
			| RingNotClosed { path, .. }
			| BBoxOrder { path, .. }
			| IdentifierType { path, .. }
			| GeometryMismatch { path, .. }
			| PropertiesSchema { path, .. } => Some(path),
			Adapter(_) | Json(_) => None,
		}
	}

	/// Ranks how much this error says about the actual problem.
	///
	/// A discriminant mismatch only says "this was another kind", so it ranks below
	/// every structural failure. Among structural failures, deeper ones rank higher.
	pub(crate) fn specificity(&self) -> (u8, usize) {
		let depth = self.path().map_or(0, JsonPath::depth);
		match self {
			GeoJsonError::GeometryMismatch { .. } => (0, depth),
			_ => (1, depth),
		}
	}
}
