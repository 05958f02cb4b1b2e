//! Collapses the failures of several candidate parsers into a single error.

use crate::{GeoJsonError, JsonPath, Result};
use log::debug;
use serde_json::Value;

/// A parser that is tried for a union-typed slot.
pub(crate) type Candidate<T> = fn(&Value, &JsonPath) -> Result<T>;

/// Tries every candidate in order and returns the first success.
///
/// If all candidates fail, the most specific failure is returned and the
/// others are dropped.
pub(crate) fn first_valid<T>(value: &Value, path: &JsonPath, candidates: &[Candidate<T>]) -> Result<T> {
	let mut errors = Vec::with_capacity(candidates.len());
	for candidate in candidates {
		match candidate(value, path) {
			Ok(result) => return Ok(result),
			Err(err) => errors.push(err),
		}
	}
	match most_specific(errors) {
		Some(err) => Err(err),
		None => Err(GeoJsonError::shape(path, "no candidate type to validate against")),
	}
}

/// Picks the error that says most about the actual problem.
///
/// Discriminant mismatches lose against every structural failure; among the rest the
/// deepest path wins. Ties keep the earlier error.
pub(crate) fn most_specific(errors: impl IntoIterator<Item = GeoJsonError>) -> Option<GeoJsonError> {
	errors.into_iter().reduce(|kept, other| {
		let (kept, dropped) = if other.specificity() > kept.specificity() {
			(other, kept)
		} else {
			(kept, other)
		};
		debug!("discarding candidate failure: {dropped}");
		kept
	})
}
