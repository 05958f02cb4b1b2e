use super::{
	GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::{BBox, GeoJsonError, GeometryKind, JsonPath, Result, reduce};
use log::trace;
use serde_json::Value;

/// Any of the seven GeoJSON geometries.
///
/// Validation tries every variant in the order of [`GeometryKind::ALL`] and keeps the
/// first one that accepts the input. When none does, the single most specific failure
/// is reported.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
	Point(Point),
	MultiPoint(MultiPoint),
	LineString(LineString),
	MultiLineString(MultiLineString),
	Polygon(Polygon),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
}

macro_rules! delegate {
	($self:ident, $g:ident => $e:expr) => {
		match $self {
			Geometry::Point($g) => $e,
			Geometry::MultiPoint($g) => $e,
			Geometry::LineString($g) => $e,
			Geometry::MultiLineString($g) => $e,
			Geometry::Polygon($g) => $e,
			Geometry::MultiPolygon($g) => $e,
			Geometry::GeometryCollection($g) => $e,
		}
	};
}

impl GeometryType for Geometry {
	fn from_value(value: &Value, path: &JsonPath) -> Result<Self> {
		let candidates: [reduce::Candidate<Geometry>; 7] = [
			|v, p| Point::from_value(v, p).map(Geometry::Point),
			|v, p| MultiPoint::from_value(v, p).map(Geometry::MultiPoint),
			|v, p| LineString::from_value(v, p).map(Geometry::LineString),
			|v, p| MultiLineString::from_value(v, p).map(Geometry::MultiLineString),
			|v, p| Polygon::from_value(v, p).map(Geometry::Polygon),
			|v, p| MultiPolygon::from_value(v, p).map(Geometry::MultiPolygon),
			|v, p| GeometryCollection::from_value(v, p).map(Geometry::GeometryCollection),
		];
		let geometry = reduce::first_valid(value, path, &candidates)?;
		trace!("{path}: validated a {} geometry", geometry.kind());
		Ok(geometry)
	}

	fn kind(&self) -> GeometryKind {
		delegate!(self, g => g.kind())
	}

	fn bbox(&self) -> Option<&BBox> {
		delegate!(self, g => g.bbox())
	}

	fn geo_interface(&self) -> Value {
		delegate!(self, g => g.geo_interface())
	}

	fn wkt_with_precision(&self, precision: Option<u8>) -> String {
		delegate!(self, g => g.wkt_with_precision(precision))
	}
}

macro_rules! impl_variant_conversions {
	($($variant:ident),*) => {$(
		impl From<$variant> for Geometry {
			fn from(geometry: $variant) -> Self {
				Geometry::$variant(geometry)
			}
		}

		impl TryFrom<Geometry> for $variant {
			type Error = GeoJsonError;

			fn try_from(geometry: Geometry) -> Result<Self> {
				match geometry {
					Geometry::$variant(g) => Ok(g),
					other => Err(GeoJsonError::GeometryMismatch {
						path: JsonPath::root(),
						expected: GeometryKind::$variant,
						found: other.kind(),
					}),
				}
			}
		}
	)*};
}

impl_variant_conversions!(
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection
);

crate::impl_serde_via_value!(Geometry);
