use std::{fmt::Display, str::FromStr};

/// The seven GeoJSON geometry discriminants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryKind {
	/// All kinds in the order the geometry envelope tries them.
	pub const ALL: [GeometryKind; 7] = [
		GeometryKind::Point,
		GeometryKind::MultiPoint,
		GeometryKind::LineString,
		GeometryKind::MultiLineString,
		GeometryKind::Polygon,
		GeometryKind::MultiPolygon,
		GeometryKind::GeometryCollection,
	];

	/// The exact, case-sensitive discriminant string.
	pub fn as_str(&self) -> &'static str {
		use GeometryKind::*;
		match self {
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
		}
	}

	/// The WKT tag, e.g. `MULTIPOLYGON`.
	pub fn wkt_name(&self) -> String {
		self.as_str().to_uppercase()
	}
}

impl FromStr for GeometryKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		GeometryKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| format!("unknown geometry type '{s}'"))
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn parse_round_trips() {
		for kind in GeometryKind::ALL {
			assert_eq!(kind.as_str().parse::<GeometryKind>(), Ok(kind));
		}
	}

	#[rstest]
	#[case("point")]
	#[case("POLYGON")]
	#[case("Feature")]
	#[case("")]
	fn unknown_or_wrong_case(#[case] input: &str) {
		assert!(input.parse::<GeometryKind>().is_err());
	}

	#[test]
	fn wkt_name() {
		assert_eq!(GeometryKind::GeometryCollection.wkt_name(), "GEOMETRYCOLLECTION");
		assert_eq!(GeometryKind::MultiLineString.to_string(), "MultiLineString");
	}
}
