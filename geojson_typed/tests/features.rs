use anyhow::Result;
use geojson_typed::{
	CompositeCoordinates, Feature, FeatureCollection, FeatureId, GeoInterface, GeoJsonError, Geometry,
	GeometryCollection, GeometryKind, GeometryType, JsonObject, JsonPath, MultiPolygon, Point, Polygon, Position,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
struct GenericProperties {
	id: String,
	description: String,
	size: u32,
}

fn properties() -> Value {
	json!({"id": "b3b0c5e4", "description": "district", "size": 412})
}

fn ring() -> Value {
	json!([[
		[13.38272, 52.46385],
		[13.42786, 52.46385],
		[13.42786, 52.48445],
		[13.38272, 52.48445],
		[13.38272, 52.46385]
	]])
}

fn polygon() -> Value {
	json!({"type": "Polygon", "coordinates": ring()})
}

fn multi_polygon() -> Value {
	json!({"type": "MultiPolygon", "coordinates": [ring()]})
}

fn test_feature() -> Value {
	json!({
		"type": "Feature",
		"geometry": polygon(),
		"properties": properties(),
		"bbox": [13.38272, 52.46385, 13.42786, 52.48445]
	})
}

fn feature_geom_null() -> Value {
	json!({"type": "Feature", "geometry": null, "properties": properties()})
}

fn feature_geometry_collection() -> Value {
	json!({
		"type": "Feature",
		"geometry": {"type": "GeometryCollection", "geometries": [polygon(), multi_polygon()]},
		"properties": properties()
	})
}

fn with_member(mut value: Value, key: &str, member: Value) -> Value {
	value[key] = member;
	value
}

fn parse<G: GeometryType>(value: &Value) -> geojson_typed::Result<Feature<G>> {
	Feature::<G>::from_value(value, &JsonPath::root())
}

#[test]
fn feature_collection_iteration() -> Result<()> {
	let value = json!({"type": "FeatureCollection", "features": [test_feature(), test_feature()]});
	let collection = FeatureCollection::<Geometry>::from_value(&value, &JsonPath::root())?;
	assert_eq!(collection.iter().count(), 2);
	assert_eq!(collection.geo_interface()?, value);
	Ok(())
}

#[test]
fn geometry_collection_iteration() -> Result<()> {
	let value = json!({"type": "FeatureCollection", "features": [feature_geometry_collection()]});
	let collection = FeatureCollection::<Geometry>::from_value(&value, &JsonPath::root())?;
	let kinds: Vec<GeometryKind> = collection
		.into_iter()
		.filter_map(|feature| feature.geometry().map(GeometryType::kind))
		.collect();
	assert_eq!(kinds, [GeometryKind::GeometryCollection]);
	Ok(())
}

#[test]
fn generic_properties_is_a_map() -> Result<()> {
	let feature = parse::<Geometry>(&test_feature())?;
	let properties: &JsonObject = feature.properties().unwrap();
	assert_eq!(properties["id"], properties_id());
	Ok(())
}

fn properties_id() -> Value {
	properties()["id"].clone()
}

#[test]
fn generic_properties_is_a_struct() -> Result<()> {
	let feature = Feature::<Geometry, GenericProperties>::from_value(&test_feature(), &JsonPath::root())?;
	assert_eq!(feature.properties().map(|p| p.id.as_str()), Some("b3b0c5e4"));
	assert_eq!(feature.properties().map(|p| p.size), Some(412));
	Ok(())
}

#[test]
fn generic_geometry() -> Result<()> {
	let feature = Feature::<Polygon, GenericProperties>::from_value(&test_feature(), &JsonPath::root())?;
	assert_eq!(feature.geometry().and_then(Polygon::exterior).map(|r| r.len()), Some(5));

	let feature = parse::<Polygon>(&test_feature())?;
	assert_eq!(feature.properties().map(|p| p["size"].clone()), Some(json!(412)));

	let err = parse::<MultiPolygon>(&json!({"type": "Feature", "geometry": polygon(), "properties": {}})).unwrap_err();
	assert!(matches!(
		err,
		GeoJsonError::GeometryMismatch {
			expected: GeometryKind::MultiPolygon,
			found: GeometryKind::Polygon,
			..
		}
	));
	Ok(())
}

#[test]
fn geometry_is_checked_before_properties() {
	let err = parse::<MultiPolygon>(&json!({"type": "Feature", "geometry": polygon()})).unwrap_err();
	assert!(matches!(err, GeoJsonError::GeometryMismatch { .. }));

	let err = parse::<Polygon>(&json!({"type": "Feature", "geometry": polygon()})).unwrap_err();
	assert_eq!(err.to_string(), "$.properties: missing required member 'properties'");
}

#[test]
fn generic_geometry_collection() -> Result<()> {
	let feature = Feature::<GeometryCollection, GenericProperties>::from_value(
		&feature_geometry_collection(),
		&JsonPath::root(),
	)?;
	let geometry = feature.geometry().unwrap();
	assert_eq!(geometry.len(), 2);
	assert!(geometry.wkt().starts_with("GEOMETRYCOLLECTION (POLYGON "));
	assert!(geometry.wkt().contains(", MULTIPOLYGON (((13.38272 52.46385, "));

	let feature = parse::<GeometryCollection>(&feature_geometry_collection())?;
	assert_eq!(feature.properties().map(|p| p["id"].clone()), Some(properties_id()));
	Ok(())
}

#[test]
fn string_properties_are_rejected() {
	let value = json!({"type": "Feature", "geometry": polygon(), "properties": "should raise"});
	let err = parse::<Geometry>(&value).unwrap_err();
	assert!(matches!(err, GeoJsonError::PropertiesSchema { .. }));
	assert_eq!(err.path().unwrap().to_string(), "$.properties");

	let err = Feature::<Geometry, GenericProperties>::from_value(&value, &JsonPath::root()).unwrap_err();
	assert!(matches!(err, GeoJsonError::PropertiesSchema { .. }));
}

#[test]
fn structured_properties_mismatch() {
	let value = with_member(test_feature(), "properties", json!({"id": "x", "description": "y"}));
	let err = Feature::<Geometry, GenericProperties>::from_value(&value, &JsonPath::root()).unwrap_err();
	assert!(matches!(err, GeoJsonError::PropertiesSchema { .. }));
}

#[test]
fn feature_collection_generic() -> Result<()> {
	let value = json!({"type": "FeatureCollection", "features": [test_feature(), test_feature()]});
	let collection = FeatureCollection::<Polygon, GenericProperties>::from_value(&value, &JsonPath::root())?;
	assert_eq!(collection.len(), 2);
	assert_eq!(collection[0].properties().map(|p| p.size), Some(412));
	assert_eq!(collection[0].geometry().map(GeometryType::kind), Some(GeometryKind::Polygon));
	Ok(())
}

struct Pointy;

impl GeoInterface for Pointy {
	fn describe_geometry(&self) -> Result<Value> {
		Ok(json!({"type": "Point", "coordinates": [0.0, 0.0]}))
	}
}

#[test]
fn geo_interface_protocol() -> Result<()> {
	let feature = Feature::<Geometry>::from_geo_interface(&Pointy, Some(JsonObject::new()))?;
	assert_eq!(
		feature.geometry().map(GeometryType::geo_interface),
		Some(Pointy.describe_geometry()?)
	);
	let point = Point::from_geo_interface(&Pointy)?;
	assert_eq!(point.coordinates(), &Position::new(0.0, 0.0)?);
	Ok(())
}

#[test]
fn feature_with_null_geometry() -> Result<()> {
	let feature = parse::<Geometry>(&feature_geom_null())?;
	assert!(feature.geometry().is_none());
	assert!(feature.geo_interface()?.get("bbox").is_none());
	Ok(())
}

#[test]
fn collection_keeps_per_feature_bbox() -> Result<()> {
	let value = json!({"type": "FeatureCollection", "features": [feature_geom_null(), test_feature()]});
	let projection = FeatureCollection::<Geometry>::from_value(&value, &JsonPath::root())?.geo_interface()?;
	assert!(projection.get("bbox").is_none());
	assert!(projection["features"][0].get("bbox").is_none());
	assert!(projection["features"][1].get("bbox").is_some());
	Ok(())
}

#[rstest]
#[case(json!("a"), FeatureId::String("a".to_string()))]
#[case(json!(1), FeatureId::Integer(1))]
#[case(json!("1"), FeatureId::String("1".to_string()))]
fn feature_id(#[case] id: Value, #[case] expected: FeatureId) -> Result<()> {
	let feature = parse::<Geometry>(&with_member(test_feature(), "id", id.clone()))?;
	assert_eq!(feature.id(), Some(&expected));
	assert_eq!(feature.geo_interface()?["id"], id);
	Ok(())
}

#[test]
fn large_unsigned_feature_id() -> Result<()> {
	let value = json!({"type": "Feature", "geometry": null, "properties": null, "id": 9_223_372_036_854_775_808_u64});
	let feature = parse::<Geometry>(&value)?;
	assert_eq!(feature.id(), Some(&FeatureId::Unsigned(9_223_372_036_854_775_808)));
	assert_eq!(feature.geo_interface()?, value);
	Ok(())
}

#[rstest]
#[case(json!(true))]
#[case(json!(1.0))]
fn bad_feature_id(#[case] id: Value) {
	let err = parse::<Geometry>(&with_member(test_feature(), "id", id)).unwrap_err();
	assert!(matches!(err, GeoJsonError::IdentifierType { .. }));
}

#[rstest]
#[case(json!({"type": "Feature", "properties": null, "geometry": null}))]
#[case(json!({"type": "Feature", "properties": null, "geometry": null, "bbox": null}))]
#[case(json!({"type": "Feature", "properties": null, "geometry": null, "bbox": [0, 0, 100, 100]}))]
#[case(json!({"type": "Feature", "properties": null, "geometry": null, "bbox": [0, 0, 0, 100, 100, 100]}))]
fn feature_validation_accepts(#[case] value: Value) {
	assert!(parse::<Geometry>(&value).is_ok());
}

#[rstest]
#[case::lowercase_type(json!({"type": "feature", "properties": null, "geometry": null}))]
#[case::missing_type(json!({"properties": null, "geometry": null}))]
#[case::missing_properties(json!({"type": "Feature", "geometry": null}))]
#[case::missing_geometry(json!({"type": "Feature", "properties": null}))]
#[case::bbox_values(json!({"type": "Feature", "properties": null, "geometry": null, "bbox": [0, "a", 0, 1, 1, 1]}))]
#[case::bbox_length(json!({"type": "Feature", "properties": null, "geometry": null, "bbox": [0, 0, 0, 1, 1]}))]
fn feature_validation_shape_errors(#[case] value: Value) {
	let err = parse::<Geometry>(&value).unwrap_err();
	assert!(matches!(err, GeoJsonError::Shape { .. }), "unexpected error: {err:?}");
}

#[rstest]
#[case(json!([100, 100, 0, 0]))]
#[case(json!([100, 100, 100, 0, 0, 0]))]
fn feature_validation_bbox_order(#[case] bbox: Value) {
	let value = json!({"type": "Feature", "properties": null, "geometry": null, "bbox": bbox});
	let err = parse::<Geometry>(&value).unwrap_err();
	assert!(matches!(err, GeoJsonError::BBoxOrder { .. }));
}

#[test]
fn validation_reports_a_single_error() {
	let value = json!({
		"type": "Feature",
		"geometry": {
			"type": "Polygon",
			"coordinates": [[
				[-55.9947406591177, -9.26104045526505],
				[-55.9976752102375, -9.266589696568962],
				[-56.00200328975916, -9.264041751931352],
				[-55.99899921566248, -9.257935213034594],
				[-55.99477406591177, -9.26103945526505]
			]]
		},
		"properties": {}
	});
	match parse::<Geometry>(&value) {
		Err(GeoJsonError::RingNotClosed { path, first, last }) => {
			assert_eq!(path.to_string(), "$.geometry.coordinates[0]");
			assert_eq!(first.x(), -55.9947406591177);
			assert_eq!(last.x(), -55.99477406591177);
		}
		other => panic!("expected RingNotClosed, got {other:?}"),
	}
}

#[test]
fn berlin_polygon_scenario() -> Result<()> {
	let value = json!({
		"type": "Feature",
		"geometry": {
			"type": "Polygon",
			"coordinates": [[[13.38, 52.46], [13.43, 52.46], [13.43, 52.48], [13.38, 52.48], [13.38, 52.46]]]
		},
		"properties": {"id": "x"}
	});
	assert!(parse::<Geometry>(&value).is_ok());

	let open = with_member(
		value,
		"geometry",
		json!({"type": "Polygon", "coordinates": [[[13.38, 52.46], [13.43, 52.46], [13.43, 52.48], [13.38, 52.48]]]}),
	);
	assert!(matches!(
		parse::<Geometry>(&open),
		Err(GeoJsonError::RingNotClosed { .. })
	));
	Ok(())
}

#[test]
fn json_text_round_trip() -> Result<()> {
	let value = json!({"type": "FeatureCollection", "features": [test_feature(), feature_geometry_collection()]});
	let collection = FeatureCollection::<Geometry>::from_json_str(&value.to_string())?;
	let text = collection.to_json_string()?;
	let again = FeatureCollection::<Geometry>::from_json_str(&text)?;
	assert_eq!(again, collection);
	assert_eq!(again.geo_interface()?, value);
	Ok(())
}

#[test]
fn serde_integration() -> Result<()> {
	#[derive(Deserialize, Serialize)]
	struct Layer {
		name: String,
		data: FeatureCollection<Polygon, GenericProperties>,
	}

	let value = json!({"name": "districts", "data": {"type": "FeatureCollection", "features": [test_feature()]}});
	let layer: Layer = serde_json::from_value(value.clone())?;
	assert_eq!(layer.data.len(), 1);
	assert_eq!(serde_json::to_value(&layer)?, value);

	let broken = json!({"name": "districts", "data": {"type": "FeatureCollection", "features": [feature_geometry_collection()]}});
	assert!(serde_json::from_value::<Layer>(broken).is_err());
	Ok(())
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn validated_types_are_send_and_sync() {
	assert_send_sync::<Feature>();
	assert_send_sync::<FeatureCollection<Polygon, GenericProperties>>();
	assert_send_sync::<Geometry>();
	assert_send_sync::<GeoJsonError>();
}
