use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Vec<f64>,
    },
    LineString {
        coordinates: Vec<Vec<f64>>,
    },
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPoint {
        coordinates: Vec<Vec<f64>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    GeometryCollection {
        geometries: Vec<Value>,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        geometry: Value,
        properties: Map<String, Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<Value>,
    },
    FeatureCollection {
        features: Vec<Value>,
    },
}
