use super::position::Position;
use serde_json::{Map, Value};

/// Builds concrete geometry values from coordinate data and reports
/// the coordinate dimensionality of the model it produces.
///
/// The codec hands every constructor pre-validated component
/// sequences: ring lists passed to `polygon` carry the exterior ring
/// first and are never empty.
pub trait GeometryFactory {
    type Geometry;

    fn has_z(&self) -> bool;
    fn has_m(&self) -> bool;

    fn point(&self, position: Position) -> Self::Geometry;
    fn line_string(&self, positions: Vec<Position>) -> Self::Geometry;
    fn polygon(&self, rings: Vec<Vec<Position>>) -> Self::Geometry;
    fn multi_point(&self, positions: Vec<Position>) -> Self::Geometry;
    fn multi_line_string(&self, lines: Vec<Vec<Position>>) -> Self::Geometry;
    fn multi_polygon(&self, polygons: Vec<Vec<Vec<Position>>>) -> Self::Geometry;
    fn geometry_collection(&self, geometries: Vec<Self::Geometry>) -> Self::Geometry;

    /// Classify a model object into one of the seven GeoJSON kinds.
    /// `None` marks a kind GeoJSON cannot express; such objects encode
    /// to no value.
    fn view<'a>(&self, geometry: &'a Self::Geometry) -> Option<GeometryView<'a, Self::Geometry>>;
}

/// A geometry seen through its GeoJSON kind, with coordinates
/// flattened to positions.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryView<'a, G> {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
    MultiPoint(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(&'a [G]),
}

/// Builds and inspects Feature and FeatureCollection wrappers around
/// geometries of type `G`.
pub trait EntityFactory<G> {
    type Feature;
    type FeatureCollection;
    /// The universe of values `Coder::encode` accepts.
    type Object;

    fn feature(
        &self,
        geometry: Option<G>,
        id: Option<Value>,
        properties: Map<String, Value>,
    ) -> Self::Feature;
    fn feature_collection(&self, features: Vec<Self::Feature>) -> Self::FeatureCollection;

    /// Classification contract for encoding: a feature collection wins
    /// over a feature, a feature over a bare geometry.
    fn classify<'a>(
        &self,
        object: &'a Self::Object,
    ) -> Class<'a, G, Self::Feature, Self::FeatureCollection>;

    fn geometry<'a>(&self, feature: &'a Self::Feature) -> Option<&'a G>;
    fn id<'a>(&self, feature: &'a Self::Feature) -> Option<&'a Value>;
    fn properties<'a>(&self, feature: &'a Self::Feature) -> &'a Map<String, Value>;
    fn features<'a>(&self, collection: &'a Self::FeatureCollection) -> &'a [Self::Feature];
}

/// Outcome of classifying a value for encoding.
#[derive(Debug)]
pub enum Class<'a, G, F, C> {
    FeatureCollection(&'a C),
    Feature(&'a F),
    Geometry(&'a G),
    Empty,
}
