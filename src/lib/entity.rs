use super::factory::{Class, EntityFactory};
use serde_json::{Map, Value};

/// A geometry wrapper carrying an opaque identifier and a properties
/// mapping. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<G> {
    geometry: Option<G>,
    id: Option<Value>,
    properties: Map<String, Value>,
}

impl<G> Feature<G> {
    pub fn new(geometry: Option<G>, id: Option<Value>, properties: Map<String, Value>) -> Self {
        Feature {
            geometry,
            id,
            properties,
        }
    }

    pub fn geometry(&self) -> Option<&G> {
        self.geometry.as_ref()
    }

    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

/// An ordered sequence of features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<G> {
    features: Vec<Feature<G>>,
}

impl<G> FeatureCollection<G> {
    pub fn new(features: Vec<Feature<G>>) -> Self {
        FeatureCollection { features }
    }

    pub fn features(&self) -> &[Feature<G>] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// The universe of values the default entity factory can classify for
/// encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Object<G> {
    Geometry(G),
    Feature(Feature<G>),
    FeatureCollection(FeatureCollection<G>),
    Empty,
}

/// Entity factory over the crate's own wrapper types.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEntityFactory;

impl<G> EntityFactory<G> for SimpleEntityFactory {
    type Feature = Feature<G>;
    type FeatureCollection = FeatureCollection<G>;
    type Object = Object<G>;

    fn feature(
        &self,
        geometry: Option<G>,
        id: Option<Value>,
        properties: Map<String, Value>,
    ) -> Feature<G> {
        Feature::new(geometry, id, properties)
    }

    fn feature_collection(&self, features: Vec<Feature<G>>) -> FeatureCollection<G> {
        FeatureCollection::new(features)
    }

    fn classify<'a>(
        &self,
        object: &'a Object<G>,
    ) -> Class<'a, G, Feature<G>, FeatureCollection<G>> {
        match object {
            Object::FeatureCollection(collection) => Class::FeatureCollection(collection),
            Object::Feature(feature) => Class::Feature(feature),
            Object::Geometry(geometry) => Class::Geometry(geometry),
            Object::Empty => Class::Empty,
        }
    }

    fn geometry<'a>(&self, feature: &'a Feature<G>) -> Option<&'a G> {
        feature.geometry()
    }

    fn id<'a>(&self, feature: &'a Feature<G>) -> Option<&'a Value> {
        feature.id()
    }

    fn properties<'a>(&self, feature: &'a Feature<G>) -> &'a Map<String, Value> {
        feature.properties()
    }

    fn features<'a>(&self, collection: &'a FeatureCollection<G>) -> &'a [Feature<G>] {
        collection.features()
    }
}

#[cfg(test)]
mod classify {
    use super::*;
    use crate::model::Geometry;
    use crate::position::Position;

    #[test]
    fn wrappers_win_over_bare_geometries() {
        let factory = SimpleEntityFactory;
        let point = Geometry::Point(Position::new(1.0, 2.0));

        let object = Object::Geometry(point.clone());
        assert!(matches!(factory.classify(&object), Class::Geometry(_)));

        let feature = Feature::new(Some(point.clone()), None, Map::new());
        let object = Object::Feature(feature.clone());
        assert!(matches!(factory.classify(&object), Class::Feature(_)));

        let collection = FeatureCollection::new(vec![feature]);
        let object = Object::FeatureCollection(collection);
        assert!(matches!(
            factory.classify(&object),
            Class::FeatureCollection(_)
        ));

        let object: Object<Geometry> = Object::Empty;
        assert!(matches!(factory.classify(&object), Class::Empty));
    }
}
