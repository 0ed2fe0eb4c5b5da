use super::factory::{EntityFactory, GeometryFactory};
use super::geojson;
use super::Coder;
use serde_json::{Map, Value};

impl<GF, EF> Coder<GF, EF>
where
    GF: GeometryFactory,
    EF: EntityFactory<GF::Geometry>,
{
    /// Decode a feature. A missing or null geometry is fine; a present
    /// geometry that fails to decode fails the whole feature.
    pub(crate) fn decode_feature(&self, object: &Map<String, Value>) -> Option<EF::Feature> {
        if object.get("type").and_then(Value::as_str) != Some("Feature") {
            return None;
        }
        let geometry = match object.get("geometry") {
            None | Some(Value::Null) => None,
            Some(geometry) => Some(self.decode_geometry(geometry)?),
        };
        let id = object.get("id").cloned();
        let properties = object
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Some(self.entity_factory.feature(geometry, id, properties))
    }

    /// Decode a feature collection. Members not declaring themselves
    /// features are skipped without being attempted; attempted members
    /// that fail are dropped. Always yields a collection.
    pub(crate) fn decode_feature_collection(
        &self,
        object: &Map<String, Value>,
    ) -> EF::FeatureCollection {
        let features = match object.get("features").and_then(Value::as_array) {
            Some(members) => members
                .iter()
                .filter_map(|member| {
                    let feature = member.as_object()?;
                    if feature.get("type").and_then(Value::as_str) != Some("Feature") {
                        return None;
                    }
                    self.decode_feature(feature)
                })
                .collect(),
            None => vec![],
        };
        self.entity_factory.feature_collection(features)
    }

    pub(crate) fn encode_feature(&self, feature: &EF::Feature) -> Value {
        let geometry = self
            .entity_factory
            .geometry(feature)
            .and_then(|geometry| self.encode_geometry(geometry))
            .unwrap_or(Value::Null);
        let id = self
            .entity_factory
            .id(feature)
            .filter(|id| !matches!(id, Value::Null | Value::Bool(false)))
            .cloned();
        // the encoded tree never aliases the feature's own map
        let properties = self.entity_factory.properties(feature).clone();
        let entity = geojson::Entity::Feature {
            geometry,
            properties,
            id,
        };
        serde_json::to_value(entity).unwrap_or_default()
    }

    pub(crate) fn encode_feature_collection(&self, collection: &EF::FeatureCollection) -> Value {
        let features = self
            .entity_factory
            .features(collection)
            .iter()
            .map(|feature| self.encode_feature(feature))
            .collect();
        serde_json::to_value(geojson::Entity::FeatureCollection { features }).unwrap_or_default()
    }
}

#[cfg(test)]
mod decode_feature {
    use crate::entity::Feature;
    use crate::model::{Geometry, SpatialFactory};
    use crate::position::Position;
    use crate::{Coder, CoderBuilder};
    use serde_json::{json, Map};

    fn coder() -> Coder<SpatialFactory> {
        CoderBuilder::new()
            .geometry_factory(SpatialFactory::planar())
            .build()
            .unwrap()
    }

    #[test]
    fn geometry_less_feature_is_permitted() {
        let coder = coder();
        let tree = json!({"type": "Feature", "geometry": null, "properties": {}});
        let feature = coder.decode_feature(tree.as_object().unwrap()).unwrap();
        assert_eq!(feature, Feature::new(None, None, Map::new()));
    }

    #[test]
    fn bad_geometry_fails_the_feature() {
        let coder = coder();
        let tree = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": []},
            "properties": {}
        });
        assert_eq!(coder.decode_feature(tree.as_object().unwrap()), None);
    }

    #[test]
    fn id_and_properties_pass_through() {
        let coder = coder();
        let tree = json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
            "id": "berlin-1",
            "properties": {"name": "Alexanderplatz"}
        });
        let feature = coder.decode_feature(tree.as_object().unwrap()).unwrap();
        assert_eq!(feature.id(), Some(&json!("berlin-1")));
        assert_eq!(
            feature.properties().get("name"),
            Some(&json!("Alexanderplatz"))
        );
        assert_eq!(
            feature.geometry(),
            Some(&Geometry::Point(Position::new(1.0, 2.0)))
        );
    }

    #[test]
    fn wrong_type_is_not_a_feature() {
        let coder = coder();
        let tree = json!({"type": "Point", "coordinates": [1.0, 2.0]});
        assert_eq!(coder.decode_feature(tree.as_object().unwrap()), None);
    }
}

#[cfg(test)]
mod decode_feature_collection {
    use crate::model::SpatialFactory;
    use crate::{Coder, CoderBuilder};
    use serde_json::json;

    fn coder() -> Coder<SpatialFactory> {
        CoderBuilder::new()
            .geometry_factory(SpatialFactory::planar())
            .build()
            .unwrap()
    }

    #[test]
    fn empty_features_decode_to_an_empty_collection() {
        let coder = coder();
        let tree = json!({"type": "FeatureCollection", "features": []});
        let collection = coder.decode_feature_collection(tree.as_object().unwrap());
        assert!(collection.is_empty());
    }

    #[test]
    fn missing_features_default_to_empty() {
        let coder = coder();
        let tree = json!({"type": "FeatureCollection"});
        let collection = coder.decode_feature_collection(tree.as_object().unwrap());
        assert!(collection.is_empty());

        let tree = json!({"type": "FeatureCollection", "features": "nope"});
        let collection = coder.decode_feature_collection(tree.as_object().unwrap());
        assert!(collection.is_empty());
    }

    #[test]
    fn members_of_other_types_are_skipped() {
        let coder = coder();
        let tree = json!({"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": null, "properties": {}},
            {"type": "Something"},
            17
        ]});
        let collection = coder.decode_feature_collection(tree.as_object().unwrap());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn failing_members_are_dropped() {
        let coder = coder();
        let tree = json!({"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": []}, "properties": {}},
            {"type": "Feature", "geometry": null, "properties": {}}
        ]});
        let collection = coder.decode_feature_collection(tree.as_object().unwrap());
        assert_eq!(collection.len(), 1);
    }
}

#[cfg(test)]
mod encode_feature {
    use crate::entity::{Feature, FeatureCollection, Object};
    use crate::model::{Geometry, SpatialFactory};
    use crate::position::Position;
    use crate::{Coder, CoderBuilder};
    use serde_json::{json, Map, Value};

    fn coder() -> Coder<SpatialFactory> {
        CoderBuilder::new()
            .geometry_factory(SpatialFactory::planar())
            .build()
            .unwrap()
    }

    #[test]
    fn null_and_false_ids_are_omitted() {
        let coder = coder();
        for id in vec![None, Some(Value::Null), Some(json!(false))] {
            let feature = Feature::<Geometry>::new(None, id, Map::new());
            let encoded = coder.encode_feature(&feature);
            assert_eq!(encoded.get("id"), None);
            assert_eq!(encoded.get("geometry"), Some(&Value::Null));
        }
    }

    #[test]
    fn numeric_ids_are_kept() {
        let coder = coder();
        let feature = Feature::<Geometry>::new(None, Some(json!(42)), Map::new());
        let encoded = coder.encode_feature(&feature);
        assert_eq!(encoded.get("id"), Some(&json!(42)));
    }

    #[test]
    fn encoded_properties_are_a_copy() {
        let coder = coder();
        let mut properties = Map::new();
        properties.insert("name".to_string(), json!("a"));
        let feature = Feature::<Geometry>::new(None, None, properties);
        let mut encoded = coder.encode_feature(&feature);
        encoded
            .as_object_mut()
            .unwrap()
            .get_mut("properties")
            .unwrap()
            .as_object_mut()
            .unwrap()
            .insert("name".to_string(), json!("b"));
        assert_eq!(feature.properties().get("name"), Some(&json!("a")));
    }

    #[test]
    fn collection_wraps_member_features() {
        let coder = coder();
        let point = Geometry::Point(Position::new(1.0, 2.0));
        let feature = Feature::new(Some(point), None, Map::new());
        let collection = FeatureCollection::new(vec![feature]);
        let encoded = coder.encode(&Object::FeatureCollection(collection)).unwrap();
        assert_eq!(
            encoded,
            json!({"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {}
            }]})
        );
    }
}
