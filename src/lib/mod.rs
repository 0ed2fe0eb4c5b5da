//! Encode and decode GeoJSON trees against pluggable geometry and
//! entity models.
//!
//! Decoding walks a `serde_json::Value` tree and hands coordinate data
//! to a geometry factory; encoding classifies model objects back into
//! GeoJSON shapes. Malformed pieces of input decode to `None` instead
//! of failing the surrounding document.
//!
//! # Example
//!
//! ```
//! use geojson_coder::entity::Object;
//! use geojson_coder::{Coder, Decoded};
//! use serde_json::json;
//!
//! let coder = Coder::new();
//! let tree = json!({"type": "Point", "coordinates": [13.4, 52.5]});
//!
//! let point = match coder.decode(&tree) {
//!     Some(Decoded::Geometry(geometry)) => geometry,
//!     _ => unreachable!(),
//! };
//! assert_eq!(coder.encode(&Object::Geometry(point)), Some(tree));
//! ```

use serde_json::Value;
use std::io::Read;
use thiserror::Error;

pub mod entity;
pub mod factory;
mod feature;
pub mod geo;
mod geojson;
mod geometry;
pub mod model;
pub mod position;

use entity::{Object, SimpleEntityFactory};
use factory::{Class, EntityFactory, GeometryFactory};
use geo::GeoFactory;
use position::Dims;

/// A resolved text parser: raw text in, JSON tree out, `None` on
/// parse failure.
pub type ParserFn = Box<dyn Fn(&str) -> Option<Value> + Send + Sync>;

/// Selects how a coder turns raw text into a JSON tree.
pub enum JsonParser {
    /// Text and reader inputs are rejected.
    Disabled,
    /// Parse with `serde_json`.
    SerdeJson,
    /// Resolve a well-known binding by name at build time.
    Named(String),
    /// Bring your own parser.
    Custom(ParserFn),
}

impl Default for JsonParser {
    fn default() -> Self {
        JsonParser::SerdeJson
    }
}

impl JsonParser {
    fn resolve(self) -> Result<Option<ParserFn>, CoderError> {
        let parser = match self {
            JsonParser::Disabled => None,
            JsonParser::SerdeJson => Some(serde_json_parser()),
            JsonParser::Named(name) => match name.as_str() {
                "serde_json" | "json" => Some(serde_json_parser()),
                _ => return Err(CoderError::UnknownJsonParser(name)),
            },
            JsonParser::Custom(parser) => Some(parser),
        };
        Ok(parser)
    }
}

fn serde_json_parser() -> ParserFn {
    Box::new(|text| serde_json::from_str(text).ok())
}

#[derive(Error, Debug)]
pub enum CoderError {
    #[error("unknown json parser: {0}")]
    UnknownJsonParser(String),
}

/// Outcome of a successful decode: the three shapes a GeoJSON
/// document can carry at its top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<G, F, C> {
    Geometry(G),
    Feature(F),
    FeatureCollection(C),
}

/// Configures and builds a [`Coder`].
pub struct CoderBuilder<GF = GeoFactory, EF = SimpleEntityFactory> {
    geometry_factory: GF,
    entity_factory: EF,
    json_parser: JsonParser,
}

impl CoderBuilder {
    pub fn new() -> Self {
        CoderBuilder {
            geometry_factory: GeoFactory,
            entity_factory: SimpleEntityFactory,
            json_parser: JsonParser::default(),
        }
    }
}

impl Default for CoderBuilder {
    fn default() -> Self {
        CoderBuilder::new()
    }
}

impl<GF, EF> CoderBuilder<GF, EF> {
    pub fn geometry_factory<F>(self, geometry_factory: F) -> CoderBuilder<F, EF> {
        CoderBuilder {
            geometry_factory,
            entity_factory: self.entity_factory,
            json_parser: self.json_parser,
        }
    }

    pub fn entity_factory<F>(self, entity_factory: F) -> CoderBuilder<GF, F> {
        CoderBuilder {
            geometry_factory: self.geometry_factory,
            entity_factory,
            json_parser: self.json_parser,
        }
    }

    pub fn json_parser(mut self, json_parser: JsonParser) -> Self {
        self.json_parser = json_parser;
        self
    }

    /// Resolve the parser selection and freeze the configuration. The
    /// dimensionality count is derived here, once.
    pub fn build(self) -> Result<Coder<GF, EF>, CoderError>
    where
        GF: GeometryFactory,
        EF: EntityFactory<GF::Geometry>,
    {
        let parser = self.json_parser.resolve()?;
        let dims = Dims::new(self.geometry_factory.has_z(), self.geometry_factory.has_m());
        Ok(Coder {
            geometry_factory: self.geometry_factory,
            entity_factory: self.entity_factory,
            parser,
            dims,
        })
    }
}

/// The codec facade. Immutable once built; a shared reference can be
/// used from any number of threads as long as the injected factories
/// allow it.
pub struct Coder<GF = GeoFactory, EF = SimpleEntityFactory> {
    geometry_factory: GF,
    entity_factory: EF,
    parser: Option<ParserFn>,
    dims: Dims,
}

impl Coder {
    /// A coder over the planar `geo-types` factory, parsing text with
    /// `serde_json`.
    pub fn new() -> Self {
        Coder {
            geometry_factory: GeoFactory,
            entity_factory: SimpleEntityFactory,
            parser: Some(serde_json_parser()),
            dims: Dims::new(false, false),
        }
    }
}

impl Default for Coder {
    fn default() -> Self {
        Coder::new()
    }
}

impl<GF, EF> Coder<GF, EF>
where
    GF: GeometryFactory,
    EF: EntityFactory<GF::Geometry>,
{
    /// Encode a model object into a GeoJSON tree. Yields `None` for
    /// the empty object and for bare geometries of a kind GeoJSON
    /// cannot express.
    pub fn encode(&self, object: &EF::Object) -> Option<Value> {
        match self.entity_factory.classify(object) {
            Class::FeatureCollection(collection) => {
                Some(self.encode_feature_collection(collection))
            }
            Class::Feature(feature) => Some(self.encode_feature(feature)),
            Class::Geometry(geometry) => self.encode_geometry(geometry),
            Class::Empty => None,
        }
    }

    /// Decode a GeoJSON tree. Dispatches on the `"type"` member:
    /// feature shapes go to the feature codec, everything else is
    /// tried as a geometry.
    pub fn decode(
        &self,
        value: &Value,
    ) -> Option<Decoded<GF::Geometry, EF::Feature, EF::FeatureCollection>> {
        let object = value.as_object()?;
        match object.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => Some(Decoded::FeatureCollection(
                self.decode_feature_collection(object),
            )),
            Some("Feature") => self.decode_feature(object).map(Decoded::Feature),
            _ => self.decode_geometry(value).map(Decoded::Geometry),
        }
    }

    /// Decode raw text through the configured parser. Fails when the
    /// coder was built with `JsonParser::Disabled`.
    pub fn decode_str(
        &self,
        text: &str,
    ) -> Option<Decoded<GF::Geometry, EF::Feature, EF::FeatureCollection>> {
        let parser = self.parser.as_ref()?;
        let value = parser(text)?;
        self.decode(&value)
    }

    /// Read a stream to its end and decode it as text.
    pub fn decode_reader(
        &self,
        mut reader: impl Read,
    ) -> Option<Decoded<GF::Geometry, EF::Feature, EF::FeatureCollection>> {
        let mut text = String::new();
        reader.read_to_string(&mut text).ok()?;
        self.decode_str(&text)
    }
}

/// What the crate-level helpers decode to: the planar default model.
pub type PlanarDecoded = Decoded<
    geo_types::Geometry<f64>,
    entity::Feature<geo_types::Geometry<f64>>,
    entity::FeatureCollection<geo_types::Geometry<f64>>,
>;

/// Decode a GeoJSON tree with a default coder.
pub fn decode(value: &Value) -> Option<PlanarDecoded> {
    Coder::new().decode(value)
}

/// Decode GeoJSON text with a default coder.
pub fn decode_str(text: &str) -> Option<PlanarDecoded> {
    Coder::new().decode_str(text)
}

/// Encode a model object with a default coder.
pub fn encode(object: &Object<geo_types::Geometry<f64>>) -> Option<Value> {
    Coder::new().encode(object)
}

#[cfg(test)]
mod config {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_parser_name_fails_the_build() {
        let result = CoderBuilder::new()
            .json_parser(JsonParser::Named("yajl".to_string()))
            .build();
        match result {
            Err(CoderError::UnknownJsonParser(name)) => assert_eq!(name, "yajl"),
            Ok(_) => panic!("expected a build failure"),
        }
    }

    #[test]
    fn named_serde_json_parser_resolves() {
        let coder = CoderBuilder::new()
            .json_parser(JsonParser::Named("serde_json".to_string()))
            .build()
            .unwrap();
        assert!(coder.decode_str(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#).is_some());
    }

    #[test]
    fn disabled_parser_rejects_text() {
        let coder = CoderBuilder::new()
            .json_parser(JsonParser::Disabled)
            .build()
            .unwrap();
        assert!(coder.decode_str(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#).is_none());
    }

    #[test]
    fn custom_parser_is_used() {
        let parser: ParserFn =
            Box::new(|_| Some(json!({"type": "Point", "coordinates": [9.0, 50.0]})));
        let coder = CoderBuilder::new()
            .json_parser(JsonParser::Custom(parser))
            .build()
            .unwrap();
        let decoded = coder.decode_str("anything").unwrap();
        assert!(matches!(decoded, Decoded::Geometry(_)));
    }

    #[test]
    fn unparseable_text_decodes_to_nothing() {
        let coder = Coder::new();
        assert!(coder.decode_str("{not json").is_none());
        assert!(coder.decode_str("").is_none());
    }

    #[test]
    fn non_mapping_trees_decode_to_nothing() {
        let coder = Coder::new();
        assert!(coder.decode(&json!("Point")).is_none());
        assert!(coder.decode(&json!([1.0, 2.0])).is_none());
        assert!(coder.decode(&json!(null)).is_none());
    }
}
