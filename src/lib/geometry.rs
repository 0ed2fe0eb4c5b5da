use super::factory::{EntityFactory, GeometryFactory, GeometryView};
use super::geojson;
use super::position::Position;
use super::Coder;
use serde_json::{Map, Value};

impl<GF, EF> Coder<GF, EF>
where
    GF: GeometryFactory,
    EF: EntityFactory<GF::Geometry>,
{
    /// Decode one geometry object. Anything without a recognized
    /// `"type"` yields no geometry.
    pub(crate) fn decode_geometry(&self, value: &Value) -> Option<GF::Geometry> {
        let object = value.as_object()?;
        match object.get("type").and_then(Value::as_str)? {
            "Point" => self.decode_point(object.get("coordinates")?),
            "LineString" => self.decode_line_string(object.get("coordinates")?),
            "Polygon" => self.decode_polygon(object.get("coordinates")?),
            "MultiPoint" => self.decode_multi_point(object.get("coordinates")?),
            "MultiLineString" => self.decode_multi_line_string(object.get("coordinates")?),
            "MultiPolygon" => self.decode_multi_polygon(object.get("coordinates")?),
            "GeometryCollection" => self.decode_geometry_collection(object),
            _ => None,
        }
    }

    fn decode_point(&self, coordinates: &Value) -> Option<GF::Geometry> {
        let position = self.dims.decode_position(coordinates)?;
        Some(self.geometry_factory.point(position))
    }

    fn decode_line_string(&self, coordinates: &Value) -> Option<GF::Geometry> {
        let positions = self.decode_positions(coordinates)?;
        Some(self.geometry_factory.line_string(positions))
    }

    fn decode_polygon(&self, coordinates: &Value) -> Option<GF::Geometry> {
        let rings = self.decode_rings(coordinates)?;
        Some(self.geometry_factory.polygon(rings))
    }

    fn decode_multi_point(&self, coordinates: &Value) -> Option<GF::Geometry> {
        let positions = self.decode_positions(coordinates)?;
        Some(self.geometry_factory.multi_point(positions))
    }

    fn decode_multi_line_string(&self, coordinates: &Value) -> Option<GF::Geometry> {
        let lines = coordinates.as_array()?;
        let lines = lines
            .iter()
            .filter_map(|line| self.decode_positions(line))
            .collect();
        Some(self.geometry_factory.multi_line_string(lines))
    }

    fn decode_multi_polygon(&self, coordinates: &Value) -> Option<GF::Geometry> {
        let polygons = coordinates.as_array()?;
        let polygons = polygons
            .iter()
            .filter_map(|polygon| self.decode_rings(polygon))
            .collect();
        Some(self.geometry_factory.multi_polygon(polygons))
    }

    fn decode_geometry_collection(&self, object: &Map<String, Value>) -> Option<GF::Geometry> {
        let geometries = match object.get("geometries").and_then(Value::as_array) {
            Some(members) => members
                .iter()
                .filter_map(|member| self.decode_geometry(member))
                .collect(),
            None => vec![],
        };
        Some(self.geometry_factory.geometry_collection(geometries))
    }

    /// Tuples that fail to decode are dropped; the sequence itself
    /// must be an array.
    fn decode_positions(&self, coordinates: &Value) -> Option<Vec<Position>> {
        let tuples = coordinates.as_array()?;
        Some(
            tuples
                .iter()
                .filter_map(|tuple| self.dims.decode_position(tuple))
                .collect(),
        )
    }

    /// Ring lists are stricter than position lists: a ring that is not
    /// an array invalidates the whole set, and an empty exterior ring
    /// leaves nothing to build a polygon on.
    fn decode_rings(&self, coordinates: &Value) -> Option<Vec<Vec<Position>>> {
        let members = coordinates.as_array()?;
        let mut rings = Vec::with_capacity(members.len());
        for member in members {
            rings.push(self.decode_positions(member)?);
        }
        match rings.first() {
            Some(exterior) if !exterior.is_empty() => Some(rings),
            _ => None,
        }
    }

    /// Encode one model geometry, or nothing for a kind GeoJSON cannot
    /// express.
    pub(crate) fn encode_geometry(&self, geometry: &GF::Geometry) -> Option<Value> {
        let wire = match self.geometry_factory.view(geometry)? {
            GeometryView::Point(position) => geojson::Geometry::Point {
                coordinates: self.dims.encode_position(&position),
            },
            GeometryView::LineString(positions) => geojson::Geometry::LineString {
                coordinates: self.encode_positions(&positions),
            },
            GeometryView::Polygon(rings) => geojson::Geometry::Polygon {
                coordinates: self.encode_rings(&rings),
            },
            GeometryView::MultiPoint(positions) => geojson::Geometry::MultiPoint {
                coordinates: self.encode_positions(&positions),
            },
            GeometryView::MultiLineString(lines) => geojson::Geometry::MultiLineString {
                coordinates: lines.iter().map(|line| self.encode_positions(line)).collect(),
            },
            GeometryView::MultiPolygon(polygons) => geojson::Geometry::MultiPolygon {
                coordinates: polygons
                    .iter()
                    .map(|polygon| self.encode_rings(polygon))
                    .collect(),
            },
            GeometryView::GeometryCollection(members) => geojson::Geometry::GeometryCollection {
                geometries: members
                    .iter()
                    .filter_map(|member| self.encode_geometry(member))
                    .collect(),
            },
        };
        serde_json::to_value(wire).ok()
    }

    fn encode_positions(&self, positions: &[Position]) -> Vec<Vec<f64>> {
        positions
            .iter()
            .map(|position| self.dims.encode_position(position))
            .collect()
    }

    fn encode_rings(&self, rings: &[Vec<Position>]) -> Vec<Vec<Vec<f64>>> {
        rings.iter().map(|ring| self.encode_positions(ring)).collect()
    }
}
