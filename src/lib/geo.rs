use super::factory::{GeometryFactory, GeometryView};
use super::position::Position;
use geo_types::{
    Coordinate, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// The library-standard planar factory, producing `geo-types`
/// geometries. Z and M components are not representable and are
/// dropped on decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoFactory;

impl GeometryFactory for GeoFactory {
    type Geometry = Geometry<f64>;

    fn has_z(&self) -> bool {
        false
    }

    fn has_m(&self) -> bool {
        false
    }

    fn point(&self, position: Position) -> Geometry<f64> {
        Geometry::Point(into_point(position))
    }

    fn line_string(&self, positions: Vec<Position>) -> Geometry<f64> {
        Geometry::LineString(into_line_string(positions))
    }

    fn polygon(&self, rings: Vec<Vec<Position>>) -> Geometry<f64> {
        Geometry::Polygon(into_polygon(rings))
    }

    fn multi_point(&self, positions: Vec<Position>) -> Geometry<f64> {
        let points = positions.into_iter().map(into_point).collect();
        Geometry::MultiPoint(MultiPoint(points))
    }

    fn multi_line_string(&self, lines: Vec<Vec<Position>>) -> Geometry<f64> {
        let lines = lines.into_iter().map(into_line_string).collect();
        Geometry::MultiLineString(MultiLineString(lines))
    }

    fn multi_polygon(&self, polygons: Vec<Vec<Vec<Position>>>) -> Geometry<f64> {
        let polygons = polygons.into_iter().map(into_polygon).collect();
        Geometry::MultiPolygon(MultiPolygon(polygons))
    }

    fn geometry_collection(&self, geometries: Vec<Geometry<f64>>) -> Geometry<f64> {
        Geometry::GeometryCollection(GeometryCollection(geometries))
    }

    fn view<'a>(&self, geometry: &'a Geometry<f64>) -> Option<GeometryView<'a, Geometry<f64>>> {
        let view = match geometry {
            Geometry::Point(point) => GeometryView::Point(point_position(point)),
            Geometry::LineString(line) => GeometryView::LineString(line_positions(line)),
            Geometry::Polygon(polygon) => GeometryView::Polygon(polygon_rings(polygon)),
            Geometry::MultiPoint(multi) => {
                GeometryView::MultiPoint(multi.0.iter().map(point_position).collect())
            }
            Geometry::MultiLineString(multi) => {
                GeometryView::MultiLineString(multi.0.iter().map(line_positions).collect())
            }
            Geometry::MultiPolygon(multi) => {
                GeometryView::MultiPolygon(multi.0.iter().map(polygon_rings).collect())
            }
            Geometry::GeometryCollection(collection) => {
                GeometryView::GeometryCollection(&collection.0)
            }
            // Line, Rect and Triangle have no GeoJSON kind
            _ => return None,
        };
        Some(view)
    }
}

fn into_point(position: Position) -> Point<f64> {
    Point::new(position.x, position.y)
}

fn into_line_string(positions: Vec<Position>) -> LineString<f64> {
    LineString(
        positions
            .into_iter()
            .map(|p| Coordinate { x: p.x, y: p.y })
            .collect(),
    )
}

fn into_polygon(rings: Vec<Vec<Position>>) -> Polygon<f64> {
    let mut rings = rings.into_iter();
    let exterior = rings
        .next()
        .map(into_line_string)
        .unwrap_or_else(|| LineString(vec![]));
    let interiors = rings.map(into_line_string).collect();
    Polygon::new(exterior, interiors)
}

fn point_position(point: &Point<f64>) -> Position {
    Position::new(point.x(), point.y())
}

fn line_positions(line: &LineString<f64>) -> Vec<Position> {
    line.0.iter().map(|c| Position::new(c.x, c.y)).collect()
}

fn polygon_rings(polygon: &Polygon<f64>) -> Vec<Vec<Position>> {
    let mut rings = vec![line_positions(polygon.exterior())];
    rings.extend(polygon.interiors().iter().map(line_positions));
    rings
}
