use super::factory::{GeometryFactory, GeometryView};
use super::position::Position;

/// An owned geometry model that keeps whatever coordinate components
/// its factory was configured with. Covers the models `geo-types`
/// cannot express, i.e. anything with Z or M.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
    MultiPoint(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Geometry>),
}

/// Factory for the owned model with configurable dimensionality.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialFactory {
    pub has_z: bool,
    pub has_m: bool,
}

impl SpatialFactory {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        SpatialFactory { has_z, has_m }
    }

    pub fn planar() -> Self {
        SpatialFactory::default()
    }
}

impl GeometryFactory for SpatialFactory {
    type Geometry = Geometry;

    fn has_z(&self) -> bool {
        self.has_z
    }

    fn has_m(&self) -> bool {
        self.has_m
    }

    fn point(&self, position: Position) -> Geometry {
        Geometry::Point(position)
    }

    fn line_string(&self, positions: Vec<Position>) -> Geometry {
        Geometry::LineString(positions)
    }

    fn polygon(&self, rings: Vec<Vec<Position>>) -> Geometry {
        Geometry::Polygon(rings)
    }

    fn multi_point(&self, positions: Vec<Position>) -> Geometry {
        Geometry::MultiPoint(positions)
    }

    fn multi_line_string(&self, lines: Vec<Vec<Position>>) -> Geometry {
        Geometry::MultiLineString(lines)
    }

    fn multi_polygon(&self, polygons: Vec<Vec<Vec<Position>>>) -> Geometry {
        Geometry::MultiPolygon(polygons)
    }

    fn geometry_collection(&self, geometries: Vec<Geometry>) -> Geometry {
        Geometry::GeometryCollection(geometries)
    }

    fn view<'a>(&self, geometry: &'a Geometry) -> Option<GeometryView<'a, Geometry>> {
        let view = match geometry {
            Geometry::Point(position) => GeometryView::Point(*position),
            Geometry::LineString(positions) => GeometryView::LineString(positions.clone()),
            Geometry::Polygon(rings) => GeometryView::Polygon(rings.clone()),
            Geometry::MultiPoint(positions) => GeometryView::MultiPoint(positions.clone()),
            Geometry::MultiLineString(lines) => GeometryView::MultiLineString(lines.clone()),
            Geometry::MultiPolygon(polygons) => GeometryView::MultiPolygon(polygons.clone()),
            Geometry::GeometryCollection(members) => GeometryView::GeometryCollection(members),
        };
        Some(view)
    }
}
