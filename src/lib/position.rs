use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single vertex in the geometry model, carrying two mandatory and
/// up to two optional coordinate components.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position {
            x,
            y,
            z: None,
            m: None,
        }
    }
}

impl From<(f64, f64)> for Position {
    fn from(coordinates: (f64, f64)) -> Self {
        Position::new(coordinates.0, coordinates.1)
    }
}

/// Coordinate dimensionality, fixed per coder from the geometry
/// factory's properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dims {
    pub has_z: bool,
    pub has_m: bool,
}

impl Dims {
    pub fn new(has_z: bool, has_m: bool) -> Self {
        Dims { has_z, has_m }
    }

    pub fn count(&self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_m)
    }

    /// Read one coordinate tuple. Values beyond the configured count
    /// are ignored; a missing or non-numeric value within it spoils
    /// the whole tuple.
    pub fn decode_position(&self, tuple: &Value) -> Option<Position> {
        let values = tuple.as_array()?;
        let mut values = values.iter().take(self.count()).map(Value::as_f64);
        let x = values.next().flatten()?;
        let y = values.next().flatten()?;
        let z = if self.has_z {
            Some(values.next().flatten()?)
        } else {
            None
        };
        let m = if self.has_m {
            Some(values.next().flatten()?)
        } else {
            None
        };
        Some(Position { x, y, z, m })
    }

    /// Emit exactly the configured number of components.
    pub fn encode_position(&self, position: &Position) -> Vec<f64> {
        let mut tuple = Vec::with_capacity(self.count());
        tuple.push(position.x);
        tuple.push(position.y);
        if self.has_z {
            tuple.push(position.z.unwrap_or(0.0));
        }
        if self.has_m {
            tuple.push(position.m.unwrap_or(0.0));
        }
        tuple
    }
}
