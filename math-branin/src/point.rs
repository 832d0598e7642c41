//! Candidate solutions in the Branin plane

use crate::{BraninError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A candidate solution `(x1, x2)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Coordinates as an `ndarray` vector
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_vec(vec![self.x1, self.x2])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x1, self.x2)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x1, x2): (f64, f64)) -> Self {
        Self { x1, x2 }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x1, x2]: [f64; 2]) -> Self {
        Self { x1, x2 }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x1, p.x2]
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = BraninError;

    fn try_from(x: &[f64]) -> Result<Self> {
        match *x {
            [x1, x2] => Ok(Self { x1, x2 }),
            _ => Err(BraninError::InvalidInput {
                expected: 2,
                got: x.len(),
            }),
        }
    }
}

impl TryFrom<&Array1<f64>> for Point {
    type Error = BraninError;

    fn try_from(x: &Array1<f64>) -> Result<Self> {
        if x.len() != 2 {
            return Err(BraninError::InvalidInput {
                expected: 2,
                got: x.len(),
            });
        }
        Ok(Self { x1: x[0], x2: x[1] })
    }
}

/// Accepts `[x1, x2]` where both elements are JSON numbers.
impl TryFrom<&Value> for Point {
    type Error = BraninError;

    fn try_from(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or(BraninError::NotAnArray)?;
        if items.len() != 2 {
            return Err(BraninError::InvalidInput {
                expected: 2,
                got: items.len(),
            });
        }
        let coord = |index: usize| {
            items[index]
                .as_f64()
                .ok_or(BraninError::NonNumeric { index })
        };
        Ok(Self {
            x1: coord(0)?,
            x2: coord(1)?,
        })
    }
}
