//! Bounded evaluation and sampling of the Branin function

use crate::constants::BraninConstants;
use crate::domain::Domain;
use crate::metadata::FunctionMetadata;
use crate::{Point, Result};
use ndarray::Array1;
use rand::Rng;
use serde_json::Value;

/// Branin function - multimodal, 2D only
/// Global minimum: f(x) = 0.397887 at x = (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
///
/// Unchecked closed form: no bounds test, only the first two entries are read.
/// Panics if `x` holds fewer than two values.
pub fn branin(x: &Array1<f64>) -> f64 {
    BraninConstants::BRANIN.apply(x[0], x[1])
}

/// Evaluator holding the Branin constants and its feasible domain.
///
/// Both are fixed at construction. Evaluating a point outside the domain
/// returns `f64::INFINITY` rather than an error, so callers can rank
/// infeasible candidates as arbitrarily bad with ordinary comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BraninEvaluator {
    constants: BraninConstants,
    domain: Domain,
}

impl BraninEvaluator {
    pub fn new() -> Self {
        let evaluator = Self {
            constants: BraninConstants::BRANIN,
            domain: Domain::BRANIN,
        };
        log::debug!(
            "branin evaluator: {:?}, x1 in [{}, {}], x2 in [{}, {}]",
            evaluator.constants,
            evaluator.domain.x1.lower,
            evaluator.domain.x1.upper,
            evaluator.domain.x2.lower,
            evaluator.domain.x2.upper
        );
        evaluator
    }

    pub fn constants(&self) -> &BraninConstants {
        &self.constants
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn metadata(&self) -> FunctionMetadata {
        FunctionMetadata::branin()
    }

    /// Function value at `p`, or `f64::INFINITY` when `p` is outside the domain.
    ///
    /// A NaN coordinate is never inside the domain, so it also yields infinity.
    pub fn evaluate(&self, p: &Point) -> f64 {
        if !self.domain.contains(p) {
            log::trace!("branin: {} outside domain", p);
            return f64::INFINITY;
        }
        self.constants.apply(p.x1, p.x2)
    }

    /// Evaluate a coordinate slice, which must hold exactly two values.
    pub fn evaluate_slice(&self, x: &[f64]) -> Result<f64> {
        let p = Point::try_from(x)?;
        Ok(self.evaluate(&p))
    }

    /// Evaluate an `ndarray` vector, which must hold exactly two values.
    pub fn evaluate_array(&self, x: &Array1<f64>) -> Result<f64> {
        let p = Point::try_from(x)?;
        Ok(self.evaluate(&p))
    }

    /// Evaluate a JSON value of the form `[x1, x2]`.
    pub fn evaluate_json(&self, value: &Value) -> Result<f64> {
        let p = Point::try_from(value)?;
        Ok(self.evaluate(&p))
    }

    /// Uniformly random feasible point drawn from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        self.domain.sample(rng)
    }
}

impl Default for BraninEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
