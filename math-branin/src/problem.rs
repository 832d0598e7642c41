//! Minimal contract for an evaluatable benchmark problem

use crate::{BraninEvaluator, Point};
use rand::Rng;

/// A problem that scores candidates and draws feasible ones.
///
/// Infeasible candidates score `f64::INFINITY`; lower is better.
pub trait Problem {
    type Solution;

    fn evaluate(&self, solution: &Self::Solution) -> f64;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Solution;
}

impl Problem for BraninEvaluator {
    type Solution = Point;

    fn evaluate(&self, solution: &Point) -> f64 {
        BraninEvaluator::evaluate(self, solution)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        BraninEvaluator::sample(self, rng)
    }
}
