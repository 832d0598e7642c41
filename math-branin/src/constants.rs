//! Fixed parameters of the Branin function

use serde::{Deserialize, Serialize};

/// Approximation of π the constants are derived from.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159265359;

/// Value shared by the three global minima.
pub const GLOBAL_MINIMUM_VALUE: f64 = 0.397887;

/// The six Branin parameters.
///
/// f(x1, x2) = a (x2 - b x1² + c x1 - r)² + s (1 - t) cos(x1) + s
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BraninConstants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub r: f64,
    pub s: f64,
    pub t: f64,
}

impl BraninConstants {
    /// Standard parameter set, evaluated at compile time from `PI_APPROX`
    pub const BRANIN: BraninConstants = BraninConstants::from_pi(PI_APPROX);

    /// Derive the standard parameter set from a value of π
    pub const fn from_pi(pi: f64) -> Self {
        Self {
            a: 1.0,
            b: 5.1 / (4.0 * pi * pi),
            c: 5.0 / pi,
            r: 6.0,
            s: 10.0,
            t: 1.0 / (8.0 * pi),
        }
    }

    /// Closed form, no bounds check
    #[inline]
    pub fn apply(&self, x1: f64, x2: f64) -> f64 {
        self.a * (x2 - self.b * x1.powi(2) + self.c * x1 - self.r).powi(2)
            + self.s * (1.0 - self.t) * x1.cos()
            + self.s
    }
}

impl Default for BraninConstants {
    fn default() -> Self {
        Self::BRANIN
    }
}
