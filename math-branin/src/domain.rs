//! Closed intervals bounding each coordinate

use crate::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A closed interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Both ends inclusive. NaN is never contained.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Uniform draw from the closed interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lower..=self.upper)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(i: Interval) -> Self {
        (i.lower, i.upper)
    }
}

/// Feasible region of the Branin function: `x1 ∈ [-5, 10]`, `x2 ∈ [0, 15]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x1: Interval,
    pub x2: Interval,
}

impl Domain {
    pub const BRANIN: Domain = Domain {
        x1: Interval::new(-5.0, 10.0),
        x2: Interval::new(0.0, 15.0),
    };

    pub fn contains(&self, p: &Point) -> bool {
        self.x1.contains(p.x1) && self.x2.contains(p.x2)
    }

    /// Independent uniform draws for each coordinate
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x1 = self.x1.sample(rng);
        let x2 = self.x2.sample(rng);
        Point::new(x1, x2)
    }

    /// Bounds as `(lower, upper)` pairs, one per dimension
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        vec![self.x1.into(), self.x2.into()]
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::BRANIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_interval_is_closed() {
        let i = Interval::new(-5.0, 10.0);
        assert!(i.contains(-5.0));
        assert!(i.contains(10.0));
        assert!(i.contains(0.0));
        assert!(!i.contains(-5.000001));
        assert!(!i.contains(10.000001));
        assert!(!i.contains(f64::NAN));
        assert_eq!(i.width(), 15.0);
    }

    #[test]
    fn test_domain_contains() {
        let d = Domain::BRANIN;
        assert!(d.contains(&Point::new(0.0, 0.0)));
        assert!(d.contains(&Point::new(10.0, 15.0)));
        assert!(!d.contains(&Point::new(-6.0, 5.0)));
        assert!(!d.contains(&Point::new(0.0, -0.1)));
        assert!(!d.contains(&Point::new(0.0, 15.1)));
        assert_eq!(d.bounds(), vec![(-5.0, 10.0), (0.0, 15.0)]);
    }

    #[test]
    fn test_sample_covers_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let i = Interval::new(0.0, 15.0);
        let draws: Vec<f64> = (0..2000).map(|_| i.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&x| i.contains(x)));
        // both halves of the interval get hit
        assert!(draws.iter().any(|&x| x < 7.5));
        assert!(draws.iter().any(|&x| x > 7.5));
    }
}
