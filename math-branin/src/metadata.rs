//! Descriptive metadata for reports and benchmark tables

use crate::constants::GLOBAL_MINIMUM_VALUE;
use crate::domain::Domain;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a test function: bounds, known optima and a few properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

impl FunctionMetadata {
    pub fn branin() -> Self {
        Self {
            name: "branin".to_string(),
            bounds: Domain::BRANIN.bounds(),
            global_minima: vec![
                (vec![-std::f64::consts::PI, 12.275], GLOBAL_MINIMUM_VALUE),
                (vec![std::f64::consts::PI, 2.275], GLOBAL_MINIMUM_VALUE),
                (vec![9.42478, 2.475], GLOBAL_MINIMUM_VALUE),
            ],
            description: "Branin function: a(x2 - b x1^2 + c x1 - r)^2 + s(1 - t)cos(x1) + s"
                .to_string(),
            multimodal: true,
            dimensions: vec![2],
        }
    }

    /// True when `x` has one coordinate per bound and each lies inside its bound
    pub fn is_feasible(&self, x: &[f64]) -> bool {
        x.len() == self.bounds.len()
            && x
                .iter()
                .zip(&self.bounds)
                .all(|(&xi, &(lo, hi))| lo <= xi && xi <= hi)
    }
}

/// Metadata for every function in this crate, keyed by name
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();
    let branin = FunctionMetadata::branin();
    metadata.insert(branin.name.clone(), branin);
    metadata
}

/// Bounds for a named function, `None` if unknown
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    get_function_metadata()
        .get(function_name)
        .map(|meta| meta.bounds.clone())
}
