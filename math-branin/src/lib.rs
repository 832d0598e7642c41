#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod domain;
pub mod evaluator;
pub mod metadata;
pub mod point;
pub mod problem;

pub use config::SamplerConfig;
pub use constants::{BraninConstants, GLOBAL_MINIMUM_VALUE, PI_APPROX};
pub use domain::{Domain, Interval};
pub use evaluator::{BraninEvaluator, branin};
pub use metadata::{FunctionMetadata, get_function_metadata};
pub use point::Point;
pub use problem::Problem;

/// Errors raised by the Branin evaluator and its configuration layer.
///
/// Points outside the domain are not errors: they evaluate to `f64::INFINITY`.
#[derive(Debug, Error)]
pub enum BraninError {
    /// Input does not hold exactly two coordinates.
    #[error("invalid input: expected {expected} coordinates, got {got}")]
    InvalidInput {
        /// Number of coordinates required
        expected: usize,
        /// Number of coordinates provided
        got: usize,
    },

    /// An element of the input is not a number.
    #[error("invalid input: element {index} is not a number")]
    NonNumeric {
        /// Position of the offending element
        index: usize,
    },

    /// Input is not a sequence at all.
    #[error("invalid input: expected an array of two numbers")]
    NotAnArray,

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON for its type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Branin operations.
pub type Result<T> = std::result::Result<T, BraninError>;

impl BraninError {
    /// Returns `true` if the caller handed over a malformed point.
    ///
    /// This includes `InvalidInput`, `NonNumeric` and `NotAnArray`.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BraninError::InvalidInput { .. }
                | BraninError::NonNumeric { .. }
                | BraninError::NotAnArray
        )
    }
}
