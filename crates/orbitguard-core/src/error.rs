//! Error taxonomy for the impact/deflection engine.
//!
//! Every rejection happens before any physics runs; no partial results
//! are ever returned alongside an error.

use thiserror::Error;

/// All failure modes surfaced to the embedding layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A physical input parameter fell outside its allowed range.
    #[error("{name} must be between {min} and {max}")]
    OutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// The chosen method costs more than the scenario budget.
    #[error("insufficient budget: method costs {cost} but only {budget} is available")]
    InsufficientBudget { cost: f64, budget: f64 },

    /// Launch plus mission duration exceeds the remaining lead time.
    #[error("insufficient time: method needs {needed_days} days but only {available_days} remain")]
    InsufficientTime {
        needed_days: f64,
        available_days: f64,
    },

    /// Scenario id not present in the content catalog.
    #[error("unknown scenario id `{0}`")]
    UnknownScenario(String),

    /// Method id not present in the content catalog.
    #[error("unknown deflection method id `{0}`")]
    UnknownMethod(String),

    /// Scenario budget must be positive for scoring to be defined.
    #[error("scenario budget must be positive")]
    NonPositiveBudget,

    /// Discovery lead time must be positive for scoring to be defined.
    #[error("scenario discovery time must be positive")]
    NonPositiveDiscoveryDays,
}
