//! Error types of the symbolic calculus engine.
//!
//! `DomainError` is the only error a published function can raise, and only
//! from `compute`. Differentiation is symbolic and never fails.
use thiserror::Error;

/// Evaluation outside of a function's mathematical domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("logarithm is undefined for non-positive argument {x}")]
    NonPositiveLogArgument { x: f64 },
    #[error("logarithm base {base} must be positive and different from 1")]
    InvalidLogBase { base: f64 },
    #[error("0 raised to the negative power {power} is undefined (x = {x})")]
    Pole { x: f64, power: f64 },
    #[error("result is not a real number at x = {x}")]
    NotReal { x: f64 },
}

/// Misuse of a fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("a multiplication needs at least one operand")]
    EmptyProduct,
    #[error("a subtraction takes exactly two operands, found {found}")]
    SubtractionArity { found: usize },
}

/// Failure to load runtime settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}
