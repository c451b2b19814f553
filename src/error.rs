//! Error definitions shared across subsystems.

use thiserror::Error;

/// A route action pattern could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern was empty.
    #[error("action pattern is empty")]
    Empty,

    /// The pattern does not start with `/`, so no fragment path can match it.
    #[error("action pattern {pattern:?} must start with '/'")]
    Relative { pattern: String },

    /// A placeholder was unterminated or had no name.
    #[error("malformed placeholder in action pattern {pattern:?} at byte {position}")]
    Malformed { pattern: String, position: usize },

    /// The generated matcher was rejected by the regex engine.
    #[error("action pattern {pattern:?} could not be compiled: {reason}")]
    Compile { pattern: String, reason: String },
}

/// Captured values did not line up with the placeholders of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern has {expected} placeholders but {actual} values were supplied")]
pub struct ArityError {
    pub expected: usize,
    pub actual: usize,
}

/// Errors reported while dispatching a navigation event to route callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The route template was declared without a callback name.
    #[error("route {action:?} matched but declares no callback")]
    MissingCallbackName { action: String },

    /// No handler is registered under the declared name.
    #[error("no callback registered under {name:?}")]
    UnknownCallback { name: String },

    /// Template resolution failed.
    #[error(transparent)]
    Arity(#[from] ArityError),
}

impl DispatchError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::MissingCallbackName { .. } => "missing_callback_name",
            DispatchError::UnknownCallback { .. } => "unknown_callback",
            DispatchError::Arity(_) => "arity",
        }
    }
}

/// Errors that abort controller boot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootError {
    /// The document declares no `.screen` elements.
    #[error("page declares no screens")]
    NoScreens,
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
