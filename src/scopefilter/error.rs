//! Error types.
//!
//! The filter engine distinguishes two classes of failure:
//!
//! - [`ValidationError`]: bad input supplied at runtime (a string where a number
//!   was expected, an empty range, a slider value out of bounds). The caller may
//!   correct the input and try again. State is never touched on failure.
//! - [`ContractViolation`]: the caller broke the engine's contract (an option id
//!   the filter never declared, a range slot that isn't a pair). These are not
//!   expected with a correctly generated UI and must not be silently recovered.
//!
//! Accessors decode state fallibly and report shape problems as [`StateError`].
//! Application code above the engine works with [`ScopeError`].

use std::fmt;
use thiserror::Error;

/// Which end of a range an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("bad type for {endpoint} value of filter {filter_id}: valid types are integer, float and null")]
    BadValueType { filter_id: String, endpoint: Endpoint },

    #[error("start value {start} is greater or equal to end value {end} for filter {filter_id}")]
    EmptyRange {
        filter_id: String,
        start: f64,
        end: f64,
    },

    #[error("value {value} outside of allowed range ({min}, {max}) for filter {filter_id}")]
    OutOfBounds {
        filter_id: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("invalid option id '{option_id}' for filter {filter_id}")]
    InvalidOption { filter_id: String, option_id: String },

    #[error("range state for filter {filter_id} holds {len} values, expected exactly 2")]
    MalformedRange { filter_id: String, len: usize },

    #[error("range state for filter {filter_id} holds a non-numeric {endpoint} value")]
    BadRangeValue { filter_id: String, endpoint: Endpoint },
}

impl ContractViolation {
    /// Contract violations are never recoverable by retrying with the same filter.
    pub fn is_fatal(&self) -> bool {
        true
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("state for filter {filter_id} is not {expected}")]
    Shape {
        filter_id: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    Validation(#[from] ValidationError),

    #[error("Contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("Corrupt state: {0}")]
    State(#[from] StateError),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Filter {id} is a {actual} filter, not {expected}")]
    WrongFilterType {
        id: String,
        actual: &'static str,
        expected: &'static str,
    },

    #[error("Duplicate filter id: {0}")]
    DuplicateFilter(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl ScopeError {
    /// True for errors the caller caused by breaking the engine contract.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScopeError::Contract(_))
            || matches!(self, ScopeError::State(StateError::Contract(_)))
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
