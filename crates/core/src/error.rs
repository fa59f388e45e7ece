//! Error types for the mscolor core.

use thiserror::Error;

/// Errors produced by color construction and option parsing.
///
/// Conversions under the `Clamp` and `Passthrough` policies never fail; only
/// `RangePolicy::Strict` and name lookups produce these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// An HSV component fell outside its accepted range under the strict policy.
    #[error("{component} out of range: {value} (expected {expected})")]
    OutOfRange {
        component: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A range policy name was not recognized.
    #[error("unknown range policy: {0}")]
    UnknownPolicy(String),
}
