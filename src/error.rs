//! Error types for the NETGEN and grid generators.
//!
//! Mirrors the layering of the CLI's own error enum: one variant per failure
//! mode, with `#[error]` messages suitable for direct display to a user.

use thiserror::Error;

/// Errors raised while validating or running the NETGEN generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetgenError {
    /// A parameter record violated one of the invariants in the data model.
    #[error("invalid NETGEN parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
    /// The PRNG was asked to draw from a negative bound.
    #[error("invalid PRNG bounds: generate({a}, {b}) requires a, b >= 0")]
    InvalidBound { a: i64, b: i64 },
}

/// Errors raised while validating or running the grid generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A parameter record violated one of the invariants in the data model.
    #[error("invalid grid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
    /// The PRNG was asked to draw from a negative bound.
    #[error("invalid PRNG bounds: generate({a}, {b}) requires a, b >= 0")]
    InvalidBound { a: i64, b: i64 },
}
