//! Error types for the reroute core.
//!
//! A search that finds no route is a normal outcome and is reported through
//! [`crate::result::PathResult`], not through this type. Only construction-time
//! invariant violations are raised as errors.

use thiserror::Error;

/// Reroute core error type
#[derive(Error, Debug)]
pub enum RerouteError {
    #[error("invalid grid dimensions {cols}x{rows}: cols and rows must be positive")]
    InvalidDimensions { cols: i32, rows: i32 },
}

pub type Result<T> = std::result::Result<T, RerouteError>;
