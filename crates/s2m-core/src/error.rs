//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `s2m-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid coordinate {value:?} for node {node:?}")]
    Coordinate { node: String, value: String },
}

/// Shorthand result type for `s2m-core`.
pub type CoreResult<T> = Result<T, CoreError>;
