//! Error types for s2m-matplan.

use thiserror::Error;

/// Errors that can occur while writing a MatPlanWDM document.
///
/// Unresolvable links are not errors; they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and the run continues.
#[derive(Debug, Error)]
pub enum MatPlanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] s2m_core::CoreError),

    #[error("sink already finished")]
    Finished,
}

/// Alias for `Result<T, MatPlanError>`.
pub type MatPlanResult<T> = Result<T, MatPlanError>;
