//! sndlib reader error type.

use thiserror::Error;

/// Errors produced by `s2m-sndlib`.  All of them abort the conversion.
#[derive(Debug, Error)]
pub enum SndlibError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Parse(#[from] xmltree::ParseError),

    #[error("{element} #{position} has no `{attribute}` attribute")]
    MissingAttribute {
        element:   &'static str,
        attribute: &'static str,
        position:  usize,
    },

    #[error("{element} #{position} has no `{child}` element")]
    MissingElement {
        element:  &'static str,
        child:    &'static str,
        position: usize,
    },
}

pub type SndlibResult<T> = Result<T, SndlibError>;
