//! Errors raised while loading a panel definition.
//!
//! Only two kinds ever reach the caller: the name could not be located, or the
//! located content is not a panel document. Nested field decode failures are
//! recovered locally by the element builder and never show up here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("panel file not found: {name}")]
    FileNotFound { name: String },

    #[error("panel file has wrong format: {name}")]
    FileWrongFormat {
        name: String,
        #[source]
        source: FormatError,
    },
}

/// Why located content was rejected by the validator.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("content is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("missing required top-level field `id`")]
    MissingId,

    #[error("unexpected document shape: {0}")]
    Shape(#[source] serde_json::Error),
}

impl PanelError {
    pub fn name(&self) -> &str {
        match self {
            PanelError::FileNotFound { name } | PanelError::FileWrongFormat { name, .. } => name,
        }
    }
}
