//! Error types for encoding and decoding.

use thiserror::Error;

/// Errors that can occur while moving a [`Value`](crate::Value) to or from JSON text.
#[derive(Error, Debug)]
pub enum ObjError {
    /// The input text was not valid JSON. Reported before any coercion runs.
    #[error("json decode failed at line {line} column {column}: {source}")]
    Decode {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The tree holds something JSON cannot represent (a non-finite float).
    #[error("json encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ObjError {
    pub(crate) fn decode(source: serde_json::Error) -> Self {
        ObjError::Decode {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Convenience alias used throughout jsonobj-core.
pub type Result<T> = std::result::Result<T, ObjError>;
