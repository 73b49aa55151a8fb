//! Error types for surface enumeration and artifact emission

use thiserror::Error;

use crate::ir::TestKind;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Model error: {0}")]
    Model(#[from] tessera_model::ModelError),

    #[error("Symbol provider returned an empty name for {0}")]
    EmptySymbol(String),

    #[error("Invalid identifier '{identifier}' for {origin}")]
    InvalidIdentifier { identifier: String, origin: String },

    #[error("{generator} expects a {expected} enumeration, got {found}")]
    KindMismatch {
        generator: &'static str,
        expected: TestKind,
        found: TestKind,
    },

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
