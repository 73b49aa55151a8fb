//! Error types for model loading and closure computation

use thiserror::Error;

use crate::shape::ShapeType;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid shape id '{0}'")]
    InvalidShapeId(String),

    #[error("Invalid shape {shape}: {message}")]
    InvalidShape { shape: String, message: String },

    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Shape {0} is not a service")]
    NotAService(String),

    #[error("Unsupported shape type '{type_name}' for {shape}")]
    UnsupportedShapeType { shape: String, type_name: String },

    #[error("Expected {shape} to be {expected}, found {found}")]
    UnexpectedShapeType {
        shape: String,
        expected: ShapeType,
        found: ShapeType,
    },

    #[error("Invalid trait {trait_id} on {shape}: {message}")]
    InvalidTrait {
        shape: String,
        trait_id: String,
        message: String,
    },
}
