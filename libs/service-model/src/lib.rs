//! Service definition model
//!
//! This crate provides a typed view of a service definition model read from its
//! JSON AST, plus the service closure that a client package is generated from.
//!
//! # Module Organization
//!
//! - `shape_id`: absolute shape identifiers and their canonical ordering
//! - `shape`, `traits`: typed shapes and the traits surface generation cares about
//! - `model`: JSON AST loading
//! - `closure`: contained operations and the categorised service closure
//!
//! # Example
//!
//! ```rust
//! use tessera_model::{Model, ServiceClosure, ShapeId};
//! use serde_json::json;
//!
//! let model = Model::from_json_value(json!({
//!     "smithy": "2.0",
//!     "shapes": {
//!         "example#Weather": {
//!             "type": "service",
//!             "operations": [{ "target": "example#Ping" }]
//!         },
//!         "example#Ping": { "type": "operation" }
//!     }
//! }))
//! .unwrap();
//!
//! let closure = ServiceClosure::of(&model, &ShapeId::new("example", "Weather")).unwrap();
//! assert_eq!(closure.operations().count(), 1);
//! ```

pub mod closure;
pub mod error;
pub mod model;
pub mod shape;
pub mod shape_id;
pub mod traits;

pub use closure::{contained_operations, ServiceClosure};
pub use error::{ModelError, Result};
pub use model::Model;
pub use shape::{MemberShape, Shape, ShapeType};
pub use shape_id::{
    capitalize, paginator_name, schema_variable_name, waiter_names, ShapeId, PRELUDE_NAMESPACE,
};
pub use traits::{EnumDefinition, EnumTrait, Traits};
