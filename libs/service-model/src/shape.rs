//! Typed shapes of a service definition model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};
use crate::shape_id::ShapeId;
use crate::traits::{EnumDefinition, EnumTrait, Traits, ENUM_TRAIT, ERROR_TRAIT, PAGINATED_TRAIT, WAITABLE_TRAIT};

/// Kind of a shape in the model graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Service,
    Operation,
    Resource,
    Structure,
    Union,
    Enum,
    IntEnum,
    List,
    Map,
    Blob,
    Boolean,
    String,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Timestamp,
    Document,
}

impl ShapeType {
    /// Resolve the `type` field of a JSON AST shape. `set` is read as `list`.
    pub fn from_ast(type_name: &str) -> Option<Self> {
        let shape_type = match type_name {
            "service" => Self::Service,
            "operation" => Self::Operation,
            "resource" => Self::Resource,
            "structure" => Self::Structure,
            "union" => Self::Union,
            "enum" => Self::Enum,
            "intEnum" => Self::IntEnum,
            "list" | "set" => Self::List,
            "map" => Self::Map,
            "blob" => Self::Blob,
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "integer" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "bigInteger" => Self::BigInteger,
            "bigDecimal" => Self::BigDecimal,
            "timestamp" => Self::Timestamp,
            "document" => Self::Document,
            _ => return None,
        };
        Some(shape_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Operation => "operation",
            Self::Resource => "resource",
            Self::Structure => "structure",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::IntEnum => "intEnum",
            Self::List => "list",
            Self::Map => "map",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::BigInteger => "bigInteger",
            Self::BigDecimal => "bigDecimal",
            Self::Timestamp => "timestamp",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named member of an aggregate shape.
///
/// Lists use a single member named `member`, maps use `key` and `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberShape {
    pub name: String,
    pub target: ShapeId,
    pub traits: Traits,
}

/// A node in the model graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub shape_type: ShapeType,
    /// Members in declaration order
    pub members: Vec<MemberShape>,
    /// Operation input (`None` means `smithy.api#Unit`)
    pub input: Option<ShapeId>,
    /// Operation output (`None` means `smithy.api#Unit`)
    pub output: Option<ShapeId>,
    /// Errors bound to an operation or a service
    pub errors: Vec<ShapeId>,
    /// Operations bound to a service or resource, lifecycle operations included
    pub operations: Vec<ShapeId>,
    /// Resources bound to a service or resource
    pub resources: Vec<ShapeId>,
    pub traits: Traits,
}

impl Shape {
    pub fn new(id: ShapeId, shape_type: ShapeType) -> Self {
        Self {
            id,
            shape_type,
            members: Vec::new(),
            input: None,
            output: None,
            errors: Vec::new(),
            operations: Vec::new(),
            resources: Vec::new(),
            traits: Traits::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.id.name()
    }

    pub fn member(&self, name: &str) -> Option<&MemberShape> {
        self.members.iter().find(|m| m.name == name)
    }

    /// A structure carrying the error trait.
    pub fn is_error(&self) -> bool {
        self.shape_type == ShapeType::Structure && self.traits.has(ERROR_TRAIT)
    }

    /// An `enum`, an `intEnum`, or a string constrained by the enum trait.
    pub fn is_enum(&self) -> bool {
        match self.shape_type {
            ShapeType::Enum | ShapeType::IntEnum => true,
            ShapeType::String => self.traits.has(ENUM_TRAIT),
            _ => false,
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.shape_type == ShapeType::Operation && self.traits.has(PAGINATED_TRAIT)
    }

    pub fn enum_trait(&self) -> Result<Option<EnumTrait>> {
        let Some(value) = self.traits.get(ENUM_TRAIT) else {
            return Ok(None);
        };
        let values: Vec<EnumDefinition> = serde_json::from_value(value.clone())
            .map_err(|e| self.invalid_trait(ENUM_TRAIT, e.to_string()))?;
        Ok(Some(EnumTrait::new(values)))
    }

    /// Whether the enum generates a named symbol.
    ///
    /// Shapes without the enum trait count as named.
    pub fn has_enum_names(&self) -> Result<bool> {
        Ok(self.enum_trait()?.map_or(true, |t| t.has_names()))
    }

    /// Waiter names declared by the waitable trait, in declaration order.
    pub fn waiter_names(&self) -> Result<Vec<String>> {
        match self.traits.get(WAITABLE_TRAIT) {
            None => Ok(Vec::new()),
            Some(serde_json::Value::Object(waiters)) => Ok(waiters.keys().cloned().collect()),
            Some(_) => Err(self.invalid_trait(WAITABLE_TRAIT, "expected an object".to_string())),
        }
    }

    fn invalid_trait(&self, trait_id: &str, message: String) -> ModelError {
        ModelError::InvalidTrait {
            shape: self.id.to_string(),
            trait_id: trait_id.to_string(),
            message,
        }
    }
}
