//! Trait storage and typed views over the traits the surface generator reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const ERROR_TRAIT: &str = "smithy.api#error";
pub const ENUM_TRAIT: &str = "smithy.api#enum";
pub const PAGINATED_TRAIT: &str = "smithy.api#paginated";
pub const WAITABLE_TRAIT: &str = "smithy.waiters#waitable";
pub const AWS_SERVICE_TRAIT: &str = "aws.api#service";

/// Traits applied to a shape or member, keyed by absolute trait id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Traits {
    values: BTreeMap<String, Value>,
}

impl Traits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            values: map.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, trait_id: impl Into<String>, value: Value) {
        self.values.insert(trait_id.into(), value);
    }

    /// Apply `other` on top of these traits; later values win.
    pub fn merge(&mut self, other: Traits) {
        self.values.extend(other.values);
    }

    pub fn get(&self, trait_id: &str) -> Option<&Value> {
        self.values.get(trait_id)
    }

    pub fn has(&self, trait_id: &str) -> bool {
        self.values.contains_key(trait_id)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

/// One entry of the legacy `smithy.api#enum` trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Typed view of the `smithy.api#enum` trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTrait {
    values: Vec<EnumDefinition>,
}

impl EnumTrait {
    pub fn new(values: Vec<EnumDefinition>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[EnumDefinition] {
        &self.values
    }

    /// True when every value carries a name, vacuously so for an empty list.
    ///
    /// A string enum with unnamed values generates no exported symbol.
    pub fn has_names(&self) -> bool {
        self.values.iter().all(|v| v.name.is_some())
    }
}
