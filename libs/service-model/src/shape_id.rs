//! Absolute shape identifiers of the form `namespace#Name` or `namespace#Name$member`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Namespace of the prelude shapes (`String`, `Unit`, ...).
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

/// An absolute shape id.
///
/// Ordering is `(namespace, name, member)`, which is the canonical shape order
/// used everywhere a set of shapes is listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

impl ShapeId {
    /// Build an id from parts that are already known to be valid.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            member: None,
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidShapeId(value.to_string());

        let (namespace, rest) = value.split_once('#').ok_or_else(invalid)?;
        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };

        if !namespace.split('.').all(is_identifier)
            || !is_identifier(name)
            || !member.map_or(true, is_identifier)
        {
            return Err(invalid());
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(String::from),
        })
    }

    /// The `smithy.api#Unit` shape, used for operations without input or output.
    pub fn unit() -> Self {
        Self::new(PRELUDE_NAMESPACE, "Unit")
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    pub fn is_prelude(&self) -> bool {
        self.namespace == PRELUDE_NAMESPACE
    }

    pub fn is_unit(&self) -> bool {
        self.is_prelude() && self.name == "Unit"
    }

    /// The id of the containing shape when this id points at a member.
    pub fn without_member(&self) -> ShapeId {
        Self::new(self.namespace.clone(), self.name.clone())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${}", member)?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the runtime schema object generated for a shape.
pub fn schema_variable_name(shape_name: &str) -> String {
    format!("{shape_name}$")
}

/// The two helper functions generated for a waiter.
pub fn waiter_names(waiter: &str) -> [String; 2] {
    let waiter = capitalize(waiter);
    [format!("waitFor{waiter}"), format!("waitUntil{waiter}")]
}

/// Name of the paginator generated for a paginated operation.
pub fn paginator_name(operation_name: &str) -> String {
    format!("paginate{}", capitalize(operation_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_absolute_ids() {
        let id = ShapeId::parse("example.weather#GetForecast").unwrap();
        assert_eq!(id.namespace(), "example.weather");
        assert_eq!(id.name(), "GetForecast");
        assert_eq!(id.member(), None);
        assert_eq!(id.to_string(), "example.weather#GetForecast");
    }

    #[test]
    fn parses_member_ids() {
        let id: ShapeId = "example#Forecast$chanceOfRain".parse().unwrap();
        assert_eq!(id.member(), Some("chanceOfRain"));
        assert_eq!(id.without_member(), ShapeId::new("example", "Forecast"));
        assert_eq!(id.to_string(), "example#Forecast$chanceOfRain");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["Forecast", "#Forecast", "example#", "example#1Bad", "ex..ample#A", "a#B$"] {
            assert!(ShapeId::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn orders_by_namespace_then_name() {
        let mut ids = vec![
            ShapeId::new("b", "A"),
            ShapeId::new("a", "Zed"),
            ShapeId::new("a", "Alpha"),
        ];
        ids.sort();
        let names: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a#Alpha", "a#Zed", "b#A"]);
    }

    #[test]
    fn prelude_detection() {
        assert!(ShapeId::unit().is_unit());
        assert!(ShapeId::new("smithy.api", "String").is_prelude());
        assert!(!ShapeId::new("example", "Unit").is_unit());
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("camelCaseOperation"), "CamelCaseOperation");
        assert_eq!(capitalize("XYZService"), "XYZService");
        assert_eq!(capitalize(""), "");
    }
}
