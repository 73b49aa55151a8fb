//! Intermediate Representation (IR)
//!
//! The enumerated package surface: a fully resolved, totally ordered list of
//! exported identifiers. Enumeration produces it once per test kind and the
//! emitters render it without consulting the model or settings again.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use tessera_model::ShapeId;
use tracing::trace;

/// Which verification artifact an enumeration feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    /// Compile-time re-export list
    TypeSurface,
    /// Runtime value and kind assertions
    RuntimeSurface,
    /// Snapshot test harness
    Snapshot,
}

impl TestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeSurface => "type-surface",
            Self::RuntimeSurface => "runtime-surface",
            Self::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category groups, declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Client,
    Command,
    Enum,
    Structure,
    Error,
    BaseException,
    Waiter,
    Paginator,
}

impl Category {
    /// Human-readable section name used for separators in rendered artifacts.
    ///
    /// The base exception is grouped with the modeled errors.
    pub fn section_label(&self) -> &'static str {
        match self {
            Self::Client => "clients",
            Self::Command => "commands",
            Self::Enum => "enums",
            Self::Structure => "structural schemas",
            Self::Error | Self::BaseException => "errors",
            Self::Waiter => "waiters",
            Self::Paginator => "paginators",
        }
    }
}

/// What the exported value is at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeKind {
    Function,
    Object,
    ErrorClass,
}

/// Role of an entry relative to the shape it came from, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryRole {
    /// The shape's own symbol (or the bare client)
    Symbol,
    /// The aggregate convenience client
    Aggregate,
    CommandInput,
    CommandOutput,
    /// Runtime schema object describing the shape
    Schema,
}

/// One exported identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceEntry {
    pub identifier: String,
    pub category: Category,
    pub role: EntryRole,
    /// `None` for type-only exports
    pub runtime_kind: Option<RuntimeKind>,
    /// Model shape the entry was derived from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeId>,
    /// Whether the package also exports a schema object for this shape
    pub has_schema_artifact: bool,
    /// For schema entries, the identifier the schema describes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describes: Option<String>,
}

impl SurfaceEntry {
    pub fn new(
        identifier: impl Into<String>,
        category: Category,
        role: EntryRole,
        runtime_kind: Option<RuntimeKind>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            category,
            role,
            runtime_kind,
            shape: None,
            has_schema_artifact: false,
            describes: None,
        }
    }

    /// A runtime schema object bound to `describes`.
    pub fn schema(
        identifier: impl Into<String>,
        category: Category,
        shape: &ShapeId,
        describes: impl Into<String>,
    ) -> Self {
        Self {
            describes: Some(describes.into()),
            ..Self::new(identifier, category, EntryRole::Schema, Some(RuntimeKind::Object))
                .for_shape(shape)
        }
    }

    pub fn for_shape(mut self, shape: &ShapeId) -> Self {
        self.shape = Some(shape.clone());
        self
    }

    pub fn with_schema_artifact(mut self, has_schema_artifact: bool) -> Self {
        self.has_schema_artifact = has_schema_artifact;
        self
    }

    pub fn is_schema(&self) -> bool {
        self.role == EntryRole::Schema
    }
}

/// The total order of a surface.
///
/// Category first, then the canonical shape order, then the entry's role, then
/// the identifier itself (which orders waiters, paginators and other shapeless
/// entries).
pub fn surface_order(a: &SurfaceEntry, b: &SurfaceEntry) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.shape.cmp(&b.shape))
        .then_with(|| a.role.cmp(&b.role))
        .then_with(|| a.identifier.cmp(&b.identifier))
}

/// The two exported client identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientNames {
    /// Convenience client with one method per operation
    pub aggregate: String,
    /// Barebones client that sends commands
    pub bare: String,
}

impl ClientNames {
    pub fn new(aggregate: impl Into<String>) -> Self {
        let aggregate = aggregate.into();
        Self {
            bare: crate::naming::bare_client_name(&aggregate),
            aggregate,
        }
    }
}

/// An enumerated package surface for one test kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    kind: TestKind,
    client: ClientNames,
    base_exception: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<String>,
    entries: Vec<SurfaceEntry>,
}

impl Surface {
    /// Sort entries into the total order and drop repeated identifiers.
    ///
    /// The first entry in order wins when two entries share an identifier.
    pub fn new(
        kind: TestKind,
        client: ClientNames,
        base_exception: impl Into<String>,
        mut entries: Vec<SurfaceEntry>,
    ) -> Self {
        entries.sort_by(surface_order);

        let mut seen = HashSet::with_capacity(entries.len());
        entries.retain(|entry| {
            let first = seen.insert(entry.identifier.clone());
            if !first {
                trace!(identifier = %entry.identifier, category = ?entry.category, "dropping duplicate identifier");
            }
            first
        });

        Self {
            kind,
            client,
            base_exception: base_exception.into(),
            package: None,
            entries,
        }
    }

    /// Name the client package this surface belongs to.
    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    pub fn kind(&self) -> TestKind {
        self.kind
    }

    pub fn client(&self) -> &ClientNames {
        &self.client
    }

    pub fn base_exception(&self) -> &str {
        &self.base_exception
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn entries(&self) -> &[SurfaceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.identifier.as_str())
    }

    pub fn category(&self, category: Category) -> impl Iterator<Item = &SurfaceEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Operation schema → command pairs, in operation order.
    pub fn operation_bindings(&self) -> Vec<(&str, &str)> {
        self.category(Category::Command)
            .filter(|e| e.is_schema())
            .filter_map(|e| Some((e.identifier.as_str(), e.describes.as_deref()?)))
            .collect()
    }
}
