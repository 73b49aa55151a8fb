//! Generation settings and the schema-mode capability check.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tessera_model::ShapeId;

use crate::error::{CodegenError, Result};

/// Per-service generation settings, read from camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSettings {
    /// Service the client package is generated for
    pub service: ShapeId,
    /// Overrides the aggregate client name derived from the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Generate runtime schema objects alongside types
    #[serde(default)]
    pub generate_schemas: bool,
    /// Package name, used in the banner of generated files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl SurfaceSettings {
    pub fn new(service: ShapeId) -> Self {
        Self {
            service,
            service_name: None,
            generate_schemas: false,
            package: None,
        }
    }

    pub fn with_schemas(mut self, generate_schemas: bool) -> Self {
        self.generate_schemas = generate_schemas;
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        if settings
            .service_name
            .as_deref()
            .is_some_and(|n| n.trim().is_empty())
        {
            return Err(CodegenError::Settings(
                "serviceName cannot be blank".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Services for which schema generation is enabled regardless of settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaGenerationAllowlist {
    services: BTreeSet<ShapeId>,
}

impl SchemaGenerationAllowlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: ShapeId) -> Self {
        self.services.insert(service);
        self
    }

    pub fn contains(&self, service: &ShapeId) -> bool {
        self.services.contains(service)
    }

    /// Schema mode is on when the settings ask for it or the service is allowlisted.
    pub fn allows(&self, service: &ShapeId, settings: &SurfaceSettings) -> bool {
        settings.generate_schemas || self.contains(service)
    }
}
