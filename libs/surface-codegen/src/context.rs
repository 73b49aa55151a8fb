//! Per-service generation context.
//!
//! Resolves everything that is fixed for one generation pass up front: the
//! service closure, the client names, the synthetic base exception and whether
//! schema mode is on. Enumeration reads these; nothing re-derives them.

use tessera_model::{Model, ServiceClosure};
use tracing::debug;

use crate::error::Result;
use crate::ir::ClientNames;
use crate::naming::{
    service_name, synthetic_base_exception_name, validate_identifier, DefaultSymbolProvider,
    SymbolProvider,
};
use crate::settings::{SchemaGenerationAllowlist, SurfaceSettings};

pub struct GenerationContext<'m, P = DefaultSymbolProvider> {
    model: &'m Model,
    settings: SurfaceSettings,
    closure: ServiceClosure<'m>,
    symbols: P,
    client: ClientNames,
    base_exception: String,
    schema_mode: bool,
}

impl<'m> GenerationContext<'m, DefaultSymbolProvider> {
    /// Context with the default symbol provider and an empty schema allowlist.
    pub fn new(model: &'m Model, settings: &SurfaceSettings) -> Result<Self> {
        Self::with_options(
            model,
            settings,
            &SchemaGenerationAllowlist::default(),
            DefaultSymbolProvider,
        )
    }
}

impl<'m, P: SymbolProvider> GenerationContext<'m, P> {
    pub fn with_options(
        model: &'m Model,
        settings: &SurfaceSettings,
        allowlist: &SchemaGenerationAllowlist,
        symbols: P,
    ) -> Result<Self> {
        let service = model.service(&settings.service)?;
        let closure = ServiceClosure::of(model, &settings.service)?;

        let aggregate = service_name(settings, service);
        validate_identifier(&aggregate, "service name")?;
        let client = ClientNames::new(aggregate);
        let base_exception = synthetic_base_exception_name(&client.aggregate, model);
        let schema_mode = allowlist.allows(&settings.service, settings);

        debug!(
            service = %settings.service,
            client = %client.aggregate,
            base_exception = %base_exception,
            schema_mode,
            "resolved generation context"
        );

        Ok(Self {
            model,
            settings: settings.clone(),
            closure,
            symbols,
            client,
            base_exception,
            schema_mode,
        })
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    pub fn closure(&self) -> &ServiceClosure<'m> {
        &self.closure
    }

    pub fn symbols(&self) -> &P {
        &self.symbols
    }

    pub fn client(&self) -> &ClientNames {
        &self.client
    }

    pub fn base_exception(&self) -> &str {
        &self.base_exception
    }

    pub fn schema_mode(&self) -> bool {
        self.schema_mode
    }
}
