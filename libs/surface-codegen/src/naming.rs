//! Naming collaborators and the naming conventions of generated packages.
//!
//! Every derived identifier (command inputs, the bare client, the synthetic base
//! exception, ...) is produced by a function here so a convention changes in one place.

use tessera_model::traits::AWS_SERVICE_TRAIT;
use tessera_model::{capitalize, Model, Shape, ShapeType};

use crate::error::{CodegenError, Result};
use crate::settings::SurfaceSettings;

pub use tessera_model::{paginator_name, schema_variable_name, waiter_names};

/// The output identifier assigned to a shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Assigns output identifiers to shapes.
///
/// Must be deterministic: the same shape always maps to the same symbol.
pub trait SymbolProvider {
    fn to_symbol(&self, shape: &Shape) -> Result<Symbol>;
}

impl<P: SymbolProvider + ?Sized> SymbolProvider for &P {
    fn to_symbol(&self, shape: &Shape) -> Result<Symbol> {
        (**self).to_symbol(shape)
    }
}

/// Operations become `<Name>Command`, every other shape keeps its capitalized name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSymbolProvider;

impl SymbolProvider for DefaultSymbolProvider {
    fn to_symbol(&self, shape: &Shape) -> Result<Symbol> {
        let name = capitalize(shape.name());
        let name = match shape.shape_type {
            ShapeType::Operation => command_name(&name),
            _ => name,
        };
        Ok(Symbol::new(name))
    }
}

/// Resolve a shape's symbol, rejecting empty names.
pub fn resolve_symbol<P: SymbolProvider + ?Sized>(symbols: &P, shape: &Shape) -> Result<Symbol> {
    let symbol = symbols.to_symbol(shape)?;
    if symbol.name().is_empty() {
        return Err(CodegenError::EmptySymbol(shape.id.to_string()));
    }
    Ok(symbol)
}

pub fn command_name(operation: &str) -> String {
    format!("{operation}Command")
}

pub fn command_input_name(command: &Symbol) -> String {
    format!("{}Input", command.name())
}

pub fn command_output_name(command: &Symbol) -> String {
    format!("{}Output", command.name())
}

/// The barebones client class exported next to the aggregate client.
pub fn bare_client_name(aggregate: &str) -> String {
    format!("{aggregate}Client")
}

/// Aggregate client name: the settings override, else the `sdkId`, else the service name.
pub fn service_name(settings: &SurfaceSettings, service: &Shape) -> String {
    if let Some(name) = &settings.service_name {
        return name.clone();
    }

    let sdk_id = service
        .traits
        .get(AWS_SERVICE_TRAIT)
        .and_then(|t| t.get("sdkId"))
        .and_then(|v| v.as_str());

    match sdk_id {
        Some(sdk_id) => sdk_id
            .split(|c: char| !c.is_ascii_alphanumeric())
            .map(capitalize)
            .collect(),
        None => capitalize(service.name()),
    }
}

/// `<Client>ServiceException`, prefixed with `__` when a model structure already uses that name.
pub fn synthetic_base_exception_name(client_name: &str, model: &Model) -> String {
    let name = format!("{client_name}ServiceException");
    if model.has_structure_named(&name) {
        format!("__{name}")
    } else {
        name
    }
}

/// Check that an identifier can be imported and referenced by name.
pub fn validate_identifier(identifier: &str, origin: &str) -> Result<()> {
    let mut chars = identifier.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        Ok(())
    } else {
        Err(CodegenError::InvalidIdentifier {
            identifier: identifier.to_string(),
            origin: origin.to_string(),
        })
    }
}
