//! Surface enumeration.
//!
//! Walks the service closure once per test kind and produces the ordered,
//! duplicate-free [`Surface`] every emitter renders from.

use tessera_model::Shape;
use tracing::{debug, trace};

use crate::context::GenerationContext;
use crate::error::Result;
use crate::ir::{Category, EntryRole, RuntimeKind, Surface, SurfaceEntry, TestKind};
use crate::naming::{
    command_input_name, command_output_name, resolve_symbol, schema_variable_name, validate_identifier,
    SymbolProvider,
};

/// Enumerate the exported surface of the service's package for one test kind.
pub fn enumerate<P: SymbolProvider>(ctx: &GenerationContext<'_, P>, kind: TestKind) -> Result<Surface> {
    let closure = ctx.closure();
    let symbols = ctx.symbols();
    // Schema objects exist at runtime only; the type surface never lists them.
    let schemas = ctx.schema_mode() && kind != TestKind::TypeSurface;

    let client = ctx.client();
    let mut entries = vec![
        SurfaceEntry::new(&client.bare, Category::Client, EntryRole::Symbol, Some(RuntimeKind::Function)),
        SurfaceEntry::new(
            &client.aggregate,
            Category::Client,
            EntryRole::Aggregate,
            Some(RuntimeKind::Function),
        ),
    ];

    for operation in closure.operations() {
        let symbol = resolve_symbol(symbols, operation)?;
        entries.push(
            SurfaceEntry::new(symbol.name(), Category::Command, EntryRole::Symbol, Some(RuntimeKind::Function))
                .for_shape(&operation.id)
                .with_schema_artifact(ctx.schema_mode()),
        );

        if kind == TestKind::TypeSurface {
            entries.push(
                SurfaceEntry::new(command_input_name(&symbol), Category::Command, EntryRole::CommandInput, None)
                    .for_shape(&operation.id),
            );
            entries.push(
                SurfaceEntry::new(command_output_name(&symbol), Category::Command, EntryRole::CommandOutput, None)
                    .for_shape(&operation.id),
            );
        } else if schemas {
            entries.push(schema_entry(operation, Category::Command, symbol.name()));
        }
    }

    for shape in closure.enums() {
        // String enums with unnamed values generate no symbol on either surface.
        if !shape.has_enum_names()? {
            trace!(shape = %shape.id, "skipping enum without value names");
            continue;
        }
        let symbol = resolve_symbol(symbols, shape)?;
        entries.push(
            SurfaceEntry::new(symbol.name(), Category::Enum, EntryRole::Symbol, Some(RuntimeKind::Object))
                .for_shape(&shape.id),
        );
    }

    for shape in closure.structural_non_error_shapes() {
        if kind == TestKind::TypeSurface {
            let symbol = resolve_symbol(symbols, shape)?;
            entries.push(
                SurfaceEntry::new(symbol.name(), Category::Structure, EntryRole::Symbol, None)
                    .for_shape(&shape.id)
                    .with_schema_artifact(ctx.schema_mode()),
            );
        } else if schemas {
            let symbol = resolve_symbol(symbols, shape)?;
            entries.push(schema_entry(shape, Category::Structure, symbol.name()));
        }
    }

    for shape in closure.error_shapes() {
        let symbol = resolve_symbol(symbols, shape)?;
        entries.push(
            SurfaceEntry::new(symbol.name(), Category::Error, EntryRole::Symbol, Some(RuntimeKind::ErrorClass))
                .for_shape(&shape.id)
                .with_schema_artifact(ctx.schema_mode()),
        );
        if schemas {
            entries.push(schema_entry(shape, Category::Error, symbol.name()));
        }
    }

    entries.push(SurfaceEntry::new(
        ctx.base_exception(),
        Category::BaseException,
        EntryRole::Symbol,
        Some(RuntimeKind::ErrorClass),
    ));

    for (names, category) in [
        (closure.waiter_names(), Category::Waiter),
        (closure.paginator_names(), Category::Paginator),
    ] {
        entries.extend(
            names
                .iter()
                .map(|name| SurfaceEntry::new(name, category, EntryRole::Symbol, Some(RuntimeKind::Function))),
        );
    }

    for entry in &entries {
        let origin = match &entry.shape {
            Some(shape) => shape.to_string(),
            None => entry.category.section_label().to_string(),
        };
        validate_identifier(&entry.identifier, &origin)?;
    }

    let surface = Surface::new(kind, client.clone(), ctx.base_exception(), entries)
        .with_package(ctx.settings().package.clone());
    debug!(
        kind = %kind,
        entries = surface.len(),
        schema_mode = ctx.schema_mode(),
        "enumerated package surface"
    );
    Ok(surface)
}

fn schema_entry(shape: &Shape, category: Category, describes: &str) -> SurfaceEntry {
    SurfaceEntry::schema(
        schema_variable_name(shape.name()),
        category,
        &shape.id,
        describes,
    )
}
