//! Package Surface Generator
//!
//! This library computes the complete set of identifiers a generated client
//! package is expected to export and renders test artifacts that fail when the
//! package's actual exports diverge from it.
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Context**: Resolves the service closure, client names and schema mode once
//! 2. **IR (Intermediate Representation)**: The enumerated, totally ordered `Surface`
//! 3. **Generators**: Type surface, runtime surface and snapshot harness renderers
//!
//! Enumeration is testable as plain data, without comparing any rendered text.

pub mod context;
pub mod enumerator;
pub mod error;
pub mod generators;
pub mod ir;
pub mod naming;
pub mod settings;
pub mod utils;
pub mod writer;

use std::path::Path;

use context::GenerationContext;
use error::Result;
use generators::{
    Generator, GeneratorConfig, RuntimeSurfaceGenerator, SnapshotHarnessGenerator, TypeSurfaceGenerator,
};
use ir::{Surface, TestKind};
use naming::{DefaultSymbolProvider, SymbolProvider};
use settings::SurfaceSettings;
use tessera_model::Model;
use utils::Artifacts;

pub use error::CodegenError;

/// Main entry point for artifact generation
pub struct SurfaceGenerator<'m, P = DefaultSymbolProvider> {
    context: GenerationContext<'m, P>,
}

impl<'m> SurfaceGenerator<'m, DefaultSymbolProvider> {
    /// Create a generator with the default symbol provider
    pub fn new(model: &'m Model, settings: &SurfaceSettings) -> Result<Self> {
        Ok(Self {
            context: GenerationContext::new(model, settings)?,
        })
    }
}

impl<'m, P: SymbolProvider> SurfaceGenerator<'m, P> {
    pub fn from_context(context: GenerationContext<'m, P>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &GenerationContext<'m, P> {
        &self.context
    }

    /// Enumerate the package surface for one test kind
    pub fn enumerate(&self, kind: TestKind) -> Result<Surface> {
        enumerator::enumerate(&self.context, kind)
    }

    /// Run one generator over a fresh enumeration of its test kind
    pub fn generate<G: Generator>(&self, generator: &G) -> Result<String> {
        let surface = self.enumerate(generator.test_kind())?;
        generator.generate(&surface)
    }

    /// Render all three artifacts, keyed by their relative paths
    pub fn generate_artifacts(&self, config: &GeneratorConfig) -> Result<Artifacts> {
        let generators: [Box<dyn Generator>; 3] = [
            Box::new(TypeSurfaceGenerator::new(config.clone())),
            Box::new(RuntimeSurfaceGenerator::new(config.clone())),
            Box::new(SnapshotHarnessGenerator::new(config.clone())),
        ];

        let mut artifacts = Artifacts::new();
        for generator in &generators {
            let surface = self.enumerate(generator.test_kind())?;
            artifacts.insert(generator.file_name().to_string(), generator.generate(&surface)?);
        }
        Ok(artifacts)
    }
}

/// Convenience helper to generate artifacts from a model file and settings.
///
/// Returns the number of written files.
pub fn generate_from_files(
    model_path: &Path,
    settings: &SurfaceSettings,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<usize> {
    let model = Model::from_file(model_path)?;
    let generator = SurfaceGenerator::new(&model, settings)?;
    let artifacts = generator.generate_artifacts(config)?;
    let written = utils::write_artifacts(output_dir, &artifacts)?;
    Ok(written.len())
}
