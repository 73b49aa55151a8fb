//! Artifact generators
//!
//! Each generator renders one verification artifact from an enumerated
//! [`Surface`] and implements the `Generator` trait.

mod runtime_surface;
mod snapshot_harness;
mod type_surface;

pub use runtime_surface::RuntimeSurfaceGenerator;
pub use snapshot_harness::SnapshotHarnessGenerator;
pub use type_surface::TypeSurfaceGenerator;

use crate::error::{CodegenError, Result};
use crate::ir::{Surface, TestKind};

/// Trait that all artifact generators must implement
pub trait Generator {
    /// The enumeration this generator renders
    fn test_kind(&self) -> TestKind;

    /// Output path relative to the package root
    fn file_name(&self) -> &'static str;

    /// Render the artifact
    fn generate(&self, surface: &Surface) -> Result<String>;
}

/// Configuration options for artifact generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Comment line written at the top of every artifact
    pub banner: Option<String>,
    /// Module the type surface re-exports from
    pub types_entry_point: String,
    /// Module the runtime surface imports from
    pub runtime_entry_point: String,
    /// Module the snapshot harness imports from
    pub source_entry_point: String,
    /// Snapshot directory, relative to the harness file
    pub snapshot_dir: String,
    /// Instant the harness pins the clock to, in epoch milliseconds
    pub fixed_clock_millis: u64,
    /// Timeout of the snapshot suite, in milliseconds
    pub suite_timeout_millis: u64,
    /// Environment variable selecting "write" or "compare"
    pub snapshot_mode_env: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            banner: Some("// Code generated by tessera. DO NOT EDIT.".to_string()),
            types_entry_point: "../dist-types/index.d".to_string(),
            runtime_entry_point: "../dist-cjs/index.js".to_string(),
            source_entry_point: "..".to_string(),
            snapshot_dir: "snapshots".to_string(),
            fixed_clock_millis: 946_702_799_999,
            suite_timeout_millis: 30_000,
            snapshot_mode_env: "SNAPSHOT_MODE".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Banner line for an artifact of `surface`.
    ///
    /// A surface that names its package gets a banner naming it in place of the
    /// configured text. No banner is written when `banner` is `None`.
    pub fn banner_for(&self, surface: &Surface) -> Option<String> {
        let banner = self.banner.as_ref()?;
        Some(match surface.package() {
            Some(package) => format!("// Code generated by tessera for {package}. DO NOT EDIT."),
            None => banner.clone(),
        })
    }
}

fn ensure_kind(generator: &'static str, expected: TestKind, surface: &Surface) -> Result<()> {
    if surface.kind() != expected {
        return Err(CodegenError::KindMismatch {
            generator,
            expected,
            found: surface.kind(),
        });
    }
    Ok(())
}
