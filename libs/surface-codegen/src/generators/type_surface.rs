//! Type-only re-export list.

use super::{ensure_kind, Generator, GeneratorConfig};
use crate::error::Result;
use crate::ir::{Surface, TestKind};
use crate::writer::CodeWriter;

/// Renders `export type { ... } from "<types entry point>";`.
///
/// Type-checking the file fails when any listed identifier is missing from the
/// generated declarations. Extra exports in the package are not reported.
pub struct TypeSurfaceGenerator {
    config: GeneratorConfig,
}

impl TypeSurfaceGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for TypeSurfaceGenerator {
    fn test_kind(&self) -> TestKind {
        TestKind::TypeSurface
    }

    fn file_name(&self) -> &'static str {
        "test/index-types.ts"
    }

    fn generate(&self, surface: &Surface) -> Result<String> {
        ensure_kind("type surface generator", self.test_kind(), surface)?;

        let mut writer = CodeWriter::new().with_banner(self.config.banner_for(surface).as_deref());
        let close = format!("}} from \"{}\";", self.config.types_entry_point);
        writer.open_block("export type {", &close, |w| {
            for identifier in surface.identifiers() {
                w.write(format!("{identifier},"));
            }
        });

        Ok(writer.render())
    }
}
