//! Runtime export assertions.

use super::{ensure_kind, Generator, GeneratorConfig};
use crate::error::Result;
use crate::ir::{Category, RuntimeKind, Surface, SurfaceEntry, TestKind};
use crate::writer::CodeWriter;

/// Renders an executable script that imports every runtime export and asserts its kind.
///
/// Section comments separate categories and carry no meaning. The script ends by
/// printing a success line naming the client.
pub struct RuntimeSurfaceGenerator {
    config: GeneratorConfig,
}

impl RuntimeSurfaceGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for RuntimeSurfaceGenerator {
    fn test_kind(&self) -> TestKind {
        TestKind::RuntimeSurface
    }

    fn file_name(&self) -> &'static str {
        "test/index-objects.spec.mjs"
    }

    fn generate(&self, surface: &Surface) -> Result<String> {
        ensure_kind("runtime surface generator", self.test_kind(), surface)?;

        let mut writer = CodeWriter::new().with_banner(self.config.banner_for(surface).as_deref());
        writer.add_default_import("assert", "node:assert");

        let mut section = None;
        for entry in surface.entries() {
            let Some(line) = assertion(entry, surface.base_exception()) else {
                continue;
            };

            let label = entry.category.section_label();
            if section != Some(label) {
                writer.write(format!("// {label}"));
                section = Some(label);
            }

            writer.add_import(&entry.identifier, None, &self.config.runtime_entry_point);
            writer.write(line);
        }

        writer.write(format!(
            "console.log(`{} index test passed.`);",
            surface.client().aggregate
        ));

        Ok(writer.render())
    }
}

/// The assertion for one entry; type-only entries have none.
fn assertion(entry: &SurfaceEntry, base_exception: &str) -> Option<String> {
    let identifier = &entry.identifier;
    let line = match entry.runtime_kind? {
        RuntimeKind::Function => format!("assert(typeof {identifier} === \"function\");"),
        RuntimeKind::Object => format!("assert(typeof {identifier} === \"object\");"),
        RuntimeKind::ErrorClass if entry.category == Category::BaseException => {
            format!("assert({identifier}.prototype instanceof Error);")
        }
        RuntimeKind::ErrorClass => format!("assert({identifier}.prototype instanceof {base_exception});"),
    };
    Some(line)
}
