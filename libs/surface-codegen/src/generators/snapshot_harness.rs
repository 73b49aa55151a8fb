//! Snapshot test harness binding operation schemas to commands.

use super::{ensure_kind, Generator, GeneratorConfig};
use crate::error::Result;
use crate::ir::{Surface, TestKind};
use crate::writer::CodeWriter;

const SNAPSHOT_PACKAGE: &str = "@smithy/snapshot-testing";
const TEST_PACKAGE: &str = "vitest";

/// Renders a vitest suite that drives a `SnapshotRunner` over every operation schema.
///
/// An empty binding list still yields a valid suite with no test cases.
pub struct SnapshotHarnessGenerator {
    config: GeneratorConfig,
}

impl SnapshotHarnessGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for SnapshotHarnessGenerator {
    fn test_kind(&self) -> TestKind {
        TestKind::Snapshot
    }

    fn file_name(&self) -> &'static str {
        "test/snapshots.integ.spec.ts"
    }

    fn generate(&self, surface: &Surface) -> Result<String> {
        ensure_kind("snapshot harness generator", self.test_kind(), surface)?;

        let config = &self.config;
        let client = &surface.client().bare;
        let source = config.source_entry_point.as_str();

        let mut writer = CodeWriter::new().with_banner(config.banner_for(surface).as_deref());
        writer
            .add_import("SnapshotRunner", None, SNAPSHOT_PACKAGE)
            .add_import("describe", None, TEST_PACKAGE)
            .add_import("vi", None, TEST_PACKAGE)
            .add_import("test", Some("it"), TEST_PACKAGE)
            .add_import("expect", None, TEST_PACKAGE)
            .add_import("join", None, "node:path")
            .add_import(client, None, source);

        let suite_name = serde_json::to_string(client)?;
        let snapshot_dir = serde_json::to_string(&config.snapshot_dir)?;

        writer.write(format!("vi.setSystemTime(new Date({}));", config.fixed_clock_millis));
        writer.write(format!("const Client = {client};"));
        writer.blank_line();
        writer.write(format!(
            "const mode = (process.env.{} as \"write\" | \"compare\") ?? \"write\";",
            config.snapshot_mode_env
        ));
        writer.blank_line();

        let bindings = surface.operation_bindings();
        let close = format!("}}, {});", numeric_literal(config.suite_timeout_millis));
        writer.open_block(&format!("describe({suite_name} + ` (${{mode}})`, () => {{"), &close, |w| {
            w.open_block("const runner = new SnapshotRunner({", "});", |w| {
                w.write(format!("snapshotDirPath: join(__dirname, {snapshot_dir}),"));
                w.write("Client,\nmode,");
                w.open_block("testCase(caseName: string, run: () => Promise<void>) {", "},", |w| {
                    w.write("it(caseName, run);");
                });
                w.open_block(
                    "assertions(caseName: string, expected: string, actual: string): Promise<void> {",
                    "},",
                    |w| {
                        w.write("expect(actual).toEqual(expected);\nreturn Promise.resolve();");
                    },
                );
                w.open_block("schemas: new Map<any, any>([", "]),", |w| {
                    for (schema, command) in &bindings {
                        w.add_import(schema, None, source);
                        w.add_import(command, None, source);
                        w.write(format!("[{schema}, {command}],"));
                    }
                });
            });
            w.blank_line();
            w.write("runner.run();");
        });

        Ok(writer.render())
    }
}

/// Render an integer with `_` thousands separators, e.g. `30_000`.
fn numeric_literal(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(c);
    }
    out
}
