//! Tests for the rendered verification artifacts

use tessera_codegen::generators::{
    Generator, GeneratorConfig, RuntimeSurfaceGenerator, SnapshotHarnessGenerator, TypeSurfaceGenerator,
};
use tessera_codegen::ir::TestKind;
use tessera_codegen::{CodegenError, SurfaceGenerator};
mod test_support;

use test_support::{weather_model, weather_settings};

#[test]
fn test_ping_type_surface_file() {
    let model = test_support::ping_model();
    let generator = SurfaceGenerator::new(&model, &test_support::ping_settings()).unwrap();

    let code = generator.generate(&TypeSurfaceGenerator::new_default()).unwrap();
    assert_eq!(
        code,
        concat!(
            "// Code generated by tessera. DO NOT EDIT.\n",
            "export type {\n",
            "  PingerClient,\n",
            "  Pinger,\n",
            "  PingCommand,\n",
            "  PingCommandInput,\n",
            "  PingCommandOutput,\n",
            "  PingerServiceException,\n",
            "} from \"../dist-types/index.d\";\n",
        )
    );
}

#[test]
fn test_ping_runtime_surface_file() {
    let model = test_support::ping_model();
    let generator = SurfaceGenerator::new(&model, &test_support::ping_settings()).unwrap();

    let code = generator.generate(&RuntimeSurfaceGenerator::new_default()).unwrap();
    assert_eq!(
        code,
        concat!(
            "// Code generated by tessera. DO NOT EDIT.\n",
            "import assert from \"node:assert\";\n",
            "\n",
            "import { PingCommand, Pinger, PingerClient, PingerServiceException } from \"../dist-cjs/index.js\";\n",
            "\n",
            "// clients\n",
            "assert(typeof PingerClient === \"function\");\n",
            "assert(typeof Pinger === \"function\");\n",
            "// commands\n",
            "assert(typeof PingCommand === \"function\");\n",
            "// errors\n",
            "assert(PingerServiceException.prototype instanceof Error);\n",
            "console.log(`Pinger index test passed.`);\n",
        )
    );
}

#[test]
fn test_ping_snapshot_harness_without_schemas() {
    let model = test_support::ping_model();
    let generator = SurfaceGenerator::new(&model, &test_support::ping_settings()).unwrap();

    let code = generator.generate(&SnapshotHarnessGenerator::new_default()).unwrap();
    assert_eq!(
        code,
        concat!(
            "// Code generated by tessera. DO NOT EDIT.\n",
            "import { SnapshotRunner } from \"@smithy/snapshot-testing\";\n",
            "import { join } from \"node:path\";\n",
            "import { describe, expect, test as it, vi } from \"vitest\";\n",
            "\n",
            "import { PingerClient } from \"..\";\n",
            "\n",
            "vi.setSystemTime(new Date(946702799999));\n",
            "const Client = PingerClient;\n",
            "\n",
            "const mode = (process.env.SNAPSHOT_MODE as \"write\" | \"compare\") ?? \"write\";\n",
            "\n",
            "describe(\"PingerClient\" + ` (${mode})`, () => {\n",
            "  const runner = new SnapshotRunner({\n",
            "    snapshotDirPath: join(__dirname, \"snapshots\"),\n",
            "    Client,\n",
            "    mode,\n",
            "    testCase(caseName: string, run: () => Promise<void>) {\n",
            "      it(caseName, run);\n",
            "    },\n",
            "    assertions(caseName: string, expected: string, actual: string): Promise<void> {\n",
            "      expect(actual).toEqual(expected);\n",
            "      return Promise.resolve();\n",
            "    },\n",
            "    schemas: new Map<any, any>([\n",
            "    ]),\n",
            "  });\n",
            "\n",
            "  runner.run();\n",
            "}, 30_000);\n",
        )
    );
}

#[test]
fn test_snapshot_harness_binds_operation_schemas() {
    let model = weather_model();
    let generator = SurfaceGenerator::new(&model, &weather_settings().with_schemas(true)).unwrap();

    let code = generator.generate(&SnapshotHarnessGenerator::new_default()).unwrap();
    assert!(code.contains(concat!(
        "    schemas: new Map<any, any>([\n",
        "      [GetCity$, GetCityCommand],\n",
        "      [GetCurrentTime$, GetCurrentTimeCommand],\n",
        "      [GetForecast$, GetForecastCommand],\n",
        "      [ListCities$, ListCitiesCommand],\n",
        "    ]),\n",
    )));
    assert!(code.contains("  GetCity$,\n  GetCityCommand,\n"));
    assert!(code.contains("describe(\"WeatherClient\" + ` (${mode})`"));
    // Structure and error schemas are not part of the harness.
    assert!(!code.contains("Tag$"));
    assert!(!code.contains("NoSuchResource$"));
}

#[test]
fn test_runtime_surface_asserts_error_descent() {
    let model = weather_model();
    let generator = SurfaceGenerator::new(&model, &weather_settings().with_schemas(true)).unwrap();

    let code = generator.generate(&RuntimeSurfaceGenerator::new_default()).unwrap();
    let assertions: Vec<&str> = code.lines().filter(|l| l.starts_with("assert(")).collect();

    assert!(assertions.contains(&"assert(NoSuchResource.prototype instanceof WeatherServiceException);"));
    assert!(assertions.contains(&"assert(ServiceUnavailable.prototype instanceof WeatherServiceException);"));
    assert!(assertions.contains(&"assert(WeatherServiceException.prototype instanceof Error);"));
    assert!(assertions.contains(&"assert(typeof NoSuchResource$ === \"object\");"));
    assert!(assertions.contains(&"assert(typeof Tag$ === \"object\");"));
    assert!(assertions.contains(&"assert(typeof CityKind === \"object\");"));
    assert!(assertions.contains(&"assert(typeof waitUntilCityExists === \"function\");"));
    assert!(assertions.contains(&"assert(typeof paginateListCities === \"function\");"));

    let descents = assertions
        .iter()
        .filter(|l| l.ends_with("instanceof WeatherServiceException);"))
        .count();
    assert_eq!(descents, 2);

    let sections: Vec<&str> = code.lines().filter(|l| l.starts_with("// ")).skip(1).collect();
    assert_eq!(
        sections,
        vec![
            "// clients",
            "// commands",
            "// enums",
            "// structural schemas",
            "// errors",
            "// waiters",
            "// paginators",
        ]
    );
    assert!(code.ends_with("console.log(`Weather index test passed.`);\n"));
}

#[test]
fn test_runtime_surface_imports_each_identifier_once() {
    let model = weather_model();
    let generator = SurfaceGenerator::new(&model, &weather_settings().with_schemas(true)).unwrap();
    let surface = generator.enumerate(TestKind::RuntimeSurface).unwrap();
    let code = RuntimeSurfaceGenerator::new_default().generate(&surface).unwrap();

    let import_block: Vec<&str> = code
        .lines()
        .skip_while(|l| !l.starts_with("import {"))
        .skip(1)
        .take_while(|l| !l.starts_with('}'))
        .map(|l| l.trim().trim_end_matches(','))
        .collect();

    let mut expected: Vec<&str> = surface.identifiers().collect();
    expected.sort_by_key(|i| (i.to_lowercase(), i.to_string()));
    assert_eq!(import_block, expected);
}

#[test]
fn test_omits_empty_helper_sections() {
    let model = test_support::ping_model();
    let generator = SurfaceGenerator::new(&model, &test_support::ping_settings()).unwrap();
    let code = generator.generate(&RuntimeSurfaceGenerator::new_default()).unwrap();
    assert!(!code.contains("// waiters"));
    assert!(!code.contains("// paginators"));
    assert!(!code.contains("// enums"));
}

#[test]
fn test_generators_reject_other_enumerations() {
    let model = test_support::ping_model();
    let generator = SurfaceGenerator::new(&model, &test_support::ping_settings()).unwrap();
    let surface = generator.enumerate(TestKind::TypeSurface).unwrap();

    let result = RuntimeSurfaceGenerator::new_default().generate(&surface);
    match result {
        Err(CodegenError::KindMismatch { expected, found, .. }) => {
            assert_eq!(expected, TestKind::RuntimeSurface);
            assert_eq!(found, TestKind::TypeSurface);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_config_controls_entry_points_and_harness_constants() {
    let config = GeneratorConfig {
        banner: None,
        types_entry_point: "../types/index".to_string(),
        runtime_entry_point: "../lib/index.js".to_string(),
        source_entry_point: "../src".to_string(),
        snapshot_dir: "__snapshots__".to_string(),
        fixed_clock_millis: 0,
        suite_timeout_millis: 120_000,
        snapshot_mode_env: "SNAPSHOTS".to_string(),
    };
    let model = test_support::ping_model();
    let generator = SurfaceGenerator::new(&model, &test_support::ping_settings()).unwrap();

    let types = generator.generate(&TypeSurfaceGenerator::new(config.clone())).unwrap();
    assert!(types.starts_with("export type {\n"));
    assert!(types.ends_with("} from \"../types/index\";\n"));

    let runtime = generator.generate(&RuntimeSurfaceGenerator::new(config.clone())).unwrap();
    assert!(runtime.contains("from \"../lib/index.js\";"));

    let harness = generator.generate(&SnapshotHarnessGenerator::new(config)).unwrap();
    assert!(harness.contains("import { PingerClient } from \"../src\";"));
    assert!(harness.contains("join(__dirname, \"__snapshots__\")"));
    assert!(harness.contains("new Date(0)"));
    assert!(harness.contains("process.env.SNAPSHOTS"));
    assert!(harness.ends_with("}, 120_000);\n"));
}

#[test]
fn test_generator_file_names() {
    assert_eq!(TypeSurfaceGenerator::new_default().file_name(), "test/index-types.ts");
    assert_eq!(
        RuntimeSurfaceGenerator::new_default().file_name(),
        "test/index-objects.spec.mjs"
    );
    assert_eq!(
        SnapshotHarnessGenerator::new_default().file_name(),
        "test/snapshots.integ.spec.ts"
    );
}

#[test]
fn test_package_setting_names_the_package_in_every_banner() {
    let model = test_support::ping_model();
    let config = GeneratorConfig::default();
    let unnamed = SurfaceGenerator::new(&model, &test_support::ping_settings())
        .unwrap()
        .generate_artifacts(&config)
        .unwrap();
    let named = SurfaceGenerator::new(&model, &test_support::ping_settings().with_package("@example/ping-client"))
        .unwrap()
        .generate_artifacts(&config)
        .unwrap();

    assert_ne!(unnamed, named);
    for (path, code) in &named {
        assert!(
            code.starts_with("// Code generated by tessera for @example/ping-client. DO NOT EDIT.\n"),
            "{path} banner: {:?}",
            code.lines().next()
        );
        // Only the banner changes.
        let unnamed_code = &unnamed[path];
        assert_eq!(code.lines().skip(1).collect::<Vec<_>>(), unnamed_code.lines().skip(1).collect::<Vec<_>>());
    }
}

#[test]
fn test_disabled_banner_stays_disabled_with_a_package() {
    let model = test_support::ping_model();
    let settings = test_support::ping_settings().with_package("@example/ping-client");
    let generator = SurfaceGenerator::new(&model, &settings).unwrap();
    let config = GeneratorConfig {
        banner: None,
        ..GeneratorConfig::default()
    };

    let code = generator.generate(&TypeSurfaceGenerator::new(config)).unwrap();
    assert!(code.starts_with("export type {\n"));
}
