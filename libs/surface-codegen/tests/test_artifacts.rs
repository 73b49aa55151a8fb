//! Tests for artifact sets and regenerate-and-diff checks

use std::fs;
use tessera_codegen::generators::GeneratorConfig;
use tessera_codegen::utils::{check_artifacts, write_artifacts, DriftKind};
use tessera_codegen::{generate_from_files, SurfaceGenerator};
mod test_support;

use test_support::{weather_model, weather_settings};

#[test]
fn test_generate_artifacts_produces_three_files() {
    let model = weather_model();
    let generator = SurfaceGenerator::new(&model, &weather_settings()).unwrap();
    let artifacts = generator.generate_artifacts(&GeneratorConfig::default()).unwrap();

    let paths: Vec<&str> = artifacts.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "test/index-objects.spec.mjs",
            "test/index-types.ts",
            "test/snapshots.integ.spec.ts",
        ]
    );
}

#[test]
fn test_regeneration_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let model = weather_model();
    let settings = weather_settings().with_schemas(true);
    let config = GeneratorConfig::default();

    let first = SurfaceGenerator::new(&model, &settings)
        .unwrap()
        .generate_artifacts(&config)
        .unwrap();
    let written = write_artifacts(dir.path(), &first).unwrap();
    assert_eq!(written.len(), 3);

    let reloaded = weather_model();
    let second = SurfaceGenerator::new(&reloaded, &settings)
        .unwrap()
        .generate_artifacts(&config)
        .unwrap();
    assert_eq!(first, second);
    assert!(check_artifacts(dir.path(), &second).unwrap().is_empty());
}

#[test]
fn test_check_reports_missing_and_changed_files() {
    let dir = tempfile::tempdir().unwrap();
    let model = weather_model();
    let artifacts = SurfaceGenerator::new(&model, &weather_settings())
        .unwrap()
        .generate_artifacts(&GeneratorConfig::default())
        .unwrap();
    write_artifacts(dir.path(), &artifacts).unwrap();

    fs::remove_file(dir.path().join("test/index-types.ts")).unwrap();
    fs::write(dir.path().join("test/index-objects.spec.mjs"), "// stale\n").unwrap();

    let drift = check_artifacts(dir.path(), &artifacts).unwrap();
    let summary: Vec<(String, DriftKind)> = drift
        .iter()
        .map(|d| {
            let relative = d.path.strip_prefix(dir.path()).unwrap();
            (relative.to_string_lossy().replace('\\', "/"), d.kind)
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("test/index-objects.spec.mjs".to_string(), DriftKind::Changed),
            ("test/index-types.ts".to_string(), DriftKind::Missing),
        ]
    );
}

#[test]
fn test_schema_mode_changes_only_runtime_and_harness() {
    let model = weather_model();
    let config = GeneratorConfig::default();
    let off = SurfaceGenerator::new(&model, &weather_settings())
        .unwrap()
        .generate_artifacts(&config)
        .unwrap();
    let on = SurfaceGenerator::new(&model, &weather_settings().with_schemas(true))
        .unwrap()
        .generate_artifacts(&config)
        .unwrap();

    assert_eq!(off["test/index-types.ts"], on["test/index-types.ts"]);
    assert_ne!(off["test/index-objects.spec.mjs"], on["test/index-objects.spec.mjs"]);
    assert_ne!(off["test/snapshots.integ.spec.ts"], on["test/snapshots.integ.spec.ts"]);
}

#[test]
fn test_generate_from_files_writes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    fs::write(&model_path, include_str!("fixtures/weather.json")).unwrap();

    let out = dir.path().join("package");
    let count = generate_from_files(&model_path, &weather_settings(), &out, &GeneratorConfig::default()).unwrap();
    assert_eq!(count, 3);

    let types = fs::read_to_string(out.join("test/index-types.ts")).unwrap();
    assert!(types.contains("  WeatherServiceException,\n"));
}
