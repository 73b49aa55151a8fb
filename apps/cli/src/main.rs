//! Command line front end for package surface generation.
//!
//! Usage:
//!   tessera generate --model model.json --settings settings.json --out ./client
//!   tessera check --model model.json --service example#Weather --out ./client
//!   tessera list --model model.json --service example#Weather --kind runtime

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tessera_codegen::context::GenerationContext;
use tessera_codegen::generators::GeneratorConfig;
use tessera_codegen::ir::TestKind;
use tessera_codegen::naming::DefaultSymbolProvider;
use tessera_codegen::settings::{SchemaGenerationAllowlist, SurfaceSettings};
use tessera_codegen::utils::{check_artifacts, write_artifacts, DriftKind};
use tessera_codegen::SurfaceGenerator;
use tessera_model::{Model, ShapeId};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[clap(name = "tessera")]
#[clap(about = "Generate package surface verification tests from a service model")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the verification artifacts into a package directory
    Generate {
        #[clap(flatten)]
        input: InputArgs,

        /// Package root the artifacts are written under
        #[clap(short, long)]
        out: PathBuf,
    },
    /// Fail if regenerating would change the artifacts in a package directory
    Check {
        #[clap(flatten)]
        input: InputArgs,

        /// Package root holding previously generated artifacts
        #[clap(short, long)]
        out: PathBuf,
    },
    /// Print the enumerated surface as JSON
    List {
        #[clap(flatten)]
        input: InputArgs,

        /// Which enumeration to print
        #[clap(short, long, value_enum, default_value = "type")]
        kind: KindArg,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Model JSON AST file
    #[clap(short, long)]
    model: PathBuf,

    /// Settings JSON file (`service`, `serviceName`, `generateSchemas`, `package`)
    #[clap(long)]
    settings: Option<PathBuf>,

    /// Service shape id, e.g. example.weather#Weather
    #[clap(long)]
    service: Option<String>,

    /// Override the aggregate client name
    #[clap(long)]
    service_name: Option<String>,

    /// Package name written into the banner of generated files
    #[clap(long)]
    package: Option<String>,

    /// Enable schema mode
    #[clap(long)]
    generate_schemas: bool,

    /// Services that always generate schemas (repeatable)
    #[clap(long = "allow-schemas")]
    allow_schemas: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Type,
    Runtime,
    Snapshot,
}

impl From<KindArg> for TestKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Type => TestKind::TypeSurface,
            KindArg::Runtime => TestKind::RuntimeSurface,
            KindArg::Snapshot => TestKind::Snapshot,
        }
    }
}

impl InputArgs {
    fn settings(&self) -> Result<SurfaceSettings> {
        let mut settings = match (&self.settings, &self.service) {
            (Some(path), _) => SurfaceSettings::from_file(path)
                .with_context(|| format!("loading settings {}", path.display()))?,
            (None, Some(service)) => SurfaceSettings::new(parse_shape_id(service)?),
            (None, None) => bail!("either --settings or --service is required"),
        };

        if let (Some(_), Some(service)) = (&self.settings, &self.service) {
            settings.service = parse_shape_id(service)?;
        }
        if let Some(name) = &self.service_name {
            settings.service_name = Some(name.clone());
        }
        if let Some(package) = &self.package {
            settings.package = Some(package.clone());
        }
        settings.generate_schemas |= self.generate_schemas;

        Ok(settings)
    }

    fn allowlist(&self) -> Result<SchemaGenerationAllowlist> {
        self.allow_schemas
            .iter()
            .try_fold(SchemaGenerationAllowlist::new(), |allowlist, raw| {
                Ok(allowlist.with_service(parse_shape_id(raw)?))
            })
    }

    fn load_model(&self) -> Result<Model> {
        Model::from_file(&self.model).with_context(|| format!("loading model {}", self.model.display()))
    }
}

fn parse_shape_id(raw: &str) -> Result<ShapeId> {
    ShapeId::parse(raw).with_context(|| format!("invalid service id '{raw}'"))
}

fn build_generator<'m>(
    model: &'m Model,
    input: &InputArgs,
) -> Result<SurfaceGenerator<'m, DefaultSymbolProvider>> {
    let settings = input.settings()?;
    let allowlist = input.allowlist()?;
    let context = GenerationContext::with_options(model, &settings, &allowlist, DefaultSymbolProvider)
        .with_context(|| format!("resolving service {}", settings.service))?;
    Ok(SurfaceGenerator::from_context(context))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = GeneratorConfig::default();

    match cli.command {
        Command::Generate { input, out } => {
            let model = input.load_model()?;
            let generator = build_generator(&model, &input)?;
            let artifacts = generator
                .generate_artifacts(&config)
                .context("generating artifacts")?;
            let written = write_artifacts(&out, &artifacts).context("writing artifacts")?;
            info!(
                client = %generator.context().client().aggregate,
                files = written.len(),
                "generated package surface tests"
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { input, out } => {
            let model = input.load_model()?;
            let generator = build_generator(&model, &input)?;
            let artifacts = generator
                .generate_artifacts(&config)
                .context("generating artifacts")?;
            let drift = check_artifacts(&out, &artifacts).context("comparing artifacts")?;

            if drift.is_empty() {
                info!(files = artifacts.len(), "artifacts are up to date");
                return Ok(ExitCode::SUCCESS);
            }
            for item in &drift {
                let reason = match item.kind {
                    DriftKind::Missing => "missing",
                    DriftKind::Changed => "out of date",
                };
                warn!(path = %item.path.display(), "{reason}");
            }
            Ok(ExitCode::FAILURE)
        }
        Command::List { input, kind } => {
            let model = input.load_model()?;
            let generator = build_generator(&model, &input)?;
            let surface = generator.enumerate(kind.into()).context("enumerating surface")?;
            println!("{}", serde_json::to_string_pretty(&surface)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
