use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{CodegenError, Result};

/// Generated files keyed by path relative to the package root.
pub type Artifacts = BTreeMap<String, String>;

/// Write generated artifacts below the given output directory.
/// Creates missing directories.
pub fn write_artifacts(output_dir: &Path, artifacts: &Artifacts) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for (filename, contents) in artifacts {
        let path = output_dir.join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }
        fs::write(&path, contents).map_err(|source| io_error(&path, source))?;
        info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        written.push(path);
    }

    Ok(written)
}

/// How an artifact on disk differs from the regenerated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftKind {
    Missing,
    Changed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDrift {
    pub path: PathBuf,
    pub kind: DriftKind,
}

/// Compare regenerated artifacts with the files on disk.
///
/// An empty result means regeneration would be a no-op.
pub fn check_artifacts(output_dir: &Path, artifacts: &Artifacts) -> Result<Vec<ArtifactDrift>> {
    let mut drift = Vec::new();

    for (filename, contents) in artifacts {
        let path = output_dir.join(filename);
        let kind = match fs::read_to_string(&path) {
            Ok(existing) if existing == *contents => continue,
            Ok(_) => DriftKind::Changed,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DriftKind::Missing,
            Err(source) => return Err(io_error(&path, source)),
        };
        drift.push(ArtifactDrift { path, kind });
    }

    Ok(drift)
}

fn io_error(path: &Path, source: std::io::Error) -> CodegenError {
    CodegenError::Io {
        path: path.display().to_string(),
        source,
    }
}
