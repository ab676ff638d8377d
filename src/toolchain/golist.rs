//! Package metadata from `go list -json`

use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::error::ToolError;
use super::runner::{CommandRunner, CommandSpec};

/// The fields of a `go list -json` record the site uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListedPackage {
    pub name: String,
    pub import_path: String,
    pub doc: String,
    pub go_files: Vec<String>,
    pub imports: Vec<String>,
}

pub struct GoToolchain {
    runner: Arc<dyn CommandRunner>,
}

impl GoToolchain {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Lists every package under the module rooted at `dir`
    pub fn list_packages(&self, repository: &str, dir: &Path) -> Result<Vec<ListedPackage>, ToolError> {
        let spec = CommandSpec::new("go")
            .args(["list", "-json", "./..."])
            .current_dir(dir);

        let output = self.runner.run(&spec).map_err(|e| match e {
            ToolError::Failed { status, stderr, .. } => ToolError::ListFailed {
                repository: repository.to_string(),
                status,
                stderr,
            },
            other => other,
        })?;

        let packages = decode_listing(repository, &output.stdout)?;
        debug!(repo = repository, packages = packages.len(), "Listed packages");
        Ok(packages)
    }
}

/// Decodes the concatenated JSON objects `go list -json` prints
pub fn decode_listing(repository: &str, stdout: &[u8]) -> Result<Vec<ListedPackage>, ToolError> {
    serde_json::Deserializer::from_slice(stdout)
        .into_iter::<ListedPackage>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ToolError::MalformedListing {
            repository: repository.to_string(),
            source,
        })
}
