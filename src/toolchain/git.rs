//! git invocations

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::error::ToolError;
use super::runner::{CommandRunner, CommandSpec};
use crate::config::CloneDepth;

pub struct Git {
    runner: Arc<dyn CommandRunner>,
}

impl Git {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Clones `url` into `dest`
    pub fn clone_repo(&self, url: &str, dest: &Path, depth: CloneDepth) -> Result<(), ToolError> {
        info!(url, dest = %dest.display(), "Cloning repository");

        let mut spec = CommandSpec::new("git").arg("clone");
        if depth == CloneDepth::Shallow {
            spec = spec.arg("--depth=1");
        }
        let spec = spec.arg(url).arg(dest.to_string_lossy());

        self.runner.run(&spec)?;
        Ok(())
    }

    /// Abbreviated hash of HEAD in the working copy at `dir`
    pub fn short_head(&self, dir: &Path) -> Result<String, ToolError> {
        let spec = CommandSpec::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(dir);
        let output = self.runner.run(&spec)?;
        Ok(output.stdout_text(&spec)?.trim_end_matches('\n').to_string())
    }
}
