use crate::pipeline::context::BuildContext;
use crate::pipeline::phase_trait::BuildPhase;
use crate::toolchain::Git;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

/// Clones every repository into the scratch directory and records its commit
pub struct FetchPhase;

impl BuildPhase for FetchPhase {
    fn name(&self) -> &'static str {
        "FetchPhase"
    }

    fn execute(&self, context: &mut BuildContext) -> Result<()> {
        let git = Git::new(Arc::clone(&context.runner));
        let depth = context.config.clone_depth;
        let scratch = context.scratch_dir().to_path_buf();

        for repo in &mut context.repositories {
            let dest = scratch.join(&repo.name);
            git.clone_repo(&repo.clone_url, &dest, depth)
                .with_context(|| format!("Failed to clone {}", repo.name))?;

            let commit = git
                .short_head(&dest)
                .with_context(|| format!("Failed to resolve HEAD of {}", repo.name))?;
            debug!(repo = %repo.name, commit = %commit, "Cloned repository");

            repo.commit = Some(commit);
            repo.dir = Some(dest);
        }
        Ok(())
    }
}
