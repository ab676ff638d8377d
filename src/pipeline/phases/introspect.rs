use crate::model::Package;
use crate::pipeline::context::BuildContext;
use crate::pipeline::phase_trait::BuildPhase;
use crate::toolchain::GoToolchain;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Lists the packages of every cloned module
pub struct IntrospectPhase;

impl BuildPhase for IntrospectPhase {
    fn name(&self) -> &'static str {
        "IntrospectPhase"
    }

    fn execute(&self, context: &mut BuildContext) -> Result<()> {
        let go = GoToolchain::new(Arc::clone(&context.runner));
        let prefix = context.config.module_prefix.clone();

        for repo in &mut context.repositories {
            let dir = repo
                .dir
                .clone()
                .with_context(|| format!("Repository {} has not been cloned", repo.name))?;

            let listed = go.list_packages(&repo.name, &dir)?;
            repo.packages = listed
                .into_iter()
                .map(|p| Package::new(p, &repo.name, &prefix))
                .collect();

            info!(
                repo = %repo.name,
                packages = repo.packages.len(),
                pages = repo.page_packages().count(),
                "Introspected packages"
            );
        }
        Ok(())
    }
}
