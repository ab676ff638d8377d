use crate::github::{list_module_repositories, RepositoryFilter};
use crate::model::Repository;
use crate::pipeline::context::BuildContext;
use crate::pipeline::phase_trait::BuildPhase;
use anyhow::{Context, Result};
use tracing::info;

/// Selects the published repositories through the hosting API
pub struct ListPhase;

impl BuildPhase for ListPhase {
    fn name(&self) -> &'static str {
        "ListPhase"
    }

    fn execute(&self, context: &mut BuildContext) -> Result<()> {
        let filter = RepositoryFilter::from_config(&context.config);
        let selected = list_module_repositories(context.api.as_ref(), &filter)
            .context("Failed to list repositories")?;

        context.repositories = selected
            .into_iter()
            .map(|repo| Repository::from_api(repo, &context.config.module_prefix))
            .collect();

        for repo in &context.repositories {
            info!(repo = %repo.name, import_path = %repo.import_path, "Publishing repository");
        }
        Ok(())
    }
}
