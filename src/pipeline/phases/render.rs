use crate::pipeline::context::BuildContext;
use crate::pipeline::phase_trait::BuildPhase;
use crate::progress::ProgressHandler;
use crate::render::{render_site, SiteOptions, SiteTemplates};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Writes the site into the output directory
pub struct RenderPhase {
    progress: Arc<dyn ProgressHandler>,
}

impl RenderPhase {
    pub fn new(progress: Arc<dyn ProgressHandler>) -> Self {
        Self { progress }
    }
}

impl BuildPhase for RenderPhase {
    fn name(&self) -> &'static str {
        "RenderPhase"
    }

    fn execute(&self, context: &mut BuildContext) -> Result<()> {
        let templates = SiteTemplates::new().context("Failed to load templates")?;
        let options = SiteOptions {
            module_prefix: context.config.module_prefix.clone(),
            user: context.config.user.clone(),
            package_pages: context.config.package_pages,
            stylesheet: context.theme_css.clone(),
        };

        context.pages = render_site(
            &context.output_dir,
            &context.repositories,
            &options,
            &templates,
            self.progress.as_ref(),
        )
        .with_context(|| format!("Failed to render site into {}", context.output_dir.display()))?;

        info!(
            pages = context.pages.len(),
            output = %context.output_dir.display(),
            "Rendered site"
        );
        Ok(())
    }
}
