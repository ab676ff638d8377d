use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error};

use super::commands::CliArgs;
use crate::config::VanityConfig;
use crate::github::GitHubClient;
use crate::pipeline::{BuildContext, BuildPipeline, BuildSummary};
use crate::progress::LoggingHandler;
use crate::toolchain::SystemRunner;

/// Runs a build and maps the outcome to a process exit code
pub fn handle_build(args: &CliArgs) -> i32 {
    match run_build(args) {
        Ok(summary) => {
            debug!(packages = summary.packages, "Build finished");
            0
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

pub fn run_build(args: &CliArgs) -> Result<BuildSummary> {
    let mut config = VanityConfig::from_env()?;
    config.apply_overrides(&args.overrides());
    config.validate()?;

    let api = GitHubClient::new(&config)?;
    let mut context = BuildContext::new(
        config,
        args.output_dir.clone(),
        Arc::new(api),
        Arc::new(SystemRunner),
    )?;

    BuildPipeline::new(Arc::new(LoggingHandler)).execute(&mut context)
}
