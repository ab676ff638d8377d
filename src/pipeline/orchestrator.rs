use super::context::BuildContext;
use super::phase_trait::BuildPhase;
use super::phases::{DocPhase, FetchPhase, IntrospectPhase, ListPhase, RenderPhase};
use crate::progress::{ProgressEvent, ProgressHandler};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub repositories: usize,
    pub packages: usize,
    pub pages: usize,
    pub duration: Duration,
}

/// Runs the build phases in order, stopping at the first failure
pub struct BuildPipeline {
    progress_handler: Arc<dyn ProgressHandler>,
}

impl BuildPipeline {
    pub fn new(progress_handler: Arc<dyn ProgressHandler>) -> Self {
        Self { progress_handler }
    }

    /// Phases for the given context; the doc phase only runs when docs are enabled
    pub fn phases(&self, context: &BuildContext) -> Vec<Box<dyn BuildPhase>> {
        let mut phases: Vec<Box<dyn BuildPhase>> = vec![
            Box::new(ListPhase),
            Box::new(FetchPhase),
            Box::new(IntrospectPhase),
        ];
        if context.config.generate_docs {
            phases.push(Box::new(DocPhase));
        }
        phases.push(Box::new(RenderPhase::new(Arc::clone(&self.progress_handler))));
        phases
    }

    pub fn execute(&self, context: &mut BuildContext) -> Result<BuildSummary> {
        let start = Instant::now();
        info!(
            user = %context.config.user,
            output = %context.output_dir.display(),
            "Starting site build"
        );
        self.progress_handler.on_progress(&ProgressEvent::Started {
            output_dir: context.output_dir.clone(),
        });

        for phase in self.phases(context) {
            let phase_name = phase.name();
            self.progress_handler.on_progress(&ProgressEvent::PhaseStarted {
                phase: phase_name.to_string(),
            });

            let phase_start = Instant::now();
            phase
                .execute(context)
                .with_context(|| format!("Phase {} failed", phase_name))?;

            self.progress_handler.on_progress(&ProgressEvent::PhaseComplete {
                phase: phase_name.to_string(),
                duration: phase_start.elapsed(),
            });
            debug!("Phase {} complete", phase_name);
        }

        let summary = BuildSummary {
            repositories: context.repositories.len(),
            packages: context.package_count(),
            pages: context.pages.len(),
            duration: start.elapsed(),
        };
        self.progress_handler.on_progress(&ProgressEvent::Completed {
            repositories: summary.repositories,
            pages: summary.pages,
            total_time: summary.duration,
        });

        Ok(summary)
    }
}
