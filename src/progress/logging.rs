//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { output_dir } => {
                debug!(output = %output_dir.display(), "Build started");
            }
            ProgressEvent::PhaseStarted { phase } => {
                debug!(phase = %phase, "Phase started");
            }
            ProgressEvent::PhaseComplete { phase, duration } => {
                info!(
                    phase = %phase,
                    duration_ms = duration.as_millis(),
                    "Phase complete"
                );
            }
            ProgressEvent::PageWritten { path } => {
                debug!(path = %path.display(), "Wrote page");
            }
            ProgressEvent::Completed {
                repositories,
                pages,
                total_time,
            } => {
                info!(
                    repositories,
                    pages,
                    total_time_ms = total_time.as_millis(),
                    "Site build complete"
                );
            }
        }
    }
}
