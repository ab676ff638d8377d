//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

/// Events emitted while a site is built
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Build started
    Started { output_dir: PathBuf },

    /// A pipeline phase started
    PhaseStarted { phase: String },

    /// A pipeline phase finished
    PhaseComplete { phase: String, duration: Duration },

    /// A page was written to disk
    PageWritten { path: PathBuf },

    /// Build finished successfully
    Completed {
        repositories: usize,
        pages: usize,
        total_time: Duration,
    },
}

/// Trait for handling progress events during a build
pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            output_dir: PathBuf::from("build"),
        });
        handler.on_progress(&ProgressEvent::PhaseComplete {
            phase: "ListPhase".to_string(),
            duration: Duration::from_millis(50),
        });
        handler.on_progress(&ProgressEvent::Completed {
            repositories: 2,
            pages: 5,
            total_time: Duration::from_secs(5),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::PhaseStarted {
            phase: "FetchPhase".to_string(),
        };
        assert!(format!("{:?}", event).contains("FetchPhase"));
    }
}
