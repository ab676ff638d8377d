//! Scripted command runner for tests

use std::sync::Mutex;

use super::error::ToolError;
use super::runner::{CommandOutput, CommandRunner, CommandSpec};

type Handler = dyn Fn(&CommandSpec) -> Result<CommandOutput, ToolError> + Send + Sync;

/// Answers every command with a handler and remembers what was run
pub struct RecordingRunner {
    handler: Box<Handler>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl RecordingRunner {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&CommandSpec) -> Result<CommandOutput, ToolError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ToolError> {
        self.calls.lock().unwrap().push(spec.clone());
        (self.handler)(spec)
    }
}
