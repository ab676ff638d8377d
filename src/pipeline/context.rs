//! State shared by the build phases

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::config::VanityConfig;
use crate::github::HostingApi;
use crate::model::Repository;
use crate::toolchain::CommandRunner;

/// Owns everything one build needs; the scratch directory goes away with it
pub struct BuildContext {
    pub config: VanityConfig,

    /// Where the site is written
    pub output_dir: PathBuf,

    pub api: Arc<dyn HostingApi>,

    pub runner: Arc<dyn CommandRunner>,

    /// Clones live here for the duration of the build
    scratch: TempDir,

    /// Published repositories, in API order
    pub repositories: Vec<Repository>,

    /// Highlight stylesheet produced by the doc phase
    pub theme_css: Option<Vec<u8>>,

    /// Pages written by the render phase, relative to `output_dir`
    pub pages: Vec<PathBuf>,
}

impl BuildContext {
    pub fn new(
        config: VanityConfig,
        output_dir: PathBuf,
        api: Arc<dyn HostingApi>,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self> {
        let scratch = tempfile::Builder::new()
            .prefix("vanity")
            .tempdir()
            .context("Failed to create scratch directory")?;

        Ok(Self {
            config,
            output_dir,
            api,
            runner,
            scratch,
            repositories: Vec::new(),
            theme_css: None,
            pages: Vec::new(),
        })
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    pub fn package_count(&self) -> usize {
        self.repositories.iter().map(|r| r.packages.len()).sum()
    }
}
