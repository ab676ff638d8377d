//! Selection of the repositories that end up on the site

use tracing::{debug, info};

use super::client::HostingApi;
use super::error::ApiError;
use super::types::{ContentEntry, GitHubRepository};
use crate::config::VanityConfig;

/// Rules deciding whether a listed repository is published
#[derive(Debug, Clone)]
pub struct RepositoryFilter {
    /// Repository holding this tool
    pub self_repo: String,
    /// Root file marking a module
    pub manifest: String,
}

impl RepositoryFilter {
    pub fn from_config(config: &VanityConfig) -> Self {
        Self {
            self_repo: config.self_repo.clone(),
            manifest: config.manifest.clone(),
        }
    }

    /// Checks everything that does not need a contents probe
    pub fn is_candidate(&self, repo: &GitHubRepository) -> bool {
        !repo.private && !repo.fork && repo.name != self.self_repo
    }

    pub fn has_manifest(&self, entries: &[ContentEntry]) -> bool {
        entries.iter().any(|e| e.path == self.manifest)
    }
}

/// Lists the user's public, non-fork module repositories, keeping API order
///
/// Only candidates are probed for the manifest; any API failure aborts.
pub fn list_module_repositories(
    api: &dyn HostingApi,
    filter: &RepositoryFilter,
) -> Result<Vec<GitHubRepository>, ApiError> {
    let all = api.list_repositories()?;
    let total = all.len();

    let mut selected = Vec::new();
    for repo in all {
        if !filter.is_candidate(&repo) {
            debug!(repo = %repo.name, private = repo.private, fork = repo.fork, "Skipping repository");
            continue;
        }

        let entries = api.list_contents(&repo)?;
        if filter.has_manifest(&entries) {
            selected.push(repo);
        } else {
            debug!(repo = %repo.name, manifest = %filter.manifest, "No manifest at repository root");
        }
    }

    info!(total, selected = selected.len(), "Listed repositories");
    Ok(selected)
}
