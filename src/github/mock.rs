//! In-memory hosting API for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::client::HostingApi;
use super::error::ApiError;
use super::types::{ContentEntry, GitHubRepository};

/// Builds a public, non-fork repository record for `astrophena/<name>`
pub fn repo(name: &str) -> GitHubRepository {
    GitHubRepository {
        name: name.to_string(),
        url: format!("https://api.github.com/repos/astrophena/{}", name),
        private: false,
        description: None,
        archived: false,
        clone_url: format!("https://github.com/astrophena/{}.git", name),
        fork: false,
    }
}

#[derive(Default)]
pub struct MockHostingApi {
    repositories: Vec<GitHubRepository>,
    contents: HashMap<String, Vec<ContentEntry>>,
    failing: HashSet<String>,
    probed: Mutex<Vec<String>>,
}

impl MockHostingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a repository whose root holds the given paths
    pub fn with_repository(mut self, repo: GitHubRepository, root: &[&str]) -> Self {
        self.contents.insert(
            repo.name.clone(),
            root.iter()
                .map(|p| ContentEntry {
                    path: p.to_string(),
                })
                .collect(),
        );
        self.repositories.push(repo);
        self
    }

    /// Makes the contents probe of `name` answer with HTTP 500
    pub fn with_failing_contents(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Names of the repositories whose contents were requested, in order
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl HostingApi for MockHostingApi {
    fn list_repositories(&self) -> Result<Vec<GitHubRepository>, ApiError> {
        Ok(self.repositories.clone())
    }

    fn list_contents(&self, repo: &GitHubRepository) -> Result<Vec<ContentEntry>, ApiError> {
        self.probed.lock().unwrap().push(repo.name.clone());

        if self.failing.contains(&repo.name) {
            return Err(ApiError::UnexpectedStatus {
                method: "GET",
                url: format!("{}/contents", repo.url),
                want: 200,
                got: 500,
                body: "server error".to_string(),
            });
        }

        Ok(self.contents.get(&repo.name).cloned().unwrap_or_default())
    }
}
