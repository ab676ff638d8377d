//! Published repositories

use serde::Serialize;
use std::path::PathBuf;

use super::package::Package;
use crate::github::GitHubRepository;

#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    pub name: String,
    /// API URL
    pub url: String,
    pub private: bool,
    /// Always ends with a period
    pub description: String,
    pub archived: bool,
    pub fork: bool,
    pub clone_url: String,
    /// Browser URL, the clone URL without `.git`
    pub web_url: String,
    /// `<module-prefix>/<name>`
    pub import_path: String,
    /// Short hash of the cloned HEAD
    pub commit: Option<String>,
    pub packages: Vec<Package>,

    /// Working copy inside the scratch directory
    #[serde(skip)]
    pub dir: Option<PathBuf>,
}

impl Repository {
    pub fn from_api(api: GitHubRepository, module_prefix: &str) -> Self {
        let description = normalize_description(api.description.as_deref().unwrap_or_default());
        let web_url = api
            .clone_url
            .strip_suffix(".git")
            .unwrap_or(&api.clone_url)
            .to_string();
        let import_path = format!("{}/{}", module_prefix, api.name);

        Self {
            name: api.name,
            url: api.url,
            private: api.private,
            description,
            archived: api.archived,
            fork: api.fork,
            clone_url: api.clone_url,
            web_url,
            import_path,
            commit: None,
            packages: Vec::new(),
            dir: None,
        }
    }

    /// True when the module is a single package living at the repository root
    pub fn has_one_package(&self) -> bool {
        matches!(self.packages.as_slice(), [only] if only.import_path == self.import_path)
    }

    /// Packages that get a standalone page
    pub fn page_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|p| p.has_page)
    }
}

/// Appends a period unless the text already ends with one
pub fn normalize_description(description: &str) -> String {
    if description.ends_with('.') {
        description.to_string()
    } else {
        format!("{}.", description)
    }
}
