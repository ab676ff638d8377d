//! Wire types returned by the GitHub REST API

use serde::{Deserialize, Serialize};

/// One item of `GET /users/{user}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub name: String,

    /// API URL of the repository, used to reach its contents
    pub url: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub archived: bool,

    pub clone_url: String,

    #[serde(default)]
    pub fork: bool,
}

/// One item of `GET /repos/{owner}/{repo}/contents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_repository_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "foo",
            "url": "https://api.github.com/repos/astrophena/foo",
            "private": false,
            "description": null,
            "archived": true,
            "clone_url": "https://github.com/astrophena/foo.git",
            "stargazers_count": 3
        }"#;
        let repo: GitHubRepository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "foo");
        assert!(repo.description.is_none());
        assert!(repo.archived);
        assert!(!repo.fork);
    }

    #[test]
    fn test_decode_contents() {
        let json = r#"[{"path": "go.mod", "type": "file"}, {"path": "cmd", "type": "dir"}]"#;
        let entries: Vec<ContentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "go.mod");
    }
}
