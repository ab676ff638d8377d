//! Configuration management for vanity
//!
//! Settings are loaded from environment variables with defaults and can be
//! overridden by command-line flags through [`BuildOverrides`].
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`: bearer token for the GitHub API - **required**
//! - `VANITY_USER`: GitHub user whose repositories are published - default: "astrophena"
//! - `VANITY_MODULE_PREFIX`: vanity import path prefix - default: "go.astrophena.name"
//! - `VANITY_SELF_REPO`: repository holding this tool, never published - default: "vanity"
//! - `VANITY_API_URL`: GitHub API base URL - default: "https://api.github.com"
//! - `VANITY_MANIFEST`: root file marking a repository as a module - default: "go.mod"
//! - `VANITY_HIGHLIGHT_THEME`: doc2go highlight theme - default: "native"
//! - `VANITY_DOC_TOOL`: command running doc2go - default: "go run go.abhg.dev/doc2go@latest"
//! - `VANITY_HTTP_TIMEOUT`: HTTP timeout in seconds - default: client default
//!
//! # Example
//!
//! ```no_run
//! use vanity::VanityConfig;
//!
//! std::env::set_var("GITHUB_TOKEN", "ghp_example");
//! let config = VanityConfig::from_env().expect("GITHUB_TOKEN is set");
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_USER: &str = "astrophena";
const DEFAULT_MODULE_PREFIX: &str = "go.astrophena.name";
const DEFAULT_SELF_REPO: &str = "vanity";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_MANIFEST: &str = "go.mod";
const DEFAULT_HIGHLIGHT_THEME: &str = "native";
const DEFAULT_DOC_TOOL: &str = "go run go.abhg.dev/doc2go@latest";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("set GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// How much history to fetch when cloning a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneDepth {
    /// `--depth=1`
    Shallow,
    /// Full history
    Full,
}

/// Main configuration structure for vanity
#[derive(Clone)]
pub struct VanityConfig {
    /// Bearer token for the hosting API
    pub token: String,

    /// User whose repositories are listed
    pub user: String,

    /// Import path prefix shared by every published module
    pub module_prefix: String,

    /// Name of the repository holding this tool
    pub self_repo: String,

    /// Hosting API base URL, without trailing slash
    pub api_url: String,

    /// Manifest filename probed at each repository root
    pub manifest: String,

    /// Syntax highlighting theme passed to doc2go
    pub highlight_theme: String,

    /// Program and leading arguments used to run doc2go
    pub doc_tool: Vec<String>,

    pub http_timeout: Option<Duration>,

    pub clone_depth: CloneDepth,

    /// Render full package documentation with doc2go
    pub generate_docs: bool,

    /// Render one page per public package
    pub package_pages: bool,
}

// The token is deliberately left out.
impl std::fmt::Debug for VanityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VanityConfig")
            .field("user", &self.user)
            .field("module_prefix", &self.module_prefix)
            .field("self_repo", &self.self_repo)
            .field("api_url", &self.api_url)
            .field("manifest", &self.manifest)
            .field("highlight_theme", &self.highlight_theme)
            .field("doc_tool", &self.doc_tool)
            .field("http_timeout", &self.http_timeout)
            .field("clone_depth", &self.clone_depth)
            .field("generate_docs", &self.generate_docs)
            .field("package_pages", &self.package_pages)
            .finish()
    }
}

/// Values supplied on the command line that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
    pub user: Option<String>,
    pub module_prefix: Option<String>,
    pub no_docs: bool,
    pub no_package_pages: bool,
    pub full_clone: bool,
}

impl VanityConfig {
    /// Loads configuration from environment variables, falling back to defaults
    ///
    /// Fails only when the token is missing or a numeric value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var(TOKEN_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let http_timeout = match env::var("VANITY_HTTP_TIMEOUT") {
            Ok(v) => Some(Duration::from_secs(v.trim().parse::<u64>().map_err(|e| {
                ConfigError::ParseError {
                    field: "VANITY_HTTP_TIMEOUT".to_string(),
                    error: e.to_string(),
                }
            })?)),
            Err(_) => None,
        };

        let doc_tool = env::var("VANITY_DOC_TOOL")
            .unwrap_or_else(|_| DEFAULT_DOC_TOOL.to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Ok(Self {
            token,
            user: env_or("VANITY_USER", DEFAULT_USER),
            module_prefix: env_or("VANITY_MODULE_PREFIX", DEFAULT_MODULE_PREFIX)
                .trim_end_matches('/')
                .to_string(),
            self_repo: env_or("VANITY_SELF_REPO", DEFAULT_SELF_REPO),
            api_url: env_or("VANITY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            manifest: env_or("VANITY_MANIFEST", DEFAULT_MANIFEST),
            highlight_theme: env_or("VANITY_HIGHLIGHT_THEME", DEFAULT_HIGHLIGHT_THEME),
            doc_tool,
            http_timeout,
            clone_depth: CloneDepth::Shallow,
            generate_docs: true,
            package_pages: true,
        })
    }

    /// Creates a configuration with defaults and the given token, ignoring the environment
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: DEFAULT_USER.to_string(),
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
            self_repo: DEFAULT_SELF_REPO.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
            highlight_theme: DEFAULT_HIGHLIGHT_THEME.to_string(),
            doc_tool: DEFAULT_DOC_TOOL
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            http_timeout: None,
            clone_depth: CloneDepth::Shallow,
            generate_docs: true,
            package_pages: true,
        }
    }

    pub fn apply_overrides(&mut self, overrides: &BuildOverrides) {
        if let Some(user) = &overrides.user {
            self.user = user.clone();
        }
        if let Some(prefix) = &overrides.module_prefix {
            self.module_prefix = prefix.trim_end_matches('/').to_string();
        }
        if overrides.no_docs {
            self.generate_docs = false;
        }
        if overrides.no_package_pages {
            self.package_pages = false;
        }
        if overrides.full_clone {
            self.clone_depth = CloneDepth::Full;
        }
    }

    /// Validates the configuration
    ///
    /// Checks that:
    /// - user, module prefix and manifest are non-empty
    /// - the API URL is an http(s) URL
    /// - a doc tool command is present when docs are enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "user must not be empty".to_string(),
            ));
        }

        if self.module_prefix.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "module prefix must not be empty".to_string(),
            ));
        }

        if self.manifest.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "manifest filename must not be empty".to_string(),
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::ValidationFailed(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if self.generate_docs && self.doc_tool.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "doc tool command must not be empty when docs are enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Endpoint listing the configured user's repositories
    pub fn repos_url(&self) -> String {
        format!("{}/users/{}/repos?per_page=100", self.api_url, self.user)
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
