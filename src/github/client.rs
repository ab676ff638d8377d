//! Blocking GitHub REST client

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::types::{ContentEntry, GitHubRepository};
use crate::config::VanityConfig;

/// Read access to a repository host
pub trait HostingApi: Send + Sync {
    /// Lists every repository of the configured user, in API order
    fn list_repositories(&self) -> Result<Vec<GitHubRepository>, ApiError>;

    /// Lists the root-level contents of a repository
    fn list_contents(&self, repo: &GitHubRepository) -> Result<Vec<ContentEntry>, ApiError>;
}

pub struct GitHubClient {
    client: Client,
    token: String,
    repos_url: String,
}

impl GitHubClient {
    pub fn new(config: &VanityConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(concat!("vanity/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(ApiError::Client)?,
            token: config.token.clone(),
            repos_url: config.repos_url(),
        })
    }

    /// Performs a GET and decodes the body as JSON, failing on any status but `want`
    pub fn get_json<R: DeserializeOwned>(&self, url: &str, want: StatusCode) -> Result<R, ApiError> {
        const METHOD: &str = "GET";
        debug!(method = METHOD, url, "Sending API request");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|source| ApiError::Transport {
                method: METHOD,
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| ApiError::Transport {
            method: METHOD,
            url: url.to_string(),
            source,
        })?;

        if status != want {
            return Err(ApiError::UnexpectedStatus {
                method: METHOD,
                url: url.to_string(),
                want: want.as_u16(),
                got: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            method: METHOD,
            url: url.to_string(),
            source,
        })
    }
}

impl HostingApi for GitHubClient {
    fn list_repositories(&self) -> Result<Vec<GitHubRepository>, ApiError> {
        self.get_json(&self.repos_url, StatusCode::OK)
    }

    fn list_contents(&self, repo: &GitHubRepository) -> Result<Vec<ContentEntry>, ApiError> {
        self.get_json(&format!("{}/contents", repo.url), StatusCode::OK)
    }
}
