//! GitHub API access and repository selection
//!
//! - [`client`]: the [`HostingApi`] seam and its `reqwest` implementation
//! - [`lister`]: selection of public module repositories
//! - [`mock`]: an in-memory [`HostingApi`] for tests

pub mod client;
pub mod error;
pub mod lister;
pub mod mock;
pub mod types;

pub use client::{GitHubClient, HostingApi};
pub use error::ApiError;
pub use lister::{list_module_repositories, RepositoryFilter};
pub use mock::MockHostingApi;
pub use types::{ContentEntry, GitHubRepository};
