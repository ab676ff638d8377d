//! vanity - static site generator for Go vanity import paths
//!
//! Builds a site that maps `<module-prefix>/<repo>` import paths to a GitHub
//! user's repositories. One build runs these phases in order:
//!
//! 1. list the user's public, non-fork repositories holding a `go.mod`
//! 2. clone each one into a scratch directory
//! 3. list its packages with `go list -json ./...`
//! 4. optionally render full package docs with doc2go
//! 5. render `index.html`, `<repo>.html` and `<package>.html` pages
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use vanity::{BuildContext, BuildPipeline, GitHubClient, LoggingHandler, SystemRunner, VanityConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = VanityConfig::from_env()?;
//! let api = GitHubClient::new(&config)?;
//! let mut context = BuildContext::new(
//!     config,
//!     PathBuf::from("build"),
//!     Arc::new(api),
//!     Arc::new(SystemRunner),
//! )?;
//! let summary = BuildPipeline::new(Arc::new(LoggingHandler)).execute(&mut context)?;
//! println!("wrote {} pages", summary.pages);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod github;
pub mod model;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod toolchain;
pub mod util;

pub use config::{BuildOverrides, CloneDepth, ConfigError, VanityConfig};
pub use github::{GitHubClient, HostingApi};
pub use model::{Package, Repository};
pub use pipeline::{BuildContext, BuildPipeline, BuildSummary};
pub use progress::{LoggingHandler, ProgressEvent, ProgressHandler};
pub use render::{SiteError, SiteTemplates};
pub use toolchain::{CommandRunner, SystemRunner, ToolError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
