//! External tools driven by the build: git, `go list` and doc2go
//!
//! Every invocation goes through a [`CommandRunner`], so tests can replace
//! the real processes with a [`RecordingRunner`].

pub mod doc2go;
pub mod error;
pub mod git;
pub mod golist;
pub mod mock;
pub mod runner;

pub use doc2go::DocTool;
pub use error::ToolError;
pub use git::Git;
pub use golist::{GoToolchain, ListedPackage};
pub use mock::RecordingRunner;
pub use runner::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
