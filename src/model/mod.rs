//! In-memory site model assembled by the build pipeline

pub mod package;
pub mod repository;

pub use package::{Package, INTERNAL_SEGMENT};
pub use repository::{normalize_description, Repository};
