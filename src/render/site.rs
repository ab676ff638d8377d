//! Output tree layout and page writing

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::info;

use super::error::SiteError;
use super::templates::{ImportPage, IndexPage, PackagePage, SiteTemplates};
use crate::model::Repository;
use crate::progress::{ProgressEvent, ProgressHandler};

/// Name of the highlight stylesheet in the output directory
pub const THEME_CSS: &str = "doc2go.css";

/// Writes files below an output directory
#[derive(Debug)]
pub struct SiteWriter {
    root: PathBuf,
}

impl SiteWriter {
    /// Removes any previous output at `root` and recreates it empty
    ///
    /// A `root` ending in `.` or `..` is rejected before anything is removed.
    pub fn prepare(root: &Path) -> Result<Self, SiteError> {
        if ends_in_dot(root) {
            return Err(SiteError::Io {
                path: root.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "output directory must not end in . or ..",
                ),
            });
        }
        if root.exists() {
            info!(dir = %root.display(), "Removing previous build output");
            fs::remove_dir_all(root).map_err(|source| SiteError::Io {
                path: root.to_path_buf(),
                source,
            })?;
        }
        fs::create_dir_all(root).map_err(|source| SiteError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `contents` to `relative`, creating parent directories
    pub fn write(&self, relative: &Path, contents: &[u8]) -> Result<PathBuf, SiteError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, contents).map_err(|source| SiteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// True when the last component of `root` is `.` or `..`
///
/// `Path::components` drops a trailing `.`, so the raw text is checked too.
fn ends_in_dot(root: &Path) -> bool {
    let text = root.to_string_lossy();
    let trimmed = text.trim_end_matches(std::path::is_separator);
    let last = trimmed
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or_default();
    matches!(last, "." | "..")
        || matches!(root.components().next_back(), Some(Component::ParentDir))
}

/// Settings shared by every rendered page
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub module_prefix: String,
    pub user: String,
    pub package_pages: bool,
    /// Highlight stylesheet written next to the pages
    pub stylesheet: Option<Vec<u8>>,
}

/// Renders the whole site into `out` and returns the written paths, relative to `out`
///
/// The index comes first, then for each repository its package pages followed
/// by its import page. A failure leaves already written pages in place.
pub fn render_site(
    out: &Path,
    repositories: &[Repository],
    options: &SiteOptions,
    templates: &SiteTemplates,
    progress: &dyn ProgressHandler,
) -> Result<Vec<PathBuf>, SiteError> {
    let writer = SiteWriter::prepare(out)?;
    let mut written = Vec::new();
    let stylesheet = options.stylesheet.is_some();

    let mut emit = |relative: PathBuf, contents: &[u8]| -> Result<(), SiteError> {
        writer.write(&relative, contents)?;
        progress.on_progress(&ProgressEvent::PageWritten {
            path: writer.root().join(&relative),
        });
        written.push(relative);
        Ok(())
    };

    let index = templates.render_index(&IndexPage {
        module_prefix: &options.module_prefix,
        user: &options.user,
        repositories,
    })?;
    emit(PathBuf::from("index.html"), index.as_bytes())?;

    for repository in repositories {
        if options.package_pages {
            for package in repository.page_packages() {
                let html = templates.render_package(&PackagePage {
                    module_prefix: &options.module_prefix,
                    stylesheet,
                    repository,
                    package,
                })?;
                emit(package.page_path(), html.as_bytes())?;
            }
        }

        let html = templates.render_import(&ImportPage {
            module_prefix: &options.module_prefix,
            package_pages: options.package_pages,
            stylesheet,
            repository,
        })?;
        emit(PathBuf::from(format!("{}.html", repository.name)), html.as_bytes())?;
    }

    if let Some(css) = &options.stylesheet {
        emit(PathBuf::from(THEME_CSS), css)?;
    }

    Ok(written)
}
