//! Go packages found in a repository

use serde::Serialize;
use std::path::PathBuf;

use crate::toolchain::ListedPackage;

/// Import path segment marking packages without a public page
pub const INTERNAL_SEGMENT: &str = "internal";

#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub name: String,
    pub import_path: String,
    pub doc: String,
    pub go_files: Vec<String>,
    pub imports: Vec<String>,

    /// HTML rendered by doc2go, emitted without escaping
    pub full_doc: Option<String>,

    /// Name of the owning repository
    pub repository: String,

    /// Import path without the module prefix
    pub base_path: String,

    /// Path inside the repository, pointing at the file when there is only one
    pub src_path: String,

    /// Whether the package gets its own page
    pub has_page: bool,
}

impl Package {
    pub fn new(listed: ListedPackage, repository: &str, module_prefix: &str) -> Self {
        let base_path = strip_segment(&listed.import_path, module_prefix).to_string();

        let mut src_path = if base_path == repository {
            String::new()
        } else {
            strip_segment(&base_path, repository).to_string()
        };
        if let [file] = listed.go_files.as_slice() {
            src_path = if src_path.is_empty() {
                file.clone()
            } else {
                format!("{}/{}", src_path, file)
            };
        }

        let has_page = base_path != repository && !base_path.contains(INTERNAL_SEGMENT);

        Self {
            name: listed.name,
            import_path: listed.import_path,
            doc: listed.doc,
            go_files: listed.go_files,
            imports: listed.imports,
            full_doc: None,
            repository: repository.to_string(),
            base_path,
            src_path,
            has_page,
        }
    }

    /// Output file of the package page, relative to the site root
    pub fn page_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.html", self.base_path))
    }
}

/// Strips `<prefix>/` from the front of `path`, if present
fn strip_segment<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}
