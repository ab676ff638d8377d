//! Shared helpers for the integration tests
//!
//! [`FakeToolchain`] stands in for git, `go list` and doc2go. Clones become
//! empty directories named after the repository, and every other command
//! answers from the module table keyed by that name.

#![allow(dead_code)]

use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use vanity::toolchain::{CommandOutput, CommandSpec, RecordingRunner, ToolError};
use vanity::VanityConfig;

pub const PREFIX: &str = "go.astrophena.name";
pub const COMMIT: &str = "abc1234";
pub const THEME_CSS: &str = ".chroma { background: #202020 }";

/// One package as `go list -json` would report it
#[derive(Debug, Clone)]
pub struct FakePackage {
    pub import_path: String,
    pub name: String,
    pub doc: String,
    pub files: Vec<String>,
    /// HTML doc2go writes for this package; `None` writes nothing
    pub full_doc: Option<String>,
}

impl FakePackage {
    pub fn new(import_path: &str, name: &str, doc: &str) -> Self {
        Self {
            import_path: import_path.to_string(),
            name: name.to_string(),
            doc: doc.to_string(),
            files: vec![format!("{}.go", name), "util.go".to_string()],
            full_doc: None,
        }
    }

    pub fn with_full_doc(mut self, html: &str) -> Self {
        self.full_doc = Some(html.to_string());
        self
    }

    fn listing(&self) -> String {
        json!({
            "ImportPath": self.import_path,
            "Name": self.name,
            "Doc": self.doc,
            "GoFiles": self.files,
        })
        .to_string()
    }
}

#[derive(Default)]
pub struct FakeToolchain {
    modules: HashMap<String, Vec<FakePackage>>,
    broken_listing: Vec<String>,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, repository: &str, packages: Vec<FakePackage>) -> Self {
        self.modules.insert(repository.to_string(), packages);
        self
    }

    /// Makes `go list` exit non-zero for `repository`
    pub fn with_broken_listing(mut self, repository: &str) -> Self {
        self.broken_listing.push(repository.to_string());
        self
    }

    pub fn into_runner(self) -> Arc<RecordingRunner> {
        Arc::new(RecordingRunner::new(move |spec| self.answer(spec)))
    }

    fn answer(&self, spec: &CommandSpec) -> Result<CommandOutput, ToolError> {
        let first = spec.args.first().map(String::as_str);
        match (spec.program.as_str(), first) {
            ("git", Some("clone")) => {
                let dest = spec.args.last().map(PathBuf::from).unwrap_or_default();
                fs::create_dir_all(&dest).map_err(|source| ToolError::Spawn {
                    command: spec.to_string(),
                    source,
                })?;
                Ok(CommandOutput::default())
            }
            ("git", Some("rev-parse")) => Ok(CommandOutput::stdout(format!("{}\n", COMMIT))),
            ("go", Some("list")) => {
                let repository = repository_of(spec);
                if self.broken_listing.contains(&repository) {
                    return Err(ToolError::Failed {
                        command: spec.to_string(),
                        status: "exit status: 1".to_string(),
                        stderr: "go: cannot find main module".to_string(),
                    });
                }
                let listing: Vec<String> = self
                    .packages(&repository)
                    .iter()
                    .map(FakePackage::listing)
                    .collect();
                Ok(CommandOutput::stdout(listing.join("\n")))
            }
            ("doc2go", _) if spec.args.iter().any(|a| a == "-highlight-print-css") => {
                Ok(CommandOutput::stdout(THEME_CSS))
            }
            ("doc2go", _) => {
                let out = spec.flag_value("-out").map(PathBuf::from).unwrap_or_default();
                for package in self.packages(&repository_of(spec)) {
                    if let Some(html) = &package.full_doc {
                        let dir = out.join(&package.import_path);
                        fs::create_dir_all(&dir).unwrap();
                        fs::write(dir.join("index.html"), html).unwrap();
                    }
                }
                Ok(CommandOutput::default())
            }
            _ => Err(ToolError::Failed {
                command: spec.to_string(),
                status: "exit status: 127".to_string(),
                stderr: "unexpected command".to_string(),
            }),
        }
    }

    fn packages(&self, repository: &str) -> &[FakePackage] {
        self.modules.get(repository).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn repository_of(spec: &CommandSpec) -> String {
    spec.dir
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Configuration pointing doc2go at the fake toolchain
pub fn test_config() -> VanityConfig {
    let mut config = VanityConfig::with_token("test-token");
    config.doc_tool = vec!["doc2go".to_string()];
    config
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

pub fn vanity_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("vanity")
}
