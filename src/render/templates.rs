//! Page templates and the helpers they call

use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use serde_json::Value;

use super::error::SiteError;
use crate::model::{Package, Repository};

const INDEX: &str = "index";
const IMPORT: &str = "import";
const PKG: &str = "pkg";

const TEMPLATES: &[(&str, &str)] = &[
    (INDEX, include_str!("../../templates/index.hbs")),
    (IMPORT, include_str!("../../templates/import.hbs")),
    (PKG, include_str!("../../templates/pkg.hbs")),
];
const STYLE_PARTIAL: &str = include_str!("../../templates/style.hbs");

handlebars_helper!(contains: |haystack: str, needle: str| haystack.contains(needle));
handlebars_helper!(has_one_pkg: |repo: Json| repository_has_one_package(repo));
handlebars_helper!(commit: |repo: Json| repo
    .get("commit")
    .and_then(|c| c.as_str())
    .unwrap_or_default()
    .to_string());

/// Mirrors [`Repository::has_one_package`] on the serialized repository
fn repository_has_one_package(repo: &Value) -> bool {
    let import_path = repo.get("import_path").and_then(|p| p.as_str());
    match repo.get("packages").and_then(|p| p.as_array()) {
        Some(packages) if packages.len() == 1 => {
            import_path.is_some()
                && packages[0].get("import_path").and_then(|p| p.as_str()) == import_path
        }
        _ => false,
    }
}

#[derive(Debug, Serialize)]
pub struct IndexPage<'a> {
    pub module_prefix: &'a str,
    pub user: &'a str,
    pub repositories: &'a [Repository],
}

#[derive(Debug, Serialize)]
pub struct ImportPage<'a> {
    pub module_prefix: &'a str,
    pub package_pages: bool,
    pub stylesheet: bool,
    pub repository: &'a Repository,
}

#[derive(Debug, Serialize)]
pub struct PackagePage<'a> {
    pub module_prefix: &'a str,
    pub stylesheet: bool,
    pub repository: &'a Repository,
    pub package: &'a Package,
}

pub struct SiteTemplates {
    registry: Handlebars<'static>,
}

impl SiteTemplates {
    pub fn new() -> Result<Self, SiteError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_helper("contains", Box::new(contains));
        registry.register_helper("has_one_pkg", Box::new(has_one_pkg));
        registry.register_helper("commit", Box::new(commit));

        registry
            .register_partial("style", STYLE_PARTIAL)
            .map_err(|e| SiteError::Template {
                name: "style",
                source: Box::new(e),
            })?;
        for &(name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| SiteError::Template {
                    name,
                    source: Box::new(e),
                })?;
        }

        Ok(Self { registry })
    }

    pub fn render_index(&self, page: &IndexPage<'_>) -> Result<String, SiteError> {
        self.render(INDEX, page)
    }

    pub fn render_import(&self, page: &ImportPage<'_>) -> Result<String, SiteError> {
        self.render(IMPORT, page)
    }

    pub fn render_package(&self, page: &PackagePage<'_>) -> Result<String, SiteError> {
        self.render(PKG, page)
    }

    fn render<T: Serialize>(&self, name: &'static str, data: &T) -> Result<String, SiteError> {
        self.registry
            .render(name, data)
            .map_err(|source| SiteError::Render { name, source })
    }
}
