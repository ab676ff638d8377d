use crate::pipeline::context::BuildContext;
use crate::pipeline::phase_trait::BuildPhase;
use crate::toolchain::doc2go::read_fragment;
use crate::toolchain::DocTool;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Attaches doc2go output to packages and captures the highlight stylesheet
///
/// A package without generated output keeps its plain doc string; the
/// remaining packages of the repository are still processed.
pub struct DocPhase;

impl BuildPhase for DocPhase {
    fn name(&self) -> &'static str {
        "DocPhase"
    }

    fn execute(&self, context: &mut BuildContext) -> Result<()> {
        let tool = DocTool::new(
            Arc::clone(&context.runner),
            context.config.doc_tool.clone(),
            context.config.highlight_theme.clone(),
        );

        for repo in &mut context.repositories {
            let dir = repo
                .dir
                .clone()
                .with_context(|| format!("Repository {} has not been cloned", repo.name))?;
            let out = tempfile::Builder::new()
                .prefix("vanity-doc2go")
                .tempdir()
                .context("Failed to create documentation directory")?;

            tool.generate(&dir, out.path())
                .with_context(|| format!("doc2go failed for repo {}", repo.name))?;

            let mut attached = 0;
            for package in &mut repo.packages {
                let fragment = read_fragment(out.path(), &package.import_path).with_context(|| {
                    format!("Failed to read documentation of {}", package.import_path)
                })?;
                match fragment {
                    Some(html) => {
                        package.full_doc = Some(html);
                        attached += 1;
                    }
                    None => debug!(package = %package.import_path, "Skipping package without docs"),
                }
            }
            info!(repo = %repo.name, attached, "Attached package documentation");
        }

        let css = tool
            .theme_css()
            .context("Failed to print highlight stylesheet")?;
        context.theme_css = Some(css);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::MockHostingApi;
    use crate::model::Package;
    use crate::pipeline::phases::test_support::{cloned, context_with};
    use crate::toolchain::{CommandOutput, ListedPackage, RecordingRunner};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Fakes doc2go, writing fragments for packages `a` and `c` only
    fn doc2go_runner() -> Arc<RecordingRunner> {
        Arc::new(RecordingRunner::new(|spec| {
            if spec.args.iter().any(|a| a == "-highlight-print-css") {
                return Ok(CommandOutput::stdout(".chroma { color: red }"));
            }
            let out = Path::new(spec.flag_value("-out").unwrap());
            for import_path in [
                "go.astrophena.name/foo/a",
                "go.astrophena.name/foo/c",
            ] {
                let dir = out.join(import_path);
                fs::create_dir_all(&dir).unwrap();
                fs::write(dir.join("index.html"), format!("<p>{}</p>", import_path)).unwrap();
            }
            Ok(CommandOutput::default())
        }))
    }

    fn package(import_path: &str) -> Package {
        let listed = ListedPackage {
            name: "x".to_string(),
            import_path: import_path.to_string(),
            ..Default::default()
        };
        Package::new(listed, "foo", "go.astrophena.name")
    }

    #[test]
    fn test_missing_fragment_skips_only_that_package() {
        let runner = doc2go_runner();
        let mut context = context_with(MockHostingApi::new(), runner.clone());
        let mut repo = cloned("foo", PathBuf::from("/tmp/vanity/foo"));
        repo.packages = vec![
            package("go.astrophena.name/foo/a"),
            package("go.astrophena.name/foo/b"),
            package("go.astrophena.name/foo/c"),
        ];
        context.repositories.push(repo);

        DocPhase.execute(&mut context).unwrap();

        let packages = &context.repositories[0].packages;
        assert_eq!(
            packages[0].full_doc.as_deref(),
            Some("<p>go.astrophena.name/foo/a</p>")
        );
        assert!(packages[1].full_doc.is_none());
        assert_eq!(
            packages[2].full_doc.as_deref(),
            Some("<p>go.astrophena.name/foo/c</p>")
        );
        assert_eq!(
            context.theme_css.as_deref(),
            Some(&b".chroma { color: red }"[..])
        );

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].dir.as_deref(), Some(Path::new("/tmp/vanity/foo")));
        assert!(calls[0].args.contains(&"classes:native".to_string()));
    }

    #[test]
    fn test_generation_output_is_removed() {
        let runner = doc2go_runner();
        let mut context = context_with(MockHostingApi::new(), runner.clone());
        context
            .repositories
            .push(cloned("foo", PathBuf::from("/tmp/vanity/foo")));

        DocPhase.execute(&mut context).unwrap();

        let out = PathBuf::from(runner.calls()[0].flag_value("-out").unwrap());
        assert!(!out.exists());
    }
}
