//! Full package documentation rendered by doc2go

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ToolError;
use super::runner::{CommandRunner, CommandSpec};

pub struct DocTool {
    runner: Arc<dyn CommandRunner>,
    /// Program followed by its leading arguments
    command: Vec<String>,
    theme: String,
}

impl DocTool {
    pub fn new(runner: Arc<dyn CommandRunner>, command: Vec<String>, theme: impl Into<String>) -> Self {
        Self {
            runner,
            command,
            theme: theme.into(),
        }
    }

    fn spec(&self) -> CommandSpec {
        let (program, leading) = match self.command.split_first() {
            Some((program, leading)) => (program.as_str(), leading),
            None => ("doc2go", &[][..]),
        };
        CommandSpec::new(program).args(leading.iter().cloned())
    }

    /// Renders embeddable HTML for every package of the module at `dir` into `out`
    pub fn generate(&self, dir: &Path, out: &Path) -> Result<(), ToolError> {
        info!(dir = %dir.display(), "Generating package documentation");

        let spec = self
            .spec()
            .arg("-highlight")
            .arg(format!("classes:{}", self.theme))
            .arg("-embed")
            .arg("-out")
            .arg(out.to_string_lossy())
            .arg("./...")
            .current_dir(dir);
        self.runner.run(&spec)?;
        Ok(())
    }

    /// Stylesheet for the highlight theme
    pub fn theme_css(&self) -> Result<Vec<u8>, ToolError> {
        let spec = self
            .spec()
            .arg("-highlight")
            .arg(self.theme.as_str())
            .arg("-highlight-print-css");
        Ok(self.runner.run(&spec)?.stdout)
    }
}

/// Location of the generated fragment for `import_path` under `out`
pub fn fragment_path(out: &Path, import_path: &str) -> PathBuf {
    out.join(import_path).join("index.html")
}

/// Reads the generated fragment for `import_path`, `None` when doc2go wrote none
pub fn read_fragment(out: &Path, import_path: &str) -> io::Result<Option<String>> {
    let path = fragment_path(out, import_path);
    match fs::read_to_string(&path) {
        Ok(html) => Ok(Some(html)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No documentation generated");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::{CommandOutput, RecordingRunner};
    use tempfile::TempDir;

    fn default_command() -> Vec<String> {
        vec!["go".into(), "run".into(), "go.abhg.dev/doc2go@latest".into()]
    }

    #[test]
    fn test_generate_arguments() {
        let runner = Arc::new(RecordingRunner::new(|_| Ok(CommandOutput::default())));
        let tool = DocTool::new(runner.clone(), default_command(), "native");

        tool.generate(Path::new("/tmp/vanity/foo"), Path::new("/tmp/docs"))
            .unwrap();

        let call = &runner.calls()[0];
        assert_eq!(
            call.to_string(),
            "go run go.abhg.dev/doc2go@latest -highlight classes:native -embed -out /tmp/docs ./..."
        );
        assert_eq!(call.dir.as_deref(), Some(Path::new("/tmp/vanity/foo")));
    }

    #[test]
    fn test_theme_css() {
        let runner = Arc::new(RecordingRunner::new(|_| Ok(CommandOutput::stdout(".chroma {}"))));
        let tool = DocTool::new(runner.clone(), vec!["doc2go".into()], "native");

        assert_eq!(tool.theme_css().unwrap(), b".chroma {}");
        assert_eq!(
            runner.calls()[0].to_string(),
            "doc2go -highlight native -highlight-print-css"
        );
    }

    #[test]
    fn test_read_fragment() {
        let out = TempDir::new().unwrap();
        let dir = out.path().join("go.astrophena.name/foo/web");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<p>doc</p>").unwrap();

        assert_eq!(
            read_fragment(out.path(), "go.astrophena.name/foo/web").unwrap(),
            Some("<p>doc</p>".to_string())
        );
        assert_eq!(
            read_fragment(out.path(), "go.astrophena.name/foo/other").unwrap(),
            None
        );
    }
}
