use clap::Parser;
use std::path::PathBuf;

use crate::config::BuildOverrides;

/// Builds a vanity import site for a GitHub user's Go modules
#[derive(Parser, Debug)]
#[command(
    name = "vanity",
    about = "Builds a vanity import site for a GitHub user's Go modules",
    version,
    long_about = "vanity lists a GitHub user's public repositories, keeps the Go modules, \
                  clones them, inspects their packages with `go list` and renders an index \
                  page, one go-import page per repository and one page per public package.\n\n\
                  GITHUB_TOKEN must be set.\n\n\
                  Examples:\n  \
                  vanity\n  \
                  vanity public\n  \
                  vanity --no-docs --user octocat --module-prefix go.example.com site"
)]
pub struct CliArgs {
    #[arg(value_name = "DIR", default_value = "build", help = "Output directory")]
    pub output_dir: PathBuf,

    #[arg(long, value_name = "USER", help = "GitHub user whose repositories are published")]
    pub user: Option<String>,

    #[arg(long, value_name = "PREFIX", help = "Import path prefix, e.g. go.example.com")]
    pub module_prefix: Option<String>,

    #[arg(long, help = "Skip doc2go documentation and the highlight stylesheet")]
    pub no_docs: bool,

    #[arg(long, help = "Render only the index and repository pages")]
    pub no_package_pages: bool,

    #[arg(long, help = "Clone full history instead of the latest commit")]
    pub full_clone: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> BuildOverrides {
        BuildOverrides {
            user: self.user.clone(),
            module_prefix: self.module_prefix.clone(),
            no_docs: self.no_docs,
            no_package_pages: self.no_package_pages,
            full_clone: self.full_clone,
        }
    }
}
