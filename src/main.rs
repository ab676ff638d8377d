use vanity::cli::{handle_build, CliArgs};
use vanity::util::{init_from_env, init_logging, parse_level, LoggingConfig};
use vanity::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("vanity v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_build(&args));
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        init_from_env();
        return;
    };

    init_logging(LoggingConfig::from_env_with_level(level));
}
