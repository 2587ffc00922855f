//! CLI module for the DOH query tools
//!
//! Provides the command-line interfaces of `get-item` and `project-stats`
//! using clap, plus the process setup shared by both binaries.

pub mod commands;
pub mod output;

use clap::{Args, Parser};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{to_exit_code, DohError};

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Project root containing the .doh directory (defaults to the current directory)
    #[arg(long, env = "PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Look up a single item in the DOH project index
#[derive(Parser, Debug)]
#[command(name = "get-item")]
#[command(version)]
#[command(about = "Print a DOH project item as JSON")]
pub struct GetItemCli {
    /// Item ID
    #[arg(allow_hyphen_values = true)]
    pub item_id: String,

    /// Item type: task, epic, feature, prd (singular or plural), or auto
    #[arg(default_value = "auto")]
    pub item_type: String,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Summarize the DOH project index
#[derive(Parser, Debug)]
#[command(name = "project-stats")]
#[command(version)]
#[command(about = "Print DOH project statistics")]
pub struct ProjectStatsCli {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Parse the process arguments, exiting on failure.
///
/// Help and version output exit 0; any other parse failure is a usage
/// error and exits with its DOH exit code.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                to_exit_code(&DohError::Usage(e.to_string()))
            } else {
                0
            };
            std::process::exit(code);
        }
    }
}

/// Install the tracing subscriber. Logs go to stderr; stdout is reserved for results.
pub fn init_tracing(global: &GlobalArgs) {
    let default_level = if global.verbose {
        "debug"
    } else if global.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
