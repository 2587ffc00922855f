//! project-stats - Print DOH project statistics
//!
//! Usage: project-stats [--json]

use doh::cli::commands::project_stats;
use doh::cli::output::OutputFormat;
use doh::cli::{self, ProjectStatsCli};
use doh::config::Config;
use doh::errors::to_exit_code;

fn main() {
    let cli: ProjectStatsCli = cli::parse_or_exit();
    cli::init_tracing(&cli.global);

    let config = Config::resolve(cli.global.project_root.as_deref());
    let format = OutputFormat::from_json_flag(cli.json);

    match project_stats::run(&config, format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}
