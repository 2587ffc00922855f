//! Project-stats command - Summarize the project index

use std::time::Instant;

use tracing::info;

use crate::cli::output::{present, Output, OutputFormat};
use crate::config::Config;
use crate::domain::aggregate;
use crate::errors::Result;
use crate::fs;

/// Compute project statistics and render them in the requested format.
pub fn run(config: &Config, format: OutputFormat) -> Result<String> {
    let started = Instant::now();

    let index = fs::read_index(&config.project_root)?;
    let session = fs::read_session(&config.project_root);

    let stats = aggregate(&index, &session);
    let rendered = present(Output::Stats(&stats), format);

    info!(
        "project-stats completed in {:.2}ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(rendered)
}
