//! Get-item command - Show details of a specific item

use std::time::Instant;

use tracing::{debug, info};

use crate::cli::output::{present, Output, OutputFormat};
use crate::config::Config;
use crate::domain::{resolve_item, ItemSelector};
use crate::errors::Result;
use crate::fs;

/// Look up an item and render it as pretty JSON.
///
/// `item_type` is `auto` or a bucket name in singular or plural form. The
/// index is loaded before the type is checked, so a missing index wins
/// over an unknown type.
pub fn run(config: &Config, item_id: &str, item_type: &str) -> Result<String> {
    let started = Instant::now();

    let index = fs::read_index(&config.project_root)?;
    let selector: ItemSelector = item_type.parse()?;
    debug!(id = item_id, ?selector, "resolving item");

    let item = resolve_item(&index, item_id, selector)?;
    let rendered = present(Output::Item(&item), OutputFormat::Json);

    info!(
        "get-item completed in {:.2}ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(rendered)
}
