//! get-item - Print a DOH project item as JSON
//!
//! Usage: get-item <item_id> [item_type]

use doh::cli::commands::get_item;
use doh::cli::{self, GetItemCli};
use doh::config::Config;
use doh::errors::to_exit_code;

fn main() {
    let cli: GetItemCli = cli::parse_or_exit();
    cli::init_tracing(&cli.global);

    let config = Config::resolve(cli.global.project_root.as_deref());

    match get_item::run(&config, &cli.item_id, &cli.item_type) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}
