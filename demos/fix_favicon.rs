//! Make the background of `favicon.png` transparent, writing `favicon_final.png`.
//!
//! Run it against the ORIGINAL favicon: a file that was already processed
//! has a black background and may not come out the same way.
//!
//! Usage:
//! ```sh
//! cargo run --example fix_favicon
//! ```

use std::path::Path;
use std::process;

use floodfill_transparency::{process_file, RemovalOptions};
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let input = Path::new("favicon.png");
    let output = Path::new("favicon_final.png");

    if let Err(e) = process_file(input, output, &RemovalOptions::default()) {
        error!("Failed to write {}: {e}", output.display());
        process::exit(1);
    }
}
