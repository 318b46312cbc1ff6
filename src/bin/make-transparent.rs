use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::{error, LevelFilter};

use floodfill_transparency::{
    default_output_path, output_format, process_file, Connectivity, FloodRange, RemovalOptions,
};

#[derive(Clone, Copy, ValueEnum)]
enum Neighbourhood {
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
}

#[derive(Parser)]
#[command(
    name = "make-transparent",
    about = "Make a flat image background transparent via a flood fill from the top-left pixel",
    version,
    after_help = "Simple usage: make-transparent  (reads favicon.png, writes favicon_final.png)\n\n\
                  Background pixels become fully transparent black. Run it on the ORIGINAL image:\n\
                  re-running on an already processed file can give a different result."
)]
struct Cli {
    /// Input image file
    #[arg(default_value = "favicon.png")]
    input: PathBuf,

    /// Output file (default: {name}_final.{ext})
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Flood-fill connectivity
    #[arg(long, value_enum, default_value = "4")]
    connectivity: Neighbourhood,

    /// Compare every pixel with the top-left colour instead of its neighbour
    #[arg(long)]
    fixed_range: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(&cli);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    if let Err(e) = output_format(&output) {
        error!("Cannot write {}: {e}", display_name(&output));
        process::exit(1);
    }

    let opts = RemovalOptions {
        connectivity: match cli.connectivity {
            Neighbourhood::Four => Connectivity::Four,
            Neighbourhood::Eight => Connectivity::Eight,
        },
        range: if cli.fixed_range {
            FloodRange::Fixed
        } else {
            FloodRange::Floating
        },
    };

    match process_file(&cli.input, &output, &opts) {
        Ok(result) if result.written => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            error!("Failed to write {}: {e}", display_name(&output));
            process::exit(1);
        }
    }
}

fn init_logger(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .target(env_logger::Target::Stdout)
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
