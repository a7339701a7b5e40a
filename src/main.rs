//! Command-line entry point.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filter specific columns from a CSV file, apply styles, and create a zip archive.
#[derive(Parser, Debug)]
#[command(name = "sheetpack")]
struct Args {
    /// Input CSV file
    #[arg(long)]
    input: PathBuf,

    /// Columns to filter, comma-separated
    #[arg(long)]
    columns: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let columns: Vec<String> = args.columns.split(',').map(str::to_owned).collect();

    match sheetpack::run(&args.input, &columns) {
        Ok(destination) => {
            println!("Zip file created and moved to: {}", destination.display());
        }
        Err(error) => {
            println!("An error occurred: {error}");
            std::process::exit(1);
        }
    }
}
