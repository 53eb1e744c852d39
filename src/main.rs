use std::path::PathBuf;

use clap::Parser;
use rambutan::restore_extensions;

#[derive(Parser)]
#[command(
    name = "rambutan",
    about = "Identify extensionless files by magic number and copy them out with the right extension"
)]
struct Cli {
    /// Directory holding the files to classify
    input_dir: PathBuf,
    /// Directory the renamed copies are written to (created if missing)
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let summary = restore_extensions(&cli.input_dir, &cli.output_dir)?;
    println!(
        "Process completed: {} extension(s) found. {} file(s) were not allocatable.",
        summary.restored, summary.unidentified
    );
    Ok(())
}
