//! Droidres CLI Tool
//!
//! Command-line interface for generating Android multi-density drawable
//! assets from source images.

use anyhow::Result;
use clap::Parser;
use droidres_gen::{process, StdoutSink};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "droidres")]
#[command(about = "Generates mdpi..xxxhdpi drawable variants from source images")]
#[command(version)]
struct Cli {
    /// Source image file or a directory of images (.png/.jpg/.jpeg/.webp)
    input: PathBuf,

    /// Output base directory (defaults to an `android` directory beside
    /// the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    process(&cli.input, cli.output, &StdoutSink);
    Ok(())
}
