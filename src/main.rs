//! CLI entry point for the camouflage texture generator

use camoforge::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> camoforge::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
