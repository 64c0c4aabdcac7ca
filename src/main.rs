//! CLI entry point for the ant colony painter

use antpaint::io::cli::{Cli, FileProcessor, init_tracing};
use clap::Parser;

fn main() -> antpaint::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
