//! CLI entry point for the gradient tile layout generator

use clap::Parser;
use gradtile::io::cli::{Cli, LayoutProcessor};

fn main() -> gradtile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut processor = LayoutProcessor::new(cli);
    processor.process()
}
