use anyhow::Result;
use clap::Parser;
use stubnorm::cli::Cli;
use stubnorm::commands::process::{self, ProcessConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ProcessConfig {
        path: cli.path,
        extension: cli.extension,
    };

    let count = process::run(&config)?;
    eprintln!("Processed {count} API file(s)");
    Ok(())
}
