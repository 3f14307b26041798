use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stubnorm")]
#[command(about = "Normalizes API stub listings for cross-implementation comparison", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory tree of stub files to rewrite in place
    pub path: PathBuf,

    /// File extension of the stub files to process
    #[arg(long, default_value = "api")]
    pub extension: String,
}
