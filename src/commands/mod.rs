//! CLI command implementations.
//!
//! The single `process` command rewrites every stub file under a directory
//! tree in place and reports how many files it touched.

pub mod process;

pub use process::{process_file, run, ProcessConfig};
