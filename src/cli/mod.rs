//! CLI layer for clash-groups.
//!
//! Provides the command-line interface using clap. All file access and
//! failure reporting lives here; the transform itself is in
//! [`crate::pipeline`].

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
