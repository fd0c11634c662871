//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::{DEFAULT_CHUNK_SIZE, DEFAULT_GROUP_PREFIX, GroupOptions};
use clap::Parser;
use std::path::PathBuf;

/// Input file name used when `--input` is not given.
pub const DEFAULT_INPUT_FILE: &str = "keke.yaml";

/// Output file name used when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "generated_proxy_groups.txt";

/// Generate proxy-groups from the proxies list in a Clash YAML file.
///
/// Reads the `proxies:` section, splits the proxy names into fixed-size
/// chunks, and writes one `select` group per chunk.
#[derive(Parser, Debug)]
#[command(name = "clash-groups")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input YAML file path.
    ///
    /// Defaults to `keke.yaml` in the base directory.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path.
    ///
    /// Defaults to `generated_proxy_groups.txt` in the base directory.
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Number of proxies per group.
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk: usize,

    /// Group name prefix.
    #[arg(long, default_value = DEFAULT_GROUP_PREFIX)]
    pub prefix: String,

    /// Directory that default input and output paths are resolved against.
    ///
    /// Defaults to the current directory.
    #[arg(long, env = "CLASH_GROUPS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print the generated fragment to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Returns the input path, falling back to the base directory default.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.resolve_default(DEFAULT_INPUT_FILE))
    }

    /// Returns the output path, falling back to the base directory default.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.resolve_default(DEFAULT_OUTPUT_FILE))
    }

    /// Returns the grouping options selected on the command line.
    #[must_use]
    pub fn group_options(&self) -> GroupOptions {
        GroupOptions::new(self.chunk, self.prefix.as_str())
    }

    fn resolve_default(&self, file_name: &str) -> PathBuf {
        self.base_dir
            .as_deref()
            .map_or_else(|| PathBuf::from(file_name), |dir| dir.join(file_name))
    }
}

/// Parses `--chunk`, rejecting zero and non-numeric values.
fn parse_chunk_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a positive integer"))?;
    if size == 0 {
        return Err("chunk size must be at least 1".to_string());
    }
    Ok(size)
}
