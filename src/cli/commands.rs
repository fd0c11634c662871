//! CLI command implementation.
//!
//! Reads the input file, runs the transform, and writes the fragment.

use crate::cli::output::{OutputFormat, RunReport, format_report};
use crate::cli::parser::Cli;
use crate::error::{CommandError, Result};
use crate::io::{read_file, write_file};
use crate::pipeline::generate;
use std::path::Path;

/// Executes the CLI command.
///
/// Nothing is written unless every step before the write succeeded.
///
/// # Returns
///
/// The report to print on success.
///
/// # Errors
///
/// Returns an error if the input cannot be read, has no proxies section,
/// yields no names, or the output cannot be written.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let input = cli.input_path();
    let options = cli.group_options();

    let output = if cli.stdout {
        None
    } else {
        let output = cli.output_path();
        if same_file(&input, &output) {
            return Err(CommandError::InvalidArgument(format!(
                "output path {} would overwrite the input file",
                output.display()
            ))
            .into());
        }
        Some(output)
    };

    tracing::debug!(
        input = %input.display(),
        chunk_size = options.chunk_size,
        prefix = %options.prefix,
        "generating proxy groups"
    );

    let content = read_file(&input)?;
    let generated = generate(&content, &options)?;

    let report = if let Some(path) = output {
        write_file(&path, &generated.text)?;
        tracing::info!(path = %path.display(), "wrote proxy groups");
        RunReport {
            output: Some(path.display().to_string()),
            names: generated.name_count,
            groups: generated.group_count,
            text: None,
        }
    } else {
        RunReport {
            output: None,
            names: generated.name_count,
            groups: generated.group_count,
            text: Some(generated.text),
        }
    };

    Ok(format_report(&report, cli.verbose, format))
}

/// Returns `true` if `a` and `b` refer to the same file.
///
/// Falls back to comparing the paths as given when either cannot be
/// canonicalized (for example because it does not exist yet).
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
