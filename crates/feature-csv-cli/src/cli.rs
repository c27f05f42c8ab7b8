//! Argument parsing and command dispatch for the `featurecsv` entrypoint.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{Context, Result, bail};
use feature_csv::convert_feature_file;
use feature_csv::reformat::reformat_file;
use tracing::{info, warn};

use crate::config::{CliConfig, LogLevel, OutputFormat};
use crate::output::{write_paths, write_records, write_status};

/// Convert Gherkin feature files into test-case CSV for test-management import.
#[derive(Parser, Debug)]
#[command(name = "featurecsv", version, about)]
pub struct Cli {
    /// Path to the .feature file.
    #[arg(required_unless_present = "reformat")]
    pub feature: Option<PathBuf>,

    /// Output path; defaults to the feature path with a .csv (or .json) extension.
    pub output: Option<PathBuf>,

    /// Reformat a comma-delimited export into semicolon-delimited rows, one step per row.
    #[arg(
        short = 'r',
        long,
        num_args = 2,
        value_names = ["INPUT", "OUTPUT"],
        conflicts_with_all = ["feature", "output"]
    )]
    pub reformat: Option<Vec<PathBuf>>,

    /// Output format (csv, json).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

/// Resolved operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert a feature file into test cases.
    Convert {
        /// Feature file to read.
        feature: PathBuf,
        /// Explicit output path, if given.
        output: Option<PathBuf>,
    },
    /// Reformat an exported CSV file.
    Reformat {
        /// CSV export to read.
        input: PathBuf,
        /// Destination for the reformatted rows.
        output: PathBuf,
    },
}

impl Cli {
    /// Resolve the parsed arguments into a [`Command`].
    ///
    /// # Errors
    ///
    /// Returns an error when neither a feature path nor a reformat pair is
    /// present, which clap normally rejects first.
    pub fn command(&self) -> Result<Command> {
        if let Some(paths) = &self.reformat {
            let [input, output] = paths.as_slice() else {
                bail!("--reformat requires input and output file paths");
            };
            return Ok(Command::Reformat {
                input: input.clone(),
                output: output.clone(),
            });
        }
        let Some(feature) = self.feature.clone() else {
            bail!("a feature file path is required");
        };
        Ok(Command::Convert {
            feature,
            output: self.output.clone(),
        })
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output was written.
    Written,
    /// The feature produced no test cases; nothing was written.
    NoTestCases,
}

/// Run the requested command, writing progress to stdout.
///
/// # Errors
///
/// Returns an error when reading, converting, or writing fails.
pub fn run(command: &Command, config: &CliConfig) -> Result<Outcome> {
    let mut stdout = io::stdout().lock();
    let outcome = match command {
        Command::Convert { feature, output } => {
            let output = output
                .clone()
                .unwrap_or_else(|| default_output_path(feature, config.format));
            convert(&mut stdout, feature, &output, config.format)?
        }
        Command::Reformat { input, output } => reformat(&mut stdout, input, output)?,
    };
    stdout.flush().wrap_err("failed to flush progress output")?;
    Ok(outcome)
}

/// Output path used when none is given: the input with the format's extension.
#[must_use]
pub fn default_output_path(feature: &Path, format: OutputFormat) -> PathBuf {
    feature.with_extension(format.extension())
}

fn convert(
    writer: &mut dyn Write,
    feature: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<Outcome> {
    write_paths(writer, feature, output)?;
    write_status(writer, "Parsing feature file...")?;
    let records = convert_feature_file(feature)
        .wrap_err_with(|| format!("failed to convert {}", feature.display()))?;

    if records.is_empty() {
        warn!(feature = %feature.display(), "no test cases found");
        write_status(writer, "Warning: No test cases found in the feature file.")?;
        return Ok(Outcome::NoTestCases);
    }

    write_status(writer, &format!("Found {} test case(s)", records.len()))?;
    write_records(output, &records, format)?;
    info!(output = %output.display(), test_cases = records.len(), "wrote test cases");
    write_status(
        writer,
        "Success! The file is ready for import into your test-management system.",
    )?;
    Ok(Outcome::Written)
}

fn reformat(writer: &mut dyn Write, input: &Path, output: &Path) -> Result<Outcome> {
    write_paths(writer, input, output)?;
    write_status(writer, "Reformatting CSV...")?;
    let reformatted = reformat_file(input, output)
        .wrap_err_with(|| format!("failed to reformat {}", input.display()))?;
    for record in &reformatted.skipped {
        write_status(
            writer,
            &format!("Warning: Skipped record {record} with insufficient fields"),
        )?;
    }
    write_status(
        writer,
        &format!(
            "Total rows (excluding header): {}",
            reformatted.row_count()
        ),
    )?;
    write_status(writer, "Success! The CSV file has been reformatted.")?;
    Ok(Outcome::Written)
}
