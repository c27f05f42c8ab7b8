//! Helpers for rendering progress output and writing converted files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use eyre::{Context, Result};
use feature_csv::{TestCaseRecord, export};

use crate::config::OutputFormat;

pub(crate) fn write_paths(writer: &mut dyn Write, input: &Path, output: &Path) -> Result<()> {
    writeln!(writer, "Input file:  {}", input.display())
        .and_then(|()| writeln!(writer, "Output file: {}", output.display()))
        .and_then(|()| writeln!(writer))
        .wrap_err("failed to write file summary")
}

pub(crate) fn write_status(writer: &mut dyn Write, message: &str) -> Result<()> {
    writeln!(writer, "{message}").wrap_err_with(|| format!("failed to write status '{message}'"))
}

/// Serialise records to `path` in the requested format.
pub(crate) fn write_records(
    path: &Path,
    records: &[TestCaseRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut csv = String::new();
            export::write_csv(&mut csv, records).wrap_err("failed to render CSV")?;
            std::fs::write(path, csv)
                .wrap_err_with(|| format!("failed to write {}", path.display()))
        }
        OutputFormat::Json => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::write_json(&mut writer, records)
                .wrap_err_with(|| format!("failed to serialise records to {}", path.display()))?;
            writer
                .write_all(b"\n")
                .and_then(|()| writer.flush())
                .wrap_err_with(|| format!("failed to flush {}", path.display()))
        }
    }
}
