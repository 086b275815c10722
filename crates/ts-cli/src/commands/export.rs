//! Export command for writing the weekly summary as CSV.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use ts_core::{Category, Quoting, SUMMARY_CSV_FILE_NAME, SummaryRow, render_csv};

#[derive(Debug, Default, Args)]
pub struct ExportArgs {
    /// Output file, or `-` for stdout. Defaults to `timesheet_summary.csv`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Write fields without CSV quoting, as the legacy export did.
    #[arg(long)]
    pub raw: bool,
}

pub fn run<W: Write>(
    writer: &mut W,
    summary: &[SummaryRow],
    args: &ExportArgs,
    default_quoting: Quoting,
) -> Result<()> {
    let quoting = if args.raw {
        Quoting::Raw
    } else {
        default_quoting
    };
    let csv = render_csv(&Category::ALL, summary, quoting).context("failed to render CSV")?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(SUMMARY_CSV_FILE_NAME));
    if path == Path::new("-") {
        writeln!(writer, "{csv}")?;
        return Ok(());
    }

    std::fs::write(&path, &csv).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?quoting, "exported summary");
    writeln!(
        writer,
        "Exported {} employee(s) to {}",
        summary.len(),
        path.display()
    )?;
    Ok(())
}
