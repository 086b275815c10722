//! CSV serialization of the weekly summary.
//!
//! The table is `Employee, <categories...>, Total, Remarks` with one line per
//! summary row. Lines are separated by `\n` and there is no trailing newline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::summary::SummaryRow;

/// File name offered for the exported summary.
pub const SUMMARY_CSV_FILE_NAME: &str = "timesheet_summary.csv";

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// How fields with commas, quotes or newlines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// RFC 4180 quoting, only where a field needs it.
    #[default]
    Standard,
    /// Plain comma join with no escaping. Special characters in names or
    /// remarks corrupt the table; kept for consumers of the legacy export.
    Raw,
}

/// Renders hours the way they are displayed: `10`, `7.5`, `0`.
pub fn format_hours(hours: f64) -> String {
    format!("{hours}")
}

/// Serializes the summary as CSV with the given category columns.
pub fn render_csv(
    categories: &[Category],
    summary: &[SummaryRow],
    quoting: Quoting,
) -> Result<String, ExportError> {
    let records = table(categories, summary);
    match quoting {
        Quoting::Raw => Ok(records
            .iter()
            .map(|record| record.join(","))
            .collect::<Vec<_>>()
            .join("\n")),
        Quoting::Standard => write_quoted(&records),
    }
}

fn table(categories: &[Category], summary: &[SummaryRow]) -> Vec<Vec<String>> {
    let mut header = Vec::with_capacity(categories.len() + 3);
    header.push("Employee".to_string());
    header.extend(categories.iter().map(|category| category.label().to_string()));
    header.push("Total".to_string());
    header.push("Remarks".to_string());

    let mut records = Vec::with_capacity(summary.len() + 1);
    records.push(header);
    for item in summary {
        let mut record = Vec::with_capacity(categories.len() + 3);
        record.push(item.employee_name.clone());
        record.extend(
            categories
                .iter()
                .map(|category| format_hours(item.hours.get(*category))),
        );
        record.push(format_hours(item.total));
        record.push(item.remarks.clone());
        records.push(record);
    }
    records
}

fn write_quoted(records: &[Vec<String>]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;

    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
