//! Row commands for editing draft entries.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use ts_core::{Category, RowField, RowId, TimeEntryRow, Timesheet};

use super::util::{render_table, resolve_date};

#[derive(Debug, Default, Args)]
pub struct AddArgs {
    /// Employee id from the directory.
    #[arg(long)]
    pub employee: Option<String>,
    /// Date worked (YYYY-MM-DD, `today` or `yesterday`).
    #[arg(long)]
    pub date: Option<String>,
    /// Work-time category, by label or short name (e.g. "Normal Time", ot-1.5).
    #[arg(long)]
    pub category: Option<String>,
    /// Hours worked, in quarter hours (e.g. 7.5).
    #[arg(long, allow_hyphen_values = true)]
    pub hours: Option<String>,
    /// Free-text remarks.
    #[arg(long)]
    pub remarks: Option<String>,
}

impl AddArgs {
    fn fields(&self, today: NaiveDate) -> Vec<(RowField, String)> {
        [
            (RowField::Employee, self.employee.clone()),
            (
                RowField::Date,
                self.date.as_deref().map(|date| resolve_date(date, today)),
            ),
            (RowField::Category, self.category.clone()),
            (RowField::Hours, self.hours.clone()),
            (RowField::Remarks, self.remarks.clone()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Row id (see `ts row list`).
    pub row: u64,
    /// Field to change: employee, date, category, hours or remarks.
    pub field: RowField,
    /// New value. An empty string clears the field.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Appends a row, optionally pre-filled.
pub fn add<W: Write>(
    writer: &mut W,
    sheet: &mut Timesheet,
    args: &AddArgs,
    today: NaiveDate,
) -> Result<RowId> {
    // Reject before the row exists so a bad category leaves no stray row.
    if let Some(category) = &args.category {
        category.parse::<Category>()?;
    }

    let id = sheet.add_row();
    for (field, value) in args.fields(today) {
        sheet.update_field(id, field, &value)?;
    }
    writeln!(writer, "Added row {id}")?;
    Ok(id)
}

/// Changes one field of one row.
pub fn set<W: Write>(
    writer: &mut W,
    sheet: &mut Timesheet,
    args: &SetArgs,
    today: NaiveDate,
) -> Result<()> {
    let id = RowId(args.row);
    let value = match args.field {
        RowField::Date => resolve_date(&args.value, today),
        _ => args.value.clone(),
    };
    sheet.update_field(id, args.field, &value)?;

    if value.is_empty() {
        writeln!(writer, "Cleared {} on row {id}", args.field)?;
        return Ok(());
    }
    let shown = match args.field {
        RowField::Category => sheet
            .store()
            .row(id)
            .and_then(|row| row.category)
            .map_or(value, |category| category.label().to_string()),
        _ => value,
    };
    writeln!(writer, "Set {} on row {id} to {shown}", args.field)?;
    Ok(())
}

pub fn remove<W: Write>(writer: &mut W, sheet: &mut Timesheet, row: u64) -> Result<()> {
    let removed = sheet.remove_row(RowId(row))?;
    writeln!(writer, "Removed row {}", removed.id)?;
    Ok(())
}

pub fn clear<W: Write>(writer: &mut W, sheet: &mut Timesheet) -> Result<()> {
    sheet.clear();
    writeln!(writer, "Cleared all draft rows")?;
    Ok(())
}

pub fn list<W: Write>(writer: &mut W, sheet: &Timesheet, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(sheet.rows())?)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = sheet
        .rows()
        .iter()
        .map(|row| list_cells(sheet, row))
        .collect();
    let header = [
        "Row", "Employee", "Date", "Category", "Hours", "Remarks", "Status",
    ];
    for line in render_table(&header, &rows, &[]) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

fn list_cells(sheet: &Timesheet, row: &TimeEntryRow) -> Vec<String> {
    let or_dash = |value: &str| {
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    let employee = if row.employee_id.is_empty() {
        "-".to_string()
    } else {
        match sheet.employee_name(&row.employee_id) {
            Some(name) => format!("{name} ({})", row.employee_id),
            None => format!("{} (unknown)", row.employee_id),
        }
    };
    let status = if row.is_complete() { "ready" } else { "incomplete" };

    vec![
        row.id.to_string(),
        employee,
        or_dash(&row.date),
        row.category.map_or_else(|| "-".to_string(), |c| c.label().to_string()),
        or_dash(&row.hours),
        row.remarks.clone(),
        status.to_string(),
    ]
}
