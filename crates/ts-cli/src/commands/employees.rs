//! Employees command for listing the directory.

use std::io::Write;

use anyhow::Result;
use ts_core::Employee;

pub fn run<W: Write>(writer: &mut W, directory: &[Employee], json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(directory)?)?;
        return Ok(());
    }

    if directory.is_empty() {
        writeln!(writer, "No employees found.")?;
        return Ok(());
    }

    let id_width = directory
        .iter()
        .map(|employee| employee.id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    writeln!(writer, "{:<id_width$}  Name", "ID")?;
    for employee in directory {
        writeln!(writer, "{:<id_width$}  {}", employee.id, employee.name)?;
    }
    Ok(())
}
