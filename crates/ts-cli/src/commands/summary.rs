//! Summary command for the weekly per-employee table.

use std::io::Write;

use anyhow::Result;
use ts_core::{Category, SummaryRow, format_hours};

use super::util::render_table;

pub fn run<W: Write>(writer: &mut W, summary: &[SummaryRow], json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }

    if summary.is_empty() {
        writeln!(writer, "No employees in directory.")?;
        writeln!(writer)?;
        writeln!(writer, "Hint: Run 'ts employees' to check the directory.")?;
        return Ok(());
    }

    let mut header = vec!["Employee"];
    header.extend(Category::ALL.iter().map(|category| category.label()));
    header.push("Total");
    header.push("Remarks");

    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|item| {
            let mut cells = Vec::with_capacity(header.len());
            cells.push(item.employee_name.clone());
            cells.extend(item.hours.iter().map(|(_, hours)| format_hours(hours)));
            cells.push(format_hours(item.total));
            cells.push(item.remarks.clone());
            cells
        })
        .collect();

    // Category and total columns are numeric.
    let numeric: Vec<usize> = (1..=Category::COUNT + 1).collect();
    for line in render_table(&header, &rows, &numeric) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ts_core::{Employee, RowId, TimeEntryRow, summarize};

    fn entry(id: u64, employee: &str, category: Category, hours: &str, remarks: &str) -> TimeEntryRow {
        TimeEntryRow {
            id: RowId(id),
            employee_id: employee.to_string(),
            date: "2024-01-01".to_string(),
            category: Some(category),
            hours: hours.to_string(),
            remarks: remarks.to_string(),
        }
    }

    #[test]
    fn summary_table_has_one_line_per_employee() {
        let employees = [Employee::new("1", "Alice"), Employee::new("2", "Bob")];
        let rows = [
            entry(1, "1", Category::NormalTime, "8", "ok"),
            entry(2, "1", Category::NormalTime, "2", "ok"),
            entry(3, "2", Category::OvertimeDouble, "1.5", "callout"),
        ];
        let summary = summarize(&employees, &rows);
        let mut output = Vec::new();
        run(&mut output, &summary, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<Vec<&str>> = output
            .lines()
            .map(|line| line.split("  ").map(str::trim).filter(|cell| !cell.is_empty()).collect())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            vec![
                "Employee",
                "Normal Time",
                "Public Holiday",
                "Annual Leave",
                "Sick Leave",
                "Tafe",
                "OT x 1.5",
                "OT x 2",
                "RDO",
                "Total",
                "Remarks"
            ]
        );
        assert_eq!(lines[1], vec!["Alice", "10", "0", "0", "0", "0", "0", "0", "0", "10", "ok"]);
        assert_eq!(lines[2], vec!["Bob", "0", "0", "0", "0", "0", "0", "1.5", "0", "1.5", "callout"]);
    }

    #[test]
    fn summary_numbers_are_right_aligned() {
        let employees = [Employee::new("1", "Alice")];
        let rows = [entry(1, "1", Category::Tafe, "7.25", "")];
        let summary = summarize(&employees, &rows);
        let mut output = Vec::new();
        run(&mut output, &summary, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        let header = output.lines().next().unwrap();
        let alice = output.lines().nth(1).unwrap();
        let tafe_end = header.find("Tafe").unwrap() + "Tafe".len();
        assert_eq!(&alice[tafe_end - 4..tafe_end], "7.25");
        assert!(alice.ends_with("7.25"));
    }

    #[test]
    fn summary_without_directory_hints() {
        let mut output = Vec::new();
        run(&mut output, &[], false).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("No employees in directory."));
    }

    #[test]
    fn summary_json_uses_category_labels() {
        let employees = [Employee::new("1", "Alice")];
        let rows = [entry(1, "1", Category::Rdo, "8", "")];
        let summary = summarize(&employees, &rows);
        let mut output = Vec::new();
        run(&mut output, &summary, true).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json[0]["employeeName"], "Alice");
        assert_eq!(json[0]["RDO"], 8.0);
        assert_eq!(json[0]["total"], 8.0);
    }
}
