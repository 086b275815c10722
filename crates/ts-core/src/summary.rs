//! Weekly summary aggregation.
//!
//! Groups flat draft rows into one summary row per directory employee, with
//! per-category hours, a total, and the employee's merged remarks.
//!
//! # Algorithm Summary
//!
//! 1. Seed one zeroed accumulator per employee, keyed by employee id
//! 2. Fold every complete row into its employee's accumulator, in input order
//! 3. Deduplicate remarks (first occurrence wins) and join them with `"; "`
//!
//! Incomplete rows and rows naming an employee outside the directory are
//! skipped. Hours that fail to parse count as 0. The function is pure, so
//! the same inputs always produce the same summary.

use std::collections::{HashMap, HashSet};
use std::ops::Index;

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::category::Category;
use crate::row::{Employee, TimeEntryRow};

/// Separator between merged remarks.
pub const REMARKS_SEPARATOR: &str = "; ";

/// Hours per category, in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryHours([f64; Category::COUNT]);

impl CategoryHours {
    /// Hours recorded against one category.
    pub const fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    fn add(&mut self, category: Category, hours: f64) {
        self.0[category.index()] += hours;
    }

    /// `(category, hours)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Category> for CategoryHours {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.0[category.index()]
    }
}

impl Serialize for CategoryHours {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, hours) in self.iter() {
            map.serialize_entry(category.label(), &hours)?;
        }
        map.end()
    }
}

/// Aggregated hours for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(flatten)]
    pub hours: CategoryHours,
    pub total: f64,
    pub remarks: String,
}

struct Accumulator<'a> {
    employee: &'a Employee,
    hours: CategoryHours,
    total: f64,
    remarks: Vec<&'a str>,
}

impl Accumulator<'_> {
    fn finish(self) -> SummaryRow {
        SummaryRow {
            employee_id: self.employee.id.clone(),
            employee_name: self.employee.name.clone(),
            hours: self.hours,
            total: self.total,
            remarks: join_unique(&self.remarks),
        }
    }
}

/// Builds the weekly summary: exactly one row per directory employee, in
/// directory order.
///
/// Employees sharing an id are one employee; the first listing wins.
pub fn summarize(employees: &[Employee], rows: &[TimeEntryRow]) -> Vec<SummaryRow> {
    let mut accumulators: Vec<Accumulator<'_>> = Vec::with_capacity(employees.len());
    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(employees.len());

    for employee in employees {
        if by_id.contains_key(employee.id.as_str()) {
            tracing::warn!(employee_id = %employee.id, "duplicate employee id in directory, ignoring");
            continue;
        }
        by_id.insert(employee.id.as_str(), accumulators.len());
        accumulators.push(Accumulator {
            employee,
            hours: CategoryHours::default(),
            total: 0.0,
            remarks: Vec::new(),
        });
    }

    for row in rows {
        if !row.is_complete() {
            continue;
        }
        let Some(category) = row.category else {
            continue;
        };
        let Some(&slot) = by_id.get(row.employee_id.as_str()) else {
            tracing::debug!(row = %row.id, employee_id = %row.employee_id, "skipping row for unknown employee");
            continue;
        };

        let hours = row.hours_value();
        let acc = &mut accumulators[slot];
        acc.hours.add(category, hours);
        acc.total += hours;
        if !row.remarks.is_empty() {
            acc.remarks.push(&row.remarks);
        }
    }

    accumulators.into_iter().map(Accumulator::finish).collect()
}

/// Joins remarks, dropping exact repeats while keeping first-occurrence order.
fn join_unique(remarks: &[&str]) -> String {
    let mut seen = HashSet::new();
    remarks
        .iter()
        .copied()
        .filter(|remark| seen.insert(*remark))
        .collect::<Vec<_>>()
        .join(REMARKS_SEPARATOR)
}
