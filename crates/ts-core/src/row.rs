//! Directory employees and draft time-entry rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;
use crate::store::StoreError;

/// An employee from the directory. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Directory identifier. The API may send it as a string or a number.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Locally unique row identifier, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draft time entry as typed by the user.
///
/// Text fields hold the raw input; an empty string means "unset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRow {
    pub id: RowId,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub remarks: String,
}

impl TimeEntryRow {
    /// Creates a row with every field unset.
    pub const fn empty(id: RowId) -> Self {
        Self {
            id,
            employee_id: String::new(),
            date: String::new(),
            category: None,
            hours: String::new(),
            remarks: String::new(),
        }
    }

    /// A row is complete when employee, date, category and hours are all set.
    pub fn is_complete(&self) -> bool {
        !self.employee_id.is_empty()
            && !self.date.is_empty()
            && self.category.is_some()
            && !self.hours.is_empty()
    }

    /// Numeric hours under the zero-on-failure policy of [`parse_hours`].
    pub fn hours_value(&self) -> f64 {
        parse_hours(&self.hours)
    }

    /// Sets one field from raw text. An empty value clears the field.
    pub fn set_field(&mut self, field: RowField, value: &str) -> Result<(), StoreError> {
        match field {
            RowField::Employee => self.employee_id = value.to_string(),
            RowField::Date => self.date = value.to_string(),
            RowField::Category => {
                self.category = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            RowField::Hours => self.hours = value.to_string(),
            RowField::Remarks => self.remarks = value.to_string(),
        }
        Ok(())
    }
}

/// Parses an hours value, degrading to 0 when the text is not a finite number.
///
/// Malformed hours never fail aggregation or submission.
pub fn parse_hours(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Editable fields of a draft row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Employee,
    Date,
    Category,
    Hours,
    Remarks,
}

impl RowField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Date => "date",
            Self::Category => "category",
            Self::Hours => "hours",
            Self::Remarks => "remarks",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" | "employee-id" | "employeeId" => Ok(Self::Employee),
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            "hours" => Ok(Self::Hours),
            "remarks" => Ok(Self::Remarks),
            _ => Err(StoreError::UnknownField {
                field: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> TimeEntryRow {
        TimeEntryRow {
            id: RowId(1),
            employee_id: "1".to_string(),
            date: "2024-01-01".to_string(),
            category: Some(Category::NormalTime),
            hours: "7.5".to_string(),
            remarks: String::new(),
        }
    }

    #[test]
    fn completeness_requires_all_four_fields() {
        assert!(complete_row().is_complete());

        let mut row = complete_row();
        row.employee_id.clear();
        assert!(!row.is_complete());

        let mut row = complete_row();
        row.date.clear();
        assert!(!row.is_complete());

        let mut row = complete_row();
        row.category = None;
        assert!(!row.is_complete());

        let mut row = complete_row();
        row.hours.clear();
        assert!(!row.is_complete());
    }

    #[test]
    fn remarks_do_not_affect_completeness() {
        let mut row = complete_row();
        row.remarks = "site visit".to_string();
        assert!(row.is_complete());
    }

    #[test]
    fn parse_hours_degrades_to_zero() {
        assert!((parse_hours("7.25") - 7.25).abs() < f64::EPSILON);
        assert!((parse_hours(" 8 ") - 8.0).abs() < f64::EPSILON);
        assert!(parse_hours("abc").abs() < f64::EPSILON);
        assert!(parse_hours("").abs() < f64::EPSILON);
        assert!(parse_hours("NaN").abs() < f64::EPSILON);
        assert!(parse_hours("inf").abs() < f64::EPSILON);
    }

    #[test]
    fn set_field_rejects_unknown_category() {
        let mut row = TimeEntryRow::empty(RowId(3));
        let err = row.set_field(RowField::Category, "Lunch").unwrap_err();
        assert!(matches!(err, StoreError::Category(_)));
        assert_eq!(row.category, None);
    }

    #[test]
    fn set_field_with_empty_value_clears() {
        let mut row = complete_row();
        row.set_field(RowField::Category, "").unwrap();
        row.set_field(RowField::Hours, "").unwrap();
        assert_eq!(row.category, None);
        assert!(row.hours.is_empty());
    }

    #[test]
    fn employee_id_accepts_numbers_and_strings() {
        let employees: Vec<Employee> =
            serde_json::from_str(r#"[{"id":1,"name":"Alice"},{"id":"e-2","name":"Bob"}]"#)
                .unwrap();
        assert_eq!(employees[0], Employee::new("1", "Alice"));
        assert_eq!(employees[1], Employee::new("e-2", "Bob"));
    }

    #[test]
    fn row_field_parses_names() {
        assert_eq!("employee".parse::<RowField>().unwrap(), RowField::Employee);
        assert_eq!("remarks".parse::<RowField>().unwrap(), RowField::Remarks);
        assert!(matches!(
            "colour".parse::<RowField>(),
            Err(StoreError::UnknownField { .. })
        ));
    }
}
