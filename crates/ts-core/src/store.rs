//! Draft entry store.
//!
//! Owns the user-edited list of draft rows. The store always keeps at least
//! one row so there is somewhere to type; removing or clearing the last row
//! replaces it with a fresh empty one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::UnknownCategory;
use crate::row::{RowField, RowId, TimeEntryRow};

/// Entry store errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No row with the given id.
    #[error("row not found: {id}")]
    RowNotFound { id: RowId },

    /// The field name is not an editable row field.
    #[error("unknown field: {field} (expected employee, date, category, hours or remarks)")]
    UnknownField { field: String },

    /// The category value is outside the closed category set.
    #[error(transparent)]
    Category(#[from] UnknownCategory),
}

/// Mutable list of draft rows with a monotonically increasing id counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStore {
    rows: Vec<TimeEntryRow>,
    next_id: u64,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    /// Creates a store holding one empty row.
    pub fn new() -> Self {
        let mut store = Self {
            rows: Vec::new(),
            next_id: 1,
        };
        store.add_row();
        store
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[TimeEntryRow] {
        &self.rows
    }

    /// Looks up a row by id.
    pub fn row(&self, id: RowId) -> Option<&TimeEntryRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Rows that satisfy the completeness invariant.
    pub fn complete_rows(&self) -> impl Iterator<Item = &TimeEntryRow> {
        self.rows.iter().filter(|row| row.is_complete())
    }

    /// Appends an empty row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(TimeEntryRow::empty(id));
        id
    }

    /// Sets one field of one row from raw text.
    ///
    /// A rejected value leaves the row unchanged.
    pub fn update_field(
        &mut self,
        id: RowId,
        field: RowField,
        value: &str,
    ) -> Result<(), StoreError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::RowNotFound { id })?;
        row.set_field(field, value)
    }

    /// Removes one row.
    pub fn remove_row(&mut self, id: RowId) -> Result<TimeEntryRow, StoreError> {
        let position = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(StoreError::RowNotFound { id })?;
        let removed = self.rows.remove(position);
        if self.rows.is_empty() {
            self.add_row();
        }
        Ok(removed)
    }

    /// Drops every row and starts over with one empty row.
    ///
    /// Ids are not reset.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.add_row();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn new_store_has_one_empty_row() {
        let store = EntryStore::new();
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0], TimeEntryRow::empty(RowId(1)));
        assert_eq!(store.complete_rows().count(), 0);
    }

    #[test]
    fn add_row_assigns_increasing_ids() {
        let mut store = EntryStore::new();
        assert_eq!(store.add_row(), RowId(2));
        assert_eq!(store.add_row(), RowId(3));
        let ids: Vec<_> = store.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![RowId(1), RowId(2), RowId(3)]);
    }

    #[test]
    fn update_field_edits_only_the_target_row() {
        let mut store = EntryStore::new();
        let second = store.add_row();
        store
            .update_field(second, RowField::Category, "Tafe")
            .unwrap();
        store.update_field(second, RowField::Hours, "3.5").unwrap();

        assert_eq!(store.row(RowId(1)).unwrap().category, None);
        let row = store.row(second).unwrap();
        assert_eq!(row.category, Some(Category::Tafe));
        assert_eq!(row.hours, "3.5");
    }

    #[test]
    fn update_field_on_missing_row_errors() {
        let mut store = EntryStore::new();
        let err = store
            .update_field(RowId(42), RowField::Date, "2024-01-01")
            .unwrap_err();
        assert_eq!(err, StoreError::RowNotFound { id: RowId(42) });
        assert_eq!(err.to_string(), "row not found: 42");
    }

    #[test]
    fn removing_last_row_leaves_a_fresh_one() {
        let mut store = EntryStore::new();
        store.remove_row(RowId(1)).unwrap();
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0].id, RowId(2));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = EntryStore::new();
        let second = store.add_row();
        store.remove_row(second).unwrap();
        assert_eq!(store.add_row(), RowId(3));

        store.clear();
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0].id, RowId(4));
    }

    #[test]
    fn remove_missing_row_errors() {
        let mut store = EntryStore::new();
        assert!(matches!(
            store.remove_row(RowId(9)),
            Err(StoreError::RowNotFound { .. })
        ));
        assert_eq!(store.rows().len(), 1);
    }

    #[test]
    fn store_roundtrips_through_json() {
        let mut store = EntryStore::new();
        store
            .update_field(RowId(1), RowField::Remarks, "first day")
            .unwrap();
        store.add_row();

        let json = serde_json::to_string(&store).unwrap();
        let restored: EntryStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
    }
}
