//! Submission filtering and the single-outstanding-submission gate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::row::TimeEntryRow;

/// Submission errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Another submission has not finished yet.
    #[error("a submission is already in progress")]
    InProgress,
}

/// A complete entry in the shape the API accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEntry {
    pub employee_id: String,
    pub date: String,
    pub category: Category,
    pub hours: f64,
    pub remarks: String,
}

impl SubmissionEntry {
    /// Converts a row, or returns `None` if the row is incomplete.
    pub fn from_row(row: &TimeEntryRow) -> Option<Self> {
        if !row.is_complete() {
            return None;
        }
        Some(Self {
            employee_id: row.employee_id.clone(),
            date: row.date.clone(),
            category: row.category?,
            hours: row.hours_value(),
            remarks: row.remarks.clone(),
        })
    }
}

/// Keeps complete rows, in order, with hours converted to numbers.
///
/// An empty result means there is nothing to submit.
pub fn prepare_submission<'a, I>(rows: I) -> Vec<SubmissionEntry>
where
    I: IntoIterator<Item = &'a TimeEntryRow>,
{
    rows.into_iter().filter_map(SubmissionEntry::from_row).collect()
}

/// Allows one submission at a time.
///
/// Cloning shares the same gate.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    busy: Arc<AtomicBool>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate, or fails if a submission is already outstanding.
    pub fn try_acquire(&self) -> Result<InFlight, SubmitError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmitError::InProgress)?;
        Ok(InFlight {
            busy: Arc::clone(&self.busy),
        })
    }

    /// Whether a submission is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of a submission. Dropping it reopens the gate,
/// whatever the outcome.
#[derive(Debug)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
