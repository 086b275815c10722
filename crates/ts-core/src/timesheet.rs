//! Session controller owning the directory, the draft rows and the summary.
//!
//! Every mutation goes through [`Timesheet`], which recomputes the summary
//! afterwards so readers never see a stale table.

use crate::row::{Employee, RowField, RowId, TimeEntryRow};
use crate::store::{EntryStore, StoreError};
use crate::submission::{InFlight, SubmissionEntry, SubmitError, SubmitGate, prepare_submission};
use crate::summary::{SummaryRow, summarize};

/// Application state for one timesheet session.
#[derive(Debug)]
pub struct Timesheet {
    directory: Vec<Employee>,
    store: EntryStore,
    summary: Vec<SummaryRow>,
    gate: SubmitGate,
}

impl Default for Timesheet {
    fn default() -> Self {
        Self::new(Vec::new(), EntryStore::new())
    }
}

impl Timesheet {
    pub fn new(directory: Vec<Employee>, store: EntryStore) -> Self {
        let mut timesheet = Self {
            directory,
            store,
            summary: Vec::new(),
            gate: SubmitGate::new(),
        };
        timesheet.recompute();
        timesheet
    }

    /// Replaces the employee directory.
    pub fn set_directory(&mut self, directory: Vec<Employee>) {
        self.directory = directory;
        self.recompute();
    }

    pub fn directory(&self) -> &[Employee] {
        &self.directory
    }

    pub fn rows(&self) -> &[TimeEntryRow] {
        self.store.rows()
    }

    pub const fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn into_store(self) -> EntryStore {
        self.store
    }

    /// The summary as of the last mutation.
    pub fn summary(&self) -> &[SummaryRow] {
        &self.summary
    }

    /// Looks up the display name for an employee id.
    pub fn employee_name(&self, employee_id: &str) -> Option<&str> {
        self.directory
            .iter()
            .find(|employee| employee.id == employee_id)
            .map(|employee| employee.name.as_str())
    }

    pub fn add_row(&mut self) -> RowId {
        let id = self.store.add_row();
        self.recompute();
        id
    }

    pub fn update_field(
        &mut self,
        id: RowId,
        field: RowField,
        value: &str,
    ) -> Result<(), StoreError> {
        self.store.update_field(id, field, value)?;
        self.recompute();
        Ok(())
    }

    pub fn remove_row(&mut self, id: RowId) -> Result<TimeEntryRow, StoreError> {
        let removed = self.store.remove_row(id)?;
        self.recompute();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.recompute();
    }

    /// Starts a submission of the complete rows.
    ///
    /// Returns `Ok(None)` when there is nothing to submit and
    /// [`SubmitError::InProgress`] while another submission is outstanding.
    /// The returned handle keeps submission disabled until it is dropped or
    /// passed to [`Timesheet::complete_submission`].
    pub fn begin_submission(&self) -> Result<Option<PendingSubmission>, SubmitError> {
        let in_flight = self.gate.try_acquire()?;
        let entries = prepare_submission(self.store.rows());
        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(PendingSubmission {
            entries,
            _in_flight: in_flight,
        }))
    }

    /// Whether a submission is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.gate.is_busy()
    }

    /// Records a confirmed successful submission: the drafts are cleared.
    ///
    /// A failed submission is abandoned by dropping the handle instead, which
    /// leaves the rows as they were.
    pub fn complete_submission(&mut self, submission: PendingSubmission) {
        drop(submission);
        self.clear();
    }

    fn recompute(&mut self) {
        self.summary = summarize(&self.directory, self.store.rows());
    }
}

/// A batch of entries being sent. Submission stays disabled while it lives.
#[derive(Debug)]
pub struct PendingSubmission {
    entries: Vec<SubmissionEntry>,
    _in_flight: InFlight,
}

impl PendingSubmission {
    pub fn entries(&self) -> &[SubmissionEntry] {
        &self.entries
    }
}
