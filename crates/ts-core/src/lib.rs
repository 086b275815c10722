//! Core domain logic for timesheet entry.
//!
//! This crate contains the fundamental types and logic for:
//! - Draft rows: the user-edited entry list and its completeness rule
//! - Aggregation: the per-employee, per-category weekly summary
//! - Submission: filtering complete rows and gating concurrent sends
//! - Export: CSV serialization of the summary

pub mod category;
mod export;
pub mod row;
mod store;
mod submission;
mod summary;
mod timesheet;

pub use category::{Category, UnknownCategory};
pub use export::{ExportError, Quoting, SUMMARY_CSV_FILE_NAME, format_hours, render_csv};
pub use row::{Employee, RowField, RowId, TimeEntryRow, parse_hours};
pub use store::{EntryStore, StoreError};
pub use submission::{InFlight, SubmissionEntry, SubmitError, SubmitGate, prepare_submission};
pub use summary::{CategoryHours, REMARKS_SEPARATOR, SummaryRow, summarize};
pub use timesheet::{PendingSubmission, Timesheet};
