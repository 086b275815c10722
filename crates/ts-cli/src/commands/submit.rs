//! Submit command for sending complete rows to the timesheet service.
//!
//! Only complete rows are sent, as one batch. On success the drafts are
//! cleared; on failure they are kept so the user can retry, and only a
//! generic notice is shown (the detail goes to the log).

use std::io::Write;

use anyhow::{Result, bail};
use ts_api::Client;
use ts_core::Timesheet;

/// What a submit run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No complete rows; nothing was sent.
    NothingToSubmit,
    /// This many entries were accepted by the service.
    Submitted(usize),
}

pub async fn run<W: Write>(
    writer: &mut W,
    sheet: &mut Timesheet,
    client: &Client,
) -> Result<SubmitOutcome> {
    let Some(pending) = sheet.begin_submission()? else {
        writeln!(writer, "Nothing to submit: no complete rows.")?;
        return Ok(SubmitOutcome::NothingToSubmit);
    };

    let count = pending.entries().len();
    tracing::debug!(count, "submitting entries");
    match client.submit_entries(pending.entries()).await {
        Ok(()) => {
            sheet.complete_submission(pending);
            writeln!(writer, "Entries saved successfully!")?;
            Ok(SubmitOutcome::Submitted(count))
        }
        Err(err) => {
            drop(pending);
            tracing::error!(error = %err, "failed to save entries");
            bail!("Error saving entries");
        }
    }
}
