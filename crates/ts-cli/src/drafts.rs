//! Draft row persistence.
//!
//! The entry store is kept in `drafts.json` between invocations. A sibling
//! `.lock` file serializes writers: edits wait for the lock, while `ts submit`
//! refuses to start if another submission holds it.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use ts_core::{EntryStore, SubmitError};

/// Exclusive hold on the draft file. Released on drop.
#[derive(Debug)]
pub struct DraftLock {
    _file: File,
}

/// Returns the lock file path for a draft file.
fn lock_path(draft_path: &Path) -> PathBuf {
    let mut name = OsString::from(draft_path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

fn open_lock_file(draft_path: &Path) -> Result<File> {
    if let Some(parent) = draft_path.parent() {
        fs::create_dir_all(parent).context("failed to create draft directory")?;
    }
    let path = lock_path(draft_path);
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)
        .with_context(|| format!("failed to open lock file {}", path.display()))
}

/// Waits for exclusive access to the drafts.
pub fn lock(draft_path: &Path) -> Result<DraftLock> {
    let file = open_lock_file(draft_path)?;
    file.lock_exclusive()
        .context("failed to acquire draft lock")?;
    Ok(DraftLock { _file: file })
}

/// Takes exclusive access for a submission, failing if it is already held.
pub fn lock_for_submission(draft_path: &Path) -> Result<DraftLock> {
    let file = open_lock_file(draft_path)?;
    file.try_lock_exclusive()
        .map_err(|_| SubmitError::InProgress)?;
    Ok(DraftLock { _file: file })
}

/// Loads the draft store.
///
/// Returns a fresh store with one empty row if the file doesn't exist.
/// Returns an error if the file exists but is unreadable/unparseable.
pub fn load(draft_path: &Path) -> Result<EntryStore> {
    match fs::read_to_string(draft_path) {
        Ok(content) => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", draft_path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EntryStore::new()),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", draft_path.display())),
    }
}

/// Writes the draft store.
pub fn save(draft_path: &Path, store: &EntryStore) -> Result<()> {
    if let Some(parent) = draft_path.parent() {
        fs::create_dir_all(parent).context("failed to create draft directory")?;
    }
    let json = serde_json::to_string_pretty(store).context("failed to serialize drafts")?;
    fs::write(draft_path, json)
        .with_context(|| format!("failed to write {}", draft_path.display()))?;
    tracing::debug!(path = %draft_path.display(), rows = store.rows().len(), "saved drafts");
    Ok(())
}
