//! Timesheet CLI library.
//!
//! This crate provides the CLI interface for timesheet entry: draft row
//! editing, the weekly summary, CSV export and submission.

mod cli;
pub mod commands;
mod config;
pub mod drafts;
pub mod session;

pub use cli::{Cli, Commands, RowAction};
pub use config::Config;
