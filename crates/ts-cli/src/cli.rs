//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::export::ExportArgs;
use crate::commands::row::{AddArgs, SetArgs};

/// Timesheet entry and weekly summary.
///
/// Log daily hours per employee and category as draft rows, review the
/// weekly summary, export it as CSV and submit the entries.
#[derive(Debug, Parser)]
#[command(name = "ts", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the employee directory.
    Employees {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Edit draft entry rows.
    #[command(subcommand)]
    Row(RowAction),

    /// Show the weekly summary per employee and category.
    Summary {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export the weekly summary as CSV.
    Export(ExportArgs),

    /// Submit complete rows to the timesheet service.
    Submit,
}

/// Draft row operations.
#[derive(Debug, Subcommand)]
pub enum RowAction {
    /// Add a row, optionally pre-filled.
    Add(AddArgs),

    /// Change one field of a row.
    Set(SetArgs),

    /// Remove a row.
    Remove {
        /// Row id (see `ts row list`).
        row: u64,
    },

    /// List draft rows.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Discard all draft rows.
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use ts_core::RowField;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_row_set_with_empty_value() {
        let cli = Cli::parse_from(["ts", "row", "set", "3", "hours", ""]);
        let Some(Commands::Row(RowAction::Set(args))) = cli.command else {
            panic!("expected row set");
        };
        assert_eq!(args.row, 3);
        assert_eq!(args.field, RowField::Hours);
        assert!(args.value.is_empty());
    }

    #[test]
    fn rejects_unknown_row_field() {
        assert!(Cli::try_parse_from(["ts", "row", "set", "1", "colour", "red"]).is_err());
    }

    #[test]
    fn parses_export_flags() {
        let cli = Cli::parse_from(["ts", "-v", "export", "--raw", "-o", "-"]);
        assert!(cli.verbose);
        let Some(Commands::Export(args)) = cli.command else {
            panic!("expected export");
        };
        assert!(args.raw);
        assert_eq!(args.output, Some(PathBuf::from("-")));
    }
}
