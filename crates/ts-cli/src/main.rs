use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ts_cli::commands::{employees, export, row, submit, summary, util};
use ts_cli::{Cli, Commands, Config, RowAction, drafts, session};
use ts_core::Timesheet;

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")
}

/// Loads the drafts and the directory into a session.
fn open_timesheet(config: &Config, with_directory: bool) -> Result<Timesheet> {
    let store = drafts::load(&config.draft_path).context("failed to load drafts")?;
    let directory = if with_directory {
        runtime()?.block_on(session::load_directory(config))?
    } else {
        Vec::new()
    };
    Ok(Timesheet::new(directory, store))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so CSV and JSON on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Employees { json } => {
            let directory = runtime()?.block_on(session::load_directory(&config))?;
            employees::run(&mut stdout, &directory, *json)?;
        }
        Commands::Row(action) => {
            let _lock = drafts::lock(&config.draft_path)?;
            let with_directory = matches!(action, RowAction::List { .. });
            let mut sheet = open_timesheet(&config, with_directory)?;
            let today = util::local_today();
            match action {
                RowAction::Add(args) => {
                    row::add(&mut stdout, &mut sheet, args, today)?;
                }
                RowAction::Set(args) => row::set(&mut stdout, &mut sheet, args, today)?,
                RowAction::Remove { row: id } => row::remove(&mut stdout, &mut sheet, *id)?,
                RowAction::List { json } => row::list(&mut stdout, &sheet, *json)?,
                RowAction::Clear => row::clear(&mut stdout, &mut sheet)?,
            }
            if !with_directory {
                drafts::save(&config.draft_path, sheet.store())?;
            }
        }
        Commands::Summary { json } => {
            let sheet = open_timesheet(&config, true)?;
            summary::run(&mut stdout, sheet.summary(), *json)?;
        }
        Commands::Export(args) => {
            let sheet = open_timesheet(&config, true)?;
            export::run(&mut stdout, sheet.summary(), args, config.csv_quoting)?;
        }
        Commands::Submit => {
            let _lock = drafts::lock_for_submission(&config.draft_path)?;
            let mut sheet = open_timesheet(&config, false)?;
            let client = session::client(&config)?;
            let outcome = runtime()?.block_on(submit::run(&mut stdout, &mut sheet, &client))?;
            if let submit::SubmitOutcome::Submitted(count) = outcome {
                tracing::debug!(count, "clearing submitted drafts");
                drafts::save(&config.draft_path, sheet.store())?;
            }
        }
    }

    Ok(())
}
