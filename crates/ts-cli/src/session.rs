//! Wiring shared by commands: the API client and the employee directory.

use anyhow::{Context, Result};
use ts_api::Client;
use ts_core::Employee;

use crate::Config;

/// Builds the API client from configuration.
pub fn client(config: &Config) -> Result<Client> {
    Client::new(
        &config.api_base,
        config.api_token.as_deref(),
        config.request_timeout(),
    )
    .context("failed to create API client")
}

/// Loads the employee directory.
///
/// Reads `employees_path` when configured, otherwise asks the service. Any
/// failure to obtain the list is logged and yields an empty directory.
pub async fn load_directory(config: &Config) -> Result<Vec<Employee>> {
    if let Some(path) = &config.employees_path {
        let directory = match read_directory_file(path) {
            Ok(directory) => directory,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "failed to load employee directory");
                Vec::new()
            }
        };
        return Ok(directory);
    }

    let client = client(config)?;
    Ok(client.load_directory().await)
}

fn read_directory_file(path: &std::path::Path) -> Result<Vec<Employee>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
