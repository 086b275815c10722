//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use ts_core::Quoting;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the draft rows file.
    pub draft_path: PathBuf,
    /// Base URL of the timesheet service.
    pub api_base: String,
    /// Bearer token sent with every request.
    pub api_token: Option<String>,
    /// Local JSON directory used instead of the service's `/employees`.
    pub employees_path: Option<PathBuf>,
    /// Request timeout in seconds. Unset means no timeout.
    pub request_timeout_secs: Option<u64>,
    /// Quoting used by `ts export`.
    pub csv_quoting: Quoting,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("draft_path", &self.draft_path)
            .field("api_base", &self.api_base)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("employees_path", &self.employees_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("csv_quoting", &self.csv_quoting)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            draft_path: data_dir.join("drafts.json"),
            api_base: ts_api::DEFAULT_API_BASE.to_string(),
            api_token: None,
            employees_path: None,
            request_timeout_secs: None,
            csv_quoting: Quoting::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TS_*)
        figment = figment.merge(Env::prefixed("TS_"));

        figment.extract()
    }

    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Returns the platform-specific config directory for ts.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ts"))
}

/// Returns the platform-specific data directory for ts.
///
/// On Linux: `~/.local/share/ts`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("ts"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_dirs_data_path_ends_with_ts() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "ts");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_drafts() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.draft_path, data_dir.join("drafts.json"));
        assert_eq!(config.api_base, ts_api::DEFAULT_API_BASE);
        assert_eq!(config.csv_quoting, Quoting::Standard);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
draft_path = "/tmp/ts-test/drafts.json"
api_base = "http://localhost:9000"
api_token = "file-token"
request_timeout_secs = 15
csv_quoting = "raw"
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.draft_path, PathBuf::from("/tmp/ts-test/drafts.json"));
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.api_token.as_deref(), Some("file-token"));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.csv_quoting, Quoting::Raw);
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = Config {
            api_token: Some("very-secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
