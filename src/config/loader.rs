//! Configuration structures and loading logic.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Profile targeting configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    /// Username of the profile to download.
    #[serde(default)]
    pub username: String,
}

/// Session credentials configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Value of the `sessionid` cookie from a logged-in browser session.
    #[serde(default)]
    pub session_id: String,

    /// Browser user agent string sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Proxy URL (http, https or socks5) to route all requests through.
    #[serde(default)]
    pub proxy: Option<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Number of parallel download workers.
    #[serde(default = "default_workers")]
    pub workers: u32,

    /// Posts requested per media-listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Timeout applied to every network request, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Base directory downloads are placed under. The profile's own
    /// folder is created inside it. Defaults to the current directory.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout_seconds(),
            download_directory: None,
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/69.0.3497.92 Safari/537.36"
        .to_string()
}

fn default_workers() -> u32 {
    4
}

fn default_page_size() -> u32 {
    12
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective base download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_gets_defaults() {
        let config: Config = toml::from_str(
            r#"
            [target]
            username = "alice"

            [session]
            session_id = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.target.username, "alice");
        assert_eq!(config.session.session_id, "abc123");
        assert_eq!(config.options.workers, 4);
        assert_eq!(config.options.page_size, 12);
        assert_eq!(config.options.timeout_seconds, 10);
        assert!(config.session.proxy.is_none());
    }

    #[test]
    fn options_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            [options]
            workers = 8
            page_size = 25
            timeout_seconds = 30
            download_directory = "/tmp/media"
            "#,
        )
        .unwrap();

        assert_eq!(config.options.workers, 8);
        assert_eq!(config.options.page_size, 25);
        assert_eq!(config.options.timeout_seconds, 30);
        assert_eq!(
            config.options.download_directory,
            Some(PathBuf::from("/tmp/media"))
        );
    }
}
