//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Instagram profile media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-downloader",
    version,
    about = "Download every photo and video posted by an Instagram profile",
    long_about = "A CLI tool that resolves a profile's internal GraphQL query from its\n\
                  rendered page, walks the timeline cursor by cursor, and downloads\n\
                  all media with a pool of parallel workers."
)]
pub struct Args {
    /// Profile username to download.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Value of the `sessionid` cookie from a logged-in browser session.
    #[arg(short = 's', long = "session-id", env = "INSTAGRAM_SESSION_ID")]
    pub session_id: Option<String>,

    /// Proxy URL (http, https or socks5) to route requests through.
    #[arg(short, long, env = "INSTAGRAM_PROXY")]
    pub proxy: Option<String>,

    /// Number of parallel download workers.
    #[arg(short, long)]
    pub workers: Option<u32>,

    /// Posts requested per timeline page.
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,

    /// Per-request network timeout in seconds.
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Only log warnings and errors.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(user) = self.user {
            config.target.username = user;
        }

        if let Some(session_id) = self.session_id {
            config.session.session_id = session_id;
        }

        if let Some(proxy) = self.proxy {
            config.session.proxy = Some(proxy);
        }

        if let Some(workers) = self.workers {
            config.options.workers = workers;
        }

        if let Some(page_size) = self.page_size {
            config.options.page_size = page_size;
        }

        if let Some(timeout) = self.timeout {
            config.options.timeout_seconds = timeout;
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }
    }
}
