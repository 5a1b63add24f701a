//! Instagram Downloader - profile media archiver
//!
//! This library downloads every photo and video posted by a public or
//! session-authorized Instagram profile. The media-listing endpoint is
//! not publicly documented, so the pipeline first mines two values out of
//! the profile's rendered page: the profile's numeric identifier (from an
//! embedded JSON state blob) and the GraphQL query signature (from a
//! preloaded JavaScript bundle). It then walks the cursor-paged timeline
//! and streams every media file to disk through a pool of parallel
//! workers fed by one bounded queue.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use instagram_downloader::{download_profile, Config, InstagramApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.target.username = "alice".to_string();
//!     config.session.session_id = "your-session-cookie".to_string();
//!
//!     let api = Arc::new(InstagramApi::new(&config)?);
//!     let report = download_profile(api, &config).await?;
//!     println!("downloaded {} files", report.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::InstagramApi;
pub use config::Config;
pub use download::{download_profile, DownloadPool, DownloadTask, RunReport};
pub use error::{Error, Result};
pub use media::{MediaItem, MediaKind};
