//! Output directory layout.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::sanitize_filename;

/// Resolve and create the per-run output directory for a profile:
/// `<download_dir>/<username>/`. Every downloaded file lands directly in
/// it, no subdirectories.
pub fn ensure_profile_dir(config: &Config) -> Result<PathBuf> {
    let folder = sanitize_filename(&config.target.username)?;
    let dir = config.download_directory().join(folder);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
