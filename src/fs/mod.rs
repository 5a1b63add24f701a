//! File system helpers: output layout and filename handling.

pub mod naming;
pub mod paths;

pub use naming::{filename_from_url, sanitize_filename};
pub use paths::ensure_profile_dir;
