//! Platform web API module.
//!
//! This module provides:
//! - The shared HTTP client (session cookie, user agent, proxy, timeout)
//! - Response types for the media-listing endpoint

pub mod client;
pub mod types;

pub use client::{InstagramApi, PLATFORM_ROOT};
pub use types::*;
