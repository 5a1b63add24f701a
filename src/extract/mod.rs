//! Extraction of run state from the platform's rendered assets.
//!
//! The media-listing endpoint needs two values no public endpoint exposes:
//! the profile's numeric identifier, embedded in a JSON state blob on the
//! profile page, and the GraphQL query signature, declared inside a
//! preloaded JavaScript bundle. Both extractions scrape a moving target
//! (the platform's own front-end assets), so they live behind this narrow
//! interface and nothing else in the crate touches page or bundle text.

pub mod bundle;
pub mod page;

pub use bundle::{resolve_query_signature, TIMELINE_QUERY_SIGNATURE_INDEX};
pub use page::resolve_user_id;
