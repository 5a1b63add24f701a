//! Download pipeline: paginator, worker pool, and the run driver.
//!
//! One producer walks the timeline and pushes tasks into a bounded queue;
//! a fixed set of workers drains it. The driver owns both ends and
//! guarantees the queue closes and the pool drains on every exit path.

pub mod pool;
pub mod profile;
pub mod timeline;

pub use pool::{DownloadPool, DownloadTask, PoolStats, WORK_QUEUE_CAPACITY};
pub use profile::{download_profile, RunReport};
pub use timeline::{stream_timeline, ProfileTimeline, TimelinePager, TimelineTotals};
