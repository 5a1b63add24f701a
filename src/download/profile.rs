//! Run driver: wires the extractor, the paginator, and the pool together
//! for one profile.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::InstagramApi;
use crate::config::Config;
use crate::download::pool::{DownloadPool, DownloadTask, WORK_QUEUE_CAPACITY};
use crate::download::timeline::{stream_timeline, ProfileTimeline};
use crate::error::{Error, Result};
use crate::extract;
use crate::fs::ensure_profile_dir;

/// What one run accomplished.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    pub enqueued: u64,
    pub images: u64,
    pub videos: u64,
    pub downloaded: u64,
    pub failed: u64,
}

/// Download every media item the profile's timeline exposes.
///
/// Workers are started before the first page is requested, so nothing
/// enqueued can be lost, and the queue sender lives inside the producer
/// future, so the queue closes and the pool drains on every exit path:
/// success, fatal error, or interruption.
pub async fn download_profile(api: Arc<InstagramApi>, config: &Config) -> Result<RunReport> {
    let dest_dir = ensure_profile_dir(config)?;
    let username = config.target.username.clone();
    let page_size = config.options.page_size;

    let (task_tx, task_rx) = mpsc::channel::<DownloadTask>(WORK_QUEUE_CAPACITY);
    let pool = DownloadPool::start(Arc::clone(&api), config.options.workers, task_rx);

    let producer = {
        let api = Arc::clone(&api);
        let dest_dir = dest_dir.clone();
        async move {
            let page_html = api.fetch_profile_page(&username).await?;
            let user_id = extract::resolve_user_id(&page_html)?;
            let signature = extract::resolve_query_signature(&api, &page_html).await?;
            tracing::debug!("resolved user id {} and query signature {}", user_id, signature);

            let pager = ProfileTimeline {
                api: api.as_ref(),
                user_id,
                signature,
                page_size,
            };
            stream_timeline(&pager, &dest_dir, &task_tx).await
            // task_tx drops with this future, closing the queue.
        }
    };

    let outcome = tokio::select! {
        result = producer => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, letting in-flight downloads finish");
            Err(Error::Aborted)
        }
    };

    let stats = pool.join().await;
    tracing::info!(
        "pool drained: {} downloaded, {} failed",
        stats.downloaded,
        stats.failed
    );

    let totals = outcome?;

    Ok(RunReport {
        enqueued: totals.enqueued,
        images: totals.images,
        videos: totals.videos,
        downloaded: stats.downloaded,
        failed: stats.failed,
    })
}
