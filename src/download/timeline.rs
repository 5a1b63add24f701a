//! Cursor-driven walk of a profile's timeline media.

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use crate::api::types::TimelineMedia;
use crate::api::InstagramApi;
use crate::download::pool::DownloadTask;
use crate::error::{Error, Result};
use crate::media::{collect_page_items, MediaKind};

/// One source of timeline pages. The live implementation queries the
/// media-listing endpoint; tests substitute scripted pages.
#[async_trait]
pub trait TimelinePager: Send + Sync {
    async fn next_page(&self, cursor: &str) -> Result<TimelineMedia>;
}

/// The live pager: the media-listing query bound to one profile.
pub struct ProfileTimeline<'a> {
    pub api: &'a InstagramApi,
    pub user_id: String,
    pub signature: String,
    pub page_size: u32,
}

#[async_trait]
impl TimelinePager for ProfileTimeline<'_> {
    async fn next_page(&self, cursor: &str) -> Result<TimelineMedia> {
        self.api
            .fetch_timeline_page(&self.signature, &self.user_id, self.page_size, cursor)
            .await
    }
}

/// Totals accumulated while walking the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineTotals {
    pub enqueued: u64,
    pub images: u64,
    pub videos: u64,
}

/// Walk the timeline from the first page, pushing one [`DownloadTask`]
/// per media item into `queue` as pages are decoded. Items are enqueued
/// in page order, posts expanded in place; sending suspends when the
/// queue is full, so pagination runs no further ahead of the workers
/// than the queue capacity allows.
///
/// Terminates on the first page reporting no further pages.
pub async fn stream_timeline(
    pager: &dyn TimelinePager,
    dest_dir: &Path,
    queue: &Sender<DownloadTask>,
) -> Result<TimelineTotals> {
    let mut cursor = String::new();
    let mut totals = TimelineTotals::default();
    let mut first_page = true;

    loop {
        let page = pager.next_page(&cursor).await?;

        if first_page {
            tracing::info!("profile reports {} posts", page.count);
            first_page = false;
        }

        for item in collect_page_items(&page) {
            match item.kind {
                MediaKind::Image => totals.images += 1,
                MediaKind::Video => totals.videos += 1,
            }

            queue
                .send(DownloadTask {
                    url: item.url,
                    dest_dir: dest_dir.to_path_buf(),
                })
                .await
                .map_err(|_| {
                    Error::Download("work queue closed before pagination finished".into())
                })?;
            totals.enqueued += 1;
        }

        if !page.page_info.has_next_page {
            break;
        }

        let next = page.page_info.end_cursor.unwrap_or_default();
        // A page that promises more results but hands back no fresh
        // cursor would have us re-request the same page forever.
        if next.is_empty() || next == cursor {
            return Err(Error::Upstream(
                "next page promised but the cursor did not advance".into(),
            ));
        }
        cursor = next;
    }

    Ok(totals)
}
