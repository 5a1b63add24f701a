//! Fixed-size worker pool draining the download queue.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::Receiver;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::api::InstagramApi;
use crate::error::Result;
use crate::fs::filename_from_url;

/// Capacity of the work queue between the paginator and the pool. Bounds
/// how far the producer can run ahead of the slowest worker.
pub const WORK_QUEUE_CAPACITY: usize = 64;

/// The unit crossing the queue boundary: one media URL and the directory
/// it lands in. The worker derives the filename from the URL itself.
#[derive(Debug, Clone)]
pub struct DownloadTask {
    pub url: String,
    pub dest_dir: PathBuf,
}

/// Counters shared by all workers. Per-item failures are contained in the
/// worker that hit them; these counts are the only trace they leave.
#[derive(Debug, Default)]
struct Counters {
    downloaded: AtomicU64,
    failed: AtomicU64,
}

/// Snapshot of the pool's work, taken after every worker has exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub downloaded: u64,
    pub failed: u64,
}

/// A running set of download workers.
pub struct DownloadPool {
    workers: Vec<JoinHandle<()>>,
    counters: Arc<Counters>,
}

impl DownloadPool {
    /// Spawn `worker_count` workers draining `queue`. Workers start idle,
    /// blocked on the empty queue, so no task sent later is lost.
    pub fn start(api: Arc<InstagramApi>, worker_count: u32, queue: Receiver<DownloadTask>) -> Self {
        let queue = Arc::new(Mutex::new(queue));
        let counters = Arc::new(Counters::default());

        let workers = (0..worker_count)
            .map(|worker| {
                let api = Arc::clone(&api);
                let queue = Arc::clone(&queue);
                let counters = Arc::clone(&counters);
                tokio::spawn(async move {
                    run_worker(worker, api, queue, counters).await;
                })
            })
            .collect();

        Self { workers, counters }
    }

    /// Wait until every worker has observed queue closure and exited,
    /// then report what the pool did.
    pub async fn join(self) -> PoolStats {
        for handle in self.workers {
            if let Err(e) = handle.await {
                tracing::error!("download worker terminated abnormally: {}", e);
            }
        }

        PoolStats {
            downloaded: self.counters.downloaded.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }
}

async fn run_worker(
    worker: u32,
    api: Arc<InstagramApi>,
    queue: Arc<Mutex<Receiver<DownloadTask>>>,
    counters: Arc<Counters>,
) {
    loop {
        // The lock is held only while waiting for the next task, never
        // across the download itself.
        let task = queue.lock().await.recv().await;
        let Some(task) = task else { break };

        match download_task(&api, &task).await {
            Ok(path) => {
                counters.downloaded.fetch_add(1, Ordering::Relaxed);
                tracing::info!("downloaded {}", path.display());
            }
            Err(e) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("skipping {}: {}", task.url, e);
            }
        }
    }

    tracing::debug!("worker {} exiting, queue closed and drained", worker);
}

/// Fetch one task's URL and stream it to disk. Failures are returned to
/// the caller and never stop the worker. An existing file of the same
/// name is truncated and rewritten, so retry runs are safe.
async fn download_task(api: &InstagramApi, task: &DownloadTask) -> Result<PathBuf> {
    let filename = filename_from_url(&task.url)?;
    let path = task.dest_dir.join(filename);

    let response = api.download_file(&task.url).await?;

    let mut file = File::create(&path).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(path)
}
