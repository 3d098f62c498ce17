//! Filesystem implementation of the storage probe.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::debug;

use super::service::StorageProbe;

const PROBE_PREFIX: &str = ".write-probe";

static PROBE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique per call, so concurrent checks never share a file and an existing
/// file in the storage directory is never touched.
fn probe_file_name() -> String {
    format!(
        "{}-{}-{}",
        PROBE_PREFIX,
        std::process::id(),
        PROBE_COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

/// Checks writability of a directory by creating and removing a probe file.
pub struct FsStorageProbe {
    path: PathBuf,
}

impl FsStorageProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StorageProbe for FsStorageProbe {
    async fn is_writable(&self) -> bool {
        match fs::metadata(&self.path).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                debug!(path = %self.path.display(), "Storage path is not a directory");
                return false;
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Storage path not accessible");
                return false;
            }
        }

        let probe = self.path.join(probe_file_name());

        if let Err(e) = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&probe)
            .await
        {
            debug!(path = %probe.display(), error = %e, "Storage write probe failed");
            return false;
        }

        match fs::remove_file(&probe).await {
            Ok(()) => true,
            Err(e) => {
                debug!(path = %probe.display(), error = %e, "Storage probe cleanup failed");
                false
            }
        }
    }
}
