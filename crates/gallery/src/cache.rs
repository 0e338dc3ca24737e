//! Device-local photo cache.
//!
//! A best-effort JSON file of previously uploaded [`PhotoRecord`]s,
//! most-recent-first, capped at the configured capacity (oldest
//! evicted first). The cache is the last rung of the gallery fallback
//! chain and is never authoritative: read and write failures are
//! logged and treated as a cache miss or a dropped write, never
//! surfaced as errors.

use std::path::PathBuf;

use gradbooth_core::{BoothConfig, PhotoRecord};

/// Default capacity, matching the original deployment.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Capped, most-recent-first record cache backed by one JSON file.
#[derive(Debug, Clone)]
pub struct LocalCache {
    path: PathBuf,
    capacity: usize,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(config: &BoothConfig) -> Self {
        Self::new(config.cache_path.clone(), config.cache_capacity)
    }

    /// Read all cached records, most recent first.
    ///
    /// A missing, unreadable, or corrupt file is a cache miss, not an
    /// error.
    pub async fn load(&self) -> Vec<PhotoRecord> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "cache read failed");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "cache parse failed");
                Vec::new()
            }
        }
    }

    /// Prepend a record, evicting the oldest entries past capacity.
    ///
    /// Write failures are logged and dropped.
    pub async fn record(&self, photo: &PhotoRecord) {
        let mut records = self.load().await;
        records.insert(0, photo.clone());
        records.truncate(self.capacity);
        self.store(&records).await;
    }

    async fn store(&self, records: &[PhotoRecord]) {
        let json = match serde_json::to_vec_pretty(records) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "cache serialization failed");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(error) = tokio::fs::create_dir_all(parent).await {
                    tracing::warn!(%error, "cache directory creation failed");
                    return;
                }
            }
        }

        if let Err(error) = tokio::fs::write(&self.path, json).await {
            tracing::warn!(%error, path = %self.path.display(), "cache write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(n: i64) -> PhotoRecord {
        PhotoRecord {
            public_id: format!("graduacion/photo{n}"),
            format: "png".into(),
            created_at: chrono::Utc.timestamp_opt(1_750_000_000 + n, 0).unwrap(),
            url: format!("https://res.cloudinary.com/c/image/upload/graduacion/photo{n}.png"),
        }
    }

    fn temp_cache(capacity: usize) -> (tempfile::TempDir, LocalCache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path().join("photos.json"), capacity);
        (dir, cache)
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_cache() {
        let (_dir, cache) = temp_cache(100);
        assert!(cache.load().await.is_empty());
    }

    #[tokio::test]
    async fn records_are_most_recent_first() {
        let (_dir, cache) = temp_cache(100);
        cache.record(&record(1)).await;
        cache.record(&record(2)).await;
        cache.record(&record(3)).await;

        let loaded = cache.load().await;
        let ids: Vec<_> = loaded.iter().map(|r| r.public_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["graduacion/photo3", "graduacion/photo2", "graduacion/photo1"]
        );
    }

    #[tokio::test]
    async fn capacity_evicts_the_oldest() {
        let (_dir, cache) = temp_cache(3);
        for n in 0..5 {
            cache.record(&record(n)).await;
        }

        let loaded = cache.load().await;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].public_id, "graduacion/photo4");
        assert_eq!(loaded[2].public_id, "graduacion/photo2");
    }

    #[tokio::test]
    async fn hundred_and_first_insert_evicts_oldest() {
        let (_dir, cache) = temp_cache(DEFAULT_CACHE_CAPACITY);
        for n in 0..101 {
            cache.record(&record(n)).await;
        }

        let loaded = cache.load().await;
        assert_eq!(loaded.len(), 100);
        assert_eq!(loaded[0].public_id, "graduacion/photo100");
        // photo0 was evicted.
        assert!(loaded.iter().all(|r| r.public_id != "graduacion/photo0"));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_cache_miss() {
        let (_dir, cache) = temp_cache(100);
        tokio::fs::write(
            cache.path.clone(),
            b"definitely not json".to_vec(),
        )
        .await
        .unwrap();
        assert!(cache.load().await.is_empty());
    }
}
