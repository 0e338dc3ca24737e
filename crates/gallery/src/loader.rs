//! The gallery loader and its fallback strategies.

use std::sync::Arc;

use async_trait::async_trait;
use gradbooth_cloudinary::CloudinaryApi;
use gradbooth_core::PhotoRecord;

use crate::cache::LocalCache;
use crate::GalleryError;

/// One way of reconstructing the photo set.
///
/// Strategies are tried in order; a strategy that fails **or returns
/// no records** hands over to the next one.
#[async_trait]
pub trait ListingStrategy: Send + Sync {
    /// Short name used in fallback log lines.
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError>;
}

/// The `.json` listing endpoint.
pub struct JsonEndpoint {
    api: Arc<CloudinaryApi>,
}

impl JsonEndpoint {
    pub fn new(api: Arc<CloudinaryApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListingStrategy for JsonEndpoint {
    fn name(&self) -> &'static str {
        "json-listing"
    }

    async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
        Ok(self.api.list_json().await?)
    }
}

/// The `.rss` listing endpoint.
pub struct RssEndpoint {
    api: Arc<CloudinaryApi>,
}

impl RssEndpoint {
    pub fn new(api: Arc<CloudinaryApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListingStrategy for RssEndpoint {
    fn name(&self) -> &'static str {
        "rss-listing"
    }

    async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
        Ok(self.api.list_rss().await?)
    }
}

/// The device-local cache. Reads never fail (a broken cache is an
/// empty cache), so as the final rung this strategy ends the chain
/// with an empty gallery rather than an error.
pub struct CacheFallback {
    cache: Arc<LocalCache>,
}

impl CacheFallback {
    pub fn new(cache: Arc<LocalCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl ListingStrategy for CacheFallback {
    fn name(&self) -> &'static str {
        "local-cache"
    }

    async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
        Ok(self.cache.load().await)
    }
}

/// Reconstructs the gallery by walking an ordered strategy list.
pub struct GalleryLoader {
    strategies: Vec<Box<dyn ListingStrategy>>,
}

impl GalleryLoader {
    /// The canonical three-tier chain: JSON listing, RSS listing,
    /// local cache.
    pub fn new(api: Arc<CloudinaryApi>, cache: Arc<LocalCache>) -> Self {
        Self::with_strategies(vec![
            Box::new(JsonEndpoint::new(api.clone())),
            Box::new(RssEndpoint::new(api)),
            Box::new(CacheFallback::new(cache)),
        ])
    }

    /// A loader over a custom strategy list, in the given order.
    pub fn with_strategies(strategies: Vec<Box<dyn ListingStrategy>>) -> Self {
        Self { strategies }
    }

    /// Load the photo set, sorted most-recent-first.
    ///
    /// Each strategy is tried only if the previous one failed or
    /// returned no records; only the final strategy's failure is
    /// surfaced. An exhausted chain is an empty gallery, not an error.
    pub async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
        let last = self.strategies.len().saturating_sub(1);
        for (index, strategy) in self.strategies.iter().enumerate() {
            match strategy.load().await {
                Ok(mut records) if !records.is_empty() => {
                    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    tracing::info!(
                        strategy = strategy.name(),
                        count = records.len(),
                        "gallery loaded"
                    );
                    return Ok(records);
                }
                Ok(_) => {
                    tracing::warn!(strategy = strategy.name(), "strategy returned no photos");
                }
                Err(error) if index == last => return Err(error),
                Err(error) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        %error,
                        "strategy failed, falling back"
                    );
                }
            }
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(n: i64) -> PhotoRecord {
        PhotoRecord {
            public_id: format!("graduacion/photo{n}"),
            format: "png".into(),
            created_at: chrono::Utc.timestamp_opt(1_750_000_000 + n, 0).unwrap(),
            url: format!("https://res.cloudinary.com/c/image/upload/graduacion/photo{n}.png"),
        }
    }

    struct Fixed {
        name: &'static str,
        records: Vec<PhotoRecord>,
        calls: Arc<AtomicUsize>,
    }

    impl Fixed {
        fn boxed(name: &'static str, records: Vec<PhotoRecord>) -> (Box<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Box::new(Self {
                    name,
                    records,
                    calls: calls.clone(),
                }),
                calls,
            )
        }
    }

    #[async_trait]
    impl ListingStrategy for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    struct Failing(&'static str);

    #[async_trait]
    impl ListingStrategy for Failing {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn load(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
            Err(GalleryError::Strategy("boom".into()))
        }
    }

    #[tokio::test]
    async fn first_non_empty_strategy_wins() {
        let (first, first_calls) = Fixed::boxed("first", vec![record(1)]);
        let (second, second_calls) = Fixed::boxed("second", vec![record(2)]);
        let loader = GalleryLoader::with_strategies(vec![first, second]);

        let records = loader.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].public_id, "graduacion/photo1");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_result_falls_through() {
        let (first, _) = Fixed::boxed("first", vec![]);
        let (second, second_calls) = Fixed::boxed("second", vec![record(2)]);
        let loader = GalleryLoader::with_strategies(vec![first, second]);

        let records = loader.load().await.unwrap();
        assert_eq!(records[0].public_id, "graduacion/photo2");
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_falls_through_to_next() {
        let (second, _) = Fixed::boxed("second", vec![record(7)]);
        let loader = GalleryLoader::with_strategies(vec![Box::new(Failing("first")), second]);

        let records = loader.load().await.unwrap();
        assert_eq!(records[0].public_id, "graduacion/photo7");
    }

    #[tokio::test]
    async fn exhausted_chain_is_an_empty_gallery() {
        let (first, _) = Fixed::boxed("first", vec![]);
        let (second, _) = Fixed::boxed("second", vec![]);
        let loader = GalleryLoader::with_strategies(vec![first, second]);

        assert!(loader.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn only_the_final_failure_is_surfaced() {
        let (first, _) = Fixed::boxed("first", vec![]);
        let loader = GalleryLoader::with_strategies(vec![first, Box::new(Failing("last"))]);

        assert_matches!(loader.load().await, Err(GalleryError::Strategy(_)));
    }

    #[tokio::test]
    async fn results_are_sorted_most_recent_first() {
        let (first, _) = Fixed::boxed("first", vec![record(1), record(3), record(2)]);
        let loader = GalleryLoader::with_strategies(vec![first]);

        let records = loader.load().await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.public_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["graduacion/photo3", "graduacion/photo2", "graduacion/photo1"]
        );
    }
}
