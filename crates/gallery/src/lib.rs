//! Gallery reconstruction with an ordered fallback chain.
//!
//! The remote host's listing endpoints are unreliable in the field
//! (the JSON listing can be disabled per account, the RSS feed answers
//! authorization errors with fake XML), so the gallery is rebuilt by
//! trying strategies in a fixed order and taking the first non-empty
//! result:
//!
//! 1. the `.json` listing endpoint,
//! 2. the `.rss` listing endpoint,
//! 3. the device-local [`LocalCache`].
//!
//! An empty result from the whole chain is an empty gallery, not an
//! error.

mod cache;
mod loader;

pub use cache::{LocalCache, DEFAULT_CACHE_CAPACITY};
pub use loader::{CacheFallback, GalleryLoader, JsonEndpoint, ListingStrategy, RssEndpoint};

/// Errors from gallery loading.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// A remote listing strategy failed.
    #[error(transparent)]
    Listing(#[from] gradbooth_cloudinary::CloudinaryApiError),

    /// A strategy-specific failure with its own message.
    #[error("Gallery strategy failed: {0}")]
    Strategy(String),
}
