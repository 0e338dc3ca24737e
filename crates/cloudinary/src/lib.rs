//! HTTP client for the Cloudinary-shaped media host.
//!
//! [`CloudinaryApi`] wraps the two surfaces the booth touches:
//!
//! - the unsigned upload endpoint (multipart POST), and
//! - the public listing endpoints (`.json` and `.rss`) used to
//!   reconstruct the gallery.
//!
//! Thumbnail and asset URLs are derived client-side from the fixed
//! templates in [`gradbooth_core::BoothConfig`].

mod api;
mod rss;
mod wire;

pub use api::{CloudinaryApi, CloudinaryApiError};
pub use rss::parse_rss_listing;
pub use wire::{JsonListing, ListedResource, UploadResponse};
