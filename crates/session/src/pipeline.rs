//! Capture publication.
//!
//! Uploads a flattened capture to the media host and records the
//! resulting [`PhotoRecord`] in the local cache. The result is keyed
//! to the [`CapturedImage`] it originated from — never written into
//! "current" session state — so an upload the user abandoned (by
//! taking a new photo) completes or fails in the background without
//! corrupting the now-current session.

use gradbooth_cloudinary::CloudinaryApi;
use gradbooth_core::{CapturedImage, PhotoRecord};
use gradbooth_gallery::LocalCache;

use crate::SessionError;

/// Upload `captured` and record the result locally.
///
/// The cache write is best-effort; only the upload outcome decides
/// success.
pub async fn publish(
    api: &CloudinaryApi,
    cache: &LocalCache,
    captured: &CapturedImage,
) -> Result<PhotoRecord, SessionError> {
    let record = api.upload(captured.png.clone(), None).await?;
    cache.record(&record).await;
    tracing::info!(
        capture_id = %captured.id,
        public_id = %record.public_id,
        "capture published"
    );
    Ok(record)
}
