//! Captured images and uploaded photo records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BoothConfig;
use crate::types::Timestamp;

/// The flattened raster produced by one capture action.
///
/// Immutable after creation. The `id` keys any later upload result back
/// to this specific capture: an upload that finishes after the user has
/// already moved on never writes into "current" session state.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub id: Uuid,
    /// PNG-encoded raster bytes.
    pub png: Vec<u8>,
    pub created_at: Timestamp,
}

impl CapturedImage {
    pub fn new(png: Vec<u8>, created_at: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            png,
            created_at,
        }
    }

    /// Download filename offered to the user,
    /// `Graduacion-Selfie-{unix_millis}.png`.
    pub fn suggested_filename(&self) -> String {
        format!("Graduacion-Selfie-{}.png", self.created_at.timestamp_millis())
    }
}

/// A durable reference to an uploaded photo.
///
/// Created from a successful upload or reconstructed from a remote
/// listing; never mutated, only replaced wholesale in the local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub public_id: String,
    pub format: String,
    pub created_at: Timestamp,
    pub url: String,
}

impl PhotoRecord {
    /// Thumbnail URL derived from the fixed host template. The
    /// derivation is deterministic in (`public_id`, `format`).
    pub fn thumbnail_url(&self, config: &BoothConfig) -> String {
        config.thumbnail_url(&self.public_id, &self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_config() -> BoothConfig {
        BoothConfig {
            cloud_name: "dukqtp9ww".into(),
            upload_preset: "graduacion".into(),
            folder: "graduacion".into(),
            api_base: "https://api.cloudinary.com".into(),
            res_base: "https://res.cloudinary.com".into(),
            cache_path: "gradbooth_photos.json".into(),
            cache_capacity: 100,
        }
    }

    #[test]
    fn thumbnail_url_matches_template_exactly() {
        let record = PhotoRecord {
            public_id: "graduacion/abc123".into(),
            format: "png".into(),
            created_at: chrono::Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap(),
            url: "https://res.cloudinary.com/dukqtp9ww/image/upload/v1/graduacion/abc123.png"
                .into(),
        };
        assert_eq!(
            record.thumbnail_url(&test_config()),
            "https://res.cloudinary.com/dukqtp9ww/image/upload/w_400,h_500,c_fill/graduacion/abc123.png"
        );
    }

    #[test]
    fn suggested_filename_uses_millis() {
        let created = chrono::Utc.timestamp_millis_opt(1_750_000_000_000).unwrap();
        let captured = CapturedImage::new(vec![1, 2, 3], created);
        assert_eq!(
            captured.suggested_filename(),
            "Graduacion-Selfie-1750000000000.png"
        );
    }

    #[test]
    fn captured_images_have_distinct_ids() {
        let now = chrono::Utc::now();
        let a = CapturedImage::new(vec![], now);
        let b = CapturedImage::new(vec![], now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = PhotoRecord {
            public_id: "graduacion/xyz".into(),
            format: "png".into(),
            created_at: chrono::Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap(),
            url: "https://example.invalid/xyz.png".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: PhotoRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
