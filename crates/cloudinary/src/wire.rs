//! Wire types for the media host's upload and listing responses.

use gradbooth_core::{BoothConfig, PhotoRecord, Timestamp};
use serde::Deserialize;

/// Response returned by the upload endpoint on success.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Host-assigned identifier, e.g. `graduacion/abc123`.
    pub public_id: String,
    /// Asset format, e.g. `png`.
    pub format: String,
    pub created_at: Timestamp,
    pub secure_url: String,
}

impl UploadResponse {
    pub fn into_record(self) -> PhotoRecord {
        PhotoRecord {
            public_id: self.public_id,
            format: self.format,
            created_at: self.created_at,
            url: self.secure_url,
        }
    }
}

/// Body of the `.json` listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonListing {
    #[serde(default)]
    pub resources: Vec<ListedResource>,
}

/// One asset in the `.json` listing. Some listing variants omit
/// `secure_url` and only carry `url`; some omit both.
#[derive(Debug, Clone, Deserialize)]
pub struct ListedResource {
    pub public_id: String,
    pub format: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ListedResource {
    /// Convert to a [`PhotoRecord`], deriving the delivery URL from
    /// the fixed template when the listing carried none.
    pub fn into_record(self, config: &BoothConfig) -> PhotoRecord {
        let url = self
            .secure_url
            .or(self.url)
            .unwrap_or_else(|| config.asset_url(&self.public_id, &self.format));
        PhotoRecord {
            public_id: self.public_id,
            format: self.format,
            created_at: self.created_at,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn parses_full_listing() {
        let body = r#"{
            "resources": [
                {
                    "public_id": "graduacion/abc123",
                    "format": "png",
                    "created_at": "2025-07-01T12:00:00Z",
                    "secure_url": "https://res.cloudinary.com/dukqtp9ww/image/upload/v1/graduacion/abc123.png"
                }
            ]
        }"#;
        let listing: JsonListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.resources.len(), 1);
        let record = listing.resources[0].clone().into_record(&test_config());
        assert_eq!(record.public_id, "graduacion/abc123");
        assert!(record.url.ends_with("abc123.png"));
    }

    #[test]
    fn missing_resources_key_means_empty() {
        let listing: JsonListing = serde_json::from_str("{}").unwrap();
        assert!(listing.resources.is_empty());
    }

    #[test]
    fn url_falls_back_to_plain_then_template() {
        let plain = ListedResource {
            public_id: "graduacion/x".into(),
            format: "png".into(),
            created_at: chrono::Utc::now(),
            secure_url: None,
            url: Some("http://res.cloudinary.com/dukqtp9ww/image/upload/graduacion/x.png".into()),
        };
        assert!(plain.into_record(&test_config()).url.starts_with("http://"));

        let bare = ListedResource {
            public_id: "graduacion/x".into(),
            format: "png".into(),
            created_at: chrono::Utc::now(),
            secure_url: None,
            url: None,
        };
        assert_eq!(
            bare.into_record(&test_config()).url,
            "https://res.cloudinary.com/dukqtp9ww/image/upload/graduacion/x.png"
        );
    }

    #[test]
    fn parses_upload_response() {
        let body = r#"{
            "public_id": "graduacion/abc123",
            "format": "png",
            "created_at": "2025-07-01T12:00:00Z",
            "secure_url": "https://res.cloudinary.com/dukqtp9ww/image/upload/v1/graduacion/abc123.png",
            "bytes": 12345,
            "width": 800,
            "height": 600
        }"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();
        let record = response.into_record();
        assert_eq!(record.format, "png");
        assert_eq!(record.public_id, "graduacion/abc123");
    }
}
