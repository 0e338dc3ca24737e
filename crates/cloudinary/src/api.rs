//! REST client for the media host endpoints.
//!
//! Wraps the unsigned upload endpoint and the public listing endpoints
//! using [`reqwest`]. One client instance is shared per booth; the
//! underlying connection pool is reused across uploads and listings.

use gradbooth_core::{BoothConfig, PhotoRecord};

use crate::rss::parse_rss_listing;
use crate::wire::{JsonListing, UploadResponse};

/// HTTP client for one media-host account.
pub struct CloudinaryApi {
    client: reqwest::Client,
    config: BoothConfig,
}

/// Errors from the media host client.
#[derive(Debug, thiserror::Error)]
pub enum CloudinaryApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host returned a non-2xx status code.
    #[error("Media host error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A listing feed that could not be interpreted (including
    /// authorization errors disguised as XML).
    #[error("Malformed listing feed: {reason}")]
    MalformedFeed { reason: String },
}

impl CloudinaryApi {
    /// Create a new client for the configured account.
    pub fn new(config: BoothConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across components).
    pub fn with_client(client: reqwest::Client, config: BoothConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &BoothConfig {
        &self.config
    }

    /// Upload PNG bytes via the unsigned upload endpoint.
    ///
    /// Sends a one-shot multipart POST with the image, the upload
    /// preset, and the target folder; `transformation` optionally asks
    /// the host to apply a named transformation chain on ingest.
    pub async fn upload(
        &self,
        png: Vec<u8>,
        transformation: Option<&str>,
    ) -> Result<PhotoRecord, CloudinaryApiError> {
        let file = reqwest::multipart::Part::bytes(png)
            .file_name("photo.png")
            .mime_str("image/png")?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", self.config.folder.clone());
        if let Some(transformation) = transformation {
            form = form.text("transformation", transformation.to_string());
        }

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        let upload: UploadResponse = Self::parse_response(response).await?;
        let record = upload.into_record();
        tracing::info!(public_id = %record.public_id, "uploaded photo");
        Ok(record)
    }

    /// Fetch the `.json` listing of the configured folder.
    pub async fn list_json(&self) -> Result<Vec<PhotoRecord>, CloudinaryApiError> {
        let response = self
            .client
            .get(self.config.json_listing_url())
            .send()
            .await?;

        let listing: JsonListing = Self::parse_response(response).await?;
        Ok(listing
            .resources
            .into_iter()
            .map(|resource| resource.into_record(&self.config))
            .collect())
    }

    /// Fetch and parse the `.rss` listing of the configured folder.
    pub async fn list_rss(&self) -> Result<Vec<PhotoRecord>, CloudinaryApiError> {
        let response = self
            .client
            .get(self.config.rss_listing_url())
            .send()
            .await?;

        let body = Self::ensure_success(response).await?.text().await?;
        parse_rss_listing(&body, &self.config.folder)
    }

    /// Download the full-size bytes of a photo (gallery download
    /// action).
    pub async fn fetch_image(&self, record: &PhotoRecord) -> Result<Vec<u8>, CloudinaryApiError> {
        let response = self.client.get(&record.url).send().await?;
        let bytes = Self::ensure_success(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an
    /// [`CloudinaryApiError::ApiError`] with the status and body text
    /// on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CloudinaryApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CloudinaryApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CloudinaryApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
