use std::path::PathBuf;

/// Shared booth configuration loaded from environment variables.
///
/// All fields have defaults matching the original deployment, so a bare
/// environment works out of the box. One `BoothConfig` instance is
/// injected into both the capture side (upload client) and the gallery
/// side (listing client, local cache) — the cloud name, folder, and
/// cache location must always agree between the two views.
#[derive(Debug, Clone)]
pub struct BoothConfig {
    /// Cloudinary cloud name (default: `dukqtp9ww`).
    pub cloud_name: String,
    /// Unsigned upload preset identifier (default: `graduacion`).
    pub upload_preset: String,
    /// Target folder for uploads and listings (default: `graduacion`).
    pub folder: String,
    /// Upload API base URL (default: `https://api.cloudinary.com`).
    pub api_base: String,
    /// Delivery/listing base URL (default: `https://res.cloudinary.com`).
    pub res_base: String,
    /// Path of the local photo cache file.
    pub cache_path: PathBuf,
    /// Maximum number of records kept in the local cache (default: `100`).
    pub cache_capacity: usize,
}

impl BoothConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`    | `dukqtp9ww`                   |
    /// | `CLOUDINARY_UPLOAD_PRESET` | `graduacion`                  |
    /// | `CLOUDINARY_FOLDER`        | `graduacion`                  |
    /// | `CLOUDINARY_API_BASE`      | `https://api.cloudinary.com`  |
    /// | `CLOUDINARY_RES_BASE`      | `https://res.cloudinary.com`  |
    /// | `BOOTH_CACHE_PATH`         | `gradbooth_photos.json`       |
    /// | `BOOTH_CACHE_CAPACITY`     | `100`                         |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let cloud_name =
            std::env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_else(|_| "dukqtp9ww".into());
        let upload_preset =
            std::env::var("CLOUDINARY_UPLOAD_PRESET").unwrap_or_else(|_| "graduacion".into());
        let folder = std::env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| "graduacion".into());

        let api_base = std::env::var("CLOUDINARY_API_BASE")
            .unwrap_or_else(|_| "https://api.cloudinary.com".into());
        let res_base = std::env::var("CLOUDINARY_RES_BASE")
            .unwrap_or_else(|_| "https://res.cloudinary.com".into());

        let cache_path = std::env::var("BOOTH_CACHE_PATH")
            .unwrap_or_else(|_| "gradbooth_photos.json".into())
            .into();

        let cache_capacity: usize = std::env::var("BOOTH_CACHE_CAPACITY")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("BOOTH_CACHE_CAPACITY must be a valid usize");

        Self {
            cloud_name,
            upload_preset,
            folder,
            api_base,
            res_base,
            cache_path,
            cache_capacity,
        }
    }

    /// Upload endpoint: `{api_base}/v1_1/{cloud_name}/image/upload`.
    pub fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/image/upload", self.api_base, self.cloud_name)
    }

    /// JSON listing endpoint: `{res_base}/{cloud_name}/image/list/{folder}.json`.
    pub fn json_listing_url(&self) -> String {
        format!(
            "{}/{}/image/list/{}.json",
            self.res_base, self.cloud_name, self.folder
        )
    }

    /// RSS listing endpoint: `{res_base}/{cloud_name}/image/list/{folder}.rss`.
    pub fn rss_listing_url(&self) -> String {
        format!(
            "{}/{}/image/list/{}.rss",
            self.res_base, self.cloud_name, self.folder
        )
    }

    /// Delivery URL for a full-size asset.
    pub fn asset_url(&self, public_id: &str, format: &str) -> String {
        format!(
            "{}/{}/image/upload/{}.{}",
            self.res_base, self.cloud_name, public_id, format
        )
    }

    /// Fixed thumbnail template:
    /// `{res_base}/{cloud_name}/image/upload/w_400,h_500,c_fill/{public_id}.{format}`.
    pub fn thumbnail_url(&self, public_id: &str, format: &str) -> String {
        format!(
            "{}/{}/image/upload/w_400,h_500,c_fill/{}.{}",
            self.res_base, self.cloud_name, public_id, format
        )
    }
}
