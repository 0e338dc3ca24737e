//! Shared domain types for the gradbooth photobooth engine.
//!
//! This crate holds the state and data model consumed by every other
//! crate in the workspace:
//!
//! - [`config::BoothConfig`] — the single shared configuration injected
//!   into both the capture side and the gallery side.
//! - [`filter`] — the static Instagram-style filter catalog.
//! - [`sticker`] — placed-sticker state and the sticker picker catalog.
//! - [`photo`] — captured images and uploaded photo records.
//! - [`types`] — small shared aliases and geometry values.

pub mod config;
pub mod filter;
pub mod photo;
pub mod sticker;
pub mod types;

pub use config::BoothConfig;
pub use filter::{filters, resolve, FilterDescriptor, FilterOp};
pub use photo::{CapturedImage, PhotoRecord};
pub use sticker::{StickerBoard, StickerId, StickerPlacement, STICKER_CHOICES};
pub use types::{Offset, Timestamp, Viewport};
