//! Deterministic capture composition.
//!
//! [`CompositionEngine`] flattens a camera frame, the active filter,
//! the placed stickers, and the decorative frame overlay into a single
//! PNG raster at a fixed supersampling factor of the on-screen
//! viewport. The same inputs always produce byte-identical output:
//! there is no clock, no randomness, and no system-font dependency
//! anywhere in the pipeline.
//!
//! - [`color`] — color-matrix implementations of the filter catalog's
//!   operations (and the manual brightness/contrast/saturation
//!   adjustments).
//! - [`glyph`] — emoji rasterization from Twemoji SVG sources.
//! - [`text`] — the deterministic pixel font used by the overlay.
//! - [`overlay`] — the decorative frame (tint wash, border, title,
//!   captions, corner glyphs).

pub mod color;
mod engine;
mod glyph;
pub mod overlay;
mod text;

pub use color::{Adjustments, ColorMatrix};
pub use engine::{CompositionEngine, SUPERSAMPLE_FACTOR};
pub use overlay::OverlayTheme;

/// Errors from the composition pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The viewport has a non-positive dimension.
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// The input frame has a zero dimension.
    #[error("Empty camera frame")]
    EmptyFrame,

    /// A raster buffer could not be allocated.
    #[error("Raster allocation failed for {width}x{height}")]
    Raster { width: u32, height: u32 },

    /// An emoji glyph's SVG source failed to parse.
    #[error("Glyph SVG parse failed: {0}")]
    Svg(String),

    /// PNG serialization failed.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}
