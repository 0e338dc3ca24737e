//! The composition engine.
//!
//! Flattens (frame, filter, adjustments, stickers, viewport) into one
//! PNG at a fixed supersampling factor. Draw order defines the final
//! stacking: filtered frame first, then stickers in insertion order,
//! then the decorative overlay on top.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use resvg::tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};

use gradbooth_core::sticker::STICKER_BOX_PX;
use gradbooth_core::{FilterDescriptor, StickerPlacement, Viewport};

use crate::color::{capture_matrix, Adjustments};
use crate::glyph::draw_emoji;
use crate::overlay::{draw_overlay, OverlayTheme};
use crate::ComposeError;

/// Multiplier between on-screen preview resolution and the exported
/// raster.
pub const SUPERSAMPLE_FACTOR: f32 = 2.0;

/// Deterministic capture compositor.
///
/// Holds only the overlay theme; every `compose` call is a pure
/// function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct CompositionEngine {
    theme: OverlayTheme,
}

impl CompositionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: OverlayTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &OverlayTheme {
        &self.theme
    }

    /// Apply the active filter chain to a preview frame in place.
    ///
    /// This is the exact transform `compose` applies in step 2, exposed
    /// so a live preview and the export can never drift apart.
    pub fn apply_preview_filter(
        &self,
        frame: &mut RgbaImage,
        filter: &FilterDescriptor,
        adjustments: &Adjustments,
    ) {
        capture_matrix(filter.ops, adjustments).apply_to_rgba(frame.as_mut());
    }

    /// Flatten a capture into PNG bytes.
    ///
    /// Strict order: filtered frame stretched to fill the supersampled
    /// output (no letterboxing), stickers in insertion order with
    /// rotation/scale about their own centers, then the decorative
    /// overlay. Identical inputs yield byte-identical output.
    pub fn compose(
        &self,
        frame: &RgbaImage,
        filter: &FilterDescriptor,
        adjustments: &Adjustments,
        stickers: &[StickerPlacement],
        viewport: Viewport,
    ) -> Result<Vec<u8>, ComposeError> {
        if !(viewport.width > 0.0) || !(viewport.height > 0.0) {
            return Err(ComposeError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let (frame_w, frame_h) = frame.dimensions();
        if frame_w == 0 || frame_h == 0 {
            return Err(ComposeError::EmptyFrame);
        }

        let out_w = (viewport.width * SUPERSAMPLE_FACTOR).round().max(1.0) as u32;
        let out_h = (viewport.height * SUPERSAMPLE_FACTOR).round().max(1.0) as u32;
        let mut output = Pixmap::new(out_w, out_h).ok_or(ComposeError::Raster {
            width: out_w,
            height: out_h,
        })?;

        // Step 2: filter the source frame, then stretch it to fill the
        // output exactly.
        let mut filtered = frame.as_raw().clone();
        capture_matrix(filter.ops, adjustments).apply_to_rgba(&mut filtered);
        let frame_pixmap = premultiplied_pixmap(filtered, frame_w, frame_h)?;

        let fill = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        output.draw_pixmap(
            0,
            0,
            frame_pixmap.as_ref(),
            &fill,
            Transform::from_scale(out_w as f32 / frame_w as f32, out_h as f32 / frame_h as f32),
            None,
        );
        // Step 3: the filter matrix was scoped to the frame buffer
        // above; stickers and overlay are drawn unfiltered.

        // Step 4: stickers in insertion order, each under its own
        // transform.
        for sticker in stickers {
            let center = sticker.center();
            draw_emoji(
                &mut output,
                &sticker.glyph,
                center.x * SUPERSAMPLE_FACTOR,
                center.y * SUPERSAMPLE_FACTOR,
                STICKER_BOX_PX * SUPERSAMPLE_FACTOR,
                f32::from(sticker.rotation_degrees),
                sticker.scale,
            )?;
        }

        // Step 5: the decorative frame, always on top.
        draw_overlay(&mut output, &self.theme)?;

        // Step 6: serialize.
        encode_png(&output)
    }
}

/// Build a premultiplied pixmap from straight-alpha RGBA bytes.
fn premultiplied_pixmap(mut data: Vec<u8>, width: u32, height: u32) -> Result<Pixmap, ComposeError> {
    for pixel in data.chunks_exact_mut(4) {
        let a = u16::from(pixel[3]);
        if a < 255 {
            pixel[0] = ((u16::from(pixel[0]) * a) / 255) as u8;
            pixel[1] = ((u16::from(pixel[1]) * a) / 255) as u8;
            pixel[2] = ((u16::from(pixel[2]) * a) / 255) as u8;
        }
    }
    let size = IntSize::from_wh(width, height).ok_or(ComposeError::EmptyFrame)?;
    Pixmap::from_vec(data, size).ok_or(ComposeError::Raster {
        width,
        height,
    })
}

/// Demultiply and PNG-encode a pixmap.
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ComposeError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        &rgba,
        pixmap.width(),
        pixmap.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use gradbooth_core::{resolve, StickerBoard};

    const VIEWPORT: Viewport = Viewport {
        width: 100.0,
        height: 100.0,
    };

    /// Deterministic gradient frame.
    fn test_frame() -> RgbaImage {
        RgbaImage::from_fn(80, 60, |x, y| {
            image::Rgba([(x * 3) as u8, (y * 4) as u8, 128, 255])
        })
    }

    fn decode(png: &[u8]) -> RgbaImage {
        image::load_from_memory(png).unwrap().to_rgba8()
    }

    fn centered_sticker(glyph: &str, scale: f32) -> StickerPlacement {
        let mut board = StickerBoard::new();
        let id = board.place(glyph, VIEWPORT);
        board.resize(id, scale);
        board.placements()[0].clone()
    }

    #[test]
    fn output_is_supersampled() {
        let engine = CompositionEngine::new();
        let png = engine
            .compose(
                &test_frame(),
                resolve("none"),
                &Adjustments::default(),
                &[],
                VIEWPORT,
            )
            .unwrap();
        let decoded = decode(&png);
        assert_eq!(decoded.dimensions(), (200, 200));
    }

    #[test]
    fn compose_is_deterministic() {
        let engine = CompositionEngine::new();
        let stickers = vec![centered_sticker("🎓", 1.0)];
        let run = || {
            engine
                .compose(
                    &test_frame(),
                    resolve("clarendon"),
                    &Adjustments::default(),
                    &stickers,
                    VIEWPORT,
                )
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn empty_sticker_list_is_not_an_error() {
        let engine = CompositionEngine::new();
        let result = engine.compose(
            &test_frame(),
            resolve("none"),
            &Adjustments::default(),
            &[],
            VIEWPORT,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn stickers_change_the_output() {
        let engine = CompositionEngine::new();
        let plain = engine
            .compose(
                &test_frame(),
                resolve("none"),
                &Adjustments::default(),
                &[],
                VIEWPORT,
            )
            .unwrap();
        let stickers = vec![centered_sticker("🎓", 1.0)];
        let decorated = engine
            .compose(
                &test_frame(),
                resolve("none"),
                &Adjustments::default(),
                &stickers,
                VIEWPORT,
            )
            .unwrap();
        assert_ne!(plain, decorated);
    }

    #[test]
    fn draw_order_is_insertion_order() {
        let engine = CompositionEngine::new();
        // Two solid squares fully overlapping at the center; the later
        // placement must win the center pixel.
        let red_then_blue = [centered_sticker("🟥", 1.0), centered_sticker("🟦", 1.0)];
        let blue_then_red = [centered_sticker("🟦", 1.0), centered_sticker("🟥", 1.0)];

        let top_blue = decode(
            &engine
                .compose(
                    &test_frame(),
                    resolve("none"),
                    &Adjustments::default(),
                    &red_then_blue,
                    VIEWPORT,
                )
                .unwrap(),
        );
        let top_red = decode(
            &engine
                .compose(
                    &test_frame(),
                    resolve("none"),
                    &Adjustments::default(),
                    &blue_then_red,
                    VIEWPORT,
                )
                .unwrap(),
        );

        let blue_center = top_blue.get_pixel(100, 100);
        let red_center = top_red.get_pixel(100, 100);
        assert!(blue_center[2] > blue_center[0], "topmost should be blue");
        assert!(red_center[0] > red_center[2], "topmost should be red");
    }

    #[test]
    fn filter_does_not_leak_onto_stickers() {
        let engine = CompositionEngine::new();
        let stickers = [centered_sticker("🟥", 1.0)];
        let decoded = decode(
            &engine
                .compose(
                    &test_frame(),
                    resolve("moon"),
                    &Adjustments::default(),
                    &stickers,
                    VIEWPORT,
                )
                .unwrap(),
        );
        // The grayscale frame must not desaturate the sticker.
        let center = decoded.get_pixel(100, 100);
        assert!(center[0] > center[1] + 40, "sticker lost its color");
    }

    #[test]
    fn rotation_moves_pixels() {
        let engine = CompositionEngine::new();
        let upright = [centered_sticker("🎓", 1.0)];
        let mut rotated = [centered_sticker("🎓", 1.0)];
        rotated[0].rotation_degrees = 45;

        let a = engine
            .compose(
                &test_frame(),
                resolve("none"),
                &Adjustments::default(),
                &upright,
                VIEWPORT,
            )
            .unwrap();
        let b = engine
            .compose(
                &test_frame(),
                resolve("none"),
                &Adjustments::default(),
                &rotated,
                VIEWPORT,
            )
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let engine = CompositionEngine::new();
        let result = engine.compose(
            &test_frame(),
            resolve("none"),
            &Adjustments::default(),
            &[],
            Viewport::new(0.0, 100.0),
        );
        assert_matches!(result, Err(ComposeError::InvalidViewport { .. }));
    }

    #[test]
    fn preview_filter_matches_export_transform() {
        let engine = CompositionEngine::new();
        let filter = resolve("juno");
        let adjustments = Adjustments::default();

        let mut preview = test_frame();
        engine.apply_preview_filter(&mut preview, filter, &adjustments);

        let mut exported = test_frame().as_raw().clone();
        capture_matrix(filter.ops, &adjustments).apply_to_rgba(&mut exported);
        assert_eq!(preview.as_raw(), &exported);
    }
}
