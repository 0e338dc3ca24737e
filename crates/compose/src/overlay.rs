//! The decorative frame drawn over every capture.
//!
//! Everything here is proportional to the output raster (font sizes,
//! paddings, positions), so the overlay scales correctly at any capture
//! resolution. Only the title gets a drop shadow.

use resvg::tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::glyph::draw_emoji;
use crate::text::draw_text_centered;
use crate::ComposeError;

/// Full-bleed tint wash, `rgba(102, 126, 234, 0.3)`.
const WASH_RGBA: (u8, u8, u8, u8) = (102, 126, 234, 77);

/// Inset border color, `rgba(255, 255, 255, 0.9)`.
const BORDER_RGBA: (u8, u8, u8, u8) = (255, 255, 255, 230);

/// Title drop shadow, `rgba(0, 0, 0, 0.7)`.
const SHADOW_RGBA: (u8, u8, u8, u8) = (0, 0, 0, 179);

const WHITE: (u8, u8, u8, u8) = (255, 255, 255, 255);
const GOLD: (u8, u8, u8, u8) = (255, 215, 0, 255);

/// Strings and glyphs drawn by the decorative frame.
///
/// The default values are the graduation-party frame of the original
/// deployment; embedders can substitute their own event.
#[derive(Debug, Clone)]
pub struct OverlayTheme {
    pub title: String,
    pub year: String,
    pub captions: [String; 2],
    pub hashtag: String,
    /// Corner glyphs: top-left, top-right, bottom-left, bottom-right.
    pub corner_glyphs: [String; 4],
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self {
            title: "¡ME RECIBÍ!".into(),
            year: "2025".into(),
            captions: [
                "CIENCIAS DE DATOS E IA".into(),
                "DESARROLLO WEB Y APLICACIONES DIGITALES".into(),
            ],
            hashtag: "#ALFINMERECIBI".into(),
            corner_glyphs: ["🎓".into(), "🤖".into(), "✨".into(), "🎉".into()],
        }
    }
}

/// Draw the full decorative frame onto the output raster.
pub(crate) fn draw_overlay(pixmap: &mut Pixmap, theme: &OverlayTheme) -> Result<(), ComposeError> {
    let w = pixmap.width() as f32;
    let h = pixmap.height() as f32;

    // Tint wash over the whole frame.
    let mut wash = Paint::default();
    wash.set_color_rgba8(WASH_RGBA.0, WASH_RGBA.1, WASH_RGBA.2, WASH_RGBA.3);
    if let Some(rect) = Rect::from_xywh(0.0, 0.0, w, h) {
        pixmap.fill_rect(rect, &wash, Transform::identity(), None);
    }

    // Inset border at a padding proportional to output width.
    let padding = w * 0.06;
    let mut border = Paint::default();
    border.set_color_rgba8(BORDER_RGBA.0, BORDER_RGBA.1, BORDER_RGBA.2, BORDER_RGBA.3);
    border.anti_alias = true;
    if let Some(rect) = Rect::from_xywh(padding, padding, w - padding * 2.0, h - padding * 2.0) {
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width: w * 0.008,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &border, &stroke, Transform::identity(), None);
    }

    // Title, shadow pass first (only the title carries a shadow).
    let title_size = w * 0.12;
    let shadow_offset = w * 0.005;
    draw_text_centered(
        pixmap,
        &theme.title,
        w / 2.0 + shadow_offset,
        h * 0.08 + shadow_offset,
        title_size,
        SHADOW_RGBA,
    );
    draw_text_centered(pixmap, &theme.title, w / 2.0, h * 0.08, title_size, WHITE);

    // Year line in gold.
    draw_text_centered(pixmap, &theme.year, w / 2.0, h * 0.13, w * 0.06, GOLD);

    // Corner glyphs at proportional coordinates.
    let glyph_size = w * 0.08;
    let corners = [
        (w * 0.15, h * 0.12),
        (w * 0.85, h * 0.14),
        (w * 0.12, h * 0.88),
        (w * 0.88, h * 0.86),
    ];
    for (glyph, (cx, cy)) in theme.corner_glyphs.iter().zip(corners) {
        draw_emoji(pixmap, glyph, cx, cy, glyph_size, 0.0, 1.0)?;
    }

    // Caption lines and the hashtag near the bottom.
    let caption_size = w * 0.035;
    draw_text_centered(
        pixmap,
        &theme.captions[0],
        w / 2.0,
        h * 0.92,
        caption_size,
        WHITE,
    );
    draw_text_centered(
        pixmap,
        &theme.captions[1],
        w / 2.0,
        h * 0.95,
        caption_size,
        WHITE,
    );
    draw_text_centered(pixmap, &theme.hashtag, w / 2.0, h * 0.98, w * 0.04, GOLD);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_deterministic() {
        let theme = OverlayTheme::default();
        let mut a = Pixmap::new(400, 300).unwrap();
        let mut b = Pixmap::new(400, 300).unwrap();
        draw_overlay(&mut a, &theme).unwrap();
        draw_overlay(&mut b, &theme).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn overlay_tints_the_full_frame() {
        let mut pixmap = Pixmap::new(400, 300).unwrap();
        draw_overlay(&mut pixmap, &OverlayTheme::default()).unwrap();
        // Every pixel received at least the wash.
        assert!(pixmap.pixels().iter().all(|p| p.alpha() > 0));
    }

    #[test]
    fn overlay_scales_with_resolution() {
        let theme = OverlayTheme::default();
        let mut small = Pixmap::new(200, 150).unwrap();
        let mut large = Pixmap::new(800, 600).unwrap();
        draw_overlay(&mut small, &theme).unwrap();
        draw_overlay(&mut large, &theme).unwrap();
        // Proportional layout: both sizes draw without panicking and
        // mark pixels beyond the wash alpha.
        assert!(small.pixels().iter().any(|p| p.red() > 200));
        assert!(large.pixels().iter().any(|p| p.red() > 200));
    }
}
