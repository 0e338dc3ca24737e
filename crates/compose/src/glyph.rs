//! Emoji glyph rasterization.
//!
//! Sticker and corner glyphs are rendered from the embedded Twemoji
//! SVG sources, so composition never consults system fonts and the
//! same glyph always rasterizes to the same pixels.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use twemoji_assets::svg::SvgTwemojiAsset;

use crate::ComposeError;

/// Parse the Twemoji SVG source for `glyph`.
///
/// Returns `Ok(None)` when the emoji has no Twemoji asset — the caller
/// skips the glyph instead of failing the whole composition, mirroring
/// the graceful degradation of unknown filter ids.
pub(crate) fn emoji_tree(glyph: &str) -> Result<Option<usvg::Tree>, ComposeError> {
    // Retry without the variation selector: picker glyphs may carry a
    // trailing U+FE0F that the asset table keys without it.
    let asset = match SvgTwemojiAsset::from_emoji(glyph) {
        Some(asset) => asset,
        None => {
            let stripped: String = glyph.chars().filter(|&c| c != '\u{FE0F}').collect();
            match SvgTwemojiAsset::from_emoji(&stripped) {
                Some(asset) => asset,
                None => return Ok(None),
            }
        }
    };
    let svg_data: &str = asset;
    let tree = usvg::Tree::from_str(svg_data, &usvg::Options::default())
        .map_err(|e| ComposeError::Svg(e.to_string()))?;
    Ok(Some(tree))
}

/// Draw an emoji centered at `(cx, cy)`, sized so its longer edge is
/// `size_px` before `scale`, rotated by `rotation_degrees` about its
/// own center. The transform is local to this draw — nothing leaks to
/// later draws.
pub(crate) fn draw_emoji(
    pixmap: &mut Pixmap,
    glyph: &str,
    cx: f32,
    cy: f32,
    size_px: f32,
    rotation_degrees: f32,
    scale: f32,
) -> Result<(), ComposeError> {
    let Some(tree) = emoji_tree(glyph)? else {
        tracing::warn!(glyph, "no Twemoji asset for glyph, skipping");
        return Ok(());
    };

    let tree_size = tree.size();
    let longer = tree_size.width().max(tree_size.height());
    if longer <= 0.0 || size_px <= 0.0 {
        return Ok(());
    }
    let fit = size_px / longer;

    // translate -> rotate -> scale -> draw centered, per glyph.
    let transform = Transform::from_translate(cx, cy)
        .pre_concat(Transform::from_rotate(rotation_degrees))
        .pre_scale(scale * fit, scale * fit)
        .pre_translate(-tree_size.width() / 2.0, -tree_size.height() / 2.0);

    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(())
}
