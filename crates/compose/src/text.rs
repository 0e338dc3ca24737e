//! Deterministic pixel font for the overlay captions.
//!
//! A 5x7 bitmap font scaled to the requested size. Glyphs cover the
//! uppercase alphabet, digits, and the punctuation used by the default
//! overlay theme; text is uppercased before lookup and characters
//! without a glyph advance the cursor without drawing. No system fonts
//! are touched, so output is byte-stable across machines.

use resvg::tiny_skia::{Paint, Pixmap, Rect, Transform};

/// Glyph grid dimensions.
const COLS: u32 = 5;
const ROWS: u32 = 7;

/// Horizontal advance per character, in cells (5 glyph + 1 spacing).
const ADVANCE: f32 = 6.0;

/// Return the 5x7 glyph bitmap for a character. Each `u8` is a row;
/// the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g {
        ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch {
        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10011, 0b10001, 0b10001, 0b01110),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        // Accented capitals for the Spanish overlay strings.
        'Á' => g!(0b00010, 0b00100, 0b01110, 0b10001, 0b11111, 0b10001, 0b10001),
        'É' => g!(0b00010, 0b00100, 0b11111, 0b10000, 0b11110, 0b10000, 0b11111),
        'Í' => g!(0b00010, 0b00100, 0b01110, 0b00100, 0b00100, 0b00100, 0b01110),
        'Ó' => g!(0b00010, 0b00100, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110),
        'Ú' => g!(0b00010, 0b00100, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),

        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        ' ' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000),
        '!' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100),
        '¡' => g!(0b00100, 0b00000, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        '#' => g!(0b01010, 0b11111, 0b01010, 0b01010, 0b01010, 0b11111, 0b01010),
        '.' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000),
        ':' => g!(0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000),
        '-' => g!(0b00000, 0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000),

        _ => None,
    }
}

fn lookup(ch: char) -> Option<[u8; 7]> {
    glyph5x7(ch).or_else(|| ch.to_uppercase().next().and_then(glyph5x7))
}

/// Rendered width of `text` at the given character height, in pixels.
pub(crate) fn text_width(text: &str, size_px: f32) -> f32 {
    let chars = text.chars().count();
    if chars == 0 {
        return 0.0;
    }
    let cell = size_px / ROWS as f32;
    (chars as f32 * ADVANCE - 1.0) * cell
}

/// Draw `text` horizontally centered on `cx`, with `baseline_y` at the
/// bottom of the glyph grid. Characters without a glyph are skipped
/// but still advance the cursor.
pub(crate) fn draw_text_centered(
    pixmap: &mut Pixmap,
    text: &str,
    cx: f32,
    baseline_y: f32,
    size_px: f32,
    rgba: (u8, u8, u8, u8),
) {
    let cell = size_px / ROWS as f32;
    if cell <= 0.0 {
        return;
    }

    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.0, rgba.1, rgba.2, rgba.3);
    paint.anti_alias = false;

    let mut x = cx - text_width(text, size_px) / 2.0;
    let top = baseline_y - size_px;

    for ch in text.chars() {
        if let Some(rows) = lookup(ch) {
            for (row_idx, row_bits) in rows.iter().enumerate() {
                for col in 0..COLS {
                    if (row_bits & (1 << (COLS - 1 - col))) != 0 {
                        let px = x + col as f32 * cell;
                        let py = top + row_idx as f32 * cell;
                        if let Some(rect) = Rect::from_xywh(px, py, cell, cell) {
                            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                        }
                    }
                }
            }
        }
        x += ADVANCE * cell;
    }
}
