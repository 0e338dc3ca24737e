//! Placed-sticker state.
//!
//! A [`StickerBoard`] owns the ordered collection of stickers the user
//! has placed over the live preview. Insertion order is z-order: the
//! most recently placed sticker is drawn last, on top. Ids are
//! monotonic and never reused within a session, so external element
//! ids derived from them stay unique even after removals.

use crate::types::{Offset, Viewport};

/// Rotation step applied by one rotate gesture, in degrees.
pub const ROTATION_STEP_DEGREES: u16 = 45;

/// Saturating scale bounds for resize gestures.
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;

/// On-screen edge length of a sticker's bounding box at scale 1.0, in
/// viewport pixels. A placement's offset addresses the box's top-left
/// corner; the glyph is drawn centered in the box.
pub const STICKER_BOX_PX: f32 = 60.0;

/// The emoji available in the sticker picker.
pub const STICKER_CHOICES: &[&str] = &[
    "🎓", "🤖", "✨", "🎉", "🎊", "🥳", "💜", "❤️", "🌟", "⭐", //
    "🏆", "📚", "💻", "🖥️", "📱", "🎯", "💪", "👍", "🙌", "✌️", //
    "👏", "🤘", "🔥", "💯", "🎈", "🎁", "🍾", "🥂", "🎭", "🎨", //
    "😎", "🤓", "😄", "😊", "🥰", "😍", "🤩", "💃", "🕺", "🎶",
];

/// Unique, monotonically assigned sticker identifier.
pub type StickerId = u64;

/// One user-placed decorative glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    pub id: StickerId,
    /// The emoji glyph, e.g. `"🎓"`.
    pub glyph: String,
    /// Rotation in degrees, `0..360`, stepped by 45 and wrapping.
    pub rotation_degrees: u16,
    /// Scale factor, clamped to `[0.5, 3.0]`.
    pub scale: f32,
    /// Top-left corner of the sticker box, relative to the viewport
    /// origin. Unconstrained — may lie outside the visible frame.
    pub offset: Offset,
}

impl StickerPlacement {
    /// Center of the sticker box in viewport pixels.
    pub fn center(&self) -> Offset {
        self.offset
            .translated(STICKER_BOX_PX / 2.0, STICKER_BOX_PX / 2.0)
    }
}

/// Ordered collection of sticker placements for one capture session.
#[derive(Debug, Default)]
pub struct StickerBoard {
    placements: Vec<StickerPlacement>,
    next_id: StickerId,
}

impl StickerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new sticker centered in the viewport.
    ///
    /// Rotation starts at 0, scale at 1.0, and the assigned id is the
    /// next counter value — never reused, even after removal.
    pub fn place(&mut self, glyph: &str, viewport: Viewport) -> StickerId {
        let id = self.next_id;
        self.next_id += 1;

        let center = viewport.center();
        self.placements.push(StickerPlacement {
            id,
            glyph: glyph.to_owned(),
            rotation_degrees: 0,
            scale: 1.0,
            offset: center.translated(-STICKER_BOX_PX / 2.0, -STICKER_BOX_PX / 2.0),
        });
        id
    }

    /// Rotate a sticker by one 45° step, wrapping at 360°.
    ///
    /// Eight rotations return the sticker to its original orientation.
    /// No-op when the id is absent.
    pub fn rotate(&mut self, id: StickerId) {
        if let Some(sticker) = self.get_mut(id) {
            sticker.rotation_degrees = (sticker.rotation_degrees + ROTATION_STEP_DEGREES) % 360;
        }
    }

    /// Multiply a sticker's scale by `factor`, saturating at the
    /// `[0.5, 3.0]` bounds. Resizing past a bound is a no-op past the
    /// clamp, never an error. No-op when the id is absent.
    pub fn resize(&mut self, id: StickerId, factor: f32) {
        if let Some(sticker) = self.get_mut(id) {
            sticker.scale = (sticker.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Move a sticker to a new offset. Free-form: the offset is not
    /// clamped to the viewport, matching what the compositor draws.
    pub fn reposition(&mut self, id: StickerId, offset: Offset) {
        if let Some(sticker) = self.get_mut(id) {
            sticker.offset = offset;
        }
    }

    /// Remove exactly one placement; silently a no-op if absent.
    pub fn remove(&mut self, id: StickerId) {
        self.placements.retain(|s| s.id != id);
    }

    /// Remove every placement. Ids are not reset.
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Placements in insertion order (z-order, topmost last).
    pub fn placements(&self) -> &[StickerPlacement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    fn get_mut(&mut self, id: StickerId) -> Option<&mut StickerPlacement> {
        self.placements.iter_mut().find(|s| s.id == id)
    }
}
