//! Sticker drag handling.
//!
//! Mirrors the gesture model of the widget: a drag begins on a
//! pointer-down over a sticker, installs itself as the single active
//! drag for its duration, follows pointer deltas, and ends on release.
//! Mouse and touch are mutually exclusive — while one drag is active,
//! begin requests from any pointer are rejected.

use gradbooth_core::{Offset, StickerBoard, StickerId};

/// The input stream a drag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug)]
struct ActiveDrag {
    sticker: StickerId,
    pointer: PointerKind,
    last: Offset,
}

/// Tracks at most one in-flight drag.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Begin dragging `sticker` from `at`.
    ///
    /// Returns `false` (and changes nothing) when another drag is
    /// already active or the sticker does not exist on the board.
    pub fn begin(
        &mut self,
        board: &StickerBoard,
        sticker: StickerId,
        pointer: PointerKind,
        at: Offset,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }
        if !board.placements().iter().any(|s| s.id == sticker) {
            return false;
        }
        self.active = Some(ActiveDrag {
            sticker,
            pointer,
            last: at,
        });
        true
    }

    /// Follow a pointer move, repositioning the dragged sticker by the
    /// pointer delta. Moves from the other pointer kind (or with no
    /// active drag) are ignored.
    pub fn update(&mut self, board: &mut StickerBoard, pointer: PointerKind, at: Offset) {
        let Some(drag) = self.active.as_mut() else {
            return;
        };
        if drag.pointer != pointer {
            return;
        }

        let dx = at.x - drag.last.x;
        let dy = at.y - drag.last.y;
        drag.last = at;

        if let Some(placement) = board.placements().iter().find(|s| s.id == drag.sticker) {
            let offset = placement.offset.translated(dx, dy);
            board.reposition(drag.sticker, offset);
        }
    }

    /// End the active drag, returning the sticker it moved.
    pub fn end(&mut self) -> Option<StickerId> {
        self.active.take().map(|drag| drag.sticker)
    }
}
