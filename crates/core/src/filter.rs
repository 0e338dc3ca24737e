//! Static Instagram-style filter catalog.
//!
//! Thirteen named filters (including the identity `"none"`), each a
//! fixed chain of color operations applied to the camera frame both in
//! the live preview and in the exported composition — the two must
//! never drift apart.
//!
//! Filter identity is advisory UI state, not a correctness-critical
//! value: [`resolve`] degrades unknown ids to the identity filter
//! instead of failing.

/// One color operation in a filter chain.
///
/// Semantics follow the W3C filter-effects shorthand functions: `1.0`
/// (or `0.0` for the mix-style ops) is the identity, values are
/// unclamped multipliers/mix amounts, `HueRotate` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    Brightness(f32),
    Contrast(f32),
    Saturate(f32),
    Grayscale(f32),
    Sepia(f32),
    HueRotate(f32),
}

/// One entry of the filter catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDescriptor {
    /// Unique catalog id, e.g. `"clarendon"`.
    pub id: &'static str,
    /// Human-readable picker label.
    pub label: &'static str,
    /// Ordered color operations; empty for the identity filter.
    pub ops: &'static [FilterOp],
}

use FilterOp::{Brightness, Contrast, Grayscale, HueRotate, Saturate, Sepia};

/// The full catalog, in picker order. Index 0 is the identity filter.
const CATALOG: &[FilterDescriptor] = &[
    FilterDescriptor {
        id: "none",
        label: "Original",
        ops: &[],
    },
    FilterDescriptor {
        id: "clarendon",
        label: "Clarendon",
        ops: &[Contrast(1.2), Saturate(1.35)],
    },
    FilterDescriptor {
        id: "gingham",
        label: "Gingham",
        ops: &[Brightness(1.05), HueRotate(-10.0)],
    },
    FilterDescriptor {
        id: "moon",
        label: "Luna",
        ops: &[Grayscale(1.0), Contrast(1.1), Brightness(1.1)],
    },
    FilterDescriptor {
        id: "lark",
        label: "Alondra",
        ops: &[Contrast(0.9), Brightness(1.1), Saturate(1.2)],
    },
    FilterDescriptor {
        id: "reyes",
        label: "Reyes",
        ops: &[Sepia(0.22), Brightness(1.1), Contrast(0.85)],
    },
    FilterDescriptor {
        id: "juno",
        label: "Juno",
        ops: &[Sepia(0.35), Contrast(1.15), Brightness(1.15), Saturate(1.8)],
    },
    FilterDescriptor {
        id: "slumber",
        label: "Sueño",
        ops: &[Saturate(0.66), Brightness(1.05)],
    },
    FilterDescriptor {
        id: "aden",
        label: "Aden",
        ops: &[
            HueRotate(-20.0),
            Contrast(0.9),
            Saturate(0.85),
            Brightness(1.2),
        ],
    },
    FilterDescriptor {
        id: "perpetua",
        label: "Perpetua",
        ops: &[Contrast(1.1), Brightness(1.05)],
    },
    FilterDescriptor {
        id: "amaro",
        label: "Amaro",
        ops: &[
            HueRotate(-10.0),
            Contrast(0.9),
            Brightness(1.1),
            Saturate(1.5),
        ],
    },
    FilterDescriptor {
        id: "valencia",
        label: "Valencia",
        ops: &[Sepia(0.25), Brightness(1.08), Contrast(1.05)],
    },
    FilterDescriptor {
        id: "walden",
        label: "Walden",
        ops: &[Sepia(0.35), Contrast(0.8), Brightness(1.15), Saturate(1.6)],
    },
];

/// The ordered filter catalog (13 entries, identity first).
pub fn filters() -> &'static [FilterDescriptor] {
    CATALOG
}

/// Look up a filter by id, degrading unknown ids to the identity filter.
pub fn resolve(id: &str) -> &'static FilterDescriptor {
    CATALOG.iter().find(|f| f.id == id).unwrap_or(&CATALOG[0])
}
