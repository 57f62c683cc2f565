//! Shared numeric constants for the editor crate.

// ── Pane sizing ─────────────────────────────────────────────────

/// Initial text-pane width in CSS pixels.
pub const SIDEBAR_WIDTH: f64 = 320.0;

/// Lower bound for a dragged pane width, as a fraction of the live viewport width.
pub const MIN_DRAG_FRACTION: f64 = 0.15;

/// Upper bound for a dragged pane width, as a fraction of the live viewport width.
pub const MAX_DRAG_FRACTION: f64 = 0.85;
