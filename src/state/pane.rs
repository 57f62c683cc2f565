#[cfg(test)]
#[path = "pane_test.rs"]
mod pane_test;

use editor::consts::SIDEBAR_WIDTH;

/// Presentation state of the resizable text pane.
///
/// This mirrors the engine's resize machine for rendering: `width` restyles
/// the sidebar on every drag frame, `resizing` drives the handle's visual
/// affordance. The business rules (clamping, session lifetime) stay in the
/// engine; cancelled drags drop `resizing` here without touching `width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneState {
    /// Current text-pane width in CSS pixels.
    pub width: f64,
    /// Whether a drag gesture is showing the resize affordance.
    pub resizing: bool,
}

impl Default for PaneState {
    fn default() -> Self {
        Self { width: SIDEBAR_WIDTH, resizing: false }
    }
}

/// Inline style for the sidebar: both `width` and `flex-basis`, so flex
/// layouts track the drag without a reflow of their own.
#[must_use]
pub fn pane_width_style(width: f64) -> String {
    format!("width: {width:.0}px; flex-basis: {width:.0}px;")
}
