//! Pane-resize interaction: the drag session and the width state machine.
//!
//! `DragSession` is the ephemeral state tracked between drag-start and
//! drag-end, carrying the gesture origin needed to compute deltas.
//! `ResizeController` owns the long-lived pane width and applies clamped
//! deltas from pointer positions. The two lifetimes live in separate structs
//! so a session can only influence the width while it exists.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::{MAX_DRAG_FRACTION, MIN_DRAG_FRACTION, SIDEBAR_WIDTH};

/// Ephemeral drag state captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Screen-space X coordinate where the drag started.
    pub start_x: f64,
    /// Pane width at the moment the drag started.
    pub start_width: f64,
}

/// Pane-resize state machine.
///
/// The current width doubles as the committed start width for the next
/// session: `end_drag` keeps it, and the next session snapshots it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeController {
    width: f64,
    session: Option<DragSession>,
    resizing: bool,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(SIDEBAR_WIDTH)
    }
}

impl ResizeController {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width, session: None, resizing: false }
    }

    /// Current pane width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Whether the resize affordance should be shown.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Whether a drag session is currently open.
    #[must_use]
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    /// Open a drag session at `pointer_x`, with the current width as the
    /// session's start width. Ignored while a session is already active;
    /// overlapping gestures are not supported.
    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.session.is_none() {
            self.session = Some(DragSession { start_x: pointer_x, start_width: self.width });
        }
        self.resizing = true;
    }

    /// Apply one drag frame at `pointer_x` and return the new clamped width.
    ///
    /// Opens a session lazily when none is active: the drag-start event can
    /// be missed or deliver no usable coordinate, so the first move is
    /// tolerated as the gesture origin. Clamp bounds derive from the live
    /// viewport width on every call, never from a cached value. Hot path:
    /// the caller applies the returned width to layout and notifies the
    /// diagram on every call, so nothing here allocates.
    pub fn update_drag(&mut self, pointer_x: f64, viewport_width: f64) -> f64 {
        let session = *self
            .session
            .get_or_insert(DragSession { start_x: pointer_x, start_width: self.width });
        let delta = pointer_x - session.start_x;
        let minimum = viewport_width * MIN_DRAG_FRACTION;
        let maximum = viewport_width * MAX_DRAG_FRACTION;
        self.width = (session.start_width + delta).clamp(minimum, maximum);
        self.width
    }

    /// Commit the current width as the next session's start width and close
    /// the session.
    pub fn end_drag(&mut self) {
        self.session = None;
        self.resizing = false;
    }

    /// Drop the resize affordance without rolling back applied widths.
    ///
    /// Fired on drag-exit/drag-leave. The session survives so a drag-over
    /// arriving after a spurious leave continues the same gesture.
    pub fn cancel_drag(&mut self) {
        self.resizing = false;
    }
}
