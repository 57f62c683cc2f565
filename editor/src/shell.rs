//! Shell state machine composing schema sync and pane resize.
//!
//! `ShellCore` is the single owner of the editor surface's business state:
//! the schema cache, the drag machine, the latest diagram error, and the
//! read-only/visibility flags whose changes must reach the diagram
//! controller. It holds no browser handles, so the whole protocol is
//! testable natively; effects on the outside world are described by
//! [`Action`] values the hosting layer applies.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::resize::ResizeController;
use crate::sync::SchemaSync;

/// Effects for the hosting layer to apply to its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Invoke the host's `schema_changed` callback (first meaningful edit).
    NotifySchemaChanged(String),
    /// Ask the diagram controller to import the given schema text.
    ImportSchema(String),
    /// Ask the diagram controller to re-measure and re-layout.
    ResizeDiagram,
    /// Force the text widget to re-render with the current cache value.
    RefreshEditor,
    /// Forward a changed read-only flag to the diagram controller.
    SetReadOnly(bool),
}

/// Business state behind the split-pane editor surface.
#[derive(Debug, Clone, Default)]
pub struct ShellCore {
    sync: SchemaSync,
    resize: ResizeController,
    stitches: Option<String>,
    error: String,
    read_only: bool,
    editor_visible: bool,
}

impl ShellCore {
    #[must_use]
    pub fn new(read_only: bool, editor_visible: bool) -> Self {
        Self { read_only, editor_visible, ..Self::default() }
    }

    // --- Lifecycle ---

    /// Actions to run once the diagram controller is attached: the initial
    /// read-only state, plus an import when the host supplied a schema.
    #[must_use]
    pub fn bootstrap(&self, initial_schema: Option<&str>) -> Vec<Action> {
        let mut actions = vec![Action::SetReadOnly(self.read_only)];
        if let Some(schema) = initial_schema.filter(|schema| !schema.is_empty()) {
            actions.push(Action::ImportSchema(schema.to_owned()));
        }
        actions
    }

    /// The text pane toggled in or out of the layout; the diagram must
    /// re-measure the changed available space. Emits nothing when the
    /// visibility did not actually change.
    pub fn set_editor_visible(&mut self, visible: bool) -> Option<Action> {
        if self.editor_visible == visible {
            return None;
        }
        self.editor_visible = visible;
        Some(Action::ResizeDiagram)
    }

    /// Forward a read-only change to the controller, once per change.
    pub fn set_read_only(&mut self, read_only: bool) -> Option<Action> {
        if self.read_only == read_only {
            return None;
        }
        self.read_only = read_only;
        Some(Action::SetReadOnly(read_only))
    }

    // --- Schema flow ---

    /// A user edit arrived from the text widget.
    pub fn on_edit(&mut self, text: &str) -> Option<Action> {
        self.sync
            .on_user_edit(text)
            .then(|| Action::NotifySchemaChanged(text.to_owned()))
    }

    /// Explicit generate request: import the cached text, or nothing when
    /// the cache is empty.
    #[must_use]
    pub fn on_generate(&self) -> Option<Action> {
        self.sync
            .generation_request()
            .map(|schema| Action::ImportSchema(schema.to_owned()))
    }

    /// The diagram controller pushed a new authoritative schema after its
    /// own editing operations. Clears any pending error; the stitches
    /// fragment is an opaque pass-through.
    pub fn on_schema_push(&mut self, code: &str, stitches: Option<&str>) -> Option<Action> {
        self.stitches = stitches.map(str::to_owned);
        self.error.clear();
        self.sync
            .on_external_schema(code)
            .then_some(Action::RefreshEditor)
    }

    /// The diagram controller reported an import/parse failure. The message
    /// replaces any previous one wholesale.
    pub fn on_diagram_errors(&mut self, message: &str) {
        self.error = message.to_owned();
    }

    // --- Drag flow (delegated to the resize machine) ---

    pub fn on_drag_start(&mut self, pointer_x: f64) {
        self.resize.begin_drag(pointer_x);
    }

    /// One drag frame. Returns the new width directly rather than an action:
    /// this path runs per pointer event, and the caller must apply the width
    /// and notify the diagram controller on every call.
    pub fn on_drag_over(&mut self, pointer_x: f64, viewport_width: f64) -> f64 {
        self.resize.update_drag(pointer_x, viewport_width)
    }

    pub fn on_drag_end(&mut self) {
        self.resize.end_drag();
    }

    pub fn on_drag_cancel(&mut self) {
        self.resize.cancel_drag();
    }

    // --- Queries ---

    /// The cached schema text, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.sync.schema()
    }

    /// The opaque stitched fragment delivered with the last push, if any.
    #[must_use]
    pub fn stitches(&self) -> Option<&str> {
        self.stitches.as_deref()
    }

    /// The most recent diagram error message; empty when none is pending.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn generate_visible(&self) -> bool {
        self.sync.generate_visible()
    }

    #[must_use]
    pub fn pane_width(&self) -> f64 {
        self.resize.width()
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    #[must_use]
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    #[must_use]
    pub fn editor_visible(&self) -> bool {
        self.editor_visible
    }
}
