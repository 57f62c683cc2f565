//! Schema synchronization: the last-known schema cache and its update rules.
//!
//! The text widget, the host application, and the diagram controller each
//! hold their own idea of the schema source. `SchemaSync` owns the one
//! authoritative snapshot and decides which side gets told about a change:
//! user edits seed the host exactly once, external pushes refresh the widget
//! only when the text actually changed, and diagram imports happen only on
//! explicit request.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

/// Last-known schema text and the propagation rules around it.
///
/// An empty string counts as unset: it neither satisfies the first-edit rule
/// nor makes generation available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSync {
    last_schema: Option<String>,
}

impl SchemaSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached schema text, if any was ever received.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.last_schema.as_deref()
    }

    fn unset(&self) -> bool {
        self.last_schema.as_deref().is_none_or(str::is_empty)
    }

    /// Record a user edit. The cache is superseded on every call.
    ///
    /// Returns `true` when this was the first meaningful edit — the cache
    /// was empty and the new text is not — which is the one time the host's
    /// `schema_changed` callback fires. Once the host holds a baseline,
    /// further keystrokes stay local.
    pub fn on_user_edit(&mut self, text: &str) -> bool {
        let first = self.unset() && !text.is_empty();
        self.last_schema = Some(text.to_owned());
        first
    }

    /// Replace the cache with an authoritative schema delivered from outside.
    ///
    /// Returns `true` when the value differs from the cached one and the
    /// text widget must therefore be forced to re-render.
    pub fn on_external_schema(&mut self, text: &str) -> bool {
        if self.last_schema.as_deref() == Some(text) {
            return false;
        }
        self.last_schema = Some(text.to_owned());
        true
    }

    /// The text to import on an explicit generate request, or `None` when
    /// the cache is empty and the request is silently ignored.
    #[must_use]
    pub fn generation_request(&self) -> Option<&str> {
        if self.unset() { None } else { self.last_schema.as_deref() }
    }

    /// Whether the generate affordance should be offered.
    #[must_use]
    pub fn generate_visible(&self) -> bool {
        !self.unset()
    }
}
