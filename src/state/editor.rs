#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Host-visible editor state: the schema text, the optional stitched
/// fragment delivered alongside it, and the current diagram error.
///
/// Empty strings mean unset; the error region renders only while `errors`
/// is non-empty, and a successful schema push clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub code: String,
    pub stitches: String,
    pub errors: String,
}
