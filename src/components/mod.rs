//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `editor` hosts the split-pane surface and owns the diagram controller;
//! `select_language` and `schema_editor` are the built-in implementations of
//! the collaborators it accepts by injection.

pub mod editor;
pub mod schema_editor;
pub mod select_language;
