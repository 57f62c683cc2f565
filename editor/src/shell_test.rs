use super::*;

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_without_schema_sets_read_only_only() {
    let shell = ShellCore::new(true, true);
    assert_eq!(shell.bootstrap(None), [Action::SetReadOnly(true)]);
}

#[test]
fn bootstrap_with_schema_imports_it() {
    let shell = ShellCore::new(false, true);
    assert_eq!(
        shell.bootstrap(Some("type Query { ok: Boolean }")),
        [
            Action::SetReadOnly(false),
            Action::ImportSchema("type Query { ok: Boolean }".to_owned()),
        ]
    );
}

#[test]
fn bootstrap_ignores_empty_schema() {
    let shell = ShellCore::new(false, true);
    assert_eq!(shell.bootstrap(Some("")), [Action::SetReadOnly(false)]);
}

// =============================================================
// Visibility and read-only forwarding
// =============================================================

#[test]
fn visibility_toggle_resizes_diagram_once_per_change() {
    let mut shell = ShellCore::new(false, true);
    assert_eq!(shell.set_editor_visible(true), None);
    assert_eq!(shell.set_editor_visible(false), Some(Action::ResizeDiagram));
    assert_eq!(shell.set_editor_visible(false), None);
    assert_eq!(shell.set_editor_visible(true), Some(Action::ResizeDiagram));
}

#[test]
fn read_only_forwards_only_on_change() {
    let mut shell = ShellCore::new(false, true);
    assert_eq!(shell.set_read_only(false), None);
    assert_eq!(shell.set_read_only(true), Some(Action::SetReadOnly(true)));
    assert_eq!(shell.set_read_only(true), None);
}

// =============================================================
// Schema flow
// =============================================================

#[test]
fn first_edit_notifies_host_then_stays_local() {
    let mut shell = ShellCore::new(false, true);
    assert_eq!(shell.on_edit(""), None);
    assert_eq!(
        shell.on_edit("type A"),
        Some(Action::NotifySchemaChanged("type A".to_owned()))
    );
    assert_eq!(shell.on_edit("type AB"), None);
    assert_eq!(shell.schema(), Some("type AB"));
}

#[test]
fn generate_imports_cache_once_per_invocation() {
    let mut shell = ShellCore::new(false, true);
    assert_eq!(shell.on_generate(), None);
    shell.on_edit("type A { id: ID }");
    let expected = Action::ImportSchema("type A { id: ID }".to_owned());
    assert_eq!(shell.on_generate(), Some(expected.clone()));
    // Each explicit request imports again; edits alone never do.
    assert_eq!(shell.on_generate(), Some(expected));
}

#[test]
fn schema_push_refreshes_editor_when_changed() {
    let mut shell = ShellCore::new(false, true);
    assert_eq!(
        shell.on_schema_push("type A", Some("extend type A")),
        Some(Action::RefreshEditor)
    );
    assert_eq!(shell.schema(), Some("type A"));
    assert_eq!(shell.stitches(), Some("extend type A"));
    assert_eq!(shell.on_schema_push("type A", None), None);
    assert_eq!(shell.stitches(), None);
}

#[test]
fn generate_becomes_visible_with_content() {
    let mut shell = ShellCore::new(false, true);
    assert!(!shell.generate_visible());
    shell.on_edit("type A");
    assert!(shell.generate_visible());
}

// =============================================================
// Error lifecycle
// =============================================================

#[test]
fn diagram_error_is_held_until_successful_push() {
    let mut shell = ShellCore::new(false, true);
    shell.on_diagram_errors("Unexpected token");
    assert_eq!(shell.error(), "Unexpected token");
    shell.on_diagram_errors("Syntax Error: expected Name");
    assert_eq!(shell.error(), "Syntax Error: expected Name");
    shell.on_schema_push("type A", None);
    assert_eq!(shell.error(), "");
}

// =============================================================
// Drag flow
// =============================================================

#[test]
fn drag_round_trip_updates_and_commits_width() {
    let mut shell = ShellCore::new(false, true);
    shell.on_drag_start(500.0);
    assert!(shell.is_resizing());
    assert_eq!(shell.on_drag_over(650.0, 1000.0), 470.0);
    assert_eq!(shell.pane_width(), 470.0);
    shell.on_drag_end();
    assert!(!shell.is_resizing());

    // Committed width carries into the next gesture.
    shell.on_drag_start(700.0);
    let width = shell.pane_width();
    assert_eq!(shell.on_drag_over(700.0, 1000.0), width);
}

#[test]
fn drag_cancel_keeps_width() {
    let mut shell = ShellCore::new(false, true);
    shell.on_drag_start(500.0);
    let width = shell.on_drag_over(650.0, 1000.0);
    shell.on_drag_cancel();
    assert!(!shell.is_resizing());
    assert_eq!(shell.pane_width(), width);
}
