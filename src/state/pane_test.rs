use super::*;

// =============================================================
// PaneState defaults
// =============================================================

#[test]
fn pane_state_default_width_is_sidebar_width() {
    let state = PaneState::default();
    assert_eq!(state.width, SIDEBAR_WIDTH);
    assert!(!state.resizing);
}

// =============================================================
// pane_width_style
// =============================================================

#[test]
fn pane_width_style_sets_width_and_flex_basis() {
    assert_eq!(pane_width_style(450.0), "width: 450px; flex-basis: 450px;");
}

#[test]
fn pane_width_style_rounds_fractional_widths() {
    assert_eq!(pane_width_style(450.6), "width: 451px; flex-basis: 451px;");
}
