//! Tests for panel resizing through the update loop

mod common;

use common::{test_model, WINDOW_WIDTH};
use sidepanel::messages::{Msg, PanelMsg};
use sidepanel::model::AppModel;
use sidepanel::panel::{PanelWidth, SectionKey, WidthStore, MIN_WIDTH};
use sidepanel::update::update;

fn drag(model: &mut AppModel, from: f64, to: f64) {
    update(model, Msg::Panel(PanelMsg::StartResize { x: from }));
    update(model, Msg::Panel(PanelMsg::UpdateResize { x: to }));
    update(model, Msg::Panel(PanelMsg::EndResize { x: to }));
}

// ============================================================================
// Resize stop
// ============================================================================

#[test]
fn test_drag_below_minimum_collapses() {
    let mut model = test_model(SectionKey::Explorer, 200);
    drag(&mut model, 200.0, 150.0);

    assert_eq!(model.layout.width(), PanelWidth::COLLAPSED);
}

#[test]
fn test_drag_above_minimum_keeps_width() {
    let mut model = test_model(SectionKey::Explorer, 200);
    drag(&mut model, 200.0, 190.0);

    assert_eq!(model.layout.width(), PanelWidth::new(190));
}

#[test]
fn test_drag_to_exact_minimum_is_kept() {
    let mut model = test_model(SectionKey::Explorer, 200);
    drag(&mut model, 200.0, 180.0);

    assert_eq!(model.layout.width().get(), MIN_WIDTH);
}

#[test]
fn test_committed_width_is_zero_or_at_least_minimum() {
    for target in [0.0, 40.0, 179.0, 180.0, 181.0, 300.0, 700.0] {
        let mut model = test_model(SectionKey::Explorer, 250);
        drag(&mut model, 250.0, target);

        let width = model.layout.width().get();
        assert!(
            width == 0 || width >= MIN_WIDTH,
            "drag to {target} committed {width}"
        );
    }
}

#[test]
fn test_collapsed_panel_can_be_dragged_open() {
    let mut model = test_model(SectionKey::Explorer, 0);
    drag(&mut model, 0.0, 260.0);

    assert_eq!(model.layout.width(), PanelWidth::new(260));
}

#[test]
fn test_drag_is_capped_to_window_fraction() {
    let mut model = test_model(SectionKey::Explorer, 300);
    drag(&mut model, 300.0, 5000.0);

    assert_eq!(model.layout.width().get(), WINDOW_WIDTH * 3 / 4);
}

// ============================================================================
// Live width while dragging
// ============================================================================

#[test]
fn test_view_follows_pointer_before_commit() {
    let mut model = test_model(SectionKey::Explorer, 300);
    update(&mut model, Msg::Panel(PanelMsg::StartResize { x: 300.0 }));
    update(&mut model, Msg::Panel(PanelMsg::UpdateResize { x: 350.0 }));

    let view = model.panel_view().unwrap();
    assert_eq!(view.width, 350);
    assert!(view.resizing);
    // Not committed yet
    assert_eq!(model.layout.width(), PanelWidth::new(300));
}

#[test]
fn test_cancel_keeps_previous_width() {
    let mut model = test_model(SectionKey::Explorer, 300);
    update(&mut model, Msg::Panel(PanelMsg::StartResize { x: 300.0 }));
    update(&mut model, Msg::Panel(PanelMsg::UpdateResize { x: 100.0 }));
    update(&mut model, Msg::Panel(PanelMsg::CancelResize));

    assert_eq!(model.layout.width(), PanelWidth::new(300));
    assert_eq!(model.panel_view().unwrap().width, 300);
    assert!(update(&mut model, Msg::Panel(PanelMsg::EndResize { x: 100.0 })).is_none());
}

#[test]
fn test_commit_uses_width_current_at_release() {
    let mut model = test_model(SectionKey::Explorer, 300);
    update(&mut model, Msg::Panel(PanelMsg::StartResize { x: 300.0 }));
    // Width changed elsewhere mid-drag
    update(
        &mut model,
        Msg::Panel(PanelMsg::SetWidth(PanelWidth::new(400))),
    );
    update(&mut model, Msg::Panel(PanelMsg::EndResize { x: 280.0 }));

    assert_eq!(model.layout.width(), PanelWidth::new(380));
}

// ============================================================================
// Collapse toggle
// ============================================================================

#[test]
fn test_toggle_after_collapse_restores_last_width() {
    let mut model = test_model(SectionKey::Explorer, 260);
    drag(&mut model, 260.0, 100.0);
    assert!(model.layout.width().is_collapsed());

    update(&mut model, Msg::Panel(PanelMsg::ToggleCollapsed));
    assert_eq!(model.layout.width(), PanelWidth::new(260));
}

#[test]
fn test_selecting_a_section_reopens_collapsed_panel() {
    let mut model = test_model(SectionKey::Explorer, 0);
    common::select(&mut model, SectionKey::Tutorials);

    assert_eq!(model.layout.width(), PanelWidth::DEFAULT);
}

#[test]
fn test_selecting_active_section_collapses() {
    let mut model = test_model(SectionKey::Explorer, 240);
    common::select(&mut model, SectionKey::Explorer);

    assert!(model.layout.width().is_collapsed());
    assert_eq!(model.section, SectionKey::Explorer);
}
