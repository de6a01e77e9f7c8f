//! Input mapping
//!
//! Keys and pointer events are turned into messages here; the app only
//! dispatches them. Kept free of window state so it can be tested directly.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

use sidepanel::messages::{Msg, PanelMsg, SectionMsg};
use sidepanel::panel::{PanelView, SectionKey};
use sidepanel::view::geometry::is_on_resize_handle;

/// Map a pressed key to a message.
///
/// `1`..`5` select sections in sidebar order, `b` toggles the panel and
/// Escape aborts a drag.
pub fn key_to_msg(key: &Key, resizing: bool) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::Escape) if resizing => Some(Msg::Panel(PanelMsg::CancelResize)),
        Key::Character(text) => {
            let ch = text.chars().next()?;
            if ch.eq_ignore_ascii_case(&'b') {
                return Some(Msg::Panel(PanelMsg::ToggleCollapsed));
            }
            let index = ch.to_digit(10)?.checked_sub(1)? as usize;
            SectionKey::ALL
                .get(index)
                .map(|key| Msg::Section(SectionMsg::Select(*key)))
        }
        _ => None,
    }
}

/// Map a left-button press/release at `x, y` to a resize message
pub fn button_to_msg(
    state: ElementState,
    button: MouseButton,
    (x, y): (f64, f64),
    panel: Option<&PanelView>,
    resizing: bool,
) -> Option<Msg> {
    if button != MouseButton::Left {
        return None;
    }
    match state {
        ElementState::Pressed => {
            let panel = panel?;
            is_on_resize_handle(panel.width, panel.height, x, y)
                .then_some(Msg::Panel(PanelMsg::StartResize { x }))
        }
        ElementState::Released if resizing => Some(Msg::Panel(PanelMsg::EndResize { x })),
        ElementState::Released => None,
    }
}
