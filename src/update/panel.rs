//! Panel resize handlers
//!
//! The drag gesture lives in the panel; the committed width lives in the
//! layout. Every commit goes through `WidthStore`, so the result is computed
//! from whatever width is current when the pointer is released.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::WidthStore;

pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::StartResize { x } => {
            let width = model.layout.width();
            model.panel.begin_resize(x, width);
            Some(Cmd::Redraw)
        }

        PanelMsg::UpdateResize { x } => {
            let window_width = model.layout.window_width();
            model
                .panel
                .drag_resize(x, window_width)
                .map(|_| Cmd::Redraw)
        }

        PanelMsg::EndResize { x } => {
            let window_width = model.layout.window_width();
            let committed = model.panel.end_resize(x, window_width, &mut model.layout)?;
            if committed.is_collapsed() {
                tracing::info!("Side panel collapsed by resize");
            }
            Some(Cmd::Redraw)
        }

        PanelMsg::CancelResize => {
            model.panel.cancel_resize();
            Some(Cmd::Redraw)
        }

        PanelMsg::SetWidth(width) => {
            if model.layout.width() == width {
                return None;
            }
            model.layout.set_width(width);
            Some(Cmd::Redraw)
        }

        PanelMsg::ToggleCollapsed => {
            model.layout.toggle_collapsed();
            Some(Cmd::Redraw)
        }
    }
}
