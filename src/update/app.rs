//! Application-level handlers: startup, window resize, session

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::panel::{Anchor, MeasurementSource};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Started => {
            let requests = model.request_loads();
            Some(Cmd::redraw_with_loads(requests))
        }

        AppMsg::Resize(width, height) => {
            model.layout.window_size = (width, height);
            model.host.set_root_height(Some(height as f32));
            model.resize_hub.dispatch();
            Some(Cmd::Redraw)
        }

        AppMsg::BottomBarMeasured(height) => {
            if model.host.anchor_height(Anchor::BottomBar) == height {
                return None;
            }
            model.host.set_bottom_bar_height(height);
            model.resize_hub.dispatch();
            Some(Cmd::Redraw)
        }

        AppMsg::SaveSession => Some(Cmd::SaveSession(model.session())),
    }
}
