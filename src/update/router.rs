//! Router state handlers

use crate::commands::Cmd;
use crate::messages::RouterMsg;
use crate::model::AppModel;

pub fn update_router(model: &mut AppModel, msg: RouterMsg) -> Option<Cmd> {
    let loading = matches!(msg, RouterMsg::Navigating);
    if model.router.loading == loading {
        return None;
    }

    model.router.loading = loading;
    tracing::debug!("Router loading = {}", loading);

    // Resolving unblocks the content load for the active section
    let requests = model.request_loads();
    Some(Cmd::redraw_with_loads(requests))
}
