//! Section navigation and unit load handlers

use crate::commands::Cmd;
use crate::messages::SectionMsg;
use crate::model::AppModel;
use crate::panel::WidthStore;

pub fn update_section(model: &mut AppModel, msg: SectionMsg) -> Option<Cmd> {
    match msg {
        SectionMsg::Select(key) => {
            if !key.is_enabled() {
                tracing::debug!("Section '{}' is disabled, ignoring selection", key);
                return None;
            }

            if key == model.section {
                // Clicking the active section folds the panel away or back out
                model.layout.toggle_collapsed();
                return Some(Cmd::Redraw);
            }

            model.section = key;
            model.boundary.reset();
            if model.layout.width().is_collapsed() {
                model.layout.ensure_open();
            }

            let requests = model.request_loads();
            Some(Cmd::redraw_with_loads(requests))
        }

        SectionMsg::UnitLoaded { key, kind, result } => {
            if !model.registry.complete(key, kind, result) {
                return None;
            }

            // The unit stays cached either way; only the active section is shown
            if key != model.section {
                tracing::debug!(
                    "Not showing {} unit for '{}': section '{}' is active",
                    kind,
                    key,
                    model.section
                );
                return None;
            }

            let requests = model.request_loads();
            Some(Cmd::redraw_with_loads(requests))
        }
    }
}
