//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod panel;
mod router;
mod section;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
#[cfg(debug_assertions)]
use crate::panel::WidthStore;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use panel::update_panel;
pub use router::update_router;
pub use section::update_section;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Section(m) => section::update_section(model, m),
        Msg::Router(m) => router::update_router(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::PanelMsg;

    // Pointer moves during a drag are too frequent to log
    let is_noisy = matches!(&msg, Msg::Panel(PanelMsg::UpdateResize { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let width_before = model.layout.width();
    let section_before = model.section;

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let width_after = model.layout.width();
    if width_before != width_after {
        debug!(target: "panel", before = width_before.get(), after = width_after.get(), "width changed");
    }
    if section_before != model.section {
        debug!(target: "panel", before = %section_before, after = %model.section, "section changed");
    }

    result
}

/// Get a display name for a message type
///
/// Unit payloads are summarised so loaded views are not dumped into logs.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::SectionMsg;

    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Section(SectionMsg::Select(key)) => format!("Section::Select({})", key),
        Msg::Section(SectionMsg::UnitLoaded { key, kind, result }) => format!(
            "Section::UnitLoaded({}, {}, {})",
            key,
            kind,
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::Router(m) => format!("Router::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
