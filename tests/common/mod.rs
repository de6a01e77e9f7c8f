//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sidepanel::commands::Cmd;
use sidepanel::config::PanelConfig;
use sidepanel::messages::{Msg, RouterMsg, SectionMsg};
use sidepanel::model::AppModel;
use sidepanel::panel::{LoadRequest, PanelWidth, SectionKey, SectionRegistry};
use sidepanel::update::update;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 979;

/// Model on `section` with the given width, router still loading
pub fn test_model(section: SectionKey, width: u32) -> AppModel {
    test_model_with_registry(section, width, SectionRegistry::with_builtin_sections())
}

pub fn test_model_with_registry(
    section: SectionKey,
    width: u32,
    registry: SectionRegistry,
) -> AppModel {
    let config = PanelConfig {
        width: PanelWidth::new(width),
        section,
        restore_session: false,
        ..PanelConfig::default()
    };
    AppModel::new(WINDOW_WIDTH, WINDOW_HEIGHT, config, registry)
}

/// Resolve the router and return the loads it kicked off (not yet run)
pub fn resolve_router(model: &mut AppModel) -> Vec<LoadRequest> {
    update(model, Msg::Router(RouterMsg::Resolved))
        .map(|cmd| cmd.load_requests())
        .unwrap_or_default()
}

/// Run one load synchronously and feed the result back
pub fn finish_load(model: &mut AppModel, request: LoadRequest) -> Option<Cmd> {
    let result = request.run();
    update(
        model,
        Msg::Section(SectionMsg::UnitLoaded {
            key: request.key,
            kind: request.kind,
            result,
        }),
    )
}

/// Run loads until none are outstanding, following any loads the results trigger
pub fn drain_loads(model: &mut AppModel, mut pending: Vec<LoadRequest>) {
    while let Some(request) = pending.pop() {
        if let Some(cmd) = finish_load(model, request) {
            pending.extend(cmd.load_requests());
        }
    }
}

/// Select a section and return the loads it requested
pub fn select(model: &mut AppModel, key: SectionKey) -> Vec<LoadRequest> {
    update(model, Msg::Section(SectionMsg::Select(key)))
        .map(|cmd| cmd.load_requests())
        .unwrap_or_default()
}

/// Name of the unit mounted in the panel body right now
pub fn mounted_name(model: &mut AppModel) -> Option<&'static str> {
    model
        .panel_view()
        .ok()
        .and_then(|view| view.decision.mounted.unit_name())
}
