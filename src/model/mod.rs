//! Application model - the complete state hosting the side panel
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod host;
pub mod layout;

pub use host::HostWindow;
pub use layout::PanelLayout;

use std::rc::Rc;

use crate::config::PanelConfig;
use crate::panel::{
    ErrorBoundary, LoadRequest, PanelView, ResizeHub, SectionKey, SectionRegistry, SidePanel,
    SwitchInputs, UnitLoadError, WidthStore,
};
use crate::session::SessionState;
use crate::theme::{load_theme, PanelTheme};
use crate::view::geometry::status_bar_height;

/// Router state as seen by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterState {
    /// Router still resolving its initial state
    pub loading: bool,
}

impl Default for RouterState {
    fn default() -> Self {
        Self { loading: true }
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Window size and the lifted panel width
    pub layout: PanelLayout,
    /// Active section; written only by navigation
    pub section: SectionKey,
    pub router: RouterState,
    pub registry: SectionRegistry,
    pub panel: SidePanel,
    /// Measurement anchors read by the panel's size tracker
    pub host: HostWindow,
    /// Window resize notifications
    pub resize_hub: ResizeHub,
    pub boundary: ErrorBoundary,
    pub theme: PanelTheme,
    pub config: PanelConfig,
}

impl AppModel {
    /// Create a model for a window of the given size.
    ///
    /// The panel is mounted immediately, so its height is measured once here.
    pub fn new(
        window_width: u32,
        window_height: u32,
        config: PanelConfig,
        registry: SectionRegistry,
    ) -> Self {
        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}, using default", config.theme, e);
            PanelTheme::default()
        });

        let host = HostWindow::new();
        host.set_root_height(Some(window_height as f32));
        host.set_bottom_bar_height(status_bar_height(window_height));

        let resize_hub = ResizeHub::new();
        let mut panel = SidePanel::new();
        panel.mount(&resize_hub, Rc::new(host.clone()));

        Self {
            layout: PanelLayout::new(window_width, window_height, config.width),
            section: config.section,
            router: RouterState::default(),
            registry,
            panel,
            host,
            resize_hub,
            boundary: ErrorBoundary::new(),
            theme,
            config,
        }
    }

    /// Apply a restored session on top of the config defaults
    pub fn restore_session(&mut self, session: SessionState) {
        tracing::debug!(
            "Restoring session: width={} section={}",
            session.width.get(),
            session.section
        );
        self.layout.set_width(session.width);
        if session.section.is_enabled() {
            self.section = session.section;
        }
    }

    pub fn session(&self) -> SessionState {
        SessionState {
            width: self.layout.width(),
            section: self.section,
        }
    }

    pub fn switch_inputs(&self) -> SwitchInputs {
        SwitchInputs {
            key: self.section,
            router_loading: self.router.loading,
        }
    }

    /// Start whatever loads the current section needs
    pub fn request_loads(&mut self) -> Vec<LoadRequest> {
        let inputs = self.switch_inputs();
        self.panel.request_loads(inputs, &mut self.registry)
    }

    /// Compose the panel for this frame
    pub fn panel_view(&mut self) -> Result<PanelView, UnitLoadError> {
        let inputs = self.switch_inputs();
        self.panel
            .compose(self.layout.width(), inputs, &self.registry)
    }

    /// Compose the panel, routing failures to the error boundary
    pub fn render_panel(&mut self) -> Option<PanelView> {
        let view = self.panel_view();
        self.boundary.catch(view)
    }
}
