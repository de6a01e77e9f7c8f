//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::sync::Arc;

use crate::panel::{PanelWidth, SectionKey, UnitKind, UnitLoadError};
use crate::sections::SectionView;

/// Panel resize and collapse messages
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Pointer pressed on the resize handle
    StartResize { x: f64 },
    /// Pointer moved while dragging the handle
    UpdateResize { x: f64 },
    /// Pointer released; commits the drag
    EndResize { x: f64 },
    /// Drag aborted (Escape, focus lost)
    CancelResize,
    /// Set the width from outside the drag gesture
    SetWidth(PanelWidth),
    /// Collapse an open panel or reopen a collapsed one
    ToggleCollapsed,
}

/// Section navigation and unit loading
#[derive(Debug, Clone)]
pub enum SectionMsg {
    /// Sidebar entry clicked
    Select(SectionKey),
    /// A unit loader finished
    UnitLoaded {
        key: SectionKey,
        kind: UnitKind,
        result: Result<Arc<dyn SectionView>, UnitLoadError>,
    },
}

/// Router state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterMsg {
    /// Router started resolving a route
    Navigating,
    /// Router finished resolving
    Resolved,
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Model created and window ready; kicks off the first loads
    Started,
    /// Window resized
    Resize(u32, u32),
    /// Status bar laid out again; sent by the runtime after every window resize
    BottomBarMeasured(Option<f32>),
    /// Persist width and section
    SaveSession,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Panel(PanelMsg),
    Section(SectionMsg),
    Router(RouterMsg),
    App(AppMsg),
}
