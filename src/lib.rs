//! Side panel - resizable, height-tracking panel with lazily loaded sections
//!
//! This crate provides the panel components and the Elm-style model, update
//! and view layers around them. The winit runtime lives in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panel;
pub mod sections;
pub mod session;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::PanelTheme;
