//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and command execution
//! - `input` - keyboard and pointer event to message mapping

pub mod app;
pub mod input;

pub use app::App;
