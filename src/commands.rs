//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::panel::LoadRequest;
use crate::session::SessionState;

#[derive(Debug, Clone, Default)]
pub enum Cmd {
    #[default]
    None,
    Redraw,
    /// Run a unit loader off the UI thread and report back with
    /// `SectionMsg::UnitLoaded`
    LoadUnit(LoadRequest),
    SaveSession(SessionState),
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw plus any unit loads that were requested
    pub fn redraw_with_loads(requests: Vec<LoadRequest>) -> Self {
        if requests.is_empty() {
            return Cmd::Redraw;
        }
        let mut cmds = vec![Cmd::Redraw];
        cmds.extend(requests.into_iter().map(Cmd::LoadUnit));
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Loads redraw when their result arrives
            Cmd::LoadUnit(_) => false,
            Cmd::SaveSession(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// All unit loads contained in this command
    pub fn load_requests(&self) -> Vec<LoadRequest> {
        match self {
            Cmd::LoadUnit(request) => vec![*request],
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::load_requests).collect(),
            _ => Vec::new(),
        }
    }
}
