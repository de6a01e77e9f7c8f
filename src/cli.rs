//! Command-line argument parsing for the panel demo
//!
//! Flags override the persisted config for one run:
//! - Initial width and section
//! - Simulated router and unit load latency
//! - Failure injection per section

use clap::Parser;

use crate::config::PanelConfig;
use crate::panel::{PanelWidth, SectionKey};

/// Resizable side panel with lazily loaded sections
#[derive(Parser, Debug, Default)]
#[command(name = "sidepanel", version, about = "Resizable side panel demo")]
pub struct CliArgs {
    /// Initial panel width in pixels (0 starts collapsed)
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Section to open (explorer, build-deploy, test, tutorials)
    #[arg(long, value_name = "SECTION")]
    pub section: Option<SectionKey>,

    /// Time the router takes to resolve its initial state
    #[arg(long, value_name = "MS")]
    pub router_delay_ms: Option<u64>,

    /// Latency added to every unit load
    #[arg(long, value_name = "MS")]
    pub load_delay_ms: Option<u64>,

    /// Make every unit load of these sections fail
    #[arg(long, value_name = "SECTION", num_args = 1..)]
    pub fail: Vec<SectionKey>,

    /// Ignore the saved session (width and section)
    #[arg(short = 'n', long)]
    pub no_session: bool,
}

/// Load behaviour the runtime applies around every unit loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSimulation {
    pub router_delay_ms: u64,
    pub load_delay_ms: u64,
    /// Sections whose loads are forced to fail
    pub failing: Vec<SectionKey>,
}

impl LoadSimulation {
    pub fn fails(&self, key: SectionKey) -> bool {
        self.failing.contains(&key)
    }
}

impl CliArgs {
    /// Overlay the flags onto a loaded config
    pub fn apply_to(&self, config: &mut PanelConfig) {
        if let Some(width) = self.width {
            config.width = PanelWidth::new(width);
        }
        if let Some(section) = self.section {
            config.section = section;
        }
        if let Some(ms) = self.router_delay_ms {
            config.router_delay_ms = ms;
        }
        if let Some(ms) = self.load_delay_ms {
            config.load_delay_ms = ms;
        }
        if self.no_session {
            config.restore_session = false;
        }
    }

    /// Load simulation for the runtime, after [`CliArgs::apply_to`]
    pub fn load_simulation(&self, config: &PanelConfig) -> LoadSimulation {
        LoadSimulation {
            router_delay_ms: config.router_delay_ms,
            load_delay_ms: config.load_delay_ms,
            failing: self.fail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from([
            "sidepanel",
            "--width",
            "240",
            "--section",
            "tutorials",
            "--load-delay-ms",
            "0",
            "--no-session",
        ]);
        let mut config = PanelConfig::default();
        args.apply_to(&mut config);

        assert_eq!(config.width, PanelWidth::new(240));
        assert_eq!(config.section, SectionKey::Tutorials);
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.router_delay_ms, PanelConfig::default().router_delay_ms);
        assert!(!config.restore_session);
    }

    #[test]
    fn test_fail_accepts_several_sections() {
        let args = CliArgs::parse_from(["sidepanel", "--fail", "test", "build_deploy"]);
        let sim = args.load_simulation(&PanelConfig::default());

        assert!(sim.fails(SectionKey::Test));
        assert!(sim.fails(SectionKey::BuildDeploy));
        assert!(!sim.fails(SectionKey::Explorer));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(CliArgs::try_parse_from(["sidepanel", "--section", "settings"]).is_err());
    }
}
