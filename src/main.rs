use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use sidepanel::cli::CliArgs;
use sidepanel::config::PanelConfig;
use sidepanel::model::AppModel;
use sidepanel::panel::SectionRegistry;
use sidepanel::session::SessionState;

mod runtime;

use runtime::App;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 979;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    sidepanel::tracing::init();

    let mut config = PanelConfig::load();
    args.apply_to(&mut config);
    let simulation = args.load_simulation(&config);

    let restore = config.restore_session;
    let mut model = AppModel::new(
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        config,
        SectionRegistry::with_builtin_sections(),
    );
    if restore && args.width.is_none() && args.section.is_none() {
        if let Some(session) = SessionState::load() {
            model.restore_session(session);
        }
    }

    tracing::info!(
        "Starting side panel: section={} width={}",
        model.section,
        model.session().width.get()
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, simulation);
    event_loop.run_app(&mut app)?;

    Ok(())
}
