use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window, WindowId};

use sidepanel::cli::LoadSimulation;
use sidepanel::commands::Cmd;
use sidepanel::messages::{AppMsg, Msg, PanelMsg, RouterMsg, SectionMsg};
use sidepanel::model::AppModel;
use sidepanel::panel::{LoadRequest, UnitLoadError, WidthStore};
use sidepanel::update::update;
use sidepanel::view::geometry::{is_on_resize_handle, status_bar_height};
use sidepanel::view::Renderer;

use super::input::{button_to_msg, key_to_msg};

pub struct App {
    model: AppModel,
    simulation: LoadSimulation,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    mouse_position: (f64, f64),
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(model: AppModel, simulation: LoadSimulation) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            simulation,
            renderer: None,
            window: None,
            context: None,
            mouse_position: (0.0, 0.0),
            msg_tx,
            msg_rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.layout.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("Side Panel")
            .with_inner_size(PhysicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context)?);
        self.window = Some(window);
        self.context = Some(context);

        let cmd = self.measure_status_bar();
        self.dispatch(cmd);

        self.start_router();
        let cmd = update(&mut self.model, Msg::App(AppMsg::Started));
        self.dispatch(cmd);
        Ok(())
    }

    /// Report the status bar's laid-out height to the panel
    fn measure_status_bar(&mut self) -> Option<Cmd> {
        let (_, height) = self.model.layout.window_size;
        update(
            &mut self.model,
            Msg::App(AppMsg::BottomBarMeasured(status_bar_height(height))),
        )
    }

    /// Resolve the router after the configured delay
    fn start_router(&self) {
        let tx = self.msg_tx.clone();
        let delay = Duration::from_millis(self.simulation.router_delay_ms);
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let _ = tx.send(Msg::Router(RouterMsg::Resolved));
        });
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                let cmd = update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(size.width, size.height)),
                );
                self.dispatch(cmd);
                self.measure_status_bar()
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x, position.y);
                self.update_cursor_icon();
                if self.model.panel.resize.is_active() {
                    update(
                        &mut self.model,
                        Msg::Panel(PanelMsg::UpdateResize { x: position.x }),
                    )
                } else {
                    None
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let view = self.model.render_panel();
                let msg = button_to_msg(
                    *state,
                    *button,
                    self.mouse_position,
                    view.as_ref(),
                    self.model.panel.resize.is_active(),
                )?;
                update(&mut self.model, msg)
            }
            WindowEvent::Focused(false) if self.model.panel.resize.is_active() => {
                update(&mut self.model, Msg::Panel(PanelMsg::CancelResize))
            }
            WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
                let msg = key_to_msg(&event.logical_key, self.model.panel.resize.is_active())?;
                update(&mut self.model, msg)
            }
            _ => None,
        }
    }

    fn update_cursor_icon(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let (x, y) = self.mouse_position;
        let width = self.model.layout.width().get();
        let height = self.model.panel.size.effective_height();
        let icon = if self.model.panel.resize.is_active() || is_on_resize_handle(width, height, x, y)
        {
            CursorIcon::ColResize
        } else {
            CursorIcon::Default
        };
        window.set_cursor(icon);
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&mut self.model)?;
        }
        Ok(())
    }

    fn dispatch(&self, cmd: Option<Cmd>) {
        let Some(cmd) = cmd else {
            return;
        };
        let needs_redraw = cmd.needs_redraw();
        self.process_cmd(cmd);
        if needs_redraw {
            self.request_redraw();
        }
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::LoadUnit(request) => self.spawn_load(request),
            Cmd::SaveSession(session) => {
                if let Err(e) = session.save() {
                    tracing::warn!("Failed to save session: {}", e);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn spawn_load(&self, request: LoadRequest) {
        let tx = self.msg_tx.clone();
        let delay = Duration::from_millis(self.simulation.load_delay_ms);
        let fail = self.simulation.fails(request.key);
        tracing::debug!("Loading {} unit for '{}'", request.kind, request.key);

        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let result = if fail {
                Err(UnitLoadError::Module {
                    key: request.key,
                    kind: request.kind,
                    message: "load failure injected from the command line".to_string(),
                })
            } else {
                request.run()
            };
            let _ = tx.send(Msg::Section(SectionMsg::UnitLoaded {
                key: request.key,
                kind: request.kind,
                result,
            }));
        });
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn save_session(&mut self) {
        let cmd = update(&mut self.model, Msg::App(AppMsg::SaveSession));
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = &self.window else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.save_session();
                self.model.panel.unmount();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
            }
            event => {
                let cmd = self.handle_event(&event);
                self.dispatch(cmd);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::wait_duration(Duration::from_millis(16)));

        if self.process_async_messages() {
            self.request_redraw();
        }
    }
}
