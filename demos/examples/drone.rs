use clap::Parser;
use glutin::display::GetGlDisplay;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;

use demos::cli::DroneArgs;
use demos::keys::DroneCommand;
use gasket_gl_core::drawer_wire::Drawer;
use gasket_gl_core::drone::{cube_edges, DroneScene};
use gasket_gl_core::view_ui_state::UiState;
use gasket_winit_glutin::app_internal;

pub struct MyApp {
    pub appi: app_internal::AppInternal,
    pub renderer: Option<Drawer>,
    pub scene: DroneScene,
    pub ui_state: UiState,
}

impl MyApp {
    pub fn new(
        template: glutin::config::ConfigTemplateBuilder,
        display_builder: glutin_winit::DisplayBuilder,
    ) -> Self {
        Self {
            appi: app_internal::AppInternal::new(template, display_builder),
            renderer: None,
            scene: DroneScene::new(),
            ui_state: UiState::new(),
        }
    }
}

impl ApplicationHandler for MyApp {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(app_state) = self.appi.resumed(event_loop) else {
            return;
        };
        if self.renderer.is_none() {
            let gl = gasket_winit_glutin::load_gl(&app_state.gl_context.display());
            let mut render = Drawer::new(gl);
            if let Err(e) = render.init_gl(&cube_edges()) {
                self.appi.fail(event_loop, Box::new(e));
                return;
            }
            self.renderer = Some(render);
        }
        self.appi.state = Some(app_state);
    }

    fn suspended(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        self.appi.suspended();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::Resized(size) if size.width != 0 && size.height != 0 => {
                if let Some(state) = self.appi.state.as_ref() {
                    state.resize(size.width, size.height);
                }
                if let Some(renderer) = self.renderer.as_ref() {
                    renderer.resize(size.width as i32, size.height as i32);
                }
                self.ui_state.win_width = size.width;
                self.ui_state.win_height = size.height;
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match DroneCommand::from_key(&logical_key) {
                Some(DroneCommand::Quit) => event_loop.exit(),
                Some(DroneCommand::Fire) => self.scene.fire(),
                None => (),
            },
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.ui_state.is_left_btn = state == ElementState::Pressed;
                if self.ui_state.is_left_btn {
                    self.scene.press(self.ui_state.cursor_x, self.ui_state.cursor_y);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.ui_state.update_cursor_position(position.x, position.y);
                if self.ui_state.is_left_btn {
                    self.scene.drag(position.x, position.y);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let (Some(state), Some(renderer)) = (self.appi.state.as_ref(), self.renderer.as_ref()) {
            renderer.clear();
            for part in self.scene.advance() {
                renderer.draw_part(&part);
            }
            state.window.request_redraw();
            state.swap_buffers();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = DroneArgs::parse();
    gasket_winit_glutin::logging::init_logging(args.window.logging_config());
    log::info!("space fires the missile, drag with the left button to rotate, q to quit");
    let (template, display_builder) =
        gasket_winit_glutin::builders("drone", args.window.width, args.window.height);
    let mut app = MyApp::new(template, display_builder);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    app.appi.exit_state
}
