use clap::Parser;
use glutin::display::GetGlDisplay;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;

use demos::cli::GasketArgs;
use demos::keys::{GasketCommand, GASKET_HELP};
use gasket_gl_core::drawer_points2::{Drawer, PointSize};
use gasket_gl_core::gasket::{PointCloud, RandomPicker};
use gasket_gl_core::view_pan_zoom::PanZoom;
use gasket_gl_core::view_ui_state::UiState;
use gasket_winit_glutin::app_internal;

type Picker = RandomPicker<rand::rngs::StdRng>;

pub struct MyApp {
    pub appi: app_internal::AppInternal,
    pub renderer: Option<Drawer>,
    pub points: PointCloud<Picker>,
    pub view: PanZoom,
    pub ui_state: UiState,
}

impl MyApp {
    pub fn new(
        template: glutin::config::ConfigTemplateBuilder,
        display_builder: glutin_winit::DisplayBuilder,
        args: &GasketArgs,
    ) -> Self {
        let mut ui_state = UiState::new();
        ui_state.win_width = args.window.width;
        ui_state.win_height = args.window.height;
        Self {
            appi: app_internal::AppInternal::new(template, display_builder),
            renderer: None,
            points: PointCloud::new(args.num_points, RandomPicker::from_seed(args.seed)),
            view: PanZoom::new(),
            ui_state,
        }
    }

    fn command(&mut self, event_loop: &winit::event_loop::ActiveEventLoop, cmd: GasketCommand) {
        match cmd {
            GasketCommand::Help => log::info!("{}", GASKET_HELP),
            GasketCommand::Quit => event_loop.exit(),
            GasketCommand::SmallPoints => {
                if let Some(rndr) = self.renderer.as_mut() {
                    rndr.set_point_size(PointSize::Small);
                }
            }
            GasketCommand::BigPoints => {
                if let Some(rndr) = self.renderer.as_mut() {
                    rndr.set_point_size(PointSize::Big);
                }
            }
            GasketCommand::Grow | GasketCommand::Shrink => {
                if cmd == GasketCommand::Grow {
                    self.points.grow();
                } else {
                    self.points.shrink();
                }
                // the old buffer contents are stale
                if let Some(rndr) = &self.renderer {
                    rndr.upload(self.points.as_flat());
                }
            }
            GasketCommand::ZoomIn => self.view.zoom_in(),
            GasketCommand::ZoomOut => self.view.zoom_out(),
        }
    }
}

impl ApplicationHandler for MyApp {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(app_state) = self.appi.resumed(event_loop) else {
            return;
        };
        // The context needs to be current for the Renderer to set up shaders and
        // buffers. It also performs function loading, which needs a current context on
        // WGL.
        if self.renderer.is_none() {
            let gl = gasket_winit_glutin::load_gl(&app_state.gl_context.display());
            let mut render = Drawer::new(gl);
            if let Err(e) = render.init_gl() {
                self.appi.fail(event_loop, Box::new(e));
                return;
            }
            render.upload(self.points.as_flat());
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
            } => {
                if let Some(cmd) = GasketCommand::from_key(&logical_key) {
                    self.command(event_loop, cmd);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.ui_state.update_cursor_position(position.x, position.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.view.pan_toward(
                    self.ui_state.cursor_x,
                    self.ui_state.cursor_y,
                    self.ui_state.win_width,
                    self.ui_state.win_height,
                );
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let (Some(state), Some(renderer)) = (self.appi.state.as_ref(), self.renderer.as_ref()) {
            renderer.draw(self.points.num_point(), &self.view);
            state.window.request_redraw();
            state.swap_buffers();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = GasketArgs::parse();
    gasket_winit_glutin::logging::init_logging(args.window.logging_config());
    log::info!("{}", GASKET_HELP);
    let (template, display_builder) =
        gasket_winit_glutin::builders("gasket", args.window.width, args.window.height);
    let mut app = MyApp::new(template, display_builder, &args);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    app.appi.exit_state
}
