use std::error::Error;
use std::num::NonZeroU32;

use raw_window_handle::HasWindowHandle;
use winit::window::Window;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributes, ContextAttributesBuilder, GlProfile, NotCurrentContext,
    PossiblyCurrentContext, Version,
};
use glutin::display::{Display, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};

use glutin_winit::{DisplayBuilder, GlWindow};

// Find the config with the maximum number of samples, so the points and lines
// will be smooth.
pub fn gl_config_picker(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            let transparency_check = config.supports_transparency().unwrap_or(false)
                & !accum.supports_transparency().unwrap_or(false);

            if transparency_check || config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .expect("glutin offers at least one config")
}

pub struct AppState {
    pub gl_context: PossiblyCurrentContext,
    pub gl_surface: Surface<WindowSurface>,
    // NOTE: Window should be dropped after all resources created using its
    // raw-window-handle.
    pub window: Window,
}

impl AppState {
    pub fn resize(&self, width: u32, height: u32) {
        // Some platforms like EGL require resizing GL surface to update the size.
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.gl_surface.resize(&self.gl_context, w, h);
        }
    }

    pub fn swap_buffers(&self) {
        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::error!("failed to swap buffers: {e}");
        }
    }
}

pub struct AppInternal {
    template: ConfigTemplateBuilder,
    display_builder: DisplayBuilder,
    pub exit_state: Result<(), Box<dyn Error>>,
    not_current_gl_context: Option<NotCurrentContext>,
    // NOTE: `AppState` carries the `Window`, thus it should be dropped after everything else.
    pub state: Option<AppState>,
}

/// OpenGL core profile context of `gasket_gl_core::GL_CONTEXT_VERSION`.
///
/// GLES and older desktop contexts can't compile the `#version 330` shaders, so
/// there is no fallback.
pub fn context_attributes(
    raw_window_handle: Option<raw_window_handle::RawWindowHandle>,
) -> ContextAttributes {
    let (major, minor) = gasket_gl_core::GL_CONTEXT_VERSION;
    ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .with_profile(GlProfile::Core)
        .build(raw_window_handle)
}

fn create_gl_context(
    gl_display: &Display,
    gl_config: &Config,
    raw_window_handle: Option<raw_window_handle::RawWindowHandle>,
) -> Result<NotCurrentContext, glutin::error::Error> {
    unsafe { gl_display.create_context(gl_config, &context_attributes(raw_window_handle)) }
}

impl AppInternal {
    pub fn new(template: ConfigTemplateBuilder, display_builder: DisplayBuilder) -> Self {
        Self {
            template,
            display_builder,
            exit_state: Ok(()),
            not_current_gl_context: None,
            state: None,
        }
    }

    /// Stops the event loop; `main` reports `err` on the way out.
    pub fn fail(&mut self, event_loop: &winit::event_loop::ActiveEventLoop, err: Box<dyn Error>) {
        log::error!("{err}");
        self.exit_state = Err(err);
        event_loop.exit();
    }

    pub fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) -> Option<AppState> {
        match self.try_resumed(event_loop) {
            Ok(app_state) => Some(app_state),
            Err(e) => {
                self.fail(event_loop, e);
                None
            }
        }
    }

    fn try_resumed(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
    ) -> Result<AppState, Box<dyn Error>> {
        let (mut window, gl_config) =
            self.display_builder
                .clone()
                .build(event_loop, self.template.clone(), gl_config_picker)?;

        log::info!("Picked a config with {} samples", gl_config.num_samples());

        let raw_window_handle = window
            .as_ref()
            .and_then(|window| window.window_handle().ok())
            .map(|handle| handle.as_raw());

        // The display could be obtained from any object created by it, so we can
        // query it from the config.
        let gl_display = gl_config.display();

        // Reuse the uncurrented context from a suspended() call if it exists, otherwise
        // this is the first time resumed() is called, where the context still
        // has to be created.
        let not_current_gl_context = match self.not_current_gl_context.take() {
            Some(context) => context,
            None => create_gl_context(&gl_display, &gl_config, raw_window_handle)?,
        };

        let window = match window.take() {
            Some(window) => window,
            None => {
                let window_attributes = Window::default_attributes().with_transparent(false);
                glutin_winit::finalize_window(event_loop, window_attributes, &gl_config)?
            }
        };

        let attrs = window.build_surface_attributes(Default::default())?;
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };

        // Make it current.
        let gl_context = not_current_gl_context.make_current(&gl_surface)?;

        // Try setting vsync.
        if let Err(res) =
            gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            log::warn!("Error setting vsync: {res:?}");
        }
        Ok(AppState {
            gl_context,
            gl_surface,
            window,
        })
    }

    /// Drops the surface and window, keeping the context for the next `resumed`.
    pub fn suspended(&mut self) {
        let Some(state) = self.state.take() else {
            return;
        };
        log::info!("suspended; releasing the GL surface");
        match state.gl_context.make_not_current() {
            Ok(context) => {
                self.not_current_gl_context = Some(context);
            }
            Err(e) => log::error!("failed to un-current the GL context: {e}"),
        }
    }
}
