use glutin::display::GlDisplay;

use gasket_gl_core::gl;

pub mod app_internal;
pub mod logging;

/// Load the GL function pointers through the display of a current context.
pub fn load_gl<D: GlDisplay>(gl_display: &D) -> gl::Gl {
    gl::Gl::load_with(|symbol| match std::ffi::CString::new(symbol) {
        Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
        Err(_) => std::ptr::null(),
    })
}

/// Window attributes and GL config template shared by the demos.
pub fn builders(
    title: &str,
    width: u32,
    height: u32,
) -> (
    glutin::config::ConfigTemplateBuilder,
    glutin_winit::DisplayBuilder,
) {
    let template = glutin::config::ConfigTemplateBuilder::new()
        .with_alpha_size(8)
        .with_transparency(cfg!(target_os = "macos"));
    let window_attributes = winit::window::Window::default_attributes()
        .with_transparent(false)
        .with_title(title)
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height));
    let display_builder =
        glutin_winit::DisplayBuilder::new().with_window_attributes(Some(window_attributes));
    (template, display_builder)
}
