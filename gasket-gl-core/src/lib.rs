use std::ffi::CStr;

pub mod gl {
    #![allow(clippy::all)]
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

pub mod error;
pub use error::{Error, Result};

/// Core profile version requested for the context; the shaders and `build.rs` target it.
pub const GL_CONTEXT_VERSION: (u8, u8) = (3, 3);

/// `#version` line the shaders start with
pub fn glsl_version_header() -> String {
    format!("#version {}{}0", GL_CONTEXT_VERSION.0, GL_CONTEXT_VERSION.1)
}

pub fn get_gl_string(gl: &gl::Gl, variant: gl::types::GLenum) -> Option<&'static CStr> {
    unsafe {
        let s = gl.GetString(variant);
        (!s.is_null()).then(|| CStr::from_ptr(s.cast()))
    }
}

pub fn print_info(gl: &gl::Gl) {
    if let Some(renderer) = get_gl_string(gl, gl::RENDERER) {
        log::info!("Running on {}", renderer.to_string_lossy());
    }
    if let Some(version) = get_gl_string(gl, gl::VERSION) {
        log::info!("OpenGL Version {}", version.to_string_lossy());
    }
    if let Some(shaders_version) = get_gl_string(gl, gl::SHADING_LANGUAGE_VERSION) {
        log::info!("Shaders version on {}", shaders_version.to_string_lossy());
    }
}

/// compile, link and bind a program
pub fn set_shader_program(
    gl: &gl::Gl,
    vertex_shader_source: &[u8],
    fragment_shader_source: &[u8],
) -> Result<gl::types::GLuint> {
    let program =
        unsafe { utility::compile_shaders(gl, vertex_shader_source, fragment_shader_source)? };
    unsafe {
        gl.UseProgram(program);
    }
    Ok(program)
}

pub mod drawer_points2;
pub mod drawer_wire;
pub mod drone;
pub mod gasket;
pub mod utility;
pub mod view_pan_zoom;
pub mod view_ui_state;

#[cfg(test)]
mod tests {
    #[test]
    fn glsl_header_follows_context_version() {
        assert_eq!(super::GL_CONTEXT_VERSION, (3, 3));
        assert_eq!(super::glsl_version_header(), "#version 330");
    }
}
