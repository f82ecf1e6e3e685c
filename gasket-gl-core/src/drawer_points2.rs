//! draw array of 2D points under a pan & zoom transformation

use crate::gl;
use crate::view_pan_zoom::PanZoom;

const VS_SRC: &[u8] = b"
#version 330

uniform float zoom;
uniform vec2 translation;
uniform float pointSize;

layout(location=0) in vec2 position;
out vec2 v_color;

void main() {
    gl_Position = vec4((position - translation) * zoom, 0.0, 1.0);
    gl_PointSize = pointSize;
    // position doubles as the color
    v_color = position;
}
\0";

const FS_SRC: &[u8] = b"
#version 330

uniform bool isSmooth;

in vec2 v_color;
out vec4 FragColor;

void main() {
    float alpha = 1.0;
    if (isSmooth) {
        // round the square sprite off with a soft rim
        alpha = 1.0 - smoothstep(0.4, 0.5, length(gl_PointCoord - vec2(0.5)));
        if (alpha <= 0.0) {
            discard;
        }
    }
    FragColor = vec4(abs(v_color), 0.5, alpha);
}
\0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSize {
    Small,
    Big,
}

impl PointSize {
    pub fn pixels(&self) -> f32 {
        match self {
            PointSize::Small => 1.,
            PointSize::Big => 2.,
        }
    }

    /// anti-aliased round points, blended over the background
    pub fn is_smooth(&self) -> bool {
        matches!(self, PointSize::Big)
    }
}

pub struct Drawer {
    pub gl: gl::Gl,
    pub program: gl::types::GLuint,
    pub vao: gl::types::GLuint,
    pub vbo: gl::types::GLuint,
    pub loc_zoom: gl::types::GLint,
    pub loc_translation: gl::types::GLint,
    pub loc_point_size: gl::types::GLint,
    pub loc_smooth: gl::types::GLint,
    pub point_size: PointSize,
}

impl Drawer {
    pub fn new(gl0: gl::Gl) -> Self {
        Self {
            gl: gl0,
            program: 0,
            vao: 0,
            vbo: 0,
            loc_zoom: -1,
            loc_translation: -1,
            loc_point_size: -1,
            loc_smooth: -1,
            point_size: PointSize::Small,
        }
    }

    pub fn init_gl(&mut self) -> crate::Result<()> {
        use crate::utility::{require_attrib, require_uniform};
        let gl = &self.gl;
        crate::print_info(gl);
        self.program = crate::set_shader_program(gl, VS_SRC, FS_SRC)?;
        let loc_xy = require_attrib(gl, "position", self.program)?;
        self.loc_zoom = require_uniform(gl, "zoom", self.program)?;
        self.loc_translation = require_uniform(gl, "translation", self.program)?;
        self.loc_point_size = require_uniform(gl, "pointSize", self.program)?;
        self.loc_smooth = require_uniform(gl, "isSmooth", self.program)?;
        unsafe {
            gl.Enable(gl::PROGRAM_POINT_SIZE);
            gl.GenVertexArrays(1, &mut self.vao);
            gl.BindVertexArray(self.vao);
            gl.GenBuffers(1, &mut self.vbo);
            gl.BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl.VertexAttribPointer(
                loc_xy,
                2,
                gl::FLOAT,
                gl::FALSE,
                2 * std::mem::size_of::<f32>() as gl::types::GLsizei,
                std::ptr::null(),
            );
            gl.EnableVertexAttribArray(loc_xy);
        }
        self.set_point_size(PointSize::Small);
        Ok(())
    }

    /// Sends the whole point array to the GPU, replacing what was there.
    pub fn upload(&self, vtx2xy: &[f32]) {
        let gl = &self.gl;
        unsafe {
            gl.BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl.BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(vtx2xy) as gl::types::GLsizeiptr,
                vtx2xy.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }
        log::debug!("uploaded {} points", vtx2xy.len() / 2);
    }

    pub fn set_point_size(&mut self, point_size: PointSize) {
        self.point_size = point_size;
        let gl = &self.gl;
        unsafe {
            if point_size.is_smooth() {
                gl.BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
                gl.Enable(gl::BLEND);
            } else {
                gl.Disable(gl::BLEND);
            }
        }
    }

    pub fn draw(&self, num_point: usize, view: &PanZoom) {
        let gl = &self.gl;
        unsafe {
            gl.UseProgram(self.program);
            gl.BindVertexArray(self.vao);
            gl.Uniform1f(self.loc_zoom, view.zoom);
            gl.Uniform2f(self.loc_translation, view.translation[0], view.translation[1]);
            gl.Uniform1f(self.loc_point_size, self.point_size.pixels());
            gl.Uniform1i(self.loc_smooth, self.point_size.is_smooth() as gl::types::GLint);
            gl.ClearColor(0.0, 0.0, 0.0, 1.0);
            gl.Clear(gl::COLOR_BUFFER_BIT);
            gl.DrawArrays(gl::POINTS, 0, num_point as gl::types::GLsizei);
        }
    }

    pub fn resize(&self, width: i32, height: i32) {
        unsafe {
            self.gl.Viewport(0, 0, width, height);
        }
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        unsafe {
            self.gl.DeleteProgram(self.program);
            self.gl.DeleteBuffers(1, &self.vbo);
            self.gl.DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_points_are_smoothed() {
        assert_eq!(PointSize::Big.pixels(), 2.);
        assert!(PointSize::Big.is_smooth());
        assert_eq!(PointSize::Small.pixels(), 1.);
        assert!(!PointSize::Small.is_smooth());
    }

    #[test]
    fn shaders_declare_the_smoothing_uniform() {
        let fs = std::str::from_utf8(FS_SRC).unwrap();
        assert!(fs.contains("uniform bool isSmooth;"));
        assert!(fs.contains("gl_PointCoord"));
        assert!(fs.contains("discard;"));
    }

    #[test]
    fn shaders_match_the_context_version() {
        let header = crate::glsl_version_header();
        assert!(std::str::from_utf8(VS_SRC).unwrap().trim_start().starts_with(&header));
        assert!(std::str::from_utf8(FS_SRC).unwrap().trim_start().starts_with(&header));
        assert!(VS_SRC.ends_with(b"\0") && FS_SRC.ends_with(b"\0"));
    }
}
