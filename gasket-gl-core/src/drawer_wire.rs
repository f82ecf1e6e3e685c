//! draw the cube wireframe once per drone part

use crate::drone::{Part, PartKind};
use crate::gl;

const VS_SRC: &[u8] = b"
#version 330

uniform mat4 matView;
uniform mat4 matModel;

layout(location=0) in vec3 position;

void main() {
    gl_Position = matView * matModel * vec4(position, 1.0);
}
\0";

const FS_SRC: &[u8] = b"
#version 330

uniform vec3 color;
out vec4 FragColor;

void main() {
    FragColor = vec4(color, 1.0);
}
\0";

/// wireframe color of each kind of drone part
pub fn part_color(kind: PartKind) -> [f32; 3] {
    match kind {
        PartKind::Body => [0.2, 1.0, 0.4],
        PartKind::Rotor => [0.3, 0.7, 1.0],
        PartKind::Launcher => [1.0, 0.8, 0.2],
        PartKind::Missile => [1.0, 0.3, 0.2],
    }
}

pub struct Drawer {
    pub gl: gl::Gl,
    pub program: gl::types::GLuint,
    pub mode: gl::types::GLenum,
    pub elem_size: usize,
    pub vao: gl::types::GLuint,
    pub vbo: gl::types::GLuint,
    pub loc_color: gl::types::GLint,
    pub loc_mat_view: gl::types::GLint,
    pub loc_mat_model: gl::types::GLint,
}

impl Drawer {
    pub fn new(gl0: gl::Gl) -> Self {
        Self {
            gl: gl0,
            program: 0,
            mode: gl::LINES,
            elem_size: 0,
            vao: 0,
            vbo: 0,
            loc_color: -1,
            loc_mat_view: -1,
            loc_mat_model: -1,
        }
    }

    /// compile the shader and upload the line vertices
    pub fn init_gl(&mut self, edge2xyz: &[[f32; 3]]) -> crate::Result<()> {
        use crate::utility::{require_attrib, require_uniform};
        let gl = &self.gl;
        crate::print_info(gl);
        self.program = crate::set_shader_program(gl, VS_SRC, FS_SRC)?;
        let loc_xyz = require_attrib(gl, "position", self.program)?;
        self.loc_mat_view = require_uniform(gl, "matView", self.program)?;
        self.loc_mat_model = require_uniform(gl, "matModel", self.program)?;
        self.loc_color = require_uniform(gl, "color", self.program)?;
        let vtx2xyz = edge2xyz.as_flattened();
        unsafe {
            gl.GenVertexArrays(1, &mut self.vao);
            gl.BindVertexArray(self.vao);
            gl.GenBuffers(1, &mut self.vbo);
            gl.BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl.BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(vtx2xyz) as gl::types::GLsizeiptr,
                vtx2xyz.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
            gl.VertexAttribPointer(
                loc_xyz,
                3,
                gl::FLOAT,
                gl::FALSE,
                3 * std::mem::size_of::<f32>() as gl::types::GLsizei,
                std::ptr::null(),
            );
            gl.EnableVertexAttribArray(loc_xyz);
        }
        self.elem_size = edge2xyz.len();
        Ok(())
    }

    pub fn clear(&self) {
        unsafe {
            self.gl.ClearColor(0.0, 0.0, 0.0, 1.0);
            self.gl.Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn draw_part(&self, part: &Part) {
        let gl = &self.gl;
        unsafe {
            gl.UseProgram(self.program);
            gl.BindVertexArray(self.vao);
            let color = part_color(part.kind);
            gl.Uniform3f(self.loc_color, color[0], color[1], color[2]);
            // nalgebra stores matrices column major
            gl.UniformMatrix4fv(self.loc_mat_view, 1, gl::FALSE, part.view.as_ptr());
            gl.UniformMatrix4fv(self.loc_mat_model, 1, gl::FALSE, part.model.as_ptr());
            gl.DrawArrays(self.mode, 0, self.elem_size as gl::types::GLsizei);
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
    fn each_part_kind_has_its_own_color() {
        let kinds = [
            PartKind::Body,
            PartKind::Rotor,
            PartKind::Launcher,
            PartKind::Missile,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(part_color(*a), part_color(*b));
            }
        }
        let scene = crate::drone::DroneScene::new();
        for part in scene.parts() {
            assert!(part_color(part.kind).iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn shaders_match_the_context_version() {
        let header = crate::glsl_version_header();
        assert!(std::str::from_utf8(VS_SRC).unwrap().trim_start().starts_with(&header));
        assert!(std::str::from_utf8(FS_SRC).unwrap().trim_start().starts_with(&header));
    }
}
