use std::ffi::CString;

use crate::gl;
use crate::{Error, Result};

unsafe fn create_shader(
    gl: &gl::Gl,
    stage: gl::types::GLenum,
    source: &[u8],
) -> Result<gl::types::GLuint> {
    let shader = gl.CreateShader(stage);
    gl.ShaderSource(
        shader,
        1,
        [source.as_ptr().cast()].as_ptr(),
        std::ptr::null(),
    );
    gl.CompileShader(shader);
    let mut success: gl::types::GLint = 0;
    gl.GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success == 0 {
        let mut info_log = [0_u8; 512];
        let mut length: gl::types::GLsizei = 0;
        gl.GetShaderInfoLog(
            shader,
            info_log.len() as gl::types::GLsizei,
            &mut length,
            info_log.as_mut_ptr().cast(),
        );
        gl.DeleteShader(shader);
        let stage = if stage == gl::VERTEX_SHADER {
            "vertex"
        } else {
            "fragment"
        };
        return Err(Error::ShaderCompile {
            stage,
            log: info_log_to_string(&info_log, length),
        });
    }
    Ok(shader)
}

fn info_log_to_string(info_log: &[u8], length: gl::types::GLsizei) -> String {
    let length = (length.max(0) as usize).min(info_log.len());
    String::from_utf8_lossy(&info_log[..length])
        .trim_end()
        .to_string()
}

/// The sources must be nul-terminated.
pub unsafe fn compile_shaders(
    gl: &gl::Gl,
    src_vertex: &[u8],
    src_fragment: &[u8],
) -> Result<gl::types::GLuint> {
    let vs = create_shader(gl, gl::VERTEX_SHADER, src_vertex)?;
    let fs = match create_shader(gl, gl::FRAGMENT_SHADER, src_fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl.DeleteShader(vs);
            return Err(e);
        }
    };

    let id_program = gl.CreateProgram();
    gl.AttachShader(id_program, vs);
    gl.AttachShader(id_program, fs);
    gl.LinkProgram(id_program);
    gl.DeleteShader(vs);
    gl.DeleteShader(fs);
    let mut success: gl::types::GLint = 0;
    gl.GetProgramiv(id_program, gl::LINK_STATUS, &mut success);
    if success == 0 {
        let mut info_log = [0_u8; 512];
        let mut length: gl::types::GLsizei = 0;
        gl.GetProgramInfoLog(
            id_program,
            info_log.len() as gl::types::GLsizei,
            &mut length,
            info_log.as_mut_ptr().cast(),
        );
        gl.DeleteProgram(id_program);
        return Err(Error::ProgramLink {
            log: info_log_to_string(&info_log, length),
        });
    }
    log::debug!("linked shader program {}", id_program);
    Ok(id_program)
}

/// -1 when the program has no such active uniform
pub fn get_uniform_location(
    gl: &gl::Gl,
    name: &str,
    program: gl::types::GLuint,
) -> gl::types::GLint {
    CString::new(name).map_or(-1, |name| unsafe {
        gl.GetUniformLocation(program, name.as_ptr())
    })
}

/// -1 when the program has no such active attribute
pub fn get_attrib_location(
    gl: &gl::Gl,
    name: &str,
    program: gl::types::GLuint,
) -> gl::types::GLint {
    CString::new(name).map_or(-1, |name| unsafe {
        gl.GetAttribLocation(program, name.as_ptr())
    })
}

pub fn require_uniform(
    gl: &gl::Gl,
    name: &str,
    program: gl::types::GLuint,
) -> Result<gl::types::GLint> {
    check_location(get_uniform_location(gl, name, program), name)
}

pub fn require_attrib(
    gl: &gl::Gl,
    name: &str,
    program: gl::types::GLuint,
) -> Result<gl::types::GLuint> {
    let loc = check_location(get_attrib_location(gl, name, program), name)?;
    Ok(loc as gl::types::GLuint)
}

fn check_location(loc: gl::types::GLint, name: &str) -> Result<gl::types::GLint> {
    if loc == -1 {
        return Err(Error::MissingVariable {
            name: name.to_string(),
        });
    }
    Ok(loc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_is_cut_at_reported_length() {
        let mut buf = [0_u8; 16];
        buf[..6].copy_from_slice(b"oops\n\0");
        assert_eq!(info_log_to_string(&buf, 5), "oops");
        assert_eq!(info_log_to_string(&buf, -3), "");
        assert_eq!(info_log_to_string(&buf, 100).len(), 16);
    }

    #[test]
    fn missing_location_is_an_error() {
        assert_eq!(check_location(3, "color").unwrap(), 3);
        match check_location(-1, "translation") {
            Err(Error::MissingVariable { name }) => assert_eq!(name, "translation"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
