//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders,
//! and [`load_source`] for reading shader text from disk.

use std::{path::Path, sync::Arc};

use glam::Mat4;
use glow::HasContext;

use crate::error::InitError;

/// Reads a shader source file into an owned string.
///
/// A missing, unreadable or empty file is an error; there is no fallback source.
pub fn load_source(path: impl AsRef<Path>) -> Result<String, InitError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| InitError::ShaderSource {
        path: path.to_path_buf(),
        source,
    })?;
    if source.is_empty() {
        return Err(InitError::EmptyShader(path.to_path_buf()));
    }
    log::debug!("Loaded {} bytes of shader source from {:?}", source.len(), path);
    Ok(source)
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, InitError> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(InitError::Gl)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(InitError::Compile {
                    stage: stage_name(shader_type),
                    log,
                });
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }

    /// Loads the source at `path` and compiles it.
    pub fn from_file(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        path: impl AsRef<Path>,
    ) -> Result<Self, InitError> {
        let source = load_source(path)?;
        Self::new(gl, shader_type, &source)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, InitError> {
        unsafe {
            let program = gl.create_program().map_err(InitError::Gl)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(InitError::Link(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Looks up a vertex attribute by name.
    pub fn attrib_location(&self, name: &'static str) -> Result<u32, InitError> {
        unsafe { self.gl.get_attrib_location(self.id, name) }
            .ok_or(InitError::MissingAttribute(name))
    }

    /// Looks up a uniform by name.
    pub fn uniform_location(&self, name: &'static str) -> Result<glow::UniformLocation, InitError> {
        unsafe { self.gl.get_uniform_location(self.id, name) }
            .ok_or(InitError::MissingUniform(name))
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Uploads a column-major 4x4 matrix to a previously resolved uniform.
    pub fn set_mat4(&self, location: &glow::UniformLocation, value: &Mat4) {
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(location), false, &value.to_cols_array());
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
