//! The frame renderer.
//!
//! [`Renderer`] owns every GPU resource the demo uses: the cube's vertex buffer and the shader
//! program with its resolved attribute and uniform locations.

use std::{path::Path, sync::Arc};

use glam::Vec4;
use glow::HasContext;

use crate::{
    abs::{Shader, ShaderProgram, VertexBuffer},
    error::InitError,
    geometry::{CUBE, ColorVertex},
    scene::SceneState,
};

/// Dark blue.
pub const CLEAR_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.2, 1.0);

pub struct Renderer {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    cube: VertexBuffer<ColorVertex>,
    /// `v_position` and `v_color`, in vertex field order.
    attributes: [u32; 2],
    mvp_location: glow::UniformLocation,
}

impl Renderer {
    /// Uploads the cube, builds the shader program from the two source files and enables depth
    /// testing.
    pub fn new(
        gl: &Arc<glow::Context>,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, InitError> {
        let cube = VertexBuffer::new(gl, &CUBE)?;

        let vert = Shader::from_file(gl, glow::VERTEX_SHADER, vertex_path)?;
        let frag = Shader::from_file(gl, glow::FRAGMENT_SHADER, fragment_path)?;
        let program = ShaderProgram::new(gl, &[&vert, &frag])?;

        let attributes = [
            program.attrib_location("v_position")?,
            program.attrib_location("v_color")?,
        ];
        let mvp_location = program.uniform_location("mvpMatrix")?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
        }

        log::info!(
            "Renderer ready: {} vertices, attributes at {:?}",
            cube.vertex_count(),
            attributes
        );

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            cube,
            attributes,
            mvp_location,
        })
    }

    /// Clears the frame and draws the cube. The caller swaps the buffers.
    pub fn draw(&self, scene: &SceneState) {
        let mvp = scene.mvp();
        unsafe {
            self.gl.clear_color(
                CLEAR_COLOR.x,
                CLEAR_COLOR.y,
                CLEAR_COLOR.z,
                CLEAR_COLOR.w,
            );
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.use_program();
        self.program.set_mat4(&self.mvp_location, &mvp);
        self.cube.draw(&self.attributes);
    }

    /// Matches the GL viewport to the window after a resize.
    pub fn set_viewport(&self, width: u32, height: u32) {
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }
}
