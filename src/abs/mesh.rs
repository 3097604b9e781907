//! Vertex buffer management module.
//!
//! This module defines the [`VertexBuffer`] struct for holding static, non-indexed geometry on
//! the GPU side. Vertices should implement the [`Vertex`] trait.

use std::{marker::PhantomData, sync::Arc};

use glow::HasContext;

use crate::error::InitError;

/// Layout of one float attribute stream inside a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Number of `f32` components.
    pub components: i32,
    /// Byte offset from the start of the vertex.
    pub offset: i32,
}

/// Trait that describes the memory layout of a vertex.
pub trait Vertex: Copy {
    /// The attribute streams in declaration order.
    const ATTRIBUTES: &'static [Attribute];

    /// Distance in bytes between consecutive vertices.
    fn stride() -> i32 {
        std::mem::size_of::<Self>() as i32
    }
}

/// A vertex buffer uploaded once and drawn as a triangle list.
///
/// Attribute streams are enabled right before the draw and disabled right after, using the
/// locations the caller resolved from its shader program.
pub struct VertexBuffer<V: Vertex> {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: usize,
    _vertex: PhantomData<V>,
}

impl<V: Vertex> VertexBuffer<V> {
    /// Uploads `vertices` into a new `STATIC_DRAW` buffer.
    pub fn new(gl: &Arc<glow::Context>, vertices: &[V]) -> Result<Self, InitError> {
        unsafe {
            let vao = gl.create_vertex_array().map_err(InitError::Gl)?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(InitError::Gl(e));
                }
            };

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    std::mem::size_of_val(vertices),
                ),
                glow::STATIC_DRAW,
            );
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                vertex_count: vertices.len(),
                _vertex: PhantomData,
            })
        }
    }

    /// Draws every vertex, feeding `V::ATTRIBUTES[i]` into `locations[i]`.
    pub fn draw(&self, locations: &[u32]) {
        debug_assert_eq!(locations.len(), V::ATTRIBUTES.len());
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));

            for (&location, attribute) in locations.iter().zip(V::ATTRIBUTES) {
                self.gl.enable_vertex_attrib_array(location);
                self.gl.vertex_attrib_pointer_f32(
                    location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    V::stride(),
                    attribute.offset,
                );
            }

            self.gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count as i32);

            for &location in locations {
                self.gl.disable_vertex_attrib_array(location);
            }

            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            self.gl.bind_vertex_array(None);
        }
    }

    /// Returns the amount of vertices in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl<V: Vertex> Drop for VertexBuffer<V> {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
