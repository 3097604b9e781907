//! Thin owning wrappers around SDL2 and OpenGL objects: the application window,
//! shaders and vertex buffers.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
