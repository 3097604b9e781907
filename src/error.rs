//! Initialization errors.
//!
//! Everything that can go wrong before the render loop starts is collected in
//! [`InitError`]. None of these are recoverable; the caller logs them and exits.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to initialize the graphics platform: {0}")]
    Platform(String),
    #[error("failed to read shader source {path:?}: {source}")]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader source {0:?} is empty")]
    EmptyShader(PathBuf),
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("the shader program failed to link: {0}")]
    Link(String),
    #[error("OpenGL object creation failed: {0}")]
    Gl(String),
    #[error("attribute `{0}` not found in shader program")]
    MissingAttribute(&'static str),
    #[error("uniform `{0}` not found in shader program")]
    MissingUniform(&'static str),
}
