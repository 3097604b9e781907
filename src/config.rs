//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "orbitcube", about = "A colored cube orbiting the origin", version)]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "Matrix Example")]
    pub title: String,

    /// Vertex shader source file
    #[arg(long, default_value = "vertexShader")]
    pub vertex_shader: PathBuf,

    /// Fragment shader source file
    #[arg(long, default_value = "fragmentShader")]
    pub fragment_shader: PathBuf,

    /// Wait for vertical sync when swapping buffers
    #[arg(long)]
    pub vsync: bool,

    /// Maximum log level (error, warn, info, debug, trace or off)
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    pub log_level: log::LevelFilter,
}
