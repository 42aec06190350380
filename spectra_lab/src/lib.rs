pub mod config;
pub mod io;
pub mod pipeline;
pub mod render;

pub use config::LabConfig;
pub use io::{load_grayscale, LoadError};
pub use pipeline::{Pipeline, PipelineReport};
pub use render::{GridRenderer, PngRenderer, RenderError, Scaling};
