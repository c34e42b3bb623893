mod canvas;
mod error;
mod gl;
mod js;
mod pipeline;
mod state;

#[cfg(feature = "js-api")]
pub mod wasm;

pub use quadgl_math::{AffineParams, Mat4};

pub use crate::{
    canvas::{Canvas, CanvasBuilder},
    error::Error,
    gl::{GlContext, ImageSource, ShaderKind, ShaderProgram},
    js::init_console_logging,
    pipeline::{ProgramState, Quad, QuadPipeline},
    state::{RenderState, SavedState, TransformStack},
};
