mod buffer;
mod context;
#[cfg(test)]
pub(crate) mod mock;
mod program;
mod texture;
mod webgl;

use std::fmt;

pub(crate) use buffer::*;
pub use context::GlContext;
pub use program::ShaderProgram;
pub(crate) use texture::*;
pub use webgl::ImageSource;

pub(crate) type GL = web_sys::WebGlRenderingContext;

/// The two shader stages linked into a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderKind::Vertex => GL::VERTEX_SHADER,
            ShaderKind::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => f.write_str("vertex"),
            ShaderKind::Fragment => f.write_str("fragment"),
        }
    }
}
