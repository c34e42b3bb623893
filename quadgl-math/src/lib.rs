mod affine;
mod mat4;

pub use affine::AffineParams;
pub use mat4::Mat4;
