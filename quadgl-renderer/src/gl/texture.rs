use crate::{
    error::Error,
    gl::{GlContext, GL},
};

/// Creates a 2D texture, binds it, and uploads `image` as RGBA bytes.
///
/// Sampling is clamped at the edges and linearly filtered for both
/// minification and magnification, so non-power-of-two sources work without
/// mipmaps. `sampler` receives texture unit 0.
pub(crate) fn upload_texture<C: GlContext>(
    gl: &C,
    sampler: Option<&C::UniformLocation>,
    image: &C::Image,
) -> Result<C::Texture, Error> {
    let texture = gl.create_texture().ok_or(Error::texture_creation_failed())?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.uniform1i(sampler, 0);

    setup_sampling(gl);

    #[rustfmt::skip]
    gl.tex_image_2d(
        GL::TEXTURE_2D,
        0, // level
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    )?;

    Ok(texture)
}

fn setup_sampling<C: GlContext>(gl: &C) {
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
}
