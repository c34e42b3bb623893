use quadgl_math::{AffineParams, Mat4};

use crate::{
    error::Error,
    gl::{upload_attribute, upload_texture, GlContext, ShaderProgram, GL},
    state::{RenderState, TransformStack},
};

/// Whether the pipeline has a usable shader program.
#[derive(Debug, Clone)]
pub enum ProgramState<P> {
    /// Shaders compiled and linked.
    Ready(ShaderProgram<P>),
    /// Compilation or linking failed; draws are skipped until the pipeline is
    /// rebuilt.
    Disabled(Error),
}

impl<P> ProgramState<P> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ProgramState::Ready(_))
    }

    /// The compile or link error that disabled the pipeline.
    pub fn error(&self) -> Option<&Error> {
        match self {
            ProgramState::Ready(_) => None,
            ProgramState::Disabled(e) => Some(e),
        }
    }
}

/// Vertex data for one destination rectangle, laid out for a triangle strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub positions: [f32; 8],
}

impl Quad {
    /// Texture coordinates paired with [`Quad::positions`]. Image rows run
    /// top-down while texture space runs bottom-up, hence the flipped v.
    #[rustfmt::skip]
    pub const TEX_COORDS: [f32; 8] = [
        0.0, 1.0,
        1.0, 1.0,
        0.0, 0.0,
        1.0, 0.0,
    ];

    pub const VERTEX_COUNT: i32 = 4;

    /// Bottom-left, bottom-right, top-left, top-right.
    #[rustfmt::skip]
    pub fn new(dx: f32, dy: f32, width: f32, height: f32) -> Self {
        let (left, right) = (dx, dx + width);
        let (top, bottom) = (dy, dy + height);

        Self {
            positions: [
                left,  bottom,
                right, bottom,
                left,  top,
                right, top,
            ],
        }
    }
}

/// Draws one textured quad per call through a single shader program.
///
/// Owns the GL context, the compiled program, the projection computed at
/// construction and the [`TransformStack`] holding the current transform and
/// global opacity. Every [`QuadPipeline::draw_image`] re-uploads geometry,
/// uniforms and the texture; nothing is cached between calls.
#[derive(Debug)]
pub struct QuadPipeline<C: GlContext> {
    gl: C,
    program: ProgramState<C::Program>,
    projection: Mat4,
    state: TransformStack<C::Program>,
}

impl<C: GlContext> QuadPipeline<C> {
    pub const VERTEX_GLSL: &'static str = include_str!("../shaders/quad.vert");
    pub const FRAGMENT_GLSL: &'static str = include_str!("../shaders/quad.frag");

    /// Like [`QuadPipeline::new`], but fails when no context is supplied.
    pub fn try_new(gl: Option<C>) -> Result<Self, Error> {
        gl.map(Self::new).ok_or(Error::missing_context())
    }

    /// Sets up blending and the projection, then builds the shader program.
    ///
    /// A shader that fails to compile or link does not fail construction: the
    /// diagnostic is logged and the pipeline starts out
    /// [`ProgramState::Disabled`], turning every draw into a no-op.
    pub fn new(gl: C) -> Self {
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        let (width, height) = gl.surface_size();
        let projection = Mat4::orthographic_from_size(width as f32, height as f32);

        let program = match ShaderProgram::create(&gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL) {
            Ok(program) => {
                log::debug!("quad pipeline ready, surface {width}x{height}");
                ProgramState::Ready(program)
            },
            Err(e) => {
                log::error!("quad pipeline disabled: {e}");
                ProgramState::Disabled(e)
            },
        };

        Self { gl, program, projection, state: TransformStack::new() }
    }

    pub fn gl(&self) -> &C {
        &self.gl
    }

    pub fn program_state(&self) -> &ProgramState<C::Program> {
        &self.program
    }

    pub fn is_ready(&self) -> bool {
        self.program.is_ready()
    }

    /// Projection from surface pixels to clip space, fixed at construction.
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn state(&self) -> &RenderState<C::Program> {
        self.state.current()
    }

    pub fn transform_stack(&self) -> &TransformStack<C::Program> {
        &self.state
    }

    pub fn transform(&self) -> &Mat4 {
        self.state.transform()
    }

    pub fn global_alpha(&self) -> f32 {
        self.state.global_alpha()
    }

    /// See [`TransformStack::set_global_alpha`].
    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.state.set_global_alpha(alpha);
    }

    /// Pre-composes `params` onto the current transform.
    pub fn apply_affine(&mut self, params: AffineParams) {
        self.state.apply_affine(params);
    }

    /// Canvas-style `transform(a, b, c, d, e, f)`.
    pub fn transform_by(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.state.transform_by(a, b, c, d, e, f);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.translate(x, y);
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.state.scale(x, y);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.state.rotate(radians);
    }

    /// Snapshots transform and opacity. When `program` is given it is bound
    /// immediately and re-bound by the matching [`QuadPipeline::restore`].
    pub fn save(&mut self, program: Option<&C::Program>) {
        if let Some(program) = program {
            self.gl.use_program(Some(program));
        }
        self.state.save(program.cloned());
    }

    /// Restores the snapshot taken by the last [`QuadPipeline::save`].
    pub fn restore(&mut self) {
        if let Some(program) = self.state.restore() {
            self.gl.use_program(Some(program));
        }
    }

    /// Clears the color buffer; omitted channels default to 0.
    pub fn clear(&self, r: Option<f32>, g: Option<f32>, b: Option<f32>, a: Option<f32>) {
        let channel = |c: Option<f32>| c.unwrap_or(0.0);
        self.gl.clear_color(channel(r), channel(g), channel(b), channel(a));
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    /// Draws `image` into the destination rectangle under the current
    /// transform and opacity.
    ///
    /// Does nothing when the pipeline is disabled. A draw aborted by a failed
    /// resource allocation is logged and otherwise ignored; use
    /// [`QuadPipeline::try_draw_image`] to observe the error.
    pub fn draw_image(&mut self, image: &C::Image, dx: f32, dy: f32, width: f32, height: f32) {
        if let Err(e) = self.try_draw_image(image, dx, dy, width, height) {
            log::warn!("draw_image aborted: {e}");
        }
    }

    /// Fallible form of [`QuadPipeline::draw_image`]. Returns `Ok(())` without
    /// touching the context when the pipeline is disabled.
    ///
    /// The pipeline's program stays bound afterwards and becomes the current
    /// program reported by [`QuadPipeline::state`].
    pub fn try_draw_image(
        &mut self,
        image: &C::Image,
        dx: f32,
        dy: f32,
        width: f32,
        height: f32,
    ) -> Result<(), Error> {
        let shader = match &self.program {
            ProgramState::Ready(shader) => shader,
            ProgramState::Disabled(_) => return Ok(()),
        };

        let gl = &self.gl;
        let program = shader.handle();
        shader.use_program(gl);
        self.state.set_program(program.clone());

        let quad = Quad::new(dx, dy, width, height);
        upload_attribute(gl, program, "a_position", &quad.positions)?;
        upload_attribute(gl, program, "a_texCoord", &Quad::TEX_COORDS)?;

        let projection = gl.get_uniform_location(program, "u_projection");
        gl.uniform_matrix4fv(projection.as_ref(), false, self.projection.as_slice());

        let transform = gl.get_uniform_location(program, "u_transform");
        gl.uniform_matrix4fv(transform.as_ref(), false, self.state.transform().as_slice());

        let alpha = gl.get_uniform_location(program, "alpha");
        gl.uniform1f(alpha.as_ref(), self.state.global_alpha());

        let sampler = gl.get_uniform_location(program, "u_image");
        upload_texture(gl, sampler.as_ref(), image)?;

        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, Quad::VERTEX_COUNT);

        Ok(())
    }
}
