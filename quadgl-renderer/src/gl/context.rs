use crate::{error::Error, gl::ShaderKind};

/// The slice of an immediate-mode GL context the quad pipeline drives.
///
/// Method names and argument order follow WebGL, and enum arguments are the
/// raw `GL::*` constants. Handles are associated types so the pipeline can run
/// against [`web_sys::WebGlRenderingContext`] in the browser and against a
/// recording context in tests.
///
/// All methods take `&self`; the context is assumed to be used from a single
/// thread with calls serialized by the caller.
pub trait GlContext {
    type Shader;
    type Program: Clone;
    type Buffer;
    type Texture;
    type UniformLocation;
    /// Pixel source accepted by [`GlContext::tex_image_2d`].
    type Image: ?Sized;

    /// Size of the target surface in CSS-independent pixels (the canvas
    /// `width`/`height` attributes).
    fn surface_size(&self) -> (i32, i32);

    fn enable(&self, capability: u32);
    fn blend_func(&self, src_factor: u32, dst_factor: u32);

    // shaders
    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    // programs
    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: Option<&Self::Program>);

    // vertex data
    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: u32, buffer: Option<&Self::Buffer>);
    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32);
    /// Attribute index, or `-1` if the program has no such active attribute.
    fn get_attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    // uniforms; a `None` location makes the call a no-op, as in WebGL
    fn get_uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform_matrix4fv(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        data: &[f32],
    );
    fn uniform1f(&self, location: Option<&Self::UniformLocation>, value: f32);
    fn uniform1i(&self, location: Option<&Self::UniformLocation>, value: i32);

    // textures
    fn create_texture(&self) -> Option<Self::Texture>;
    fn bind_texture(&self, target: u32, texture: Option<&Self::Texture>);
    fn tex_parameteri(&self, target: u32, param: u32, value: i32);
    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        format: u32,
        data_type: u32,
        image: &Self::Image,
    ) -> Result<(), Error>;

    // framebuffer
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
}
