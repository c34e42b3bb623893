use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, HtmlImageElement, ImageData, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlUniformLocation,
};

use crate::{
    error::Error,
    gl::{GlContext, ShaderKind, GL},
};

/// Pixel sources that can be uploaded as a texture by the WebGL backend.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Image(HtmlImageElement),
    Canvas(HtmlCanvasElement),
    ImageData(ImageData),
}

impl From<HtmlImageElement> for ImageSource {
    fn from(image: HtmlImageElement) -> Self {
        ImageSource::Image(image)
    }
}

impl From<HtmlCanvasElement> for ImageSource {
    fn from(canvas: HtmlCanvasElement) -> Self {
        ImageSource::Canvas(canvas)
    }
}

impl From<ImageData> for ImageSource {
    fn from(data: ImageData) -> Self {
        ImageSource::ImageData(data)
    }
}

impl GlContext for GL {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Texture = WebGlTexture;
    type UniformLocation = WebGlUniformLocation;
    type Image = ImageSource;

    fn surface_size(&self) -> (i32, i32) {
        match self.canvas().and_then(|c| c.dyn_into::<HtmlCanvasElement>().ok()) {
            Some(canvas) => (canvas.width() as i32, canvas.height() as i32),
            // OffscreenCanvas
            None => (self.drawing_buffer_width(), self.drawing_buffer_height()),
        }
    }

    fn enable(&self, capability: u32) {
        GL::enable(self, capability);
    }

    fn blend_func(&self, src_factor: u32, dst_factor: u32) {
        GL::blend_func(self, src_factor, dst_factor);
    }

    fn create_shader(&self, kind: ShaderKind) -> Option<WebGlShader> {
        GL::create_shader(self, kind.gl_enum())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        GL::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        GL::delete_program(self, Some(program));
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        GL::use_program(self, program);
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<&WebGlBuffer>) {
        GL::bind_buffer(self, target, buffer);
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        let array = js_sys::Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(target, &array, usage);
    }

    fn get_attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        GL::get_attrib_location(self, program, name)
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index);
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(index, size, data_type, normalized, stride, offset);
    }

    fn get_uniform_location(
        &self,
        program: &WebGlProgram,
        name: &str,
    ) -> Option<WebGlUniformLocation> {
        GL::get_uniform_location(self, program, name)
    }

    fn uniform_matrix4fv(
        &self,
        location: Option<&WebGlUniformLocation>,
        transpose: bool,
        data: &[f32],
    ) {
        self.uniform_matrix4fv_with_f32_array(location, transpose, data);
    }

    fn uniform1f(&self, location: Option<&WebGlUniformLocation>, value: f32) {
        GL::uniform1f(self, location, value);
    }

    fn uniform1i(&self, location: Option<&WebGlUniformLocation>, value: i32) {
        GL::uniform1i(self, location, value);
    }

    fn create_texture(&self) -> Option<WebGlTexture> {
        GL::create_texture(self)
    }

    fn bind_texture(&self, target: u32, texture: Option<&WebGlTexture>) {
        GL::bind_texture(self, target, texture);
    }

    fn tex_parameteri(&self, target: u32, param: u32, value: i32) {
        GL::tex_parameteri(self, target, param, value);
    }

    #[rustfmt::skip]
    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        format: u32,
        data_type: u32,
        image: &ImageSource,
    ) -> Result<(), Error> {
        let result = match image {
            ImageSource::Image(img) => self.tex_image_2d_with_u32_and_u32_and_image(
                target, level, internal_format, format, data_type, img,
            ),
            ImageSource::Canvas(canvas) => self.tex_image_2d_with_u32_and_u32_and_canvas(
                target, level, internal_format, format, data_type, canvas,
            ),
            ImageSource::ImageData(data) => self.tex_image_2d_with_u32_and_u32_and_image_data(
                target, level, internal_format, format, data_type, data,
            ),
        };

        result.map_err(|e| Error::webgl_error(format!("texImage2D rejected source: {e:?}")))
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        GL::clear_color(self, r, g, b, a);
    }

    fn clear(&self, mask: u32) {
        GL::clear(self, mask);
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        GL::draw_arrays(self, mode, first, count);
    }
}
