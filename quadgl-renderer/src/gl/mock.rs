use std::cell::{Cell, RefCell};

use crate::{
    error::Error,
    gl::{GlContext, ShaderKind},
};

/// A recorded capability call.
///
/// Handles are plain ids; uniform locations are recorded by name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    Enable(u32),
    BlendFunc(u32, u32),
    CreateShader(ShaderKind),
    ShaderSource(ShaderKind, String),
    CompileShader(ShaderKind),
    DeleteShader(u32),
    CreateProgram,
    AttachShader(u32),
    LinkProgram,
    DeleteProgram,
    UseProgram(Option<u32>),
    CreateBuffer,
    BindBuffer(u32),
    BufferData(u32, Vec<f32>, u32),
    GetAttribLocation(String),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    GetUniformLocation(String),
    UniformMatrix4fv(Option<String>, bool, Vec<f32>),
    Uniform1f(Option<String>, f32),
    Uniform1i(Option<String>, i32),
    CreateTexture,
    BindTexture(u32, Option<u32>),
    TexParameteri(u32, u32, i32),
    TexImage2d { target: u32, level: i32, internal_format: i32, format: u32, data_type: u32 },
    ClearColor(f32, f32, f32, f32),
    Clear(u32),
    DrawArrays(u32, i32, i32),
}

/// Stand-in pixel source for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MockImage {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MockShader {
    id: u32,
    kind: ShaderKind,
}

/// A [`GlContext`] that records every call instead of talking to a GPU.
#[derive(Debug)]
pub(crate) struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    size: (i32, i32),
    failing_compile: Vec<ShaderKind>,
    failing_link: bool,
    failing_texture: bool,
}

impl RecordingGl {
    pub const COMPILE_LOG: &'static str = "ERROR: 0:1: 'broken' : syntax error";
    pub const LINK_LOG: &'static str = "varyings do not match";

    pub fn new(width: i32, height: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            size: (width, height),
            failing_compile: Vec::new(),
            failing_link: false,
            failing_texture: false,
        }
    }

    /// Shaders of `kind` report a failed compile status. Chainable.
    pub fn failing_compile(mut self, kind: ShaderKind) -> Self {
        self.failing_compile.push(kind);
        self
    }

    /// Programs report a failed link status.
    pub fn failing_link(mut self) -> Self {
        self.failing_link = true;
        self
    }

    /// `create_texture` returns `None`.
    pub fn failing_texture(mut self) -> Self {
        self.failing_texture = true;
        self
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl GlContext for RecordingGl {
    type Shader = MockShader;
    type Program = u32;
    type Buffer = u32;
    type Texture = u32;
    type UniformLocation = String;
    type Image = MockImage;

    fn surface_size(&self) -> (i32, i32) {
        self.size
    }

    fn enable(&self, capability: u32) {
        self.record(GlCall::Enable(capability));
    }

    fn blend_func(&self, src_factor: u32, dst_factor: u32) {
        self.record(GlCall::BlendFunc(src_factor, dst_factor));
    }

    fn create_shader(&self, kind: ShaderKind) -> Option<MockShader> {
        self.record(GlCall::CreateShader(kind));
        Some(MockShader { id: self.next_id(), kind })
    }

    fn shader_source(&self, shader: &MockShader, source: &str) {
        self.record(GlCall::ShaderSource(shader.kind, source.to_string()));
    }

    fn compile_shader(&self, shader: &MockShader) {
        self.record(GlCall::CompileShader(shader.kind));
    }

    fn shader_compile_status(&self, shader: &MockShader) -> bool {
        !self.failing_compile.contains(&shader.kind)
    }

    fn shader_info_log(&self, shader: &MockShader) -> Option<String> {
        self.failing_compile.contains(&shader.kind).then(|| Self::COMPILE_LOG.to_string())
    }

    fn delete_shader(&self, shader: &MockShader) {
        self.record(GlCall::DeleteShader(shader.id));
    }

    fn create_program(&self) -> Option<u32> {
        self.record(GlCall::CreateProgram);
        Some(self.next_id())
    }

    fn attach_shader(&self, _program: &u32, shader: &MockShader) {
        self.record(GlCall::AttachShader(shader.id));
    }

    fn link_program(&self, _program: &u32) {
        self.record(GlCall::LinkProgram);
    }

    fn program_link_status(&self, _program: &u32) -> bool {
        !self.failing_link
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        self.failing_link.then(|| Self::LINK_LOG.to_string())
    }

    fn delete_program(&self, _program: &u32) {
        self.record(GlCall::DeleteProgram);
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(GlCall::UseProgram(program.copied()));
    }

    fn create_buffer(&self) -> Option<u32> {
        self.record(GlCall::CreateBuffer);
        Some(self.next_id())
    }

    fn bind_buffer(&self, target: u32, _buffer: Option<&u32>) {
        self.record(GlCall::BindBuffer(target));
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        self.record(GlCall::BufferData(target, data.to_vec(), usage));
    }

    fn get_attrib_location(&self, _program: &u32, name: &str) -> i32 {
        self.record(GlCall::GetAttribLocation(name.to_string()));
        match name {
            "a_position" => 0,
            "a_texCoord" => 1,
            _ => -1,
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
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
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn get_uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        self.record(GlCall::GetUniformLocation(name.to_string()));
        Some(name.to_string())
    }

    fn uniform_matrix4fv(&self, location: Option<&String>, transpose: bool, data: &[f32]) {
        self.record(GlCall::UniformMatrix4fv(location.cloned(), transpose, data.to_vec()));
    }

    fn uniform1f(&self, location: Option<&String>, value: f32) {
        self.record(GlCall::Uniform1f(location.cloned(), value));
    }

    fn uniform1i(&self, location: Option<&String>, value: i32) {
        self.record(GlCall::Uniform1i(location.cloned(), value));
    }

    fn create_texture(&self) -> Option<u32> {
        self.record(GlCall::CreateTexture);
        (!self.failing_texture).then(|| self.next_id())
    }

    fn bind_texture(&self, target: u32, texture: Option<&u32>) {
        self.record(GlCall::BindTexture(target, texture.copied()));
    }

    fn tex_parameteri(&self, target: u32, param: u32, value: i32) {
        self.record(GlCall::TexParameteri(target, param, value));
    }

    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        format: u32,
        data_type: u32,
        _image: &MockImage,
    ) -> Result<(), Error> {
        self.record(GlCall::TexImage2d { target, level, internal_format, format, data_type });
        Ok(())
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor(r, g, b, a));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays(mode, first, count));
    }
}
