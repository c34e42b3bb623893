use crate::{
    error::Error,
    gl::{GlContext, ShaderKind},
};

/// A linked vertex + fragment shader program.
#[derive(Debug, Clone)]
pub struct ShaderProgram<P> {
    pub(crate) program: P,
}

impl<P: Clone> ShaderProgram<P> {
    /// Compiles both shader stages and links them into a program.
    ///
    /// Both stages are always compiled, so a failure reports every broken
    /// stage. Compile and link failures carry the context's info log. The shader
    /// objects are deleted once they are no longer needed, whatever the outcome.
    pub fn create<C>(gl: &C, vertex_source: &str, fragment_source: &str) -> Result<Self, Error>
    where
        C: GlContext<Program = P>,
    {
        let vertex = compile_shader(gl, ShaderKind::Vertex, vertex_source);
        let fragment = compile_shader(gl, ShaderKind::Fragment, fragment_source);

        let (vertex_shader, fragment_shader) = match (vertex, fragment) {
            (Ok(vs), Ok(fs)) => (vs, fs),
            (Err(e), Ok(fs)) => {
                gl.delete_shader(&fs);
                return Err(e);
            },
            (Ok(vs), Err(e)) => {
                gl.delete_shader(&vs);
                return Err(e);
            },
            (Err(vertex_err), Err(fragment_err)) => {
                return Err(Error::shaders_compile_failed(vertex_err, fragment_err));
            },
        };

        let linked = link_program(gl, &vertex_shader, &fragment_shader);

        // delete shaders (no longer needed after linking)
        gl.delete_shader(&vertex_shader);
        gl.delete_shader(&fragment_shader);

        linked.map(|program| ShaderProgram { program })
    }

    /// Use the shader program.
    pub fn use_program<C>(&self, gl: &C)
    where
        C: GlContext<Program = P>,
    {
        gl.use_program(Some(&self.program));
    }

    pub fn handle(&self) -> &P {
        &self.program
    }
}

fn compile_shader<C: GlContext>(
    gl: &C,
    kind: ShaderKind,
    source: &str,
) -> Result<C::Shader, Error> {
    let shader = gl
        .create_shader(kind)
        .ok_or(Error::shader_creation_failed(kind))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compile_status(&shader) {
        Ok(shader)
    } else {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(&shader);
        Err(Error::shader_compile_failed(kind, log))
    }
}

fn link_program<C: GlContext>(
    gl: &C,
    vertex_shader: &C::Shader,
    fragment_shader: &C::Shader,
) -> Result<C::Program, Error> {
    let program = gl
        .create_program()
        .ok_or(Error::shader_program_creation_failed())?;

    gl.attach_shader(&program, vertex_shader);
    gl.attach_shader(&program, fragment_shader);
    gl.link_program(&program);

    if gl.program_link_status(&program) {
        Ok(program)
    } else {
        let log = gl.program_info_log(&program).unwrap_or_default();
        gl.delete_program(&program);
        Err(Error::shader_link_failed(log))
    }
}
