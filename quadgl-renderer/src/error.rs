use crate::gl::ShaderKind;

/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Failed to initialize the WebGL context or retrieve DOM elements.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Shader compilation, linking, or program creation errors.
    #[error("Shader error: {0}")]
    Shader(String),

    /// WebGL resource creation or management errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Data passed in from the outside could not be interpreted.
    #[error("Data error: {0}")]
    Data(String),
}

impl Error {
    // Initialization errors
    pub fn missing_context() -> Self {
        Self::Initialization("Render context cannot be null".to_string())
    }

    pub fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub fn canvas_not_found() -> Self {
        Self::Initialization("Unable to retrieve canvas".to_string())
    }

    pub fn webgl_context_failed() -> Self {
        Self::Initialization("Failed to retrieve WebGL rendering context".to_string())
    }

    pub fn canvas_context_failed() -> Self {
        Self::Initialization("Failed to retrieve canvas rendering context".to_string())
    }

    // Shader errors
    pub fn shader_creation_failed(kind: ShaderKind) -> Self {
        Self::Shader(format!("Failed to create {kind} shader"))
    }

    pub fn shader_compile_failed(kind: ShaderKind, log: String) -> Self {
        Self::Shader(format!("Compiling {kind} shader failed: {log}"))
    }

    /// Both stages failed to compile.
    pub fn shaders_compile_failed(vertex: Error, fragment: Error) -> Self {
        Self::Shader(format!("{}; {}", vertex.detail(), fragment.detail()))
    }

    pub fn shader_program_creation_failed() -> Self {
        Self::Shader("Shader program creation failed".to_string())
    }

    pub fn shader_link_failed(log: String) -> Self {
        Self::Shader(format!("Shader linking failed: {log}"))
    }

    // Resource errors
    pub fn buffer_creation_failed(buffer_type: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer"))
    }

    pub fn texture_creation_failed() -> Self {
        Self::Resource("Failed to create texture".to_string())
    }

    pub fn webgl_error(message: String) -> Self {
        Self::Resource(format!("WebGL error: {message}"))
    }

    // Data errors
    pub fn unsupported_image_source() -> Self {
        Self::Data("Expected an HTMLImageElement, HTMLCanvasElement or ImageData".to_string())
    }

    pub fn deserialization_failed(message: String) -> Self {
        Self::Data(format!("Failed to deserialize: {message}"))
    }

    fn detail(&self) -> &str {
        match self {
            Self::Initialization(s) | Self::Shader(s) | Self::Resource(s) | Self::Data(s) => s,
        }
    }
}
