use crate::{
    error::Error,
    gl::{GlContext, GL},
};

/// Components per vertex for every attribute the quad shader consumes.
pub(crate) const VEC2_COMPONENTS: i32 = 2;

/// Uploads a flat array of `vec2` attribute data into a fresh buffer and
/// points the named attribute of `program` at it.
///
/// A new buffer is created on every call and never deleted here; reclaiming
/// it is left to the context. An attribute that is not active in the program
/// is skipped after the upload.
///
/// # Parameters
/// * `gl` - GL context
/// * `program` - Program whose attribute location is looked up
/// * `attribute` - Attribute name in the vertex shader
/// * `data` - Interleaved `x, y` pairs
pub(crate) fn upload_attribute<C: GlContext>(
    gl: &C,
    program: &C::Program,
    attribute: &str,
    data: &[f32],
) -> Result<(), Error> {
    let buffer = gl
        .create_buffer()
        .ok_or(Error::buffer_creation_failed(attribute))?;

    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_f32(GL::ARRAY_BUFFER, data, GL::STATIC_DRAW);

    let location = gl.get_attrib_location(program, attribute);
    if location < 0 {
        log::debug!("attribute {attribute} is not active, skipping pointer setup");
        return Ok(());
    }

    let location = location as u32;
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer(location, VEC2_COMPONENTS, GL::FLOAT, false, 0, 0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::mock::{GlCall, RecordingGl};

    #[test]
    fn uploads_and_binds_attribute() {
        let gl = RecordingGl::new(100, 100);
        let program = gl.create_program().unwrap();
        gl.clear_calls();

        upload_attribute(&gl, &program, "a_position", &[0.0, 1.0, 2.0, 3.0]).unwrap();

        let calls = gl.calls();
        assert_eq!(calls[0], GlCall::CreateBuffer);
        assert_eq!(calls[1], GlCall::BindBuffer(GL::ARRAY_BUFFER));
        assert_eq!(
            calls[2],
            GlCall::BufferData(GL::ARRAY_BUFFER, vec![0.0, 1.0, 2.0, 3.0], GL::STATIC_DRAW)
        );
        assert_eq!(calls[3], GlCall::GetAttribLocation("a_position".into()));
        assert!(matches!(calls[4], GlCall::EnableVertexAttribArray(_)));
        assert!(matches!(
            calls[5],
            GlCall::VertexAttribPointer { size: 2, data_type: GL::FLOAT, normalized: false, .. }
        ));
    }

    #[test]
    fn inactive_attribute_is_skipped() {
        let gl = RecordingGl::new(100, 100);
        let program = gl.create_program().unwrap();
        gl.clear_calls();

        upload_attribute(&gl, &program, "a_unused", &[0.0, 0.0]).unwrap();

        assert!(!gl
            .calls()
            .iter()
            .any(|c| matches!(c, GlCall::EnableVertexAttribArray(_))));
    }
}
