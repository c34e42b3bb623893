use quadgl_math::AffineParams;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement, ImageData};

use crate::{
    error::Error,
    gl::{ImageSource, GL},
    pipeline::QuadPipeline,
};

/// JavaScript wrapper around the quad pipeline.
#[wasm_bindgen]
#[derive(Debug)]
pub struct QuadGlRenderer {
    pipeline: QuadPipeline<GL>,
}

#[wasm_bindgen]
impl QuadGlRenderer {
    /// Create a renderer drawing into an existing WebGL context.
    ///
    /// Throws when `gl` is `null` or `undefined`. A shader compile or link
    /// failure does not throw; see `isReady`.
    #[wasm_bindgen(constructor)]
    pub fn new(gl: Option<GL>) -> Result<QuadGlRenderer, JsValue> {
        let pipeline = QuadPipeline::try_new(gl).map_err(to_js_error)?;
        Ok(QuadGlRenderer { pipeline })
    }

    /// Whether the shader program compiled and linked.
    #[wasm_bindgen(js_name = "isReady")]
    pub fn is_ready(&self) -> bool {
        self.pipeline.is_ready()
    }

    /// The compile or link error, if the renderer is disabled.
    #[wasm_bindgen(js_name = "programError")]
    pub fn program_error(&self) -> Option<String> {
        self.pipeline.program_state().error().map(ToString::to_string)
    }

    #[wasm_bindgen(getter = globalAlpha)]
    pub fn global_alpha(&self) -> f32 {
        self.pipeline.global_alpha()
    }

    #[wasm_bindgen(setter = globalAlpha)]
    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.pipeline.set_global_alpha(alpha);
    }

    /// Compose `transform(a, b, c, d, e, f)` onto the current transform.
    #[wasm_bindgen]
    pub fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.pipeline.transform_by(a, b, c, d, e, f);
    }

    /// Compose an `{a, b, c, d, e, f}` object onto the current transform.
    #[wasm_bindgen(js_name = "transformWith")]
    pub fn transform_with(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params = from_value::<AffineParams>(params)
            .map_err(|e| to_js_error(Error::deserialization_failed(e.to_string())))?;

        self.pipeline.apply_affine(params);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn translate(&mut self, x: f32, y: f32) {
        self.pipeline.translate(x, y);
    }

    #[wasm_bindgen]
    pub fn scale(&mut self, x: f32, y: f32) {
        self.pipeline.scale(x, y);
    }

    #[wasm_bindgen]
    pub fn rotate(&mut self, radians: f32) {
        self.pipeline.rotate(radians);
    }

    /// The current transform as 16 row-major numbers.
    #[wasm_bindgen(js_name = "currentTransform")]
    pub fn current_transform(&self) -> Vec<f32> {
        self.pipeline.transform().data.to_vec()
    }

    /// Snapshot transform and opacity; binds `program` when one is passed.
    #[wasm_bindgen]
    pub fn save(&mut self, program: Option<web_sys::WebGlProgram>) {
        self.pipeline.save(program.as_ref());
    }

    #[wasm_bindgen]
    pub fn restore(&mut self) {
        self.pipeline.restore();
    }

    /// Clear the color buffer; omitted channels default to 0.
    #[wasm_bindgen]
    pub fn clear(&self, r: Option<f32>, g: Option<f32>, b: Option<f32>, a: Option<f32>) {
        self.pipeline.clear(r, g, b, a);
    }

    /// Draw an `<img>`, `<canvas>` or `ImageData` into the destination rectangle.
    #[wasm_bindgen(js_name = "drawImage")]
    pub fn draw_image(
        &mut self,
        image: JsValue,
        dx: f32,
        dy: f32,
        width: f32,
        height: f32,
    ) -> Result<(), JsValue> {
        let image = image_source(image)?;
        self.pipeline
            .try_draw_image(&image, dx, dy, width, height)
            .map_err(to_js_error)
    }
}

fn image_source(value: JsValue) -> Result<ImageSource, JsValue> {
    let value = match value.dyn_into::<HtmlImageElement>() {
        Ok(image) => return Ok(image.into()),
        Err(value) => value,
    };
    let value = match value.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => return Ok(canvas.into()),
        Err(value) => value,
    };

    value
        .dyn_into::<ImageData>()
        .map(ImageSource::from)
        .map_err(|_| to_js_error(Error::unsupported_image_source()))
}

fn to_js_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize the console logger and panic hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    crate::js::init_console_logging(log::LevelFilter::Info);
}
