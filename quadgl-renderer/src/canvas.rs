use compact_str::CompactString;
use quadgl_math::{AffineParams, Mat4};
use web_sys::HtmlCanvasElement;

use crate::{
    error::Error,
    gl::{ImageSource, GL},
    js,
    pipeline::{ProgramState, QuadPipeline},
};

/// WebGL canvas that draws images under a 2D transform and global opacity.
///
/// `Canvas` ties a [`QuadPipeline`] to the `HtmlCanvasElement` it renders
/// into, offering the familiar `save`/`restore`/`transform`/`drawImage`
/// vocabulary of a 2D canvas context.
///
/// # Examples
///
/// ```rust,ignore
/// use quadgl_renderer::{Canvas, ImageSource};
///
/// let mut canvas = Canvas::builder("#canvas")
///     .clear_color(0x1d1f21)
///     .build()?;
///
/// let image: ImageSource = unimplemented!("an HtmlImageElement");
///
/// canvas.begin_frame();
/// canvas.save();
/// canvas.translate(100.0, 100.0);
/// canvas.rotate(0.5);
/// canvas.set_global_alpha(0.5);
/// canvas.draw_image(&image, -32.0, -32.0, 64.0, 64.0);
/// canvas.restore();
/// ```
#[derive(Debug)]
pub struct Canvas {
    pipeline: QuadPipeline<GL>,
    canvas: HtmlCanvasElement,
    clear_color: (f32, f32, f32),
}

impl Canvas {
    /// Creates a new canvas builder with the specified canvas source.
    ///
    /// # Parameters
    /// * `canvas` - Canvas identifier (CSS selector) or `HtmlCanvasElement`
    #[allow(private_bounds)]
    pub fn builder(canvas: impl Into<CanvasSource>) -> CanvasBuilder {
        CanvasBuilder::new(canvas.into())
    }

    /// Clears the whole surface with the configured clear color.
    pub fn begin_frame(&self) {
        let (r, g, b) = self.clear_color;
        self.pipeline.clear(Some(r), Some(g), Some(b), Some(1.0));
    }

    /// Clears the color buffer; omitted channels default to 0.
    pub fn clear(&self, r: Option<f32>, g: Option<f32>, b: Option<f32>, a: Option<f32>) {
        self.pipeline.clear(r, g, b, a);
    }

    /// Draws `image` stretched over the destination rectangle.
    ///
    /// Delegates to [`QuadPipeline::draw_image`].
    pub fn draw_image(&mut self, image: &ImageSource, dx: f32, dy: f32, width: f32, height: f32) {
        self.pipeline.draw_image(image, dx, dy, width, height);
    }

    /// Like [`Canvas::draw_image`], but reports WebGL resource failures.
    pub fn try_draw_image(
        &mut self,
        image: &ImageSource,
        dx: f32,
        dy: f32,
        width: f32,
        height: f32,
    ) -> Result<(), Error> {
        self.pipeline.try_draw_image(image, dx, dy, width, height)
    }

    /// Canvas-style `transform(a, b, c, d, e, f)`, composed onto the current
    /// transform.
    pub fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.pipeline.transform_by(a, b, c, d, e, f);
    }

    pub fn apply_affine(&mut self, params: AffineParams) {
        self.pipeline.apply_affine(params);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.pipeline.translate(x, y);
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.pipeline.scale(x, y);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.pipeline.rotate(radians);
    }

    /// Saves transform and opacity; only one save is kept.
    pub fn save(&mut self) {
        self.pipeline.save(None);
    }

    pub fn restore(&mut self) {
        self.pipeline.restore();
    }

    pub fn global_alpha(&self) -> f32 {
        self.pipeline.global_alpha()
    }

    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.pipeline.set_global_alpha(alpha);
    }

    pub fn current_transform(&self) -> &Mat4 {
        self.pipeline.transform()
    }

    /// `false` once shader compilation or linking failed; drawing is then
    /// a no-op.
    pub fn is_ready(&self) -> bool {
        self.pipeline.is_ready()
    }

    pub fn program_state(&self) -> &ProgramState<web_sys::WebGlProgram> {
        self.pipeline.program_state()
    }

    pub fn pipeline(&self) -> &QuadPipeline<GL> {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut QuadPipeline<GL> {
        &mut self.pipeline
    }

    /// Returns the WebGL rendering context.
    pub fn gl(&self) -> &web_sys::WebGlRenderingContext {
        self.pipeline.gl()
    }

    /// Returns a reference to the HTML canvas element used for rendering.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Returns the canvas dimensions in pixels.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}

/// Canvas source for initialization.
///
/// Supports both CSS selector strings and direct `HtmlCanvasElement` references.
enum CanvasSource {
    /// CSS selector string for canvas lookup (e.g., "#stage", "canvas").
    Id(CompactString),
    /// Direct reference to an existing canvas element.
    Element(HtmlCanvasElement),
}

/// Builder for configuring and creating a [`Canvas`].
pub struct CanvasBuilder {
    canvas: CanvasSource,
    clear_color: u32,
    global_alpha: f32,
    premultiplied_alpha: Option<bool>,
}

impl CanvasBuilder {
    fn new(canvas: CanvasSource) -> Self {
        CanvasBuilder {
            canvas,
            clear_color: 0x000000,
            global_alpha: 1.0,
            premultiplied_alpha: None,
        }
    }

    /// Sets the `0xRRGGBB` color used by [`Canvas::begin_frame`].
    pub fn clear_color(mut self, color: u32) -> Self {
        self.clear_color = color;
        self
    }

    /// Initial global opacity, clamped to `[0, 1]`.
    pub fn global_alpha(mut self, alpha: f32) -> Self {
        self.global_alpha = alpha;
        self
    }

    /// Requests a context with (or without) premultiplied alpha.
    pub fn premultiplied_alpha(mut self, enabled: bool) -> Self {
        self.premultiplied_alpha = Some(enabled);
        self
    }

    /// Builds the canvas with the configured options.
    ///
    /// Fails if the canvas cannot be found or yields no WebGL context. Shader
    /// failures do not fail the build; check [`Canvas::is_ready`].
    pub fn build(self) -> Result<Canvas, Error> {
        let canvas = match self.canvas {
            CanvasSource::Id(id) => js::get_canvas_by_id(&id)?,
            CanvasSource::Element(element) => element,
        };

        let gl = js::get_webgl_context(&canvas, self.premultiplied_alpha)?;
        let mut pipeline = QuadPipeline::new(gl);
        pipeline.set_global_alpha(self.global_alpha);

        Ok(Canvas {
            pipeline,
            canvas,
            clear_color: rgb_components(self.clear_color),
        })
    }
}

fn rgb_components(color: u32) -> (f32, f32, f32) {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    (r, g, b)
}

impl From<&'static str> for CanvasSource {
    fn from(id: &'static str) -> Self {
        CanvasSource::Id(id.into())
    }
}

impl From<HtmlCanvasElement> for CanvasSource {
    fn from(element: HtmlCanvasElement) -> Self {
        CanvasSource::Element(element)
    }
}

impl<'a> From<&'a HtmlCanvasElement> for CanvasSource {
    fn from(value: &'a HtmlCanvasElement) -> Self {
        value.clone().into()
    }
}
