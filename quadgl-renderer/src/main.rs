use quadgl_renderer::{Canvas, Error, ImageSource};
use wasm_bindgen::Clamped;
use web_sys::ImageData;

const CHECKER_SIZE: u32 = 64;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    quadgl_renderer::init_console_logging(log::LevelFilter::Debug);
    run().unwrap()
}

fn run() -> Result<(), Error> {
    let mut canvas = Canvas::builder("canvas").clear_color(0x1d1f21).build()?;
    let image = checkerboard(CHECKER_SIZE)?;

    let (width, height) = canvas.canvas_size();
    let half = CHECKER_SIZE as f32 / 2.0;

    canvas.begin_frame();
    canvas.draw_image(&image, 0.0, 0.0, CHECKER_SIZE as f32, CHECKER_SIZE as f32);

    canvas.save();
    canvas.translate(width as f32 / 2.0, height as f32 / 2.0);
    canvas.rotate(std::f32::consts::FRAC_PI_6);
    canvas.set_global_alpha(0.5);
    canvas.try_draw_image(&image, -half, -half, CHECKER_SIZE as f32, CHECKER_SIZE as f32)?;
    canvas.restore();

    Ok(())
}

fn checkerboard(size: u32) -> Result<ImageSource, Error> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let light = ((x / 8) + (y / 8)) % 2 == 0;
            let v = if light { 0xe0 } else { 0x30 };
            pixels.extend_from_slice(&[v, v, v, 0xff]);
        }
    }

    ImageData::new_with_u8_clamped_array_and_sh(Clamped(pixels.as_slice()), size, size)
        .map(ImageSource::from)
        .map_err(|e| Error::webgl_error(format!("{e:?}")))
}
