use cgmath::vec2;
use dye::{Fluid, FluidConfig, Pointer, Renderer};
use tiny_skia::Pixmap;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    const W: u32 = 640;
    const H: u32 = 480;
    const N_FRAME: usize = 180;
    const DRAG_FRAMES: usize = 90;

    std::fs::create_dir_all("out")?;

    let mut fluid = Fluid::new(FluidConfig::default(), W as f64, H as f64)?;
    let mut pointer = Pointer::new();
    let mut renderer = Renderer::new();
    let mut pixmap = Pixmap::new(W, H).ok_or_else(|| anyhow::anyhow!("empty surface"))?;

    let center = vec2(W as f64 / 2.0, H as f64 / 2.0);
    let figure_eight = |t: f64| center + vec2(220.0 * t.sin(), 120.0 * (2.0 * t).sin());

    pointer.press(figure_eight(0.0));

    for f in 1..=N_FRAME {
        let t = f as f64 / DRAG_FRAMES as f64 * std::f64::consts::TAU;
        let pos = figure_eight(t);

        if f == DRAG_FRAMES {
            pointer.release(pos);
        }
        pointer.moved(&mut fluid, pos, f < DRAG_FRAMES);

        fluid.step();
        renderer.render(&mut fluid, &mut pixmap);
        image_util::save_frame("stroke", f, &pixmap)?;

        log::debug!("frame {} ink {:.3}", f, fluid.total_density());
        eprint!("\r {} / {}", f, N_FRAME);
    }

    Ok(())
}
