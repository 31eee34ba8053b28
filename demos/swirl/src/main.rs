use cgmath::vec2;
use dye::{Fluid, FluidConfig, Renderer};
use noise::{NoiseFn, Perlin};
use tiny_skia::Pixmap;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    const W: u32 = 400;
    const H: u32 = 400;
    const N_FRAME: usize = 64;

    std::fs::create_dir_all("out")?;

    let config = FluidConfig {
        cell_size: 4.0,
        iterations: 10,
        ..FluidConfig::default()
    };
    let mut fluid = Fluid::new(config, W as f64, H as f64)?;
    let mut renderer = Renderer::new();
    let mut pixmap = Pixmap::new(W, H).ok_or_else(|| anyhow::anyhow!("empty surface"))?;

    let grid = fluid.grid();
    let (cols, rows) = (grid.cols() as isize, grid.rows() as isize);

    let perlin = Perlin::new();
    let freq = 4.0;
    let strength = 0.01;
    for y in 1..=rows {
        for x in 1..=cols {
            let p = [
                x as f64 / cols as f64 * freq,
                y as f64 / rows as f64 * freq,
            ];
            let uv = vec2(perlin.get([p[0], p[1], 0.0]), perlin.get([p[0], p[1], 0.5])) * strength;
            fluid.add_velocity(x, y, uv.x, uv.y);
        }
    }

    for y in rows / 2 - 10..=rows / 2 + 10 {
        for x in cols / 2 - 10..=cols / 2 + 10 {
            fluid.add_density(x, y, 1.0);
        }
    }

    for f in 1..=N_FRAME {
        image_util::save_monochrome("swirl_density", f, fluid.density())?;

        fluid.step();
        renderer.render(&mut fluid, &mut pixmap);
        image_util::save_frame("swirl", f, &pixmap)?;

        log::debug!("frame {} ink {:.3}", f, fluid.total_density());

        eprint!("\r {} / {}", f, N_FRAME);
    }

    Ok(())
}
