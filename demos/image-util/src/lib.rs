use image::{Rgb, RgbImage};
use ndarray::Array2;
use tiny_skia::Pixmap;

/// Save a `[[row, col]]` field as a grey PNG, one pixel per element.
pub fn save_monochrome(prefix: &str, index: usize, x: &Array2<f64>) -> anyhow::Result<()> {
    let (h, w) = x.dim();

    let mut img = RgbImage::new(w as u32, h as u32);

    for j in 0..h {
        for i in 0..w {
            let l = (x[[j, i]] * 256.0).max(0.0).min(255.0) as u8;
            img.put_pixel(i as u32, j as u32, Rgb([l, l, l]));
        }
    }

    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}

/// Save a rendered frame composited over black.
pub fn save_frame(prefix: &str, index: usize, pixmap: &Pixmap) -> anyhow::Result<()> {
    let mut img = RgbImage::new(pixmap.width(), pixmap.height());

    // Premultiplied colour over black is the colour itself
    for (p, c) in img.pixels_mut().zip(pixmap.pixels()) {
        *p = Rgb([c.red(), c.green(), c.blue()]);
    }

    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}
