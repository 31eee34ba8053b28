//! Density to pixels.

use crate::fluid::Fluid;
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

/// 8-bit straight (not premultiplied) colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Convert hue (degrees), saturation, lightness and alpha (all others in
/// `[0, 1]`) to [`Rgba`].
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Rgba {
    let h = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - 0.5 * c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgba {
        r: to_u8(r + m),
        g: to_u8(g + m),
        b: to_u8(b + m),
        a: to_u8(a.clamp(0.0, 1.0)),
    }
}

/// Something cells can be painted on, in pixel coordinates.
pub trait Surface {
    /// Make the whole surface transparent.
    fn clear(&mut self);

    fn paint_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
}

impl Surface for Pixmap {
    fn clear(&mut self) {
        self.fill(Color::TRANSPARENT);
    }

    fn paint_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let rect = match Rect::from_xywh(x, y, w, h) {
            Some(rect) => rect,
            None => return,
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = false;

        self.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

/// Draws the density field as coloured cells and fades it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Renderer {
    hue: f64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the colour cycle at `hue` degrees.
    pub fn with_hue(hue: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Paint one frame of `fluid` onto `surface`.
    ///
    /// Every visible cell is clamped to 1, drawn, and then decayed. Cells at
    /// or below the visibility threshold are skipped entirely. The colour
    /// phase advances once per call.
    pub fn render<S: Surface + ?Sized>(&mut self, fluid: &mut Fluid, surface: &mut S) {
        surface.clear();

        let grid = fluid.grid();
        let config = *fluid.config();
        let size = config.cell_size as f32;

        if !grid.is_degenerate() {
            let density = fluid.density_mut();

            for j in 1..=grid.rows() {
                for i in 1..=grid.cols() {
                    let d = density[[j, i]];
                    if d <= config.visibility_threshold {
                        continue;
                    }

                    let alpha = d.min(1.0);
                    let color = hsla((self.hue + d * 50.0) % 360.0, 1.0, 0.5, alpha);

                    // 1px overlap hides seams between neighbouring cells
                    surface.paint_rect(
                        (i - 1) as f32 * size,
                        (j - 1) as f32 * size,
                        size + 1.0,
                        size + 1.0,
                        color,
                    );

                    density[[j, i]] = alpha * config.decay;
                }
            }
        }

        self.hue = (self.hue + config.hue_step) % 360.0;
    }
}
