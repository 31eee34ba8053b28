use crate::fluid::Fluid;
use cgmath::{vec2, Vector2};

/// Pointer state between events.
///
/// Only the last seen position is kept. Moves while the pointer is up just
/// update it, so the next drag starts from where the pointer really is
/// instead of producing one huge impulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    last: Vector2<f64>,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            last: vec2(0.0, 0.0),
        }
    }
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Vector2<f64> {
        self.last
    }

    /// Button went down or a touch started at `pos`.
    pub fn press(&mut self, pos: Vector2<f64>) {
        self.track(pos);
    }

    /// Button went up or the touch ended at `pos`.
    pub fn release(&mut self, pos: Vector2<f64>) {
        self.track(pos);
    }

    fn track(&mut self, pos: Vector2<f64>) {
        if pos.x.is_finite() && pos.y.is_finite() {
            self.last = pos;
        }
    }

    /// Pointer moved to `pos` (surface pixels). When `active`, stir the fluid
    /// under it and drop ink.
    pub fn moved(&mut self, fluid: &mut Fluid, pos: Vector2<f64>, active: bool) {
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return;
        }

        if !active || fluid.grid().is_degenerate() {
            self.last = pos;
            return;
        }

        let config = *fluid.config();
        let grid = fluid.grid();

        let cell = |p: f64, n: usize| -> isize {
            let c = (p / config.cell_size).floor() + 1.0;
            c.max(1.0).min(n as f64) as isize
        };
        let (x, y) = (cell(pos.x, grid.cols()), cell(pos.y, grid.rows()));

        let push = (pos - self.last) * config.velocity_scale;
        fluid.add_velocity(x, y, push.x, push.y);

        fluid.add_density(x, y, config.ink);
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            fluid.add_density(x + dx, y + dy, config.splash);
        }

        self.last = pos;
    }
}
