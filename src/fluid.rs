use crate::config::FluidConfig;
use crate::d2::{advect, diffuse, project, Boundary, Grid};
use crate::error::Result;
use ndarray::{s, Array2};

/// Complete simulation state: density, velocity and the scratch buffers the
/// solver needs, all sized for one [`Grid`].
#[derive(Clone, Debug)]
pub struct Fluid {
    config: FluidConfig,
    grid: Grid,

    density: Array2<f64>,
    u: Array2<f64>,
    v: Array2<f64>,

    density0: Array2<f64>,
    u0: Array2<f64>,
    v0: Array2<f64>,
    pressure: Array2<f64>,
    divergence: Array2<f64>,
}

impl Fluid {
    /// A resting fluid covering a `width x height` pixel viewport.
    pub fn new(config: FluidConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;

        let grid = Grid::from_viewport(width, height, config.cell_size);
        Ok(Self::with_grid(config, grid))
    }

    fn with_grid(config: FluidConfig, grid: Grid) -> Self {
        if grid.is_degenerate() {
            log::warn!(
                "viewport gives a {}x{} grid, frames will be skipped",
                grid.cols(),
                grid.rows()
            );
        } else {
            log::debug!(
                "allocating {}x{} fluid grid ({} cells per field)",
                grid.cols(),
                grid.rows(),
                grid.size()
            );
        }

        Self {
            config,
            grid,
            density: grid.zeros(),
            u: grid.zeros(),
            v: grid.zeros(),
            density0: grid.zeros(),
            u0: grid.zeros(),
            v0: grid.zeros(),
            pressure: grid.zeros(),
            divergence: grid.zeros(),
        }
    }

    /// Rebuild every field for a new viewport. Nothing is carried over.
    pub fn resize(&mut self, width: f64, height: f64) {
        let grid = Grid::from_viewport(width, height, self.config.cell_size);
        *self = Self::with_grid(self.config, grid);
    }

    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn density(&self) -> &Array2<f64> {
        &self.density
    }

    pub(crate) fn density_mut(&mut self) -> &mut Array2<f64> {
        &mut self.density
    }

    /// Horizontal velocity.
    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    /// Vertical velocity.
    pub fn v(&self) -> &Array2<f64> {
        &self.v
    }

    /// Add ink at an interior cell. Border cells are left alone.
    pub fn add_density(&mut self, x: isize, y: isize, amount: f64) {
        if self.grid.is_interior(x, y) {
            let cell = self.grid.cell(x, y);
            self.density[cell] += amount;
        }
    }

    /// Push the fluid at an interior cell. Border cells are left alone.
    pub fn add_velocity(&mut self, x: isize, y: isize, amount_x: f64, amount_y: f64) {
        if self.grid.is_interior(x, y) {
            let cell = self.grid.cell(x, y);
            self.u[cell] += amount_x;
            self.v[cell] += amount_y;
        }
    }

    /// Sum of density over the interior cells.
    pub fn total_density(&self) -> f64 {
        if self.grid.is_degenerate() {
            return 0.0;
        }

        let (h, w) = self.grid.dim();
        self.density.slice(s![1..h - 1, 1..w - 1]).sum()
    }

    /// Advance the simulation by one `dt`.
    pub fn step(&mut self) {
        if self.grid.is_degenerate() {
            log::trace!("skipping step on degenerate grid");
            return;
        }

        let FluidConfig {
            diffusion,
            viscosity,
            dt,
            iterations,
            ..
        } = self.config;

        diffuse(Boundary::Horizontal, &mut self.u0, &self.u, viscosity, dt, iterations);
        diffuse(Boundary::Vertical, &mut self.v0, &self.v, viscosity, dt, iterations);

        project(
            &mut self.u0,
            &mut self.v0,
            &mut self.pressure,
            &mut self.divergence,
            iterations,
        );

        advect(Boundary::Horizontal, &mut self.u, &self.u0, &self.u0, &self.v0, dt);
        advect(Boundary::Vertical, &mut self.v, &self.v0, &self.u0, &self.v0, dt);

        project(
            &mut self.u,
            &mut self.v,
            &mut self.pressure,
            &mut self.divergence,
            iterations,
        );

        // Relaxation starts from its destination; begin at the current ink
        self.density0.assign(&self.density);
        diffuse(Boundary::Scalar, &mut self.density0, &self.density, diffusion, dt, iterations);
        advect(Boundary::Scalar, &mut self.density, &self.density0, &self.u, &self.v, dt);
    }

    /// [`Fluid::step`] as a value-to-value transformation.
    pub fn stepped(mut self) -> Self {
        self.step();
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fluid(width: f64, height: f64) -> Fluid {
        Fluid::new(FluidConfig::default(), width, height).unwrap()
    }

    #[test]
    fn test_new_sizes_from_viewport() {
        let f = fluid(160.0, 84.0);
        assert_eq!(f.grid().cols(), 20);
        assert_eq!(f.grid().rows(), 10);
        assert_eq!(f.density().dim(), (12, 22));
        assert_eq!(f.u().len(), f.grid().size());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FluidConfig {
            iterations: 0,
            ..FluidConfig::default()
        };
        assert!(Fluid::new(config, 100.0, 100.0).is_err());
    }

    #[test]
    fn test_border_ignores_injection() {
        let mut f = fluid(80.0, 80.0);
        f.add_density(0, 4, 1.0);
        f.add_density(11, 4, 1.0);
        f.add_velocity(4, 0, 1.0, 1.0);
        f.add_velocity(-3, 50, 1.0, 1.0);

        assert!(f.density().iter().all(|&d| d == 0.0));
        assert!(f.u().iter().all(|&d| d == 0.0));
        assert!(f.v().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_step_at_rest_keeps_ink_still() {
        let mut f = fluid(80.0, 80.0);
        f.add_density(5, 5, 1.0);

        f.step();

        assert_abs_diff_eq!(f.density()[[5, 5]], 1.0);
        assert_abs_diff_eq!(f.total_density(), 1.0);
    }

    #[test]
    fn test_push_moves_ink_downstream() {
        let centroid_x = |f: &Fluid| {
            let d = f.density();
            let weighted: f64 = d.indexed_iter().map(|((_, x), e)| x as f64 * e).sum();
            weighted / d.sum()
        };

        let mut f = fluid(160.0, 160.0);
        for y in 9..=11 {
            for x in 7..=9 {
                f.add_density(x, y, 1.0);
            }
        }
        assert_abs_diff_eq!(centroid_x(&f), 8.0);

        for _ in 0..3 {
            f.add_velocity(8, 10, 0.25, 0.0);
            f.step();
        }

        assert!(f.u().iter().any(|&u| u > 0.0));
        assert!(centroid_x(&f) > 8.0);
    }

    #[test]
    fn test_diffusing_ink_at_rest_never_grows() {
        let config = FluidConfig {
            diffusion: 0.001,
            ..FluidConfig::default()
        };
        let mut f = Fluid::new(config, 160.0, 120.0).unwrap();
        f.add_density(4, 4, 1.5);
        f.add_density(12, 8, 1.0);
        f.add_density(18, 3, 0.7);

        let mut total = f.total_density();
        for _ in 0..100 {
            f.step();
            let next = f.total_density();
            assert!(next <= total + 1e-12, "{} > {}", next, total);

            // Fade like a rendered frame so the scratch copy goes stale
            f.density_mut().mapv_inplace(|d| d * 0.99);
            total = f.total_density();
        }
    }

    #[test]
    fn test_degenerate_grid_is_noop() {
        let mut f = fluid(3.0, 500.0);
        assert!(f.grid().is_degenerate());

        f.add_density(1, 1, 1.0);
        f.step();
        let f = f.stepped();

        assert_abs_diff_eq!(f.total_density(), 0.0);
    }

    #[test]
    fn test_resize_discards_state() {
        let mut f = fluid(80.0, 80.0);
        f.add_density(3, 3, 1.0);
        f.add_velocity(3, 3, 1.0, -1.0);
        f.step();

        f.resize(120.0, 40.0);

        assert_eq!(f.grid(), Grid::new(15, 5));
        assert_eq!(f.density().dim(), (7, 17));
        assert!(f.density().iter().all(|&d| d == 0.0));
        assert!(f.u().iter().all(|&d| d == 0.0));
        assert!(f.v().iter().all(|&d| d == 0.0));
    }
}
