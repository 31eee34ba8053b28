use crate::error::{ConfigError, Result};

/// Simulation and display parameters.
///
/// These are fixed for the lifetime of a [`Fluid`](crate::Fluid); the
/// defaults reproduce the look of the paint-with-dye page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidConfig {
    /// Edge length of one grid cell in surface pixels.
    pub cell_size: f64,
    /// Ink spreading rate.
    pub diffusion: f64,
    /// Velocity diffusion rate.
    pub viscosity: f64,
    pub dt: f64,
    /// Relaxation sweeps per linear solve. More is more accurate and slower.
    pub iterations: usize,
    /// Velocity added per pixel of pointer travel.
    pub velocity_scale: f64,
    /// Density added under the pointer.
    pub ink: f64,
    /// Density added to each of the four neighbours of the pointer cell.
    pub splash: f64,
    /// Cells at or below this density are neither drawn nor decayed.
    pub visibility_threshold: f64,
    /// Multiplier applied to a drawn cell's density after it is drawn.
    pub decay: f64,
    /// Degrees the colour phase advances per rendered frame.
    pub hue_step: f64,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            cell_size: 8.0,
            diffusion: 0.0,
            viscosity: 0.00001,
            dt: 0.2,
            iterations: 4,
            velocity_scale: 0.5,
            ink: 1.5,
            splash: 0.5,
            visibility_threshold: 0.01,
            decay: 0.99,
            hue_step: 0.5,
        }
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeRate { name, value })
    }
}

impl FluidConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::TimeStep(self.dt));
        }
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(ConfigError::Decay(self.decay));
        }

        non_negative("diffusion", self.diffusion)?;
        non_negative("viscosity", self.viscosity)?;
        non_negative("velocity_scale", self.velocity_scale)?;
        non_negative("ink", self.ink)?;
        non_negative("splash", self.splash)?;
        non_negative("visibility_threshold", self.visibility_threshold)?;
        non_negative("hue_step", self.hue_step)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FluidConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_values() {
        let base = FluidConfig::default();

        let config = FluidConfig {
            cell_size: 0.0,
            ..base
        };
        assert_eq!(config.validate(), Err(ConfigError::CellSize(0.0)));

        let config = FluidConfig {
            dt: f64::NAN,
            ..base
        };
        assert!(matches!(config.validate(), Err(ConfigError::TimeStep(_))));

        let config = FluidConfig {
            iterations: 0,
            ..base
        };
        assert_eq!(config.validate(), Err(ConfigError::NoIterations));

        let config = FluidConfig {
            decay: 1.5,
            ..base
        };
        assert_eq!(config.validate(), Err(ConfigError::Decay(1.5)));

        let config = FluidConfig {
            viscosity: -1.0,
            ..base
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeRate {
                name: "viscosity",
                value: -1.0
            })
        );
    }
}
