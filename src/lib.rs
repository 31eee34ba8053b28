//! Stable-fluids dye toy.
//!
//! [`d2`] holds the grid and the solver stages (diffuse, project, advect).
//! [`Fluid`] owns every field and runs one full step per frame, [`Pointer`]
//! turns pointer motion into impulses and [`Renderer`] paints the density.

pub mod config;
pub mod d2;
pub mod error;
pub mod fluid;
pub mod input;
pub mod render;

pub use config::FluidConfig;
pub use error::ConfigError;
pub use fluid::Fluid;
pub use input::Pointer;
pub use render::{hsla, Renderer, Rgba, Surface};
