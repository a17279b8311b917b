//! Conway's Game of Life (B3/S23) on a wrap-around grid with a sparse,
//! live-cells-only generation step.

pub mod config;
pub mod error;
pub mod torus;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use torus::{Grid, Population, Position, World};
