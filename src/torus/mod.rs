//! Toroidal Life engine: coordinates, sparse population and the world step.

mod coord;
mod coord_set;
mod population;
mod rules;
mod world;

pub use coord::{CellKey, Grid, Position, toroidal_neighbors};
pub use population::{Iter, Population};
pub use rules::next_state;
pub use world::{DEFAULT_DENSITY, World};
