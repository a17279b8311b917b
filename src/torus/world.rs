//! World ownership of the grid and population, plus the generation step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::coord::{Grid, Position};
use super::coord_set::CoordSet;
use super::population::Population;
use super::rules::next_state;
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};

pub const DEFAULT_DENSITY: f64 = 0.5;

#[derive(Debug)]
pub struct World {
    grid: Grid,
    population: Population,
    generation: u64,
    density: f64,
}

impl World {
    /// Build a world from `rows x columns` and a starting population.
    ///
    /// An empty population is replaced by random seeding, so a fresh world
    /// is never blank unless it is cleared afterwards. Every starting cell
    /// must lie on the grid.
    pub fn new(rows: u32, columns: u32, population: Population) -> Result<Self> {
        Self::with_rng(rows, columns, population, &mut rand::rng())
    }

    /// Like [`World::new`], drawing any random seeding from `rng`.
    pub fn with_rng<R: Rng>(
        rows: u32,
        columns: u32,
        population: Population,
        rng: &mut R,
    ) -> Result<Self> {
        let grid = Grid::new(columns, rows);
        check_bounds(grid, &population)?;

        let mut world = Self::assemble(grid, population, DEFAULT_DENSITY);
        if world.population.is_empty() {
            world.populate_random_with(rng);
        }
        Ok(world)
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.columns, config.rows);
        let initial = config
            .initial
            .iter()
            .map(|&[x, y]| grid.position(x, y))
            .collect::<Result<Population>>()?;

        let mut world = Self::assemble(grid, initial, config.density);
        if world.population.is_empty() {
            match config.seed {
                Some(seed) => world.populate_random_with(&mut StdRng::seed_from_u64(seed)),
                None => world.populate_random(),
            }
        }
        Ok(world)
    }

    fn assemble(grid: Grid, population: Population, density: f64) -> Self {
        if grid.is_degenerate() {
            warn!(
                columns = grid.columns(),
                rows = grid.rows(),
                "degenerate grid, world will stay empty"
            );
        }
        Self {
            grid,
            population,
            generation: 0,
            density,
        }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.grid.columns()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn set_density(&mut self, density: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::invalid_config(format!(
                "density must be in [0.0, 1.0], got {density}"
            )));
        }
        self.density = density;
        Ok(())
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.population.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    pub fn for_each_live<F: FnMut(u32, u32)>(&self, mut f: F) {
        for Position { x, y } in &self.population {
            f(x, y);
        }
    }

    /// Overlay random cells onto the current population using the thread RNG.
    pub fn populate_random(&mut self) {
        self.populate_random_with(&mut rand::rng());
    }

    /// Dense pass over the whole grid; each cell is independently marked
    /// alive with probability `density`. Existing live cells are kept.
    pub fn populate_random_with<R: Rng>(&mut self, rng: &mut R) {
        let before = self.population.len();
        for position in self.grid.positions() {
            if rng.random::<f64>() < self.density {
                self.population.insert(position);
            }
        }
        info!(
            columns = self.grid.columns(),
            rows = self.grid.rows(),
            added = self.population.len() - before,
            live = self.population.len(),
            "random seeding"
        );
    }

    /// Clear, then seed randomly.
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) {
        self.population.clear();
        self.populate_random_with(rng);
    }

    /// Advance one generation.
    ///
    /// Only live cells and their neighbors are evaluated, each candidate at
    /// most once, so the cost is proportional to the live count rather than
    /// the grid area.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let grid = self.grid;
        let current = &self.population;
        let mut next = Population::with_capacity(current.len());
        let mut evaluated = CoordSet::with_capacity(current.len().saturating_mul(9));

        for cell in current {
            let alive_around = current.count_alive_neighbors(cell, grid);
            if next_state(true, alive_around) {
                next.insert(cell);
            }

            for neighbor in grid.neighbors(cell) {
                if !evaluated.insert(neighbor.key()) {
                    continue;
                }
                // A live neighbor reaching 3 here would survive anyway.
                if next_state(false, current.count_alive_neighbors(neighbor, grid)) {
                    next.insert(neighbor);
                }
            }
        }

        debug!(
            generation = self.generation + 1,
            before = current.len(),
            after = next.len(),
            evaluated = evaluated.len(),
            "generation"
        );
        self.population = next;
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Set a cell from external coordinates. Out-of-range input is rejected.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<()> {
        let position = self.grid.position(x, y)?;
        if alive {
            self.population.insert(position);
        } else {
            self.population.remove(position);
        }
        Ok(())
    }

    /// Flip a cell and return its new state.
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> Result<bool> {
        let position = self.grid.position(x, y)?;
        Ok(self.population.toggle(position))
    }

    /// `false` for dead or off-grid cells.
    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.grid
            .position(x, y)
            .is_ok_and(|position| self.population.is_alive(position))
    }

    /// Reset to an empty population.
    pub fn clear(&mut self) {
        self.population.clear();
    }

    /// Swap in a whole population, returning the previous one.
    pub fn replace_population(&mut self, population: Population) -> Result<Population> {
        check_bounds(self.grid, &population)?;
        Ok(std::mem::replace(&mut self.population, population))
    }
}

fn check_bounds(grid: Grid, population: &Population) -> Result<()> {
    match population.iter().find(|&p| !grid.contains(p)) {
        Some(p) => Err(LifeError::OutOfBounds {
            x: p.x as i64,
            y: p.y as i64,
            columns: grid.columns(),
            rows: grid.rows(),
        }),
        None => Ok(()),
    }
}
