//! Simulation configuration.
//!
//! Values come from `Default`, then an optional TOML file, then CLI
//! overrides applied through the builder methods.
//!
//! ```toml
//! columns = 120
//! rows = 80
//! density = 0.35
//! seed = 42
//! generations = 500
//! report_interval = 50
//! initial = [[1, 2], [2, 2], [3, 2]]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub columns: u32,
    pub rows: u32,
    /// Probability that random seeding marks a cell alive.
    pub density: f64,
    /// Seed for random seeding. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub generations: u64,
    /// Print a status line every this many generations.
    pub report_interval: u64,
    /// Pause between generations, in milliseconds.
    pub tick_ms: u64,
    /// Explicit starting cells. Random seeding only runs when this is empty.
    pub initial: Vec<[i64; 2]>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 100,
            density: 0.5,
            seed: None,
            generations: 100,
            report_interval: 10,
            tick_ms: 0,
            initial: Vec::new(),
        }
    }
}

impl LifeConfig {
    pub fn columns(mut self, n: u32) -> Self {
        self.columns = n;
        self
    }

    pub fn rows(mut self, n: u32) -> Self {
        self.rows = n;
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generations(mut self, n: u64) -> Self {
        self.generations = n;
        self
    }

    pub fn report_interval(mut self, n: u64) -> Self {
        self.report_interval = n;
        self
    }

    pub fn tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = ms;
        self
    }

    pub fn initial<I: IntoIterator<Item = (i64, i64)>>(mut self, cells: I) -> Self {
        self.initial = cells.into_iter().map(|(x, y)| [x, y]).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::invalid_config(format!(
                "density must be in [0.0, 1.0], got {}",
                self.density
            )));
        }
        if self.report_interval == 0 {
            return Err(LifeError::invalid_config("report_interval must be positive"));
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
