use rand::Rng;

use super::{LifeConfig, Ticker};
use crate::domain::{Grid, LifeRule};
use crate::rendering::{Palette, Surface, draw_grid};

/// Conway orchestrates the simulation.
/// It owns the current generation and drives the draw + advance loop
/// against a surface and ticker supplied by the host.
pub struct Conway {
    config: LifeConfig,
    rule: LifeRule,
    grid: Grid,
    palette: Palette,
    generation: u64,
}

impl Conway {
    /// Create a randomly seeded instance using the thread RNG
    pub fn new(config: LifeConfig) -> Self {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Create a randomly seeded instance from the given RNG
    pub fn with_rng<R: Rng + ?Sized>(config: LifeConfig, rng: &mut R) -> Self {
        let (cols, rows) = config.grid_dimensions();
        let grid = Grid::random(cols, rows, config.random_factor, rng);
        log::debug!(
            "seeded {}x{} grid with {} live cells",
            cols,
            rows,
            grid.count_alive()
        );
        Self::from_grid(config, grid)
    }

    /// Start from a known grid instead of random seeding
    pub fn from_grid(config: LifeConfig, grid: Grid) -> Self {
        Self {
            rule: LifeRule::new(config.survival_range),
            config,
            grid,
            palette: Palette::default(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Current generation snapshot
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Size the surface to the configured pixel dimensions
    pub fn setup<S: Surface + ?Sized>(&mut self, surface: &mut S) -> &mut Self {
        log::info!("sizing surface to {}x{}", self.config.width, self.config.height);
        surface.resize(self.config.width, self.config.height);
        self
    }

    /// Replace the grid with the next generation
    pub fn advance(&mut self) {
        self.grid = if self.config.parallel {
            self.grid.evolve_parallel(&self.rule)
        } else {
            self.grid.evolve(&self.rule)
        };
        self.generation += 1;
        log::debug!("generation {}: {} alive", self.generation, self.grid.count_alive());
    }

    /// Draw the current generation, then advance
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        draw_grid(&self.grid, self.config.block_size, &self.palette, surface);
        self.advance();
    }

    /// Run frames until the ticker asks to stop.
    /// The first frame runs immediately; each later one waits on `ticker`.
    pub async fn start<S, T>(&mut self, surface: &mut S, ticker: &mut T) -> &mut Self
    where
        S: Surface + ?Sized,
        T: Ticker,
    {
        let (cols, rows) = self.grid.dimensions();
        log::info!("starting {}x{} simulation at generation {}", cols, rows, self.generation);

        loop {
            self.frame(surface);
            if !ticker.tick().await {
                break;
            }
        }

        log::info!("stopped at generation {}", self.generation);
        self
    }
}

impl Default for Conway {
    fn default() -> Self {
        Self::new(LifeConfig::default())
    }
}
