use crate::domain::SurvivalRange;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_BLOCK_SIZE: u32 = 5;
pub const DEFAULT_RANDOM_FACTOR: f64 = 0.25;

/// Construction parameters for a simulation instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Side of one cell in pixels
    pub block_size: u32,
    /// Probability that a cell starts dead
    pub random_factor: f64,
    pub survival_range: SurvivalRange,
    /// Evolve rows on the rayon pool instead of serially
    pub parallel: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            block_size: DEFAULT_BLOCK_SIZE,
            random_factor: DEFAULT_RANDOM_FACTOR,
            survival_range: SurvivalRange::default(),
            parallel: false,
        }
    }
}

impl LifeConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_random_factor(mut self, random_factor: f64) -> Self {
        self.random_factor = random_factor;
        self
    }

    pub fn with_survival_range(mut self, survival_range: impl Into<SurvivalRange>) -> Self {
        self.survival_range = survival_range.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Grid size in cells as (cols, rows). Integer division truncates,
    /// so pixels past the last whole block are never drawn.
    /// A zero block size gives an empty grid.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cols = self.width.checked_div(self.block_size).unwrap_or(0);
        let rows = self.height.checked_div(self.block_size).unwrap_or(0);
        (cols as usize, rows as usize)
    }

    /// Report parameters that will produce a degenerate simulation.
    /// Nothing refuses to run on an invalid config; callers decide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if !(0.0..=1.0).contains(&self.random_factor) {
            return Err(ConfigError::RandomFactorOutOfRange(self.random_factor));
        }
        if self.survival_range.is_inverted() {
            return Err(ConfigError::InvertedSurvivalRange(self.survival_range));
        }
        let (cols, rows) = self.grid_dimensions();
        if cols < 3 || rows < 3 {
            return Err(ConfigError::NoInterior { cols, rows });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("block size is zero, grid will be empty")]
    ZeroBlockSize,
    #[error("random factor {0} is outside [0, 1]")]
    RandomFactorOutOfRange(f64),
    #[error("survival range [{}, {}] is inverted, no cell will survive", .0.min, .0.max)]
    InvertedSurvivalRange(SurvivalRange),
    #[error("grid {cols}x{rows} has no interior cells to evolve")]
    NoInterior { cols: usize, rows: usize },
}
