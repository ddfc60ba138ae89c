// Domain layer - automaton state and rules
pub mod domain;

// Application layer - configuration and the frame loop
pub mod application;

// Infrastructure layer - drawing surfaces
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeRule, SurvivalRange, Pattern, presets};
pub use application::{Conway, LifeConfig, ConfigError, Ticker, FrameLimit, Unpaced};
pub use rendering::{Surface, Palette, MacroquadSurface, MacroquadTicker};
