mod cell;
mod grid;
mod rules;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{LifeRule, SurvivalRange};
pub use patterns::{Pattern, presets};
