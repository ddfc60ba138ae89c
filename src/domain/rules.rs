use super::Cell;

/// Inclusive bounds on the live-neighbor count under which a live cell survives.
///
/// An inverted range (`min > max`) is accepted as-is and simply never matches,
/// so no cell survives under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurvivalRange {
    pub min: u8,
    pub max: u8,
}

impl SurvivalRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// True when `neighbors` lies within `[min, max]`
    pub const fn contains(&self, neighbors: u8) -> bool {
        self.min <= neighbors && neighbors <= self.max
    }

    pub const fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for SurvivalRange {
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl From<[u8; 2]> for SurvivalRange {
    fn from([min, max]: [u8; 2]) -> Self {
        Self::new(min, max)
    }
}

/// Life rule with a fixed birth count and a configurable survival range.
///
/// Birth always happens on exactly three neighbors; only survival is tunable.
/// The default range `[2, 3]` gives the classic B3/S23 behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LifeRule {
    survival: SurvivalRange,
}

impl LifeRule {
    /// Live-neighbor count that brings a dead cell to life
    pub const BIRTH: u8 = 3;

    pub const fn new(survival: SurvivalRange) -> Self {
        Self { survival }
    }

    pub const fn survival(&self) -> SurvivalRange {
        self.survival
    }

    /// Apply rule to compute next cell state
    pub const fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match current {
            Cell::Dead if neighbors == Self::BIRTH => Cell::Alive,
            Cell::Alive if self.survival.contains(neighbors) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
