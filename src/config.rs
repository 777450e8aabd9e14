use std::time::Duration;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::{Coords, ALPHABET};

pub const BASE_MS_PER_MOVE: u64 = 200;
pub const MIN_MS_PER_MOVE: u64 = 66;
const SPEEDUP_MS: u64 = 30;
const SPEEDUP_DECAY: f64 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub grid: Grid,
    pub start: Coords,
    /// Time between moves before any guess is complete.
    pub base_interval: Duration,
    /// The interval never drops below this.
    pub min_interval: Duration,
    /// Total speed-up approached as guesses pile up.
    pub speedup: Duration,
    /// Fraction of the remaining speed-up left after each guess.
    pub decay: f64,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid: Grid::new(30, 20),
            start: (5, 5),
            base_interval: Duration::from_millis(BASE_MS_PER_MOVE),
            min_interval: Duration::from_millis(MIN_MS_PER_MOVE),
            speedup: Duration::from_millis(SPEEDUP_MS),
            decay: SPEEDUP_DECAY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks the grid fits the snake and a tile per letter. A grid of
    /// exactly that size is accepted but has no room to grow: the first
    /// pickup after the start segment ends the game with
    /// `LossCause::BoardFull`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = ALPHABET.len() + 1;
        let cells = self.grid.cell_count();
        if cells < required {
            return Err(ConfigError::GridTooSmall { cells, required });
        }

        if !self.grid.contains(self.start) {
            return Err(ConfigError::StartOutOfBounds { start: self.start });
        }

        if self.min_interval > self.base_interval || !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(ConfigError::InvalidInterval);
        }

        Ok(())
    }

    /// `max(base - (speedup - decay^guesses * speedup), min)`
    pub fn tick_interval(&self, guesses: usize) -> Duration {
        let speedup = self.speedup.as_nanos() as f64;
        let remaining = self.decay.powi(guesses.min(i32::MAX as usize) as i32) * speedup;
        let interval = self.base_interval.as_nanos() as f64 - (speedup - remaining);

        if interval <= self.min_interval.as_nanos() as f64 {
            self.min_interval
        } else {
            Duration::from_nanos(interval.round() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_starts_at_base() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(0), Duration::from_millis(200));
    }

    #[test]
    fn interval_shrinks_with_every_guess() {
        let config = GameConfig::default();
        let mut last = config.tick_interval(0);
        for guesses in 1..40 {
            let next = config.tick_interval(guesses);
            assert!(next < last, "guess {} did not speed up", guesses);
            assert!(next >= config.min_interval);
            last = next;
        }
        // approaches base - speedup
        assert!(last > Duration::from_millis(170));
        assert!(last < Duration::from_millis(171));
    }

    #[test]
    fn interval_is_clamped_to_the_floor() {
        let config = GameConfig {
            base_interval: Duration::from_millis(80),
            ..GameConfig::default()
        };
        assert_eq!(config.tick_interval(0), Duration::from_millis(80));
        assert_eq!(config.tick_interval(50), config.min_interval);
    }

    #[test]
    fn rejects_unplayable_configs() {
        let small = GameConfig { grid: Grid::new(5, 5), ..GameConfig::default() };
        assert_eq!(small.validate(), Err(ConfigError::GridTooSmall { cells: 25, required: 27 }));

        let outside = GameConfig { start: (30, 0), ..GameConfig::default() };
        assert_eq!(outside.validate(), Err(ConfigError::StartOutOfBounds { start: (30, 0) }));

        let slow_floor = GameConfig { min_interval: Duration::from_secs(1), ..GameConfig::default() };
        assert_eq!(slow_floor.validate(), Err(ConfigError::InvalidInterval));

        assert_eq!(GameConfig::default().validate(), Ok(()));
    }
}
