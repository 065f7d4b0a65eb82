//! Seeded demo player
//!
//! Produces raw key presses from a deterministic RNG so headless runs and
//! soak tests exercise the same input path a keyboard would.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::input::{InputMapper, KeyEvent};
use crate::sim::GameEvent;

/// Chance of a key press on any given tick
const PRESS_CHANCE: f64 = 0.02;
/// Chance that a press is an auto-repeat the mapper must drop
const REPEAT_CHANCE: f64 = 0.2;

pub struct Autopilot {
    rng: Pcg32,
    mapper: InputMapper,
}

impl Autopilot {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            mapper: InputMapper::new(config),
        }
    }

    /// Raw key event for this tick, if the demo player presses anything.
    /// Biased toward moving up so runs actually reach the river.
    pub fn next_key(&mut self) -> Option<KeyEvent> {
        if !self.rng.random_bool(PRESS_CHANCE) {
            return None;
        }
        let code = match self.rng.random_range(0..10) {
            0..=4 => "KeyW",
            5 => "KeyS",
            6 | 7 => "KeyA",
            _ => "KeyD",
        };
        if self.rng.random_bool(REPEAT_CHANCE) {
            Some(KeyEvent::repeated(code))
        } else {
            Some(KeyEvent::down(code))
        }
    }

    /// Move command for this tick, after input mapping
    pub fn poll(&mut self) -> Option<GameEvent> {
        self.next_key().and_then(|key| self.mapper.map(&key))
    }
}
