//! Frog Crossing - A road and river crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, game state)
//! - `config`: Session constants (lane layout, speeds, scoring)
//! - `input`: Keyboard to move-command mapping
//! - `render`: Scene graph sinks fed with each new state
//! - `session`: Event queue, timer and the fold that drives a game
//! - `autopilot`: Seeded demo player for headless runs

pub mod autopilot;
pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::Session;

use glam::Vec2;

/// Default layout and tuning constants
pub mod consts {
    /// Square playfield edge length
    pub const CANVAS_SIZE: f32 = 600.0;
    /// Timer period between ticks (milliseconds)
    pub const TICK_PERIOD_MS: u32 = 10;

    /// Frog defaults
    pub const FROG_START_X: f32 = 300.0;
    pub const FROG_START_Y: f32 = 565.0;
    pub const FROG_WIDTH: f32 = 20.0;
    pub const FROG_HEIGHT: f32 = 20.0;
    pub const FROG_LIVES: i32 = 3;

    /// Height shared by cars, logs and goal slots
    pub const OBJECT_HEIGHT: f32 = 55.0;

    /// Car lanes (A nearest the start, C nearest the river)
    pub const CAR_LANE_Y: [f32; 3] = [470.0, 405.0, 338.0];
    pub const CAR_WIDTH: [f32; 3] = [70.0, 120.0, 50.0];
    pub const CAR_SPEED: [f32; 3] = [2.0, -1.0, 3.0];
    pub const CAR_POS_A: &[f32] = &[30.0, 120.0];
    pub const CAR_POS_B: &[f32] = &[400.0];
    pub const CAR_POS_C: &[f32] = &[50.0, 300.0, 380.0];

    /// Log lanes (A nearest the road, C nearest the goals)
    pub const LOG_LANE_Y: [f32; 3] = [207.0, 142.0, 76.0];
    pub const LOG_WIDTH: [f32; 3] = [200.0, 90.0, 100.0];
    pub const LOG_SPEED: [f32; 3] = [0.5, -1.5, -2.2];
    pub const LOG_POS_A: &[f32] = &[70.0];
    pub const LOG_POS_B: &[f32] = &[50.0, 170.0, 500.0];
    pub const LOG_POS_C: &[f32] = &[200.0, 480.0];

    /// Goal slots along the top edge
    pub const GOAL_Y: f32 = 10.0;
    pub const GOAL_WIDTH: f32 = 55.0;
    pub const GOAL_POS: &[f32] = &[142.0, 275.0, 408.0, 10.0, 538.0];

    /// Points per goal before the multiplier is applied
    pub const BASE_SCORE: u64 = 100;

    /// Move command magnitudes
    pub const HORIZONTAL_STEP: f32 = 33.0;
    pub const VERTICAL_STEP: f32 = 66.0;
}

/// Wrap a single coordinate into [0, size)
#[inline]
pub fn wrap_coord(v: f32, size: f32) -> f32 {
    let wrapped = v.rem_euclid(size);
    // rem_euclid can round up to `size` for tiny negative inputs
    if wrapped >= size { 0.0 } else { wrapped }
}

/// Wrap a point onto the torus of the given size (both axes)
#[inline]
pub fn torus_wrap(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, size), wrap_coord(pos.y, size))
}

/// Translate a point along the x axis only
#[inline]
pub fn move_x(pos: Vec2, dx: f32) -> Vec2 {
    pos + Vec2::new(dx, 0.0)
}

/// Translate a point along the y axis only
#[inline]
pub fn move_y(pos: Vec2, dy: f32) -> Vec2 {
    pos + Vec2::new(0.0, dy)
}
