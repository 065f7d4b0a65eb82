//! World state
//!
//! One immutable snapshot of the whole game. The reducer never edits a
//! snapshot that has been handed out; it builds the next one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Category, Entity};
use crate::config::{GameConfig, LaneConfig};

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Last elapsed timer value
    pub tick: u64,
    pub frog: Entity,
    /// Car lane groups A, B, C
    pub cars: [Vec<Entity>; 3],
    /// Log lane groups A, B, C
    pub logs: [Vec<Entity>; 3],
    /// Unclaimed goal slots; only ever shrinks
    pub goals: Vec<Entity>,
    pub game_over: bool,
    pub score: u64,
    pub multiplier: u32,
    /// Goes negative on the terminal strike
    pub frog_lives: i32,
}

fn build_lane(category: Category, lane: &LaneConfig, height: f32) -> Vec<Entity> {
    lane.xs
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            Entity::lane_member(
                category,
                i,
                Vec2::new(x, lane.y),
                lane.width,
                height,
                Vec2::new(lane.speed, 0.0),
            )
        })
        .collect()
}

impl WorldState {
    /// Build the session's starting state from the layout in `config`
    pub fn new(config: &GameConfig) -> Self {
        let h = config.object_height;
        let cars = [0, 1, 2].map(|i| build_lane(Category::CARS[i], &config.car_lanes[i], h));
        let logs = [0, 1, 2].map(|i| build_lane(Category::LOGS[i], &config.log_lanes[i], h));
        let goals = config
            .goals
            .xs
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                Entity::lane_member(
                    Category::Goal,
                    i,
                    Vec2::new(x, config.goals.y),
                    config.goals.width,
                    h,
                    Vec2::ZERO,
                )
            })
            .collect();

        Self {
            tick: 0,
            frog: Entity::frog(config.frog_start, config.frog_width, config.frog_height),
            cars,
            logs,
            goals,
            game_over: false,
            score: 0,
            multiplier: 1,
            frog_lives: config.frog_lives,
        }
    }

    /// All cars, lane A first
    pub fn all_cars(&self) -> impl Iterator<Item = &Entity> {
        self.cars.iter().flatten()
    }

    /// All logs, lane A first
    pub fn all_logs(&self) -> impl Iterator<Item = &Entity> {
        self.logs.iter().flatten()
    }

    /// Every non-frog entity in render order (cars, logs, goals)
    pub fn obstacles(&self) -> impl Iterator<Item = &Entity> {
        self.all_cars().chain(self.all_logs()).chain(self.goals.iter())
    }

    /// Number of live cars, logs and goal slots
    pub fn object_count(&self) -> usize {
        self.obstacles().count()
    }

    /// True once every goal slot has been claimed
    pub fn goals_cleared(&self) -> bool {
        self.goals.is_empty()
    }
}
