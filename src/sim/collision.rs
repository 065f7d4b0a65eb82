//! Collision detection and scoring resolution
//!
//! Every check compares the frog `a` against one other rectangle `b` with
//! strict inequalities. The vertical band test offsets the frog's y by its
//! *width*, not its height; lane geometry is tuned around that.

use glam::Vec2;

use super::entity::Entity;
use super::state::WorldState;
use crate::config::GameConfig;

/// Frog's offset y lies strictly inside `b`'s vertical span
#[inline]
pub fn level_check(a: &Entity, b: &Entity) -> bool {
    let y = a.pos.y - a.width;
    y > b.pos.y && y < b.bottom()
}

/// Frog's left edge (x - width) lies strictly inside `b`'s horizontal span
#[inline]
pub fn left_edge_overlap(a: &Entity, b: &Entity) -> bool {
    let x = a.pos.x - a.width;
    x > b.pos.x && x < b.right()
}

/// Frog's right edge (x + width) lies strictly inside `b`'s horizontal span
#[inline]
pub fn right_edge_overlap(a: &Entity, b: &Entity) -> bool {
    let x = a.pos.x + a.width;
    x > b.pos.x && x < b.right()
}

/// Frog's raw x lies strictly inside `b`'s horizontal span
#[inline]
pub fn center_overlap(a: &Entity, b: &Entity) -> bool {
    a.pos.x > b.pos.x && a.pos.x < b.right()
}

/// In `b`'s lane band but not standing on it
#[inline]
pub fn river_exposed(a: &Entity, b: &Entity) -> bool {
    level_check(a, b) && !center_overlap(a, b)
}

/// Frog clipped by a car
#[inline]
pub fn hits(a: &Entity, b: &Entity) -> bool {
    level_check(a, b) && (left_edge_overlap(a, b) || right_edge_overlap(a, b))
}

/// Frog standing on `b` (logs and goal slots)
#[inline]
pub fn stands_on(a: &Entity, b: &Entity) -> bool {
    level_check(a, b) && center_overlap(a, b)
}

/// Outcome of all geometric checks for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Any car in any lane hit the frog
    pub car_hit: bool,
    /// Frog stands on a log, per lane group A, B, C
    pub landed: [bool; 3],
    /// Some log lane band holds the frog without a log under it
    pub in_river: bool,
    /// Frog stands inside an unclaimed goal slot
    pub goal_entered: bool,
}

impl CollisionReport {
    pub fn detect(frog: &Entity, state: &WorldState) -> Self {
        let landed = [0, 1, 2].map(|i| state.logs[i].iter().any(|log| stands_on(frog, log)));
        Self {
            car_hit: state.all_cars().any(|car| hits(frog, car)),
            landed,
            in_river: state.all_logs().any(|log| river_exposed(frog, log)),
            goal_entered: state.goals.iter().any(|goal| stands_on(frog, goal)),
        }
    }

    pub fn landed_any(&self) -> bool {
        self.landed.iter().any(|&l| l)
    }

    /// First log lane the frog rides (A before B before C)
    pub fn landed_lane(&self) -> Option<usize> {
        self.landed.iter().position(|&l| l)
    }

    /// Fatal hit: send the frog back to the start
    pub fn back_to_start(&self) -> bool {
        (self.car_hit || self.in_river) && !self.landed_any()
    }

    /// Fatal hit or cleared board, either of which costs a life
    pub fn end_game(&self, goals_cleared: bool) -> bool {
        (self.car_hit || self.in_river || goals_cleared) && !self.landed_any()
    }
}

/// Apply collision and scoring rules to a state whose entities have already moved
pub fn resolve(state: WorldState, config: &GameConfig) -> WorldState {
    let report = CollisionReport::detect(&state.frog, &state);
    let goals_cleared = state.goals_cleared();
    let end_game = report.end_game(goals_cleared);
    let back_to_start = report.back_to_start();

    let vel = report
        .landed_lane()
        .map(|lane| Vec2::new(config.log_speed(lane), 0.0))
        .unwrap_or(Vec2::ZERO);
    let pos = if report.goal_entered || back_to_start {
        config.frog_start
    } else {
        state.frog.pos
    };

    // Lives are checked before the decrement below, so the game only ends
    // on a strike that lands while the counter already reads zero.
    let game_over = state.frog_lives == 0 && end_game;
    let frog_lives = if end_game {
        state.frog_lives - 1
    } else {
        state.frog_lives
    };

    let (goals, multiplier, score) = if report.goal_entered {
        let goals: Vec<Entity> = state
            .goals
            .iter()
            .filter(|goal| !stands_on(&state.frog, goal))
            .cloned()
            .collect();
        let multiplier = state.multiplier + 1;
        let score = state.score + config.base_score * u64::from(multiplier);
        log::info!(
            "Goal claimed at tick {}: score {} (x{}), {} goals left",
            state.tick,
            score,
            multiplier,
            goals.len()
        );
        (goals, multiplier, score)
    } else {
        (state.goals.clone(), state.multiplier, state.score)
    };

    if back_to_start {
        log::info!(
            "Frog lost at tick {} ({}), {} lives left",
            state.tick,
            if report.car_hit { "hit by car" } else { "drowned" },
            frog_lives
        );
    } else if end_game {
        log::info!(
            "Board cleared at tick {}, {} lives left",
            state.tick,
            frog_lives
        );
    }
    if game_over {
        log::info!("Game over at tick {}: final score {}", state.tick, score);
    }

    WorldState {
        frog: Entity {
            pos,
            vel,
            ..state.frog
        },
        goals,
        game_over,
        score,
        multiplier,
        frog_lives,
        ..state
    }
}
