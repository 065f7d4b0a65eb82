//! State-transition reducer
//!
//! Folds timer ticks and move commands into successive world states.

use serde::{Deserialize, Serialize};

use super::collision::resolve;
use super::motion::{move_entity, move_lane};
use super::state::WorldState;
use crate::config::GameConfig;
use crate::{move_x, move_y};

/// One entry of the merged event stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Timer fired; carries the elapsed tick count
    Tick(u64),
    /// Shift the frog along x
    MoveHorizontal(f32),
    /// Shift the frog along y
    MoveVertical(f32),
}

impl GameEvent {
    pub fn is_command(&self) -> bool {
        !matches!(self, GameEvent::Tick(_))
    }
}

/// Produce the state that follows `state` once `event` has been applied
pub fn reduce(state: WorldState, event: GameEvent, config: &GameConfig) -> WorldState {
    match event {
        GameEvent::MoveHorizontal(dx) => {
            log::debug!("Frog moves {dx:+} on x");
            let mut frog = state.frog;
            frog.pos = move_x(frog.pos, dx);
            WorldState { frog, ..state }
        }
        GameEvent::MoveVertical(dy) => {
            log::debug!("Frog moves {dy:+} on y");
            let mut frog = state.frog;
            frog.pos = move_y(frog.pos, dy);
            WorldState { frog, ..state }
        }
        GameEvent::Tick(elapsed) => tick(&state, elapsed, config),
    }
}

/// Advance every moving entity one step, then resolve collisions and scoring
pub fn tick(state: &WorldState, elapsed: u64, config: &GameConfig) -> WorldState {
    let size = config.canvas_size;
    let moved = WorldState {
        tick: elapsed,
        frog: move_entity(&state.frog, size),
        cars: [0, 1, 2].map(|i| move_lane(&state.cars[i], size)),
        logs: [0, 1, 2].map(|i| move_lane(&state.logs[i], size)),
        ..state.clone()
    };
    resolve(moved, config)
}

/// Fold a whole event sequence from `initial`, stopping at game over
pub fn replay<I>(initial: WorldState, events: I, config: &GameConfig) -> WorldState
where
    I: IntoIterator<Item = GameEvent>,
{
    let mut state = initial;
    for event in events {
        if state.game_over {
            break;
        }
        state = reduce(state, event, config);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn start() -> (WorldState, GameConfig) {
        let config = GameConfig::default();
        (WorldState::new(&config), config)
    }

    #[test]
    fn test_move_horizontal_only_touches_frog_x() {
        let (state, config) = start();
        let next = reduce(state.clone(), GameEvent::MoveHorizontal(-33.0), &config);
        assert_eq!(next.frog.pos, Vec2::new(267.0, 565.0));

        let mut expected = state;
        expected.frog.pos.x = 267.0;
        assert_eq!(next, expected);
    }

    #[test]
    fn test_move_vertical_does_not_wrap() {
        let (mut state, config) = start();
        // Column between goal slots 0 and 1
        state.frog.pos.x = 240.0;
        let next = reduce(state, GameEvent::MoveVertical(66.0), &config);
        assert_eq!(next.frog.pos, Vec2::new(240.0, 631.0));
        // The next tick wraps it back onto the canvas
        let next = reduce(next, GameEvent::Tick(1), &config);
        assert_eq!(next.frog.pos, Vec2::new(240.0, 31.0));
        assert_eq!(next.goals.len(), 5);
    }

    #[test]
    fn test_tick_moves_lanes_and_stamps_time() {
        let (state, config) = start();
        let next = reduce(state, GameEvent::Tick(7), &config);
        assert_eq!(next.tick, 7);
        assert_eq!(next.cars[0][0].pos.x, 32.0);
        assert_eq!(next.cars[1][0].pos.x, 399.0);
        assert!((next.logs[2][0].pos.x - 197.8).abs() < 1e-4);
        // Goal slots never move
        assert_eq!(next.goals[0].pos, Vec2::new(142.0, 10.0));
        // Quiet start row: frog untouched
        assert_eq!(next.frog.pos, Vec2::new(300.0, 565.0));
        assert_eq!(next.frog.vel, Vec2::ZERO);
        assert_eq!(next.frog_lives, 3);
    }

    #[test]
    fn test_frog_rides_log() {
        let (mut state, config) = start();
        state.frog.pos = Vec2::new(150.0, 240.0);

        // First tick lands the frog and hands it the lane speed
        let state = reduce(state, GameEvent::Tick(1), &config);
        assert_eq!(state.frog.pos, Vec2::new(150.0, 240.0));
        assert_eq!(state.frog.vel, Vec2::new(0.5, 0.0));

        // Second tick carries it without any command
        let state = reduce(state, GameEvent::Tick(2), &config);
        assert_eq!(state.frog.pos, Vec2::new(150.5, 240.0));
        assert_eq!(state.logs[0][0].pos.x, 71.0);
    }

    #[test]
    fn test_frog_rides_fast_lane() {
        let mut config = GameConfig::default();
        config.log_lanes[0].speed = 2.0;
        let mut state = WorldState::new(&config);
        state.frog.pos = Vec2::new(150.0, 240.0);

        let state = reduce(state, GameEvent::Tick(1), &config);
        let state = reduce(state, GameEvent::Tick(2), &config);
        assert_eq!(state.frog.pos.x, 152.0);
        assert_eq!(state.frog.vel.x, 2.0);
    }

    #[test]
    fn test_car_collision_scenario() {
        let (mut state, config) = start();
        // Car A0 sits at 30..100 and moves to 32..102 this tick
        state.frog.pos = Vec2::new(60.0, 500.0);
        let next = reduce(state, GameEvent::Tick(1), &config);
        assert_eq!(next.frog.pos, Vec2::new(300.0, 565.0));
        assert!(!next.game_over);
        assert_eq!(next.frog_lives, 2);
    }

    #[test]
    fn test_four_strikes_end_the_game() {
        let (mut state, config) = start();
        let mut strikes = 0;
        while !state.game_over {
            state.frog.pos = Vec2::new(400.0, 240.0); // open water in lane A
            state = reduce(state, GameEvent::Tick(strikes), &config);
            strikes += 1;
            assert!(strikes <= 4);
        }
        assert_eq!(strikes, 4);
        assert_eq!(state.frog_lives, -1);
    }

    #[test]
    fn test_replay_stops_at_game_over() {
        let (mut state, config) = start();
        state.frog_lives = 0;
        state.frog.pos = Vec2::new(400.0, 240.0);
        let events = vec![
            GameEvent::Tick(1),
            GameEvent::MoveHorizontal(33.0),
            GameEvent::Tick(2),
        ];
        let end = replay(state, events, &config);
        assert!(end.game_over);
        assert_eq!(end.tick, 1);
        assert_eq!(end.frog.pos, config.frog_start);
    }

    fn arb_event() -> impl Strategy<Value = GameEvent> {
        prop_oneof![
            4 => Just(GameEvent::Tick(0)),
            1 => prop_oneof![Just(-33.0f32), Just(33.0f32)].prop_map(GameEvent::MoveHorizontal),
            1 => prop_oneof![Just(-66.0f32), Just(66.0f32)].prop_map(GameEvent::MoveVertical),
        ]
    }

    proptest! {
        #[test]
        fn prop_positions_wrap_after_every_tick(events in prop::collection::vec(arb_event(), 1..300)) {
            let (mut state, config) = start();
            for (n, event) in events.into_iter().enumerate() {
                if state.game_over {
                    break;
                }
                let event = match event {
                    GameEvent::Tick(_) => GameEvent::Tick(n as u64),
                    other => other,
                };
                state = reduce(state, event, &config);
                if !event.is_command() {
                    let size = config.canvas_size;
                    for e in std::iter::once(&state.frog).chain(state.all_cars()).chain(state.all_logs()) {
                        prop_assert!(e.pos.x >= 0.0 && e.pos.x < size, "{} x = {}", e.id, e.pos.x);
                        prop_assert!(e.pos.y >= 0.0 && e.pos.y < size, "{} y = {}", e.id, e.pos.y);
                    }
                }
            }
        }

        #[test]
        fn prop_scoring_is_monotonic(events in prop::collection::vec(arb_event(), 1..400)) {
            let (mut state, config) = start();
            let lane_sizes: Vec<usize> = state.cars.iter().chain(state.logs.iter()).map(Vec::len).collect();
            for event in events {
                if state.game_over {
                    break;
                }
                let next = reduce(state.clone(), event, &config);
                prop_assert!(next.goals.len() <= state.goals.len());
                prop_assert!(next.score >= state.score);
                prop_assert!(next.multiplier >= state.multiplier);
                let sizes: Vec<usize> = next.cars.iter().chain(next.logs.iter()).map(Vec::len).collect();
                prop_assert_eq!(&sizes, &lane_sizes);
                if event.is_command() {
                    prop_assert_eq!(next.score, state.score);
                    prop_assert_eq!(next.multiplier, state.multiplier);
                    prop_assert_eq!(next.frog_lives, state.frog_lives);
                    prop_assert_eq!(&next.goals, &state.goals);
                }
                state = next;
            }
        }
    }
}
