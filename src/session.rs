//! Game session driver
//!
//! Timer ticks and input commands meet in one FIFO queue; the session folds
//! them through the reducer one at a time and hands each new state to its
//! render sink. Once a state reports game over the session cancels itself
//! and drops everything that arrives afterwards.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::GameConfig;
use crate::render::{SceneGraph, present};
use crate::sim::{GameEvent, WorldState, reduce};

/// Periodic tick source; yields `Tick(0)`, `Tick(1)`, ...
#[derive(Debug, Clone)]
pub struct Timer {
    pub period_ms: u32,
    elapsed: u64,
}

impl Timer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            elapsed: 0,
        }
    }

    /// Ticks emitted so far
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Emit the next tick
    pub fn fire(&mut self) -> GameEvent {
        let event = GameEvent::Tick(self.elapsed);
        self.elapsed += 1;
        event
    }
}

impl Iterator for Timer {
    type Item = GameEvent;

    fn next(&mut self) -> Option<GameEvent> {
        Some(self.fire())
    }
}

/// Arrival-ordered merge point for ticks and commands
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Shared stop flag; set once, observed by whoever drives the event sources
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// One game from the initial state to game over
pub struct Session<S> {
    config: GameConfig,
    state: WorldState,
    sink: S,
    cancel: CancelToken,
    processed: u64,
}

impl<S: SceneGraph> Session<S> {
    pub fn new(config: GameConfig, sink: S) -> Self {
        let state = WorldState::new(&config);
        log::info!(
            "Session started: {} objects, {} lives",
            state.object_count(),
            state.frog_lives
        );
        Self {
            config,
            state,
            sink,
            cancel: CancelToken::default(),
            processed: 0,
        }
    }

    /// Fold one event and present the result; `None` once cancelled
    pub fn dispatch(&mut self, event: GameEvent) -> Option<&WorldState> {
        if self.cancel.is_cancelled() {
            log::debug!("Session over, dropping {event:?}");
            return None;
        }

        self.state = reduce(self.state.clone(), event, &self.config);
        self.processed += 1;
        present(&mut self.sink, &self.state, self.config.canvas_size);

        if self.state.game_over {
            log::info!(
                "Session finished after {} events, score {}",
                self.processed,
                self.state.score
            );
            self.cancel.cancel();
        }
        Some(&self.state)
    }

    /// Dispatch everything queued, in arrival order; returns how many were applied
    pub fn drain(&mut self, queue: &mut EventQueue) -> usize {
        let mut applied = 0;
        while let Some(event) = queue.pop() {
            if self.dispatch(event).is_some() {
                applied += 1;
            }
        }
        applied
    }

    /// Dispatch events until the iterator ends or the game is over
    pub fn run<I>(&mut self, events: I) -> &WorldState
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            if self.dispatch(event).is_none() {
                break;
            }
        }
        &self.state
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Token the event sources watch to stop themselves
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Events applied so far
    pub fn processed(&self) -> u64 {
        self.processed
    }
}
