//! Keyboard input mapping
//!
//! Turns raw key-down events into move commands. Only the initial press of a
//! key counts; auto-repeat while held and key releases produce nothing.

use crate::config::GameConfig;
use crate::sim::GameEvent;

/// Edge of a raw key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    Up,
}

/// Raw keyboard event as delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key code (`KeyA`, `KeyD`, `KeyW`, `KeyS`, ...)
    pub code: String,
    pub state: KeyState,
    /// Set by the platform for auto-repeated key-downs
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(code: &str) -> Self {
        Self {
            code: code.to_string(),
            state: KeyState::Down,
            repeat: false,
        }
    }

    pub fn repeated(code: &str) -> Self {
        Self {
            repeat: true,
            ..Self::down(code)
        }
    }

    pub fn up(code: &str) -> Self {
        Self {
            state: KeyState::Up,
            ..Self::down(code)
        }
    }
}

/// Direction bound to one of the four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" => Some(Direction::Left),
            "KeyD" => Some(Direction::Right),
            "KeyW" => Some(Direction::Up),
            "KeyS" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Maps key presses to move commands using the session's step sizes
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    horizontal_step: f32,
    vertical_step: f32,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl InputMapper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            horizontal_step: config.horizontal_step,
            vertical_step: config.vertical_step,
        }
    }

    /// Command for a direction
    pub fn command(&self, dir: Direction) -> GameEvent {
        match dir {
            Direction::Left => GameEvent::MoveHorizontal(-self.horizontal_step),
            Direction::Right => GameEvent::MoveHorizontal(self.horizontal_step),
            Direction::Up => GameEvent::MoveVertical(-self.vertical_step),
            Direction::Down => GameEvent::MoveVertical(self.vertical_step),
        }
    }

    /// Command for a raw key event, if it is a fresh press of a movement key
    pub fn map(&self, event: &KeyEvent) -> Option<GameEvent> {
        if event.state != KeyState::Down || event.repeat {
            return None;
        }
        Direction::from_code(&event.code).map(|dir| self.command(dir))
    }
}
