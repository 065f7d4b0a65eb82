//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One state per event, never edited after it is produced
//! - Stable iteration order (lane A before B before C, entities in layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve};
pub use entity::{Category, Entity};
pub use motion::{move_entity, move_lane};
pub use state::WorldState;
pub use tick::{GameEvent, reduce, replay, tick};
