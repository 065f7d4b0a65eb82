//! Render sinks
//!
//! A sink receives every new world state and brings a scene graph up to
//! date: one rectangle per live car, log and goal slot (keyed by entity id),
//! a translate transform for the frog, and a terminal text on game over.

pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use scene::{RectNode, Scene, TextNode};

use crate::sim::{Entity, WorldState};

/// Keyed, upsert-only view of a drawing surface
pub trait SceneGraph {
    /// Create the rectangle for `entity` if missing, then move it
    fn upsert_rect(&mut self, entity: &Entity);
    /// Position the frog visual
    fn set_frog_transform(&mut self, transform: &str);
    /// Show the terminal message
    fn show_text(&mut self, text: TextNode);
    /// Called once after each state has been fully presented
    fn end_frame(&mut self) {}
}

/// Transform attribute for the frog visual
pub fn frog_transform(state: &WorldState) -> String {
    format!("translate({},{})", state.frog.pos.x, state.frog.pos.y)
}

/// Terminal message shown once the game is over
pub fn game_over_text(state: &WorldState, canvas_size: f32) -> TextNode {
    TextNode {
        x: canvas_size / 6.0,
        y: canvas_size / 2.0,
        class: "gameover".to_string(),
        content: format!("Game Over. Score: {}", state.score),
    }
}

/// Bring `graph` up to date with `state`
pub fn present<G: SceneGraph + ?Sized>(graph: &mut G, state: &WorldState, canvas_size: f32) {
    graph.set_frog_transform(&frog_transform(state));
    for entity in state.obstacles() {
        graph.upsert_rect(entity);
    }
    if state.game_over {
        graph.show_text(game_over_text(state, canvas_size));
    }
    graph.end_frame();
}
