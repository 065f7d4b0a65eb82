//! Motion step: constant-velocity movement on a wrapping playfield

use super::entity::Entity;
use crate::torus_wrap;

/// Advance an entity by its velocity, wrapping both axes into [0, canvas_size)
pub fn move_entity(entity: &Entity, canvas_size: f32) -> Entity {
    Entity {
        pos: torus_wrap(entity.pos + entity.vel, canvas_size),
        ..entity.clone()
    }
}

/// Advance a whole lane
pub fn move_lane(lane: &[Entity], canvas_size: f32) -> Vec<Entity> {
    lane.iter().map(|e| move_entity(e, canvas_size)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Category;
    use glam::Vec2;

    fn car(x: f32, speed: f32) -> Entity {
        Entity::lane_member(
            Category::CarLaneA,
            0,
            Vec2::new(x, 470.0),
            70.0,
            55.0,
            Vec2::new(speed, 0.0),
        )
    }

    #[test]
    fn test_moves_by_velocity() {
        let moved = move_entity(&car(30.0, 2.0), 600.0);
        assert_eq!(moved.pos, Vec2::new(32.0, 470.0));
        assert_eq!(moved.vel, Vec2::new(2.0, 0.0));
        assert_eq!(moved.id, "car10");
    }

    #[test]
    fn test_wraps_right_edge() {
        let moved = move_entity(&car(599.0, 3.0), 600.0);
        assert_eq!(moved.pos.x, 2.0);
    }

    #[test]
    fn test_wraps_left_edge() {
        let moved = move_entity(&car(0.5, -1.5), 600.0);
        assert_eq!(moved.pos.x, 599.0);
    }

    #[test]
    fn test_wraps_vertical_overshoot() {
        // Frog moved below the canvas by a vertical step
        let mut frog = Entity::frog(Vec2::new(300.0, 631.0), 20.0, 20.0);
        frog = move_entity(&frog, 600.0);
        assert_eq!(frog.pos, Vec2::new(300.0, 31.0));
    }

    #[test]
    fn test_move_lane_keeps_order() {
        let lane = vec![car(10.0, 2.0), car(200.0, 2.0)];
        let moved = move_lane(&lane, 600.0);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved[0].pos.x, 12.0);
        assert_eq!(moved[1].pos.x, 202.0);
    }
}
