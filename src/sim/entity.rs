//! Rectangular entities: the frog, cars, logs and goal slots

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kind of entity, one variant per lane group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frog,
    CarLaneA,
    CarLaneB,
    CarLaneC,
    LogLaneA,
    LogLaneB,
    LogLaneC,
    Goal,
}

impl Category {
    pub const CARS: [Category; 3] = [Category::CarLaneA, Category::CarLaneB, Category::CarLaneC];
    pub const LOGS: [Category; 3] = [Category::LogLaneA, Category::LogLaneB, Category::LogLaneC];

    /// Style class used by render sinks; also the id prefix
    pub fn style_class(&self) -> &'static str {
        match self {
            Category::Frog => "frog",
            Category::CarLaneA => "car1",
            Category::CarLaneB => "car2",
            Category::CarLaneC => "car3",
            Category::LogLaneA => "log1",
            Category::LogLaneB => "log2",
            Category::LogLaneC => "log3",
            Category::Goal => "exit",
        }
    }
}

/// An axis-aligned rectangle moving at constant velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable id, unique within the category
    pub id: String,
    pub category: Category,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub vel: Vec2,
    /// Tick the entity was created on
    pub created_at: u64,
}

impl Entity {
    /// Build the `index`-th entity of a lane; id is style class + index
    pub fn lane_member(
        category: Category,
        index: usize,
        pos: Vec2,
        width: f32,
        height: f32,
        vel: Vec2,
    ) -> Self {
        Self {
            id: format!("{}{}", category.style_class(), index),
            category,
            pos,
            width,
            height,
            vel,
            created_at: 0,
        }
    }

    /// The player's frog, stationary at `pos`
    pub fn frog(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            id: "frog".to_string(),
            category: Category::Frog,
            pos,
            width,
            height,
            vel: Vec2::ZERO,
            created_at: 0,
        }
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Bottom edge (y + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}
