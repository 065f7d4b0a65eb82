//! In-memory scene graph with SVG export

use std::collections::BTreeMap;
use std::fmt::Write;

use super::SceneGraph;
use crate::sim::Entity;

/// A rectangle visual
#[derive(Debug, Clone, PartialEq)]
pub struct RectNode {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub class: &'static str,
}

/// A text visual
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub x: f32,
    pub y: f32,
    pub class: String,
    pub content: String,
}

/// Scene graph held in memory (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Rectangles keyed by entity id
    pub rects: BTreeMap<String, RectNode>,
    pub frog_transform: String,
    pub texts: Vec<TextNode>,
    /// Number of states presented
    pub frames: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self, id: &str) -> Option<&RectNode> {
        self.rects.get(id)
    }

    /// Render the scene as a standalone SVG document
    pub fn to_svg(&self, canvas_size: f32, frog_width: f32, frog_height: f32) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="svgCanvas" width="{canvas_size}" height="{canvas_size}">"#
        );
        for (id, r) in &self.rects {
            let _ = writeln!(
                out,
                r#"  <rect id="{id}" class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
                r.class, r.x, r.y, r.width, r.height
            );
        }
        let _ = writeln!(
            out,
            r#"  <rect id="frog" class="frog" width="{frog_width}" height="{frog_height}" transform="{}"/>"#,
            self.frog_transform
        );
        for t in &self.texts {
            let _ = writeln!(
                out,
                r#"  <text class="{}" x="{}" y="{}">{}</text>"#,
                t.class, t.x, t.y, t.content
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

impl SceneGraph for Scene {
    fn upsert_rect(&mut self, entity: &Entity) {
        let node = self
            .rects
            .entry(entity.id.clone())
            .or_insert_with(|| RectNode {
                x: 0.0,
                y: 0.0,
                width: entity.width,
                height: entity.height,
                class: entity.category.style_class(),
            });
        node.x = entity.pos.x;
        node.y = entity.pos.y;
    }

    fn set_frog_transform(&mut self, transform: &str) {
        self.frog_transform = transform.to_string();
    }

    fn show_text(&mut self, text: TextNode) {
        self.texts.push(text);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
