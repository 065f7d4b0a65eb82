//! SVG DOM sink (wasm32 only)
//!
//! Writes into the page's `<svg id="svgCanvas">`. Rectangles are looked up
//! by entity id and created on first sight; the frog is a static element
//! with id `frog` that only ever gets a new transform.

use web_sys::{Document, Element};

use super::{SceneGraph, TextNode};
use crate::sim::Entity;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct DomScene {
    document: Document,
    svg: Element,
}

impl DomScene {
    /// Attach to the `#svgCanvas` element, if the page has one
    pub fn attach(document: Document) -> Option<Self> {
        let svg = document.get_element_by_id("svgCanvas")?;
        Some(Self { document, svg })
    }

    /// Canvas size from the svg `width` attribute
    pub fn canvas_size(&self) -> Option<f32> {
        self.svg.get_attribute("width")?.parse().ok()
    }

    fn create(&self, tag: &str) -> Option<Element> {
        let element = self.document.create_element_ns(Some(SVG_NS), tag).ok()?;
        self.svg.append_child(&element).ok()?;
        Some(element)
    }

    fn create_rect(&self, entity: &Entity) -> Option<Element> {
        let rect = self.create("rect")?;
        set_attrs(
            &rect,
            &[
                ("id", entity.id.clone()),
                ("width", entity.width.to_string()),
                ("height", entity.height.to_string()),
            ],
        );
        let class = entity.category.style_class();
        if rect.class_list().add_1(class).is_err() {
            log::warn!("Failed to add class {class} to {}", entity.id);
        }
        Some(rect)
    }
}

fn set_attrs(element: &Element, attrs: &[(&str, String)]) {
    for (name, value) in attrs {
        if element.set_attribute(name, value).is_err() {
            log::warn!("Failed to set attribute {name}");
        }
    }
}

impl SceneGraph for DomScene {
    fn upsert_rect(&mut self, entity: &Entity) {
        let rect = self
            .document
            .get_element_by_id(&entity.id)
            .or_else(|| self.create_rect(entity));
        match rect {
            Some(rect) => set_attrs(
                &rect,
                &[("x", entity.pos.x.to_string()), ("y", entity.pos.y.to_string())],
            ),
            None => log::warn!("Could not create visual for {}", entity.id),
        }
    }

    fn set_frog_transform(&mut self, transform: &str) {
        if let Some(frog) = self.document.get_element_by_id("frog") {
            set_attrs(&frog, &[("transform", transform.to_string())]);
        }
    }

    fn show_text(&mut self, text: TextNode) {
        if let Some(element) = self.create("text") {
            set_attrs(
                &element,
                &[
                    ("x", text.x.to_string()),
                    ("y", text.y.to_string()),
                    ("class", text.class),
                ],
            );
            element.set_text_content(Some(&text.content));
        }
    }
}
