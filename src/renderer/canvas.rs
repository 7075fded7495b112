//! Canvas 2D backend

use web_sys::CanvasRenderingContext2d;

use super::{Font, Surface, TextAlign};
use crate::color::Color;
use crate::sim::Rect;

/// [`Surface`] over a browser `CanvasRenderingContext2d`
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: Rect) {
        self.context.clear_rect(
            rect.left().into(),
            rect.top().into(),
            rect.size.x.into(),
            rect.size.y.into(),
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.context.set_fill_style_str(&color.to_string());
        self.context.fill_rect(
            rect.left().into(),
            rect.top().into(),
            rect.size.x.into(),
            rect.size.y.into(),
        );
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, align: TextAlign, color: Color) {
        self.context.set_fill_style_str(&color.to_string());
        self.context.set_font(&font.to_string());
        self.context.set_text_align(align.as_str());
        if let Err(e) = self.context.fill_text(text, x.into(), y.into()) {
            log::warn!("fillText({:?}) failed: {:?}", text, e);
        }
    }
}
