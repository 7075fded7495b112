//! 2D rendering module
//!
//! Frames are drawn through the small [`Surface`] trait: clear, filled
//! rectangles and text. The browser backend is a canvas 2D context; tests and
//! the native binary use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use std::fmt;

use crate::color::Color;
use crate::sim::{GameState, Rect};
use crate::tuning::Tuning;
use crate::{format_score, format_time};

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A CSS font shorthand: size in pixels and family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size_px: u32,
    pub family: &'static str,
}

impl Font {
    pub const HUD: Font = Font::arial(16);
    pub const TITLE: Font = Font::arial(48);
    pub const BODY: Font = Font::arial(24);

    pub const fn arial(size_px: u32) -> Self {
        Self {
            size_px,
            family: "Arial",
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

/// Primitive drawing operations the game needs from its host
pub trait Surface {
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, align: TextAlign, color: Color);
}

/// Draw one complete frame of `state`
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, tuning: &Tuning) {
    let width = tuning.playfield.width;
    let height = tuning.playfield.height;
    let field = Rect::new(0.0, 0.0, width, height);

    surface.clear(field);

    surface.fill_rect(state.player.rect(), state.player.color);
    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.rect(), obstacle.color);
    }

    let time = format_time(state.elapsed_secs);
    surface.fill_text(
        &time,
        width - 10.0,
        30.0,
        Font::HUD,
        TextAlign::Right,
        Color::WHITE,
    );

    if state.is_over() {
        surface.fill_rect(field, Color::OVERLAY);

        let cx = width / 2.0;
        let cy = height / 2.0;
        let lines = [
            ("GAME OVER".to_string(), Font::TITLE, 0.0),
            (format_score(state.score), Font::BODY, 40.0),
            (time, Font::BODY, 70.0),
            ("Click to restart".to_string(), Font::BODY, 110.0),
        ];
        for (text, font, offset) in &lines {
            surface.fill_text(text, cx, cy + offset, *font, TextAlign::Center, Color::WHITE);
        }
    }
}

/// A drawing operation captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect(Rect, Color),
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        align: TextAlign,
        color: Color,
    },
}

/// Surface that records the most recent frame instead of drawing it.
///
/// Every clear starts a new frame and discards the previous commands.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Frames started so far
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every `FillText` in the current frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font,
            align,
            color,
        });
    }
}
