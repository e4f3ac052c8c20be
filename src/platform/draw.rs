//! macroquad drawing backend

use glam::Vec2;
use macroquad::prelude::{Color, clear_background, draw_line, draw_rectangle, draw_rectangle_lines, draw_text};

use crate::render::{RenderBackend, Rgba};

/// Immediate-mode drawing through macroquad's global context
#[derive(Debug, Clone)]
pub struct MacroquadRenderer {
    pub line_thickness: f32,
    pub font_size: f32,
}

impl Default for MacroquadRenderer {
    fn default() -> Self {
        Self {
            line_thickness: 1.0,
            font_size: 20.0,
        }
    }
}

#[inline]
fn color(c: Rgba) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

impl RenderBackend for MacroquadRenderer {
    fn clear(&mut self, c: Rgba) {
        clear_background(color(c));
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, c: Rgba) {
        draw_rectangle(min.x, min.y, size.x, size.y, color(c));
    }

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, c: Rgba) {
        draw_rectangle_lines(min.x, min.y, size.x, size.y, self.line_thickness, color(c));
    }

    fn line(&mut self, from: Vec2, to: Vec2, c: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, self.line_thickness, color(c));
    }

    fn text(&mut self, text: &str, at: Vec2, c: Rgba) {
        draw_text(text, at.x, at.y, self.font_size, color(c));
    }
}
