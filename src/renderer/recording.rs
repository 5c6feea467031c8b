//! A renderer that records draw calls instead of rasterizing them
//!
//! Used by the headless host and by tests that check the draw projection.

use super::Renderer;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: [f32; 4],
    },
}

/// Draw calls since the last `clear`
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    /// Whether a rectangle with exactly this geometry was drawn
    pub fn has_rect(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        self.commands.iter().any(|c| {
            matches!(c, DrawCommand::Rect { x: rx, y: ry, w: rw, h: rh, .. }
                if *rx == x && *ry == y && *rw == w && *rh == h)
        })
    }
}

impl Renderer for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_centered_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }
}
