//! Rendering
//!
//! [`draw_frame`] projects the session onto any [`Renderer`]. The WebGPU
//! backend batches rectangles into triangles; text goes to the host.

pub mod draw;
pub mod pipeline;
pub mod recording;
pub mod shapes;
pub mod vertex;

pub use draw::draw_frame;
pub use pipeline::{GpuFrame, RenderState, TextItem};
pub use recording::{DrawCommand, DrawList};
pub use vertex::colors;

/// Font size used when a caller has no preference
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

/// A 2D drawing surface in court pixels (origin top-left, y down)
pub trait Renderer {
    /// Wipe the surface before a new frame
    fn clear(&mut self);

    fn draw_filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]);

    /// Monospace text centered horizontally on `x`, baseline at `y`
    fn draw_centered_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: [f32; 4]);

    /// White filled rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.draw_filled_rect(x, y, w, h, colors::WHITE);
    }

    /// White text at the default size
    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.draw_centered_text(text, x, y, DEFAULT_FONT_SIZE, colors::WHITE);
    }
}
