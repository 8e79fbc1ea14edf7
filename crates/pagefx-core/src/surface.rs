use glam::Vec2;
use std::fmt;

/// Straight (non-premultiplied) colour with a float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// CSS `rgba(r,g,b,a)` form, suitable for canvas fill/stroke styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal 2D drawing surface the particle field renders onto.
///
/// Coordinates are logical (CSS) pixels; the surface is responsible for
/// mapping them onto its backing store at the configured pixel ratio.
pub trait Surface2d {
    /// Resize the backing store to `width * pixel_ratio` by
    /// `height * pixel_ratio` and scale subsequent drawing by `pixel_ratio`.
    fn set_backing_size(&mut self, width: f32, height: f32, pixel_ratio: f32);
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { width: f32, height: f32, pixel_ratio: f32 },
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface2d for RecordingSurface {
    fn set_backing_size(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.commands.push(DrawCommand::Resize { width, height, pixel_ratio });
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }
}
