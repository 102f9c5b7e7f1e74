//! In-memory surface that records draw calls instead of painting

use std::convert::Infallible;

use glam::Vec2;

use super::surface::Surface;
use crate::sim::{Rgb, Rgba};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        line_width: f32,
    },
}

/// Records every draw call in order; never fails
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Calls seen since creation, including cleared ones
    total: u64,
    keep_commands: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            total: 0,
            keep_commands: true,
        }
    }

    /// Surface that only counts draw calls, for long headless runs
    pub fn counting() -> Self {
        Self {
            keep_commands: false,
            ..Self::new()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of draw calls ever recorded
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Drop recorded commands, keeping the running total
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), Infallible> {
        if self.keep_commands {
            self.commands.push(command);
        }
        self.total += 1;
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) -> Result<(), Infallible> {
        self.record(DrawCommand::FillRect {
            origin,
            size,
            color,
        })
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) -> Result<(), Infallible> {
        self.record(DrawCommand::FillCircle {
            center,
            radius,
            color,
        })
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Rgb,
        line_width: f32,
    ) -> Result<(), Infallible> {
        self.record(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_frame(surface: &mut RecordingSurface) {
        let _ = surface.fill_rect(Vec2::ZERO, Vec2::new(40.0, 30.0), Rgb::BLACK.with_alpha(0.25));
        let _ = surface.fill_circle(Vec2::new(5.0, 5.0), 3.0, Rgb::new(1, 2, 3));
        let _ = surface.stroke_circle(Vec2::new(9.0, 9.0), 4.0, Rgb::WHITE, 3.0);
    }

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface);
        assert_eq!(surface.total(), 3);
        assert!(matches!(surface.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(surface.commands()[1], DrawCommand::FillCircle { .. }));
        assert!(matches!(surface.commands()[2], DrawCommand::StrokeCircle { .. }));

        surface.clear();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.total(), 3);
    }

    #[test]
    fn test_counting_surface_stays_bounded() {
        let mut surface = RecordingSurface::counting();
        for _ in 0..10_000 {
            draw_frame(&mut surface);
        }
        assert!(surface.commands().is_empty());
        assert_eq!(surface.total(), 30_000);
    }
}
