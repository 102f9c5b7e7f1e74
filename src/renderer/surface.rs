//! The drawing surface boundary

use glam::Vec2;

use crate::sim::{Rgb, Rgba};

/// A 2D surface that can paint rectangles and circles
///
/// Every call is fallible; the first error aborts the rest of the frame.
pub trait Surface {
    type Error;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) -> Result<(), Self::Error>;

    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) -> Result<(), Self::Error>;

    /// Outline a circle with a stroke of `line_width`
    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Rgb,
        line_width: f32,
    ) -> Result<(), Self::Error>;
}
