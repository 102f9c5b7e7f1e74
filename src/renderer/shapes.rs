//! How each entity paints itself

use glam::Vec2;

use super::surface::Surface;
use crate::sim::{Bounds, Particle, PlayerCircle, Rgba};

/// Something that can paint itself onto a [`Surface`]
pub trait Draw {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error>;
}

/// Particles are filled discs
impl Draw for Particle {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(self.body.pos, self.radius as f32, self.color)
    }
}

/// The player is an outline only
impl Draw for PlayerCircle {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.stroke_circle(
            self.body.pos,
            self.radius as f32,
            self.color,
            self.line_width,
        )
    }
}

/// Paint a translucent rectangle over the whole viewport
///
/// Not a clear: previous frames show through and fade out, leaving trails.
pub fn fade<S: Surface + ?Sized>(surface: &mut S, bounds: Bounds, color: Rgba) -> Result<(), S::Error> {
    surface.fill_rect(Vec2::ZERO, bounds.extent(), color)
}
