//! Bouncing particles

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Movable};
use super::color::Rgb;
use super::random::{random_color, random_int};
use super::world::Bounds;
use crate::settings::Settings;

/// A filled, colored circle that bounces off the viewport walls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub body: Body,
    pub radius: u32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: u32, color: Rgb) -> Self {
        Self {
            body: Body::new(pos, vel),
            radius,
            color,
        }
    }

    /// Random particle fully inside `bounds`
    ///
    /// The position is inset by the particle's own radius so it never spawns
    /// straddling a wall. Draw order: radius, x, y, vel x, vel y, color.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, settings: &Settings) -> Self {
        let radius = random_int(rng, settings.min_radius as i32, settings.max_radius as i32);
        let x = random_int(rng, radius, bounds.width as i32 - radius);
        let y = random_int(rng, radius, bounds.height as i32 - radius);
        let vel_x = random_int(rng, settings.min_velocity, settings.max_velocity);
        let vel_y = random_int(rng, settings.min_velocity, settings.max_velocity);
        let color = random_color(rng);

        Self::new(
            Vec2::new(x as f32, y as f32),
            Vec2::new(vel_x as f32, vel_y as f32),
            radius as u32,
            color,
        )
    }

    /// Reflect off walls, then advance by velocity
    ///
    /// Reflection is decided from the position before moving, so a particle
    /// can overshoot a wall by at most one step before heading back.
    pub fn update(&mut self, bounds: Bounds) {
        let r = self.radius as f32;
        let (width, height) = (bounds.width as f32, bounds.height as f32);
        let body = &mut self.body;

        if body.pos.x + r >= width {
            body.vel.x = -body.vel.x;
        }
        if body.pos.x - r <= 0.0 {
            body.vel.x = -body.vel.x;
        }
        if body.pos.y + r >= height {
            body.vel.y = -body.vel.y;
        }
        if body.pos.y - r <= 0.0 {
            body.vel.y = -body.vel.y;
        }

        body.pos += body.vel;
    }
}

impl Movable for Particle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn radius(&self) -> u32 {
        self.radius
    }
}
