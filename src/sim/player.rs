//! The player-controlled circle that eats particles

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Movable};
use super::color::Rgb;
use super::input::Direction;
use super::random::random_int;
use super::world::Bounds;
use crate::settings::Settings;

/// An outlined circle moved by key presses
///
/// Its velocity is a fixed step applied per key press, never integrated
/// per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCircle {
    pub body: Body,
    pub radius: u32,
    pub color: Rgb,
    pub line_width: f32,
}

impl PlayerCircle {
    pub fn new(pos: Vec2, radius: u32, step: f32, line_width: f32) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(step)),
            radius,
            color: Rgb::WHITE,
            line_width,
        }
    }

    /// Player at a random position anywhere in `bounds` (not inset)
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, settings: &Settings) -> Self {
        let x = random_int(rng, 0, bounds.width as i32);
        let y = random_int(rng, 0, bounds.height as i32);
        Self::new(
            Vec2::new(x as f32, y as f32),
            settings.player_radius,
            settings.player_step,
            settings.player_line_width,
        )
    }

    /// Move one step in `direction`, ignoring walls
    pub fn nudge(&mut self, direction: Direction) {
        let step = self.body.vel;
        let pos = &mut self.body.pos;
        match direction {
            Direction::Up => pos.y -= step.y,
            Direction::Down => pos.y += step.y,
            Direction::Left => pos.x -= step.x,
            Direction::Right => pos.x += step.x,
        }
    }

    /// Push the circle back by one radius on each axis where its edge
    /// reaches a wall
    ///
    /// Checks run in order right, left, bottom, top, each seeing the result
    /// of the previous one. The top wall uses a strict `< 0` while the other
    /// three include the boundary, so a circle resting exactly on the top
    /// wall stays put but one resting on the left wall is pushed.
    pub fn check_bounds(&mut self, bounds: Bounds) {
        let r = self.radius as f32;
        let (width, height) = (bounds.width as f32, bounds.height as f32);
        let pos = &mut self.body.pos;

        if pos.x + r >= width {
            pos.x -= r;
        }
        if pos.x - r <= 0.0 {
            pos.x += r;
        }
        if pos.y + r >= height {
            pos.y -= r;
        }
        if pos.y - r < 0.0 {
            pos.y += r;
        }
    }
}

impl Movable for PlayerCircle {
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

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(400, 300);

    fn player_at(x: f32, y: f32) -> PlayerCircle {
        PlayerCircle::new(Vec2::new(x, y), 10, 20.0, 3.0)
    }

    #[test]
    fn test_nudge_each_direction() {
        let mut p = player_at(100.0, 100.0);
        p.nudge(Direction::Up);
        assert_eq!(p.body.pos, Vec2::new(100.0, 80.0));
        p.nudge(Direction::Right);
        assert_eq!(p.body.pos, Vec2::new(120.0, 80.0));
        p.nudge(Direction::Down);
        p.nudge(Direction::Down);
        assert_eq!(p.body.pos, Vec2::new(120.0, 120.0));
        p.nudge(Direction::Left);
        assert_eq!(p.body.pos, Vec2::new(100.0, 120.0));
    }

    #[test]
    fn test_up_from_origin_then_bounds() {
        let mut p = player_at(0.0, 0.0);
        p.nudge(Direction::Up);
        assert_eq!(p.body.pos.y, -20.0);

        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.y, -10.0);
        assert_eq!(p.body.pos.x, 10.0);
    }

    #[test]
    fn test_top_edge_is_strict() {
        let mut p = player_at(200.0, 10.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.y, 10.0);

        let mut p = player_at(10.0, 150.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.x, 20.0);
    }

    #[test]
    fn test_right_and_bottom_edges() {
        let mut p = player_at(395.0, 295.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos, Vec2::new(385.0, 285.0));
    }

    #[test]
    fn test_far_outside_takes_several_calls() {
        let mut p = player_at(-50.0, 150.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.x, -40.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.x, -30.0);
    }

    #[test]
    fn test_check_bounds_idempotent_near_walls() {
        for &(x, y) in &[(3.0, 150.0), (398.0, 150.0), (200.0, 0.0), (200.0, 299.0), (0.5, 0.0)] {
            let mut p = player_at(x, y);
            p.check_bounds(BOUNDS);
            let once = p.body.pos;
            p.check_bounds(BOUNDS);
            assert_eq!(p.body.pos, once, "start ({x}, {y})");
        }
    }

    #[test]
    fn test_left_wall_origin_pushed_twice() {
        let mut p = player_at(0.0, 150.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.x, 10.0);
        // Resting on the left wall still counts as touching it
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.x, 20.0);
        p.check_bounds(BOUNDS);
        assert_eq!(p.body.pos.x, 20.0);
    }

    #[test]
    fn test_spawn_uses_settings() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(5);
        let p = PlayerCircle::spawn(&mut rng, BOUNDS, &Settings::default());
        assert_eq!(p.radius, 10);
        assert_eq!(p.body.vel, Vec2::splat(20.0));
        assert_eq!(p.color, Rgb::WHITE);
        assert!(p.body.pos.x >= 0.0 && p.body.pos.x < 400.0);
        assert!(p.body.pos.y >= 0.0 && p.body.pos.y < 300.0);
    }
}
