//! Shared state of every moving shape

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, velocity and existence of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// False once the shape has been logically removed
    pub exists: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            exists: true,
        }
    }
}

/// A round shape built on a [`Body`]
pub trait Movable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn radius(&self) -> u32;

    /// Centers closer than the sum of both radii (touching does not count)
    fn overlaps<M: Movable + ?Sized>(&self, other: &M) -> bool {
        let distance = self.body().pos.distance(other.body().pos);
        distance < self.radius() as f32 + other.radius() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Disc {
        body: Body,
        radius: u32,
    }

    impl Movable for Disc {
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

    fn disc(x: f32, radius: u32) -> Disc {
        Disc {
            body: Body::new(Vec2::new(x, 0.0), Vec2::ZERO),
            radius,
        }
    }

    #[test]
    fn test_touching_does_not_overlap() {
        assert!(!disc(0.0, 10).overlaps(&disc(20.0, 10)));
        assert!(disc(0.0, 10).overlaps(&disc(19.5, 10)));
    }

    #[test]
    fn test_huge_radii_do_not_wrap() {
        let a = disc(0.0, u32::MAX);
        let b = disc(100.0, u32::MAX);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
