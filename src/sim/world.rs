//! World state: the particle registry, the player and the RNG
//!
//! Everything one frame reads or mutates lives here, owned by a single value
//! instead of process-wide globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Movable;
use super::input::Direction;
use super::particle::Particle;
use super::player::PlayerCircle;
use super::random::random_color;
use crate::settings::{Settings, SettingsError};

/// Viewport size in pixels, fixed for the lifetime of a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A change of the live particle count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// Particle created at startup
    Spawned { index: usize, remaining: u32 },
    /// Particle consumed by the player circle
    Eaten { index: usize, remaining: u32 },
}

impl WorldEvent {
    /// Live count right after this event
    pub fn remaining(&self) -> u32 {
        match *self {
            WorldEvent::Spawned { remaining, .. } | WorldEvent::Eaten { remaining, .. } => remaining,
        }
    }
}

/// The registry of particles plus the player circle
///
/// Particles are never removed: a consumed particle only has its `exists`
/// flag cleared, so indices are stable for the lifetime of the world.
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: Bounds,
    /// All particles in creation order, dead ones included
    pub particles: Vec<Particle>,
    pub player: PlayerCircle,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Number of particles with `exists == true`
    live_count: u32,
    rng: Pcg32,
    events: Vec<WorldEvent>,
}

impl World {
    /// Create a world with a random player and `settings.particle_count`
    /// random particles
    ///
    /// The player is placed first, then the particles, each creation
    /// recording a [`WorldEvent::Spawned`].
    pub fn new(bounds: Bounds, settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        settings.check_viewport(bounds)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let player = PlayerCircle::spawn(&mut rng, bounds, settings);

        let mut world = Self {
            bounds,
            particles: Vec::with_capacity(settings.particle_count as usize),
            player,
            seed,
            live_count: 0,
            rng,
            events: Vec::new(),
        };

        for _ in 0..settings.particle_count {
            let particle = Particle::spawn(&mut world.rng, bounds, settings);
            world.push_particle(particle);
        }

        log::info!(
            "World created: {}x{}, {} particles, seed {}",
            bounds.width,
            bounds.height,
            world.live_count,
            seed
        );

        Ok(world)
    }

    /// Build a world from hand-placed entities
    ///
    /// Each particle is added as if spawned, so the live count and events
    /// reflect the ones that exist.
    pub fn from_parts(
        bounds: Bounds,
        player: PlayerCircle,
        particles: Vec<Particle>,
        seed: u64,
    ) -> Self {
        let mut world = Self {
            bounds,
            particles: Vec::with_capacity(particles.len()),
            player,
            seed,
            live_count: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        for particle in particles {
            world.push_particle(particle);
        }
        world
    }

    fn push_particle(&mut self, particle: Particle) {
        let index = self.particles.len();
        let exists = particle.body.exists;
        self.particles.push(particle);
        if exists {
            self.live_count += 1;
            self.events.push(WorldEvent::Spawned {
                index,
                remaining: self.live_count,
            });
        }
    }

    /// Particles still in play
    pub fn live_count(&self) -> u32 {
        self.live_count
    }

    /// Count particles with `exists == true` by scanning the registry
    pub fn count_existing(&self) -> u32 {
        self.particles.iter().filter(|p| p.body.exists).count() as u32
    }

    /// Take the events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, WorldEvent> {
        self.events.drain(..)
    }

    /// Reflect and move one particle
    pub fn update_particle(&mut self, index: usize) {
        let bounds = self.bounds;
        self.particles[index].update(bounds);
    }

    /// Recolor particle `index` and every particle overlapping it
    ///
    /// Each overlapping pair gets one fresh color shared by both. Every
    /// other particle is checked, including ones that no longer exist, so a
    /// dead particle can still recolor a live one. Positions and velocities
    /// are untouched.
    pub fn collide_particle(&mut self, index: usize) {
        for other in 0..self.particles.len() {
            if other == index {
                continue;
            }
            if self.particles[index].overlaps(&self.particles[other]) {
                let color = random_color(&mut self.rng);
                self.particles[index].color = color;
                self.particles[other].color = color;
            }
        }
    }

    /// Consume every live particle the player circle overlaps
    ///
    /// Returns how many were consumed this call.
    pub fn player_collisions(&mut self) -> usize {
        let mut eaten = 0;
        for (index, particle) in self.particles.iter_mut().enumerate() {
            if !particle.body.exists || !self.player.overlaps(&*particle) {
                continue;
            }
            particle.body.exists = false;
            self.live_count -= 1;
            eaten += 1;
            self.events.push(WorldEvent::Eaten {
                index,
                remaining: self.live_count,
            });
            log::debug!("Particle {} eaten, {} remaining", index, self.live_count);
        }

        if eaten > 0 && self.live_count == 0 {
            log::info!("All particles eaten");
        }
        eaten
    }

    /// Apply a key press to the player circle
    ///
    /// Movement is immediate and ignores walls; bounds are enforced once per
    /// frame by [`PlayerCircle::check_bounds`]. Returns the direction moved,
    /// or `None` for keys that are not bound.
    pub fn handle_key(&mut self, key: &str) -> Option<Direction> {
        let direction = Direction::from_key(key)?;
        self.player.nudge(direction);
        log::trace!("Key {:?} -> {:?}, player at {}", key, direction, self.player.body.pos);
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rgb;

    const BOUNDS: Bounds = Bounds::new(400, 300);

    fn particle_at(x: f32, y: f32, radius: u32, color: Rgb) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, radius, color)
    }

    fn far_player() -> PlayerCircle {
        PlayerCircle::new(Vec2::new(390.0, 290.0), 10, 20.0, 3.0)
    }

    #[test]
    fn test_new_world_counts_and_events() {
        let mut world = World::new(BOUNDS, &Settings::default(), 1234).unwrap();
        assert_eq!(world.particles.len(), 25);
        assert_eq!(world.live_count(), 25);
        assert_eq!(world.count_existing(), 25);

        let remaining: Vec<u32> = world.drain_events().map(|e| e.remaining()).collect();
        assert_eq!(remaining, (1..=25).collect::<Vec<_>>());
        assert_eq!(world.drain_events().count(), 0);
    }

    #[test]
    fn test_new_world_rejects_tiny_viewport() {
        let result = World::new(Bounds::new(30, 300), &Settings::default(), 1);
        assert!(matches!(result, Err(SettingsError::ViewportTooSmall { .. })));
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = World::new(BOUNDS, &Settings::default(), 77).unwrap();
        let b = World::new(BOUNDS, &Settings::default(), 77).unwrap();
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.player, b.player);

        let c = World::new(BOUNDS, &Settings::default(), 78).unwrap();
        assert_ne!(a.particles, c.particles);
    }

    #[test]
    fn test_overlapping_pair_shares_new_color() {
        // Distance 5, radii summing to 8
        let mut world = World::from_parts(
            BOUNDS,
            far_player(),
            vec![
                particle_at(100.0, 100.0, 4, Rgb::new(1, 1, 1)),
                particle_at(103.0, 104.0, 4, Rgb::new(2, 2, 2)),
            ],
            9,
        );
        world.collide_particle(0);
        assert_eq!(world.particles[0].color, world.particles[1].color);
        assert_eq!(world.particles[0].body.pos, Vec2::new(100.0, 100.0));
        assert_eq!(world.particles[1].body.pos, Vec2::new(103.0, 104.0));
    }

    #[test]
    fn test_touching_pair_does_not_collide() {
        let a = Rgb::new(1, 1, 1);
        let b = Rgb::new(2, 2, 2);
        let mut world = World::from_parts(
            BOUNDS,
            far_player(),
            vec![particle_at(100.0, 100.0, 4, a), particle_at(108.0, 100.0, 4, b)],
            9,
        );
        world.collide_particle(0);
        world.collide_particle(1);
        assert_eq!(world.particles[0].color, a);
        assert_eq!(world.particles[1].color, b);
    }

    #[test]
    fn test_dead_particle_still_recolors() {
        let mut dead = particle_at(100.0, 100.0, 10, Rgb::new(1, 1, 1));
        dead.body.exists = false;
        let mut world = World::from_parts(
            BOUNDS,
            far_player(),
            vec![particle_at(105.0, 100.0, 10, Rgb::new(2, 2, 2)), dead],
            9,
        );
        assert_eq!(world.live_count(), 1);

        world.collide_particle(0);
        assert_eq!(world.particles[0].color, world.particles[1].color);
    }

    #[test]
    fn test_player_eats_overlapping_particles() {
        let player = PlayerCircle::new(Vec2::new(200.0, 150.0), 10, 20.0, 3.0);
        let mut world = World::from_parts(
            BOUNDS,
            player,
            vec![
                particle_at(205.0, 150.0, 10, Rgb::WHITE),
                particle_at(50.0, 50.0, 10, Rgb::WHITE),
                particle_at(200.0, 160.0, 12, Rgb::WHITE),
            ],
            3,
        );
        world.drain_events().for_each(drop);

        assert_eq!(world.player_collisions(), 2);
        assert_eq!(world.live_count(), 1);
        assert_eq!(world.count_existing(), 1);
        assert!(!world.particles[0].body.exists);
        assert!(world.particles[1].body.exists);
        assert!(!world.particles[2].body.exists);

        let events: Vec<WorldEvent> = world.drain_events().collect();
        assert_eq!(
            events,
            vec![
                WorldEvent::Eaten { index: 0, remaining: 2 },
                WorldEvent::Eaten { index: 2, remaining: 1 },
            ]
        );

        // Already-eaten particles are not consumed twice
        assert_eq!(world.player_collisions(), 0);
        assert_eq!(world.live_count(), 1);
    }

    #[test]
    fn test_handle_key() {
        let mut world = World::from_parts(BOUNDS, far_player(), Vec::new(), 0);
        assert_eq!(world.handle_key("a"), Some(Direction::Left));
        assert_eq!(world.player.body.pos, Vec2::new(370.0, 290.0));
        assert_eq!(world.handle_key("x"), None);
        assert_eq!(world.player.body.pos, Vec2::new(370.0, 290.0));
    }
}
