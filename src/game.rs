//! The frame loop
//!
//! One frame, in order:
//! 1. Paint the translucent fade over the whole viewport
//! 2. For each live particle: draw, update, collide
//! 3. Draw the player circle, check its bounds, let it eat particles
//! 4. Publish live-count changes to the status sink
//!
//! A drawing error aborts the rest of the frame and is returned to the
//! caller, which stops scheduling frames.

use crate::platform::{FrameScheduler, StatusSink, remaining_text};
use crate::renderer::{Draw, Surface, fade};
use crate::settings::Settings;
use crate::sim::{Direction, Rgb, Rgba, World};

/// World, surface and status line driven together, one frame at a time
pub struct Game<S: Surface, T: StatusSink> {
    pub world: World,
    surface: S,
    status: T,
    fade: Rgba,
    frames: u64,
}

impl<S: Surface, T: StatusSink> Game<S, T> {
    /// Take ownership of a fresh world and publish its startup counts
    pub fn new(world: World, surface: S, status: T, settings: &Settings) -> Self {
        let mut game = Self {
            world,
            surface,
            status,
            fade: Rgb::BLACK.with_alpha(settings.fade_alpha),
            frames: 0,
        };
        game.publish_events();
        game
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn status(&self) -> &T {
        &self.status
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame
    pub fn frame(&mut self) -> Result<(), S::Error> {
        fade(&mut self.surface, self.world.bounds, self.fade)?;

        for index in 0..self.world.particles.len() {
            if !self.world.particles[index].body.exists {
                continue;
            }
            self.world.particles[index].draw(&mut self.surface)?;
            self.world.update_particle(index);
            self.world.collide_particle(index);
        }

        self.world.player.draw(&mut self.surface)?;
        let bounds = self.world.bounds;
        self.world.player.check_bounds(bounds);
        self.world.player_collisions();

        self.publish_events();
        self.frames += 1;
        Ok(())
    }

    /// Run frames for as long as `scheduler` grants them
    ///
    /// Stops at the first failing frame and returns its error. Returns the
    /// number of frames completed by this call otherwise.
    pub fn run<F: FrameScheduler>(&mut self, scheduler: &mut F) -> Result<u64, S::Error> {
        let start = self.frames;
        while scheduler.next_frame() {
            self.frame()?;
        }
        Ok(self.frames - start)
    }

    /// Keydown handler body: move the player for bound keys
    pub fn handle_key(&mut self, key: &str) -> Option<Direction> {
        self.world.handle_key(key)
    }

    fn publish_events(&mut self) {
        for event in self.world.drain_events() {
            self.status.show(&remaining_text(event.remaining()));
        }
    }
}
