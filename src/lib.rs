//! Bouncing Balls - particles bouncing in a viewport, eaten by a player circle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall bounce, collisions, registry)
//! - `renderer`: Drawing surface abstraction (canvas, in-memory recording)
//! - `platform`: Host collaborators (status text, frame scheduling)
//! - `game`: The frame loop tying world, surface and status together
//! - `settings`: Tunable constants with validation

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Simulation constants (defaults for [`Settings`])
pub mod consts {
    /// Particles created at startup
    pub const PARTICLE_COUNT: u32 = 25;

    /// Particle radius range, `[MIN, MAX)`
    pub const PARTICLE_MIN_RADIUS: u32 = 10;
    pub const PARTICLE_MAX_RADIUS: u32 = 20;

    /// Largest particle or player radius settings accept
    pub const RADIUS_LIMIT: u32 = 1 << 16;

    /// Per-axis velocity range, `[MIN, MAX)`
    pub const PARTICLE_MIN_VELOCITY: i32 = -7;
    pub const PARTICLE_MAX_VELOCITY: i32 = 7;

    /// Player circle defaults
    pub const PLAYER_RADIUS: u32 = 10;
    pub const PLAYER_STEP: f32 = 20.0;
    pub const PLAYER_LINE_WIDTH: f32 = 3.0;

    /// Alpha of the black rectangle painted over the canvas each frame (trail fade)
    pub const FADE_ALPHA: f32 = 0.25;

    /// Viewport used by the headless native runner
    pub const HEADLESS_WIDTH: u32 = 800;
    pub const HEADLESS_HEIGHT: u32 = 600;
    /// Frames the headless runner draws when no count is given
    pub const HEADLESS_FRAMES: u64 = 600;
}
