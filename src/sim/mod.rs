//! Deterministic simulation module
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (owned by the [`World`])
//! - Stable iteration order (registry insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod color;
pub mod input;
pub mod particle;
pub mod player;
pub mod random;
pub mod world;

pub use body::{Body, Movable};
pub use color::{Rgb, Rgba};
pub use input::Direction;
pub use particle::Particle;
pub use player::PlayerCircle;
pub use random::{random_color, random_int};
pub use world::{Bounds, World, WorldEvent};
