//! Tunable constants
//!
//! The simulation rules are fixed; only their constants can be changed.
//! Missing JSON fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Bounds;

/// Why a set of settings cannot drive a world
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("radius range [{min}, {max}) is empty")]
    EmptyRadiusRange { min: u32, max: u32 },
    #[error("particle radius must be at least 1")]
    ZeroRadius,
    #[error("velocity range [{min}, {max}) is empty")]
    EmptyVelocityRange { min: i32, max: i32 },
    #[error("player radius must be at least 1")]
    ZeroPlayerRadius,
    #[error("fade alpha {0} must be between 0.0 and 1.0")]
    InvalidFadeAlpha(f32),
    #[error("{field} {value} exceeds the limit of {max}")]
    RadiusTooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },
    #[error("viewport {width}x{height} is smaller than {min} pixels on one side")]
    ViewportTooSmall { width: u32, height: u32, min: u32 },
    #[error("viewport {width}x{height} is larger than {max} pixels on one side")]
    ViewportTooLarge { width: u32, height: u32, max: u32 },
}

/// Simulation and drawing constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Particles created at startup
    pub particle_count: u32,
    /// Particle radius, inclusive lower bound
    pub min_radius: u32,
    /// Particle radius, exclusive upper bound
    pub max_radius: u32,
    /// Velocity component, inclusive lower bound
    pub min_velocity: i32,
    /// Velocity component, exclusive upper bound
    pub max_velocity: i32,
    pub player_radius: u32,
    /// Distance the player moves per key press
    pub player_step: f32,
    pub player_line_width: f32,
    /// Alpha of the per-frame black fade
    pub fade_alpha: f32,
    /// RNG seed (host picks one when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
            min_velocity: PARTICLE_MIN_VELOCITY,
            max_velocity: PARTICLE_MAX_VELOCITY,
            player_radius: PLAYER_RADIUS,
            player_step: PLAYER_STEP,
            player_line_width: PLAYER_LINE_WIDTH,
            fade_alpha: FADE_ALPHA,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check every range used for random draws is non-empty
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_radius == 0 {
            return Err(SettingsError::ZeroRadius);
        }
        if self.max_radius > RADIUS_LIMIT {
            return Err(SettingsError::RadiusTooLarge {
                field: "max_radius",
                value: self.max_radius,
                max: RADIUS_LIMIT,
            });
        }
        if self.max_radius <= self.min_radius {
            return Err(SettingsError::EmptyRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if self.max_velocity <= self.min_velocity {
            return Err(SettingsError::EmptyVelocityRange {
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        if self.player_radius == 0 {
            return Err(SettingsError::ZeroPlayerRadius);
        }
        if self.player_radius > RADIUS_LIMIT {
            return Err(SettingsError::RadiusTooLarge {
                field: "player_radius",
                value: self.player_radius,
                max: RADIUS_LIMIT,
            });
        }
        if !(0.0..=1.0).contains(&self.fade_alpha) {
            return Err(SettingsError::InvalidFadeAlpha(self.fade_alpha));
        }
        Ok(())
    }

    /// Check the largest particle fits inside `bounds` on both axes, and
    /// both sides fit the signed range random draws use
    pub fn check_viewport(&self, bounds: Bounds) -> Result<(), SettingsError> {
        let max = i32::MAX as u32;
        if bounds.width > max || bounds.height > max {
            return Err(SettingsError::ViewportTooLarge {
                width: bounds.width,
                height: bounds.height,
                max,
            });
        }
        let min = self.max_radius.checked_mul(2).unwrap_or(u32::MAX);
        if bounds.width < min || bounds.height < min {
            return Err(SettingsError::ViewportTooSmall {
                width: bounds.width,
                height: bounds.height,
                min,
            });
        }
        Ok(())
    }
}
