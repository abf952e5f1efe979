//! Planet Dodger - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `assets`: Resource manifest and the async load phase
//! - `renderer`: Canvas 2D presentation
//! - `persistence`: The "qualified" cookie flag
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use assets::{LoadError, ResourceManifest};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of every session
    pub const STARTING_LIVES: u8 = 3;
    /// Score that unlocks the persisted "qualified" status
    pub const QUALIFICATION_SCORE: u32 = 10;

    /// Craft defaults
    pub const CRAFT_START_X: f32 = 200.0;
    pub const CRAFT_WIDTH: f32 = 40.0;
    pub const CRAFT_HEIGHT: f32 = 30.0;

    /// Downward acceleration, pixels/frame²
    pub const GRAVITY: f32 = 0.1;
    /// Vertical velocity set by a tap (negative is up)
    pub const LIFT: f32 = -3.0;
    /// Tilt limit in radians (±30°)
    pub const MAX_TILT: f32 = std::f32::consts::FRAC_PI_6;

    /// Frames between planet spawns
    pub const PLANET_SPAWN_INTERVAL: u64 = 150;
    /// Planet drift, pixels/frame
    pub const PLANET_SPEED: f32 = 3.0;

    /// Explosion growth and fade per frame
    pub const EXPLOSION_GROWTH: f32 = 2.0;
    pub const EXPLOSION_FADE: f32 = 0.02;

    /// Sprite size used when image dimensions are unknown (native builds)
    pub const DEFAULT_PLANET_SIZE: f32 = 48.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
