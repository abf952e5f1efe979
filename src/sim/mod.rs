//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no variable time step
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Bounds, circles_touch};
pub use state::{
    Craft, Explosion, GameEvent, GamePhase, GameState, Meteor, Planet, STAR_COLORS, Star, Viewport,
};
pub use tick::{TickInput, tick};
