//! Game state and core simulation types
//!
//! Everything the loop mutates is owned by [`GameState`]; there is no
//! module-level state, so any number of sessions can run side by side.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract mode: the craft bobs on its own until the first tap
    NotStarted,
    /// Active gameplay
    Playing,
    /// Lives ran out; waiting for a restart
    GameOver,
}

/// Things the presentation layer needs to hear about from a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First tap left attract mode
    Started,
    ScoreChanged(u32),
    LivesChanged(u8),
    /// Qualification threshold reached for the first time (persist the flag)
    Qualified,
    GameOver,
}

/// Visible play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player's craft
#[derive(Debug, Clone, Copy)]
pub struct Craft {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub dy: f32,
    /// Tilt in radians, follows `dy`
    pub angle: f32,
}

impl Craft {
    /// Craft parked at the left third, vertically centered
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(CRAFT_START_X, viewport.height / 2.0),
            size: Vec2::new(CRAFT_WIDTH, CRAFT_HEIGHT),
            dy: 0.0,
            angle: 0.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    /// True when any part of the craft is above the top or below the bottom edge
    pub fn out_of_bounds(&self, viewport: &Viewport) -> bool {
        self.pos.y < 0.0 || self.pos.y + self.size.y > viewport.height
    }
}

/// A drifting planet
#[derive(Debug, Clone, Copy)]
pub struct Planet {
    /// Index into the loaded planet sprites
    pub variant: usize,
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Wobble baseline (y without the sine term)
    pub base_y: f32,
    pub wobble_speed: f32,
    pub wobble_magnitude: f32,
}

impl Planet {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    /// Slide left, spin, and bob around the baseline
    pub fn advance(&mut self, speed: f32, frame: u64) {
        self.pos.x -= speed;
        self.rotation += self.rotation_speed;
        // f64 phase: f32 stops resolving single frames past 2^24
        let phase = (frame as f64 * self.wobble_speed as f64).sin() as f32;
        self.pos.y = self.base_y + phase * self.wobble_magnitude;
    }

    /// Right edge has crossed x = 0
    pub fn scrolled_off(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }
}

/// A meteor slot. Meteors are recycled, never removed.
#[derive(Debug, Clone, Copy)]
pub struct Meteor {
    pub pos: Vec2,
    pub size: Vec2,
    /// Heading in radians; motion is `-speed * (cos, sin)`
    pub angle: f32,
    pub speed: f32,
}

impl Meteor {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    pub fn velocity(&self) -> Vec2 {
        -crate::polar_to_cartesian(self.speed, self.angle)
    }

    /// Fully outside the viewport. The right side allows one sprite width of
    /// slack so a freshly respawned meteor is not immediately recycled again.
    pub fn off_screen(&self, viewport: &Viewport) -> bool {
        self.pos.x < -self.size.x
            || self.pos.x > viewport.width + self.size.x
            || self.pos.y < -self.size.y
            || self.pos.y > viewport.height
    }

    /// Re-enter just past the right edge at a random height and heading
    pub fn respawn(&mut self, rng: &mut Pcg32, viewport: &Viewport) {
        self.pos.x = viewport.width + self.size.x;
        self.pos.y = rng.random::<f32>() * viewport.height;
        self.angle = rng.random::<f32>() * std::f32::consts::TAU;
    }
}

/// Collision flash: a disc that grows while fading out
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub center: Vec2,
    pub radius: f32,
    /// Opacity 0-1
    pub alpha: f32,
}

impl Explosion {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: 0.0,
            alpha: 1.0,
        }
    }

    /// Returns false once fully faded
    pub fn advance(&mut self, growth: f32, fade: f32) -> bool {
        self.radius += growth;
        self.alpha -= fade;
        self.alpha > 0.0
    }
}

/// Background star colors (0xRRGGBB)
pub const STAR_COLORS: [u32; 5] = [0xFFFFFF, 0xFFF0F0, 0xFFFBF0, 0xF0FFF0, 0xF0F5FF];

/// Decorative background star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Index into [`STAR_COLORS`]
    pub color: usize,
    pub blink_speed: f32,
}

impl Star {
    /// Twinkle brightness 0-1 for the given frame
    pub fn luminosity(&self, frame: u64) -> f32 {
        (frame as f32 * self.blink_speed).sin().abs()
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    /// Natural sprite size of each planet variant
    pub planet_sizes: Vec<Vec2>,
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u32,
    /// Frames simulated this session (first tick is frame 1)
    pub frames: u64,
    /// Threshold reached at some point; persisted by the host
    pub qualified: bool,
    pub craft: Craft,
    pub planets: Vec<Planet>,
    /// Fixed slot arena, length set at session start
    pub meteors: Vec<Meteor>,
    pub explosions: Vec<Explosion>,
    /// Fixed slot arena, length set at session start
    pub stars: Vec<Star>,
    /// Events raised by the last tick
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in attract mode
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning, planet_sizes: Vec<Vec2>) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning: tuning.sanitized(),
            viewport,
            planet_sizes,
            phase: GamePhase::NotStarted,
            lives: STARTING_LIVES,
            score: 0,
            frames: 0,
            qualified: false,
            craft: Craft::new(&viewport),
            planets: Vec::new(),
            meteors: Vec::new(),
            explosions: Vec::new(),
            stars: Vec::new(),
            events: Vec::new(),
        };
        state.populate();
        state
    }

    /// Carry over a persisted qualification
    pub fn with_qualified(mut self, qualified: bool) -> Self {
        self.qualified = qualified;
        self
    }

    /// Begin a fresh round in the Playing phase.
    ///
    /// Score, lives, frame counter, and every entity collection are reset.
    /// The RNG keeps running and `qualified` is kept.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.frames = 0;
        self.craft = Craft::new(&self.viewport);
        self.planets.clear();
        self.explosions.clear();
        self.events.clear();
        self.populate();
        log::info!("Session restarted");
    }

    /// Drain events raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Fill the meteor and star arenas
    fn populate(&mut self) {
        let viewport = self.viewport;
        let t = &self.tuning;
        let rng = &mut self.rng;

        self.meteors = (0..t.meteor_count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random::<f32>() * viewport.width,
                    rng.random::<f32>() * viewport.height,
                );
                let side = t.meteor_size_min + rng.random::<f32>() * t.meteor_size_range;
                Meteor {
                    pos,
                    size: Vec2::splat(side),
                    speed: t.meteor_speed_min + rng.random::<f32>() * t.meteor_speed_range,
                    angle: rng.random::<f32>() * std::f32::consts::TAU,
                }
            })
            .collect();

        self.stars = (0..t.star_count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random::<f32>() * viewport.width,
                    rng.random::<f32>() * viewport.height,
                ),
                radius: rng.random::<f32>() * t.star_max_radius,
                color: rng.random_range(0..STAR_COLORS.len()),
                blink_speed: rng.random::<f32>() * t.star_max_blink_speed,
            })
            .collect();
    }
}
