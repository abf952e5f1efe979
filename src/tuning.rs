//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here. Defaults match the
//! shipped game; the resource manifest may override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning knobs (all per-frame units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Craft ===
    pub gravity: f32,
    pub lift: f32,
    /// Vertical velocity is divided by this to get the tilt angle
    pub tilt_divisor: f32,
    pub max_tilt: f32,
    /// Frames between scripted lifts in attract mode
    pub attract_bob_interval: u64,

    // === Planets ===
    pub planet_spawn_interval: u64,
    pub planet_speed: f32,
    pub planet_scale_min: f32,
    pub planet_scale_range: f32,
    /// Vertical spawn band keeps this far from the top and bottom edges
    pub planet_edge_margin: f32,
    /// Chance of a companion planet per spawn
    pub companion_chance: f64,
    pub companion_max_offset: f32,
    pub max_rotation_speed: f32,
    pub wobble_speed_min: f32,
    pub wobble_speed_range: f32,
    pub wobble_magnitude_min: f32,
    pub wobble_magnitude_range: f32,

    // === Meteors ===
    pub meteor_count: usize,
    pub meteor_size_min: f32,
    pub meteor_size_range: f32,
    pub meteor_speed_min: f32,
    pub meteor_speed_range: f32,

    // === Background ===
    pub star_count: usize,
    pub star_drift: f32,
    pub star_max_radius: f32,
    pub star_max_blink_speed: f32,

    // === Effects ===
    pub explosion_growth: f32,
    pub explosion_fade: f32,

    // === Scoring ===
    pub qualification_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lift: LIFT,
            tilt_divisor: 20.0,
            max_tilt: MAX_TILT,
            attract_bob_interval: 20,

            planet_spawn_interval: PLANET_SPAWN_INTERVAL,
            planet_speed: PLANET_SPEED,
            planet_scale_min: 1.2,
            planet_scale_range: 1.5,
            planet_edge_margin: 25.0,
            companion_chance: 0.2,
            companion_max_offset: 200.0,
            max_rotation_speed: 0.02,
            wobble_speed_min: 0.01,
            wobble_speed_range: 0.02,
            wobble_magnitude_min: 5.0,
            wobble_magnitude_range: 10.0,

            meteor_count: 3,
            meteor_size_min: 30.0,
            meteor_size_range: 20.0,
            meteor_speed_min: 1.0,
            meteor_speed_range: 2.0,

            star_count: 2000,
            star_drift: 0.5,
            star_max_radius: 2.0,
            star_max_blink_speed: 0.02,

            explosion_growth: EXPLOSION_GROWTH,
            explosion_fade: EXPLOSION_FADE,

            qualification_score: QUALIFICATION_SCORE,
        }
    }
}

impl Tuning {
    /// Clamp values that would break the loop (zero intervals, negative ranges)
    pub fn sanitized(mut self) -> Self {
        self.attract_bob_interval = self.attract_bob_interval.max(1);
        self.planet_spawn_interval = self.planet_spawn_interval.max(1);
        self.tilt_divisor = if self.tilt_divisor.abs() < f32::EPSILON {
            1.0
        } else {
            self.tilt_divisor
        };
        // Tilt is clamped to [-max_tilt, max_tilt]
        self.max_tilt = self.max_tilt.abs();
        self.companion_chance = self.companion_chance.clamp(0.0, 1.0);
        self.meteor_size_min = self.meteor_size_min.max(1.0);
        self.meteor_size_range = self.meteor_size_range.max(0.0);
        self.star_max_radius = self.star_max_radius.max(0.0);
        self.explosion_growth = self.explosion_growth.max(0.0);
        self.explosion_fade = self.explosion_fade.max(0.001);
        self.qualification_score = self.qualification_score.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 0.2, "meteor_count": 5 }"#)
            .expect("valid tuning json");
        assert_eq!(tuning.gravity, 0.2);
        assert_eq!(tuning.meteor_count, 5);
        assert_eq!(tuning.lift, LIFT);
        assert_eq!(tuning.planet_spawn_interval, 150);
        assert_eq!(tuning.qualification_score, 10);
    }

    #[test]
    fn test_sanitized_fixes_zero_intervals() {
        let tuning = Tuning {
            planet_spawn_interval: 0,
            attract_bob_interval: 0,
            companion_chance: 3.0,
            tilt_divisor: 0.0,
            max_tilt: -0.5,
            explosion_growth: -2.0,
            star_max_radius: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.planet_spawn_interval, 1);
        assert_eq!(tuning.attract_bob_interval, 1);
        assert_eq!(tuning.companion_chance, 1.0);
        assert_eq!(tuning.tilt_divisor, 1.0);
        assert_eq!(tuning.max_tilt, 0.5);
        assert_eq!(tuning.explosion_growth, 0.0);
        assert_eq!(tuning.star_max_radius, 0.0);
    }
}
