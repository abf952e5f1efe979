//! Per-frame simulation step
//!
//! One call to [`tick`] advances the session by exactly one display frame.
//! There is no variable time step; all speeds in [`Tuning`] are per frame.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::circles_touch;
use super::state::{Explosion, GameEvent, GamePhase, GameState, Planet, Viewport};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap/click: upward impulse, and leaves attract mode
    pub activate: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();
    state.frames += 1;

    if input.activate {
        state.craft.dy = state.tuning.lift;
        if state.phase == GamePhase::NotStarted {
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Started);
            log::info!("Game started");
        }
    }

    update_craft(state);

    if state.frames % state.tuning.planet_spawn_interval == 0 {
        spawn_planets(state);
    }

    update_planets(state);
    update_meteors(state);
    update_explosions(state);
    update_stars(state);

    // Ground and ceiling
    if state.is_playing() && state.craft.out_of_bounds(&state.viewport) {
        let at = state.craft.bounds().center();
        explode(state, at);
        lose_life(state);
    }
}

/// Gravity, attract-mode bobbing, and tilt
fn update_craft(state: &mut GameState) {
    let t = &state.tuning;
    let craft = &mut state.craft;

    if state.phase == GamePhase::NotStarted {
        if state.frames % t.attract_bob_interval == 0 {
            craft.dy = t.lift;
        }
        craft.dy += t.gravity;
        craft.pos.y += craft.dy;
        let floor = (state.viewport.height - craft.size.y).max(0.0);
        craft.pos.y = craft.pos.y.clamp(0.0, floor);
    } else {
        craft.dy += t.gravity;
        craft.pos.y += craft.dy;
    }

    craft.angle = (craft.dy / t.tilt_divisor).clamp(-t.max_tilt, t.max_tilt);
}

/// Spawn a planet at the right edge, sometimes with a trailing companion
fn spawn_planets(state: &mut GameState) {
    if state.planet_sizes.is_empty() {
        return;
    }

    let t = &state.tuning;
    let rng = &mut state.rng;

    let first = random_planet(rng, t, &state.viewport, &state.planet_sizes, 0.0);
    state.planets.push(first);

    if rng.random_bool(t.companion_chance) {
        let offset = rng.random::<f32>() * t.companion_max_offset;
        let companion = random_planet(rng, t, &state.viewport, &state.planet_sizes, offset);
        state.planets.push(companion);
    }

    log::debug!("Frame {}: {} planets in flight", state.frames, state.planets.len());
}

fn random_planet(
    rng: &mut Pcg32,
    t: &Tuning,
    viewport: &Viewport,
    sizes: &[Vec2],
    x_offset: f32,
) -> Planet {
    let variant = rng.random_range(0..sizes.len());
    let scale = t.planet_scale_min + rng.random::<f32>() * t.planet_scale_range;
    let size = sizes[variant] * scale;

    let band = (viewport.height - size.y - 2.0 * t.planet_edge_margin).max(0.0);
    let y = rng.random::<f32>() * band + t.planet_edge_margin;

    Planet {
        variant,
        pos: Vec2::new(viewport.width + x_offset, y),
        size,
        rotation: 0.0,
        rotation_speed: rng.random::<f32>() * t.max_rotation_speed,
        base_y: y,
        wobble_speed: t.wobble_speed_min + rng.random::<f32>() * t.wobble_speed_range,
        wobble_magnitude: t.wobble_magnitude_min + rng.random::<f32>() * t.wobble_magnitude_range,
    }
}

/// Move planets, resolve craft hits, and score the ones that left the screen
fn update_planets(state: &mut GameState) {
    let speed = state.tuning.planet_speed;
    let frame = state.frames;
    let planets = std::mem::take(&mut state.planets);
    let mut remaining = Vec::with_capacity(planets.len());

    for mut planet in planets {
        planet.advance(speed, frame);

        // A planet that hits the craft is destroyed without scoring
        if state.is_playing() && circles_touch(&state.craft.bounds(), &planet.bounds()) {
            let at = state.craft.bounds().center();
            explode(state, at);
            lose_life(state);
            continue;
        }

        if planet.scrolled_off() {
            if state.is_playing() {
                award_point(state);
            }
        } else {
            remaining.push(planet);
        }
    }

    state.planets = remaining;
}

/// Move meteors, recycle the ones that left, and resolve their collisions
fn update_meteors(state: &mut GameState) {
    let viewport = state.viewport;

    for i in 0..state.meteors.len() {
        let mut meteor = state.meteors[i];
        meteor.pos += meteor.velocity();

        if meteor.off_screen(&viewport) {
            meteor.respawn(&mut state.rng, &viewport);
        }

        let bounds = meteor.bounds();
        if circles_touch(&state.craft.bounds(), &bounds) {
            explode(state, bounds.center());
            meteor.respawn(&mut state.rng, &viewport);
            if state.is_playing() {
                lose_life(state);
            }
        } else if state.planets.iter().any(|p| bounds.overlaps(&p.bounds())) {
            explode(state, bounds.center());
            meteor.respawn(&mut state.rng, &viewport);
        }

        state.meteors[i] = meteor;
    }
}

fn update_explosions(state: &mut GameState) {
    let (growth, fade) = (state.tuning.explosion_growth, state.tuning.explosion_fade);
    state.explosions.retain_mut(|e| e.advance(growth, fade));
}

fn update_stars(state: &mut GameState) {
    let drift = state.tuning.star_drift;
    let viewport = state.viewport;
    for i in 0..state.stars.len() {
        let mut star = state.stars[i];
        star.pos.x -= drift;
        if star.pos.x < 0.0 {
            star.pos.x = viewport.width;
            star.pos.y = state.rng.random::<f32>() * viewport.height;
        }
        state.stars[i] = star;
    }
}

fn award_point(state: &mut GameState) {
    state.score += 1;
    state.events.push(GameEvent::ScoreChanged(state.score));

    if !state.qualified && state.score >= state.tuning.qualification_score {
        state.qualified = true;
        state.events.push(GameEvent::Qualified);
        log::info!("Qualified with score {}", state.score);
    }
}

fn explode(state: &mut GameState, at: Vec2) {
    state.explosions.push(Explosion::new(at));
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LivesChanged(state.lives));

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over: score {} after {} frames", state.score, state.frames);
    }
}
