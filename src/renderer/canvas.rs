//! Canvas 2D renderer
//!
//! Draw order: background gradient, stars, meteors, explosions, planets, craft.

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::palette::{
    BACKGROUND_STOPS, EXPLOSION_RGB, STAR_GLOW_BLUR, background_inner_radius, css_hex, rgba,
};
use crate::assets::LoadedAssets;
use crate::settings::Settings;
use crate::sim::{GameState, STAR_COLORS};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    craft: HtmlImageElement,
    meteor: HtmlImageElement,
    planets: Vec<HtmlImageElement>,
    settings: Settings,
    /// Precomputed `#rrggbb` per star color
    star_css: Vec<String>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, assets: &LoadedAssets, settings: Settings) -> Self {
        Self {
            ctx,
            craft: assets.craft.clone(),
            meteor: assets.meteor.clone(),
            planets: assets.planets.clone(),
            settings,
            star_css: STAR_COLORS.iter().map(|c| css_hex(*c)).collect(),
        }
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Render one frame of `state`
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let (w, h) = (state.viewport.width as f64, state.viewport.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.draw_background(state, w, h)?;
        self.draw_stars(state)?;

        for meteor in &state.meteors {
            self.draw_sprite(&self.meteor, meteor.pos, meteor.size, meteor.angle)?;
        }

        for explosion in &state.explosions {
            self.ctx.begin_path();
            self.ctx.set_fill_style_str(&rgba(EXPLOSION_RGB, explosion.alpha));
            self.ctx.arc(
                explosion.center.x as f64,
                explosion.center.y as f64,
                explosion.radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx.fill();
        }

        for planet in &state.planets {
            if let Some(image) = self.planets.get(planet.variant) {
                self.draw_sprite(image, planet.pos, planet.size, planet.rotation)?;
            }
        }

        let craft = &state.craft;
        self.draw_sprite(&self.craft, craft.pos, craft.size, craft.angle)
    }

    fn draw_background(&self, state: &GameState, w: f64, h: f64) -> Result<(), JsValue> {
        let inner = background_inner_radius(state.frames, self.settings.reduced_motion) as f64;
        let gradient = self
            .ctx
            .create_radial_gradient(w / 2.0, h / 2.0, inner, w / 2.0, h / 2.0, w)?;
        for (offset, color) in BACKGROUND_STOPS {
            gradient.add_color_stop(offset, color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        Ok(())
    }

    fn draw_stars(&self, state: &GameState) -> Result<(), JsValue> {
        let glow = self.settings.quality.star_glow();
        self.ctx.save();
        if glow {
            self.ctx.set_shadow_blur(STAR_GLOW_BLUR);
        }

        for star in &state.stars {
            let luminosity = if self.settings.reduced_motion {
                1.0
            } else {
                star.luminosity(state.frames)
            };
            let color = STAR_COLORS[star.color];

            self.ctx.begin_path();
            self.ctx.arc(
                star.pos.x as f64,
                star.pos.y as f64,
                star.radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx.set_fill_style_str(&rgba(color, luminosity));
            if glow {
                self.ctx.set_shadow_color(&self.star_css[star.color]);
            }
            self.ctx.fill();
        }

        self.ctx.restore();
        Ok(())
    }

    /// Draw `image` scaled to `size`, rotated by `angle` around its center
    fn draw_sprite(
        &self,
        image: &HtmlImageElement,
        pos: Vec2,
        size: Vec2,
        angle: f32,
    ) -> Result<(), JsValue> {
        let center = pos + size * 0.5;
        self.ctx.save();
        self.ctx.translate(center.x as f64, center.y as f64)?;
        self.ctx.rotate(angle as f64)?;
        let drawn = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            -size.x as f64 / 2.0,
            -size.y as f64 / 2.0,
            size.x as f64,
            size.y as f64,
        );
        self.ctx.restore();
        drawn
    }
}
