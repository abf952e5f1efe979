//! Colors and background animation curves

/// Radial background gradient stops (offset, css color), center to edge
pub const BACKGROUND_STOPS: [(f32, &str); 3] = [(0.0, "#000000"), (0.5, "#1a1a40"), (1.0, "#221d7a")];

/// Explosion fill (orange-red)
pub const EXPLOSION_RGB: u32 = 0xFF4500;

/// Star halo blur radius in pixels
pub const STAR_GLOW_BLUR: f64 = 5.0;

/// Split 0xRRGGBB into channels
pub fn rgb(hex: u32) -> (u8, u8, u8) {
    (
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// CSS `rgba(...)` string, alpha clamped to 0-1
pub fn rgba(hex: u32, alpha: f32) -> String {
    let (r, g, b) = rgb(hex);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}

/// CSS `#rrggbb` string
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0xFF_FFFF)
}

/// Inner radius of the background gradient; pulses between 100 and 200 px
pub fn background_inner_radius(frame: u64, reduced_motion: bool) -> f32 {
    if reduced_motion {
        return 100.0;
    }
    (frame as f32 * 0.01).sin().abs() * 100.0 + 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::STAR_COLORS;

    #[test]
    fn test_rgb_split() {
        assert_eq!(rgb(0xFF4500), (255, 69, 0));
        assert_eq!(rgb(0xF0F5FF), (240, 245, 255));
    }

    #[test]
    fn test_rgba_clamps_alpha() {
        assert_eq!(rgba(EXPLOSION_RGB, 0.5), "rgba(255, 69, 0, 0.5)");
        assert_eq!(rgba(EXPLOSION_RGB, -0.1), "rgba(255, 69, 0, 0)");
        assert_eq!(rgba(0xFFFFFF, 3.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_star_colors_render_as_hex() {
        let css: Vec<String> = STAR_COLORS.iter().map(|c| css_hex(*c)).collect();
        assert_eq!(css[0], "#ffffff");
        assert_eq!(css[4], "#f0f5ff");
    }

    #[test]
    fn test_background_pulse_range() {
        for frame in (0..2000).step_by(7) {
            let r = background_inner_radius(frame, false);
            assert!((100.0..=200.0).contains(&r));
        }
        assert_eq!(background_inner_radius(157, true), 100.0);
    }
}
