//! Collision tests between sprites
//!
//! Two rules are in play and they are not unified:
//! - Craft vs planet/meteor: each sprite is a circle of radius width/2 at its
//!   center; they touch when the center distance is below the average width.
//! - Meteor vs planet: plain axis-aligned rectangle overlap.

use glam::Vec2;

/// Axis-aligned sprite bounds (top-left position and size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict rectangle overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Width-based circle test used for everything that hits the craft
pub fn circles_touch(a: &Bounds, b: &Bounds) -> bool {
    let distance = a.center().distance(b.center());
    distance < (a.size.x + b.size.x) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Bounds {
        Bounds::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_circles_touch_by_average_width() {
        let craft = rect(0.0, 0.0, 40.0, 30.0);
        // Centers 39 apart horizontally, average width (40 + 40) / 2 = 40
        let near = rect(39.0, 0.0, 40.0, 30.0);
        assert!(circles_touch(&craft, &near));

        let far = rect(41.0, 0.0, 40.0, 30.0);
        assert!(!circles_touch(&craft, &far));
    }

    #[test]
    fn test_circles_ignore_height() {
        // Tall sprite: rectangles overlap but the width-based circles do not
        let craft = rect(0.0, 0.0, 10.0, 10.0);
        let tall = rect(0.0, 5.0, 10.0, 200.0);
        assert!(craft.overlaps(&tall));
        assert!(!circles_touch(&craft, &tall));
    }

    #[test]
    fn test_rect_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&rect(-5.0, -5.0, 30.0, 30.0)));
        // Shared edge is not an overlap
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_rules_disagree_on_corners() {
        // Corner overlap: rectangles intersect, circles are too far apart
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(18.0, 18.0, 20.0, 20.0);
        assert!(a.overlaps(&b));
        // Diagonal distance sqrt(18² + 18²) ≈ 25.5 > 20 average width
        assert!(!circles_touch(&a, &b));

        let c = rect(10.0, 10.0, 20.0, 20.0);
        assert!(circles_touch(&a, &c));
    }
}
