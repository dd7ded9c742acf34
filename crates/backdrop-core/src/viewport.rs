use crate::constants::{FALLBACK_POSITION_PERCENT, SPAWN_FALLBACK_PX};
use glam::Vec2;
use rand::Rng;

/// Size of the host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True while the host reports an empty or non-finite viewport, e.g.
    /// before layout has run.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn size(&self) -> Vec2 {
        if self.is_degenerate() {
            Vec2::ZERO
        } else {
            Vec2::new(self.width, self.height)
        }
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Uniform point inside the viewport, or the spawn fallback if it is empty.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::from(SPAWN_FALLBACK_PX);
        }
        Vec2::new(
            rng.gen_range(0.0..self.width),
            rng.gen_range(0.0..self.height),
        )
    }

    /// Uniform point in percent space (`[0, 100]` on each axis).
    pub fn random_percent<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::splat(FALLBACK_POSITION_PERCENT);
        }
        Vec2::new(rng.gen_range(0.0..=100.0), rng.gen_range(0.0..=100.0))
    }

    pub fn percent_to_px(&self, percent: Vec2) -> Vec2 {
        percent * 0.01 * self.size()
    }

    /// Offset of `point` from the centre in half-extents, clamped to [-1, 1].
    pub fn normalized(&self, point: Vec2) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::ZERO;
        }
        let half = self.size() * 0.5;
        ((point - half) / half).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
    }
}

/// Axis-aligned bounding box of a host element, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}
