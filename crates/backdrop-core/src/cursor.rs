//! Pointer-following glows and orbs.

use crate::color::Gradient;
use crate::constants::*;
use crate::motion::{loop_phase, pulse};
use crate::pointer::PointerState;
use crate::viewport::Viewport;
use glam::Vec2;

/// A soft glow centred on the cursor, breathing on its own period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowSpec {
    pub diameter_px: f32,
    pub gradient: Gradient,
    pub scale: (f32, f32),
    pub opacity: (f32, f32),
    pub period_sec: f32,
    pub softness: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorGlow {
    pub center: Vec2,
    pub diameter_px: f32,
    pub scale: f32,
    pub opacity: f32,
    pub gradient: Gradient,
    pub softness: f32,
}

impl GlowSpec {
    pub fn evaluate(&self, pointer: &PointerState, elapsed_sec: f32) -> CursorGlow {
        let phase = loop_phase(elapsed_sec, 0.0, self.period_sec);
        CursorGlow {
            center: pointer.position(),
            diameter_px: self.diameter_px,
            scale: pulse(self.scale, phase),
            opacity: pulse(self.opacity, phase),
            gradient: self.gradient,
            softness: self.softness,
        }
    }
}

/// Small bright dots that trail the cursor, outer first. The inner one beats
/// faster so the two drift in and out of step.
pub const TRAILS: [GlowSpec; 2] = [
    GlowSpec {
        diameter_px: TRAIL_DIAMETER_PX,
        gradient: Gradient::new(PRIMARY, SECONDARY, 0.5),
        scale: (0.0, 1.3),
        opacity: (0.0, 0.8),
        period_sec: TRAIL_PERIOD_SEC,
        softness: 0.2,
    },
    GlowSpec {
        diameter_px: TRAIL_INNER_DIAMETER_PX,
        gradient: Gradient::new(PRIMARY, SECONDARY, 0.6),
        scale: (0.0, 1.2),
        opacity: (0.0, 0.9),
        period_sec: TRAIL_INNER_PERIOD_SEC,
        softness: 0.2,
    },
];

/// The two large blurred "magnetic field" blobs.
pub const FIELDS: [GlowSpec; 2] = [
    GlowSpec {
        diameter_px: FIELD_LARGE_DIAMETER_PX,
        gradient: Gradient::new(PRIMARY, SECONDARY, 0.08),
        scale: (1.0, 1.4),
        opacity: (0.1, 0.4),
        period_sec: FIELD_LARGE_PERIOD_SEC,
        softness: 1.0,
    },
    GlowSpec {
        diameter_px: FIELD_SMALL_DIAMETER_PX,
        gradient: Gradient::new(ACCENT, PURPLE, 0.06),
        scale: (0.8, 1.2),
        opacity: (0.05, 0.2),
        period_sec: FIELD_SMALL_PERIOD_SEC,
        softness: 0.8,
    },
];

/// Large orb displaced from the viewport centre by the normalized pointer
/// offset, scaled per axis by `range_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbSpec {
    pub diameter_px: f32,
    pub range_px: [f32; 2],
    pub gradient: Gradient,
    pub scale: (f32, f32),
    pub opacity: (f32, f32),
    pub period_sec: f32,
}

impl OrbSpec {
    pub fn center(&self, pointer: &PointerState, viewport: Viewport) -> Vec2 {
        viewport.center() + viewport.normalized(pointer.position()) * Vec2::from(self.range_px)
    }

    pub fn evaluate(&self, pointer: &PointerState, viewport: Viewport, elapsed_sec: f32) -> CursorGlow {
        let phase = loop_phase(elapsed_sec, 0.0, self.period_sec);
        CursorGlow {
            center: self.center(pointer, viewport),
            diameter_px: self.diameter_px,
            scale: pulse(self.scale, phase),
            opacity: pulse(self.opacity, phase),
            gradient: self.gradient,
            softness: 1.0,
        }
    }
}

pub const ORBS: [OrbSpec; 2] = [
    OrbSpec {
        diameter_px: ORB_LARGE_DIAMETER_PX,
        range_px: ORB_LARGE_RANGE_PX,
        gradient: Gradient::new(PRIMARY, SECONDARY, 0.08),
        scale: (1.0, 1.3),
        opacity: (0.2, 0.5),
        period_sec: 4.0,
    },
    OrbSpec {
        diameter_px: ORB_SMALL_DIAMETER_PX,
        range_px: ORB_SMALL_RANGE_PX,
        gradient: Gradient::new(ACCENT, PURPLE, 0.06),
        scale: (0.8, 1.2),
        opacity: (0.1, 0.3),
        period_sec: 3.0,
    },
];
