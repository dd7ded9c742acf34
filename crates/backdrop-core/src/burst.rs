use crate::constants::*;
use crate::motion::{ease_out, keyframes3, lerp};
use glam::Vec2;
use std::f32::consts::TAU;

/// Radial dots and expanding rings spawned on a pointer press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressBurst {
    pub origin: Vec2,
    pub started_at: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstDot {
    pub center: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstRing {
    pub center: Vec2,
    pub diameter_px: f32,
    pub opacity: f32,
    pub outer: bool,
}

struct RingSpec {
    max_diameter_px: f32,
    delay_sec: f32,
    duration_sec: f32,
    start_opacity: f32,
}

const RINGS: [RingSpec; 2] = [
    RingSpec {
        max_diameter_px: BURST_RING_OUTER_PX,
        delay_sec: 0.0,
        duration_sec: BURST_DURATION_SEC,
        start_opacity: 0.9,
    },
    RingSpec {
        max_diameter_px: BURST_RING_INNER_PX,
        delay_sec: BURST_RING_INNER_DELAY_SEC,
        duration_sec: BURST_RING_INNER_DURATION_SEC,
        start_opacity: 0.7,
    },
];

impl PressBurst {
    pub fn new(origin: Vec2, started_at: f32) -> Self {
        Self { origin, started_at }
    }

    pub fn age(&self, elapsed_sec: f32) -> f32 {
        (elapsed_sec - self.started_at).max(0.0)
    }

    pub fn is_finished(&self, elapsed_sec: f32) -> bool {
        let longest = RINGS
            .iter()
            .map(|r| r.delay_sec + r.duration_sec)
            .fold(BURST_DURATION_SEC, f32::max);
        self.age(elapsed_sec) >= longest
    }

    pub fn dots(&self, elapsed_sec: f32) -> impl Iterator<Item = BurstDot> + '_ {
        let t = (self.age(elapsed_sec) / BURST_DURATION_SEC).clamp(0.0, 1.0);
        let travel = BURST_DOT_TRAVEL_PX * ease_out(t);
        (0..BURST_DOTS).map(move |i| {
            let angle = i as f32 * TAU / BURST_DOTS as f32;
            BurstDot {
                center: self.origin + Vec2::from_angle(angle) * travel,
                scale: keyframes3([0.0, 1.2, 0.0], t),
                opacity: keyframes3([1.0, 0.6, 0.0], t),
            }
        })
    }

    /// Rings that have started and not yet faded out.
    pub fn rings(&self, elapsed_sec: f32) -> impl Iterator<Item = BurstRing> + '_ {
        let age = self.age(elapsed_sec);
        RINGS.iter().enumerate().filter_map(move |(i, ring)| {
            let local = age - ring.delay_sec;
            if local < 0.0 || local >= ring.duration_sec {
                return None;
            }
            let t = local / ring.duration_sec;
            Some(BurstRing {
                center: self.origin,
                diameter_px: ring.max_diameter_px * ease_out(t),
                opacity: lerp(ring.start_opacity, 0.0, t),
                outer: i == 0,
            })
        })
    }
}
