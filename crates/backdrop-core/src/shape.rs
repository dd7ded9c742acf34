use crate::motion::{keyframes3, pulse};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Diamond,
    Star,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
        ShapeKind::Star,
        ShapeKind::Hexagon,
    ];

    /// Kinds a particle may take.
    pub const PARTICLE: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Diamond];

    pub fn pick<R: Rng + ?Sized>(set: &[ShapeKind], rng: &mut R) -> ShapeKind {
        set.choose(rng).copied().unwrap_or(ShapeKind::Circle)
    }

    /// Looping animation used by ambient shapes of this kind.
    pub fn motion(self) -> MotionProfile {
        match self {
            ShapeKind::Circle => MotionProfile {
                lift_px: 50.0,
                drifts: true,
                rotation_deg: None,
                scale: (0.8, 1.3),
                opacity: (0.3, 0.9),
            },
            ShapeKind::Square => MotionProfile {
                lift_px: 40.0,
                drifts: false,
                rotation_deg: Some([0.0, 180.0, 360.0]),
                scale: (0.9, 1.2),
                opacity: (0.2, 0.8),
            },
            ShapeKind::Triangle => MotionProfile {
                lift_px: 60.0,
                drifts: false,
                rotation_deg: Some([0.0, 120.0, 240.0]),
                scale: (0.7, 1.4),
                opacity: (0.4, 1.0),
            },
            ShapeKind::Diamond => MotionProfile {
                lift_px: 45.0,
                drifts: false,
                rotation_deg: Some([45.0, 225.0, 405.0]),
                scale: (0.8, 1.3),
                opacity: (0.3, 0.9),
            },
            ShapeKind::Star => MotionProfile {
                lift_px: 55.0,
                drifts: false,
                rotation_deg: Some([0.0, 144.0, 288.0]),
                scale: (0.6, 1.5),
                opacity: (0.3, 1.0),
            },
            ShapeKind::Hexagon => MotionProfile {
                lift_px: 50.0,
                drifts: false,
                rotation_deg: Some([0.0, 60.0, 120.0]),
                scale: (0.8, 1.3),
                opacity: (0.3, 0.9),
            },
        }
    }

    /// Spin of a particle of this kind over its life, in degrees.
    pub fn particle_spin_deg(self, life_fraction: f32) -> f32 {
        match self {
            ShapeKind::Square => 360.0 * life_fraction,
            ShapeKind::Diamond => 45.0 + 360.0 * life_fraction,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionProfile {
    pub lift_px: f32,
    pub drifts: bool,
    pub rotation_deg: Option<[f32; 3]>,
    pub scale: (f32, f32),
    pub opacity: (f32, f32),
}

/// Visual state of an ambient shape at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePose {
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
}

impl MotionProfile {
    pub fn pose(&self, phase: f32, drift_px: f32) -> ShapePose {
        let sway = if self.drifts { drift_px } else { 0.0 };
        ShapePose {
            offset: Vec2::new(
                keyframes3([0.0, sway, 0.0], phase),
                keyframes3([0.0, -self.lift_px, 0.0], phase),
            ),
            scale: pulse(self.scale, phase),
            opacity: pulse(self.opacity, phase),
            rotation_deg: self
                .rotation_deg
                .map(|frames| keyframes3(frames, phase))
                .unwrap_or(0.0),
        }
    }
}
