use crate::shape::ShapeKind;
use glam::Vec2;
use std::f32::consts::PI;

/// A short-lived emitter particle. Ages are counted in ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size_px: f32,
    pub gradient: usize,
    pub kind: ShapeKind,
    pub age: u32,
    pub lifetime: u32,
}

impl Particle {
    /// One tick of motion: move, then damp, then age.
    pub fn advance(&mut self, damping: f32) {
        self.position += self.velocity;
        self.velocity *= damping;
        self.age = self.age.saturating_add(1);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    pub fn life_fraction(&self) -> f32 {
        if self.lifetime == 0 {
            return 1.0;
        }
        (self.age as f32 / self.lifetime as f32).clamp(0.0, 1.0)
    }

    /// Fade-in/fade-out envelope over the particle's life, peaking at 1.
    pub fn envelope(&self) -> f32 {
        (PI * self.life_fraction()).sin().max(0.0)
    }

    pub fn spin_deg(&self) -> f32 {
        self.kind.particle_spin_deg(self.life_fraction())
    }
}
