//! Transient particle emitter.
//!
//! The active set is ordered oldest-first. Each tick runs, in this order:
//! advance, cull by age, spawn (pointer-held and ambient trials), and evict
//! from the front until the set fits the cap. After a tick the set never
//! exceeds `cap` and every particle satisfies `age < lifetime`.

use crate::config::{EmitterConfig, Span};
use crate::links::{proximity_links, Link};
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::shape::ShapeKind;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;

/// What one tick did to the active set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: usize,
    pub culled: usize,
    pub spawned_pressed: usize,
    pub spawned_ambient: usize,
    pub evicted: usize,
}

impl TickReport {
    pub fn spawned(&self) -> usize {
        self.spawned_pressed + self.spawned_ambient
    }
}

pub struct ParticleEmitter {
    config: EmitterConfig,
    particles: VecDeque<Particle>,
    rng: StdRng,
    next_id: u64,
    ticks: u64,
}

impl ParticleEmitter {
    /// `config` must have passed [`EmitterConfig::validate`]; spawn trials
    /// with an out-of-range probability panic.
    pub fn new(config: EmitterConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated emitter config");
        let particles = VecDeque::with_capacity(config.cap + 2);
        Self {
            config,
            particles,
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn particles(&self) -> &VecDeque<Particle> {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn tick(&mut self, pointer: &PointerState, viewport: Viewport) -> TickReport {
        let mut report = TickReport {
            advanced: self.particles.len(),
            ..Default::default()
        };
        let damping = self.config.damping;
        for p in self.particles.iter_mut() {
            p.advance(damping);
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        report.culled = before - self.particles.len();

        // Independent trials; both only append
        if pointer.down && self.rng.gen_bool(self.config.spawn_pressed) {
            let particle = self.create_particle(pointer.position());
            self.particles.push_back(particle);
            report.spawned_pressed = 1;
        }
        if self.rng.gen_bool(self.config.spawn_ambient) {
            let at = viewport.random_point(&mut self.rng);
            let particle = self.create_particle(at);
            self.particles.push_back(particle);
            report.spawned_ambient = 1;
        }

        report.evicted = self.enforce_cap();
        self.ticks += 1;
        log::trace!("[emitter] tick {} {:?} len={}", self.ticks, report, self.particles.len());
        report
    }

    /// Spawn one randomized particle at `position`. Returns its id.
    pub fn spawn_at(&mut self, position: Vec2) -> u64 {
        let particle = self.create_particle(position);
        let id = particle.id;
        self.particles.push_back(particle);
        self.enforce_cap();
        id
    }

    /// Adopt a fully specified particle; its id is reassigned.
    pub fn insert(&mut self, mut particle: Particle) -> u64 {
        particle.id = self.allocate_id();
        let id = particle.id;
        self.particles.push_back(particle);
        self.enforce_cap();
        id
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn links(&self) -> Vec<Link> {
        let window = self.config.links.prefix + self.config.links.window;
        let positions = self
            .particles
            .iter()
            .take(window)
            .map(|p| p.position)
            .collect::<Vec<_>>();
        proximity_links(&positions, &self.config.links)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn create_particle(&mut self, position: Vec2) -> Particle {
        let id = self.allocate_id();
        let speed = Span::new(-self.config.speed_max, self.config.speed_max);
        let rng = &mut self.rng;
        Particle {
            id,
            position,
            velocity: Vec2::new(speed.sample(rng), speed.sample(rng)),
            size_px: self.config.size_px.sample(rng),
            gradient: rng.gen_range(0..self.config.palette.len().max(1)),
            kind: ShapeKind::pick(&ShapeKind::PARTICLE, rng),
            age: 0,
            lifetime: self.config.lifetime_ticks.sample(rng),
        }
    }

    fn enforce_cap(&mut self) -> usize {
        let excess = self.particles.len().saturating_sub(self.config.cap);
        if excess > 0 {
            self.particles.drain(..excess);
        }
        excess
    }
}
