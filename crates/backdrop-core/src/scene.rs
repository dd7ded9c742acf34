//! Scene assembly: the ambient field, the emitter and the press bursts,
//! flattened into a back-to-front sprite list each frame.

use crate::ambient::{AmbientField, Axis};
use crate::burst::PressBurst;
use crate::color::Gradient;
use crate::config::{BackdropConfig, ConfigError};
use crate::constants::*;
use crate::cursor::{FIELDS, ORBS, TRAILS};
use crate::emitter::{ParticleEmitter, TickReport};
use crate::motion::{loop_phase, pulse};
use crate::pointer::PointerState;
use crate::sprite::{Sprite, SpriteKind};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::FRAC_PI_2;

pub struct Scene {
    config: BackdropConfig,
    viewport: Viewport,
    ambient: AmbientField,
    emitter: ParticleEmitter,
    bursts: SmallVec<[PressBurst; MAX_ACTIVE_BURSTS]>,
    elapsed_sec: f32,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: BackdropConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let ambient = AmbientField::generate(&config.ambient, viewport, &mut rng);
        // Emitter gets its own stream so ambient regeneration never shifts it
        let emitter_seed = seed ^ 1u64.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let emitter = ParticleEmitter::new(config.emitter.clone(), emitter_seed);
        log::info!(
            "[scene] ready: {} shapes, cap {} (viewport {}x{})",
            ambient.len(),
            config.emitter.cap,
            viewport.width,
            viewport.height
        );
        Ok(Self {
            config,
            viewport,
            ambient,
            emitter,
            bursts: SmallVec::new(),
            elapsed_sec: 0.0,
            rng,
        })
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn ambient(&self) -> &AmbientField {
        &self.ambient
    }

    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    pub fn bursts(&self) -> &[PressBurst] {
        &self.bursts
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// One emitter step against the current viewport.
    pub fn tick(&mut self, pointer: &PointerState) -> TickReport {
        let report = self.emitter.tick(pointer, self.viewport);
        if report.evicted > 0 {
            log::debug!("[emitter] evicted {} over cap", report.evicted);
        }
        report
    }

    /// Move the animation clock forward and retire finished bursts.
    pub fn advance(&mut self, dt_sec: f32) {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed_sec += dt_sec;
        }
        let now = self.elapsed_sec;
        self.bursts.retain(|b| !b.is_finished(now));
    }

    /// Start a burst at the pointer. Bursts only show while the press is
    /// held; see [`Scene::release`].
    pub fn press(&mut self, pointer: &PointerState) {
        if self.bursts.len() >= MAX_ACTIVE_BURSTS {
            self.bursts.remove(0);
        }
        self.bursts
            .push(PressBurst::new(pointer.position(), self.elapsed_sec));
    }

    /// Pointer released: cut every running burst short.
    pub fn release(&mut self) {
        self.bursts.clear();
    }

    /// Adopt a new viewport. A field generated before layout (all shapes at
    /// the fallback position) is regenerated once a real size is known.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if self.ambient.is_placeholder() && !viewport.is_degenerate() {
            self.ambient = AmbientField::generate(&self.config.ambient, viewport, &mut self.rng);
        }
        log::debug!("[scene] viewport {}x{}", viewport.width, viewport.height);
    }

    /// Replace `out` with this frame's sprites, back to front.
    pub fn build_sprites(&self, pointer: &PointerState, out: &mut Vec<Sprite>) {
        out.clear();
        let t = self.elapsed_sec;
        let mut push = |sprite: Sprite| {
            if sprite.is_visible() {
                out.push(sprite);
            }
        };

        for corner in self.ambient.corners() {
            let (scale, opacity) = corner.pulse(t);
            let diameter = 2.0 * CORNER_SIZE_PX * scale;
            push(
                Sprite::new(
                    SpriteKind::Glow,
                    corner.anchor(self.viewport),
                    Vec2::splat(diameter),
                    &corner.gradient,
                )
                .with_opacity(opacity)
                .with_softness(1.0),
            );
        }

        let size = self.viewport.size();
        let grid_gradient = Gradient::solid(INDIGO, GRID_ALPHA);
        for line in self.ambient.grid() {
            let (opacity, stretch) = line.pulse(t);
            let (center, length, rotation) = match line.axis {
                Axis::Vertical => (
                    Vec2::new(line.fraction * size.x, size.y * 0.5),
                    size.y * stretch,
                    FRAC_PI_2,
                ),
                Axis::Horizontal => (
                    Vec2::new(size.x * 0.5, line.fraction * size.y),
                    size.x * stretch,
                    0.0,
                ),
            };
            push(
                Sprite::new(SpriteKind::Line, center, Vec2::new(length, 1.0), &grid_gradient)
                    .with_rotation(rotation)
                    .with_opacity(opacity),
            );
        }

        for orb in &ORBS {
            let glow = orb.evaluate(pointer, self.viewport, t);
            push(
                Sprite::new(
                    SpriteKind::Glow,
                    glow.center,
                    Vec2::splat(glow.diameter_px * glow.scale),
                    &glow.gradient,
                )
                .with_opacity(glow.opacity)
                .with_softness(glow.softness),
            );
        }

        let ambient_palette = &self.config.ambient.palette;
        for shape in self.ambient.shapes() {
            let pose = shape.pose(t);
            let half = Vec2::splat(shape.size_px * 0.5);
            let center = shape.anchor_px(self.viewport) + half + pose.offset;
            let gradient = &ambient_palette[shape.gradient % ambient_palette.len()];
            push(
                Sprite::new(
                    shape.kind.into(),
                    center,
                    Vec2::splat(shape.size_px * pose.scale),
                    gradient,
                )
                .with_rotation_deg(pose.rotation_deg)
                .with_opacity(pose.opacity),
            );
        }

        let dot_palette = &self.config.ambient.dot_palette;
        for dot in self.ambient.dots() {
            let pose = dot.pose(t);
            let center = dot.anchor_px(self.viewport) + Vec2::splat(dot.size_px * 0.5) + pose.offset;
            let gradient = &dot_palette[dot.gradient % dot_palette.len()];
            push(
                Sprite::new(SpriteKind::Circle, center, Vec2::splat(dot.size_px * pose.scale), gradient)
                    .with_rotation_deg(pose.rotation_deg)
                    .with_opacity(pose.opacity),
            );
        }

        for square in self.ambient.squares() {
            let pose = square.pose(t);
            let center = self.viewport.percent_to_px(square.position_pct)
                + Vec2::splat(GEO_SQUARE_SIZE_PX * 0.5)
                + pose.offset;
            push(
                Sprite::new(
                    SpriteKind::Square,
                    center,
                    Vec2::splat(GEO_SQUARE_SIZE_PX * pose.scale),
                    &square.gradient,
                )
                .with_rotation_deg(pose.rotation_deg)
                .with_opacity(pose.opacity),
            );
        }

        let wave_gradient = Gradient::solid(ACCENT, WAVE_ALPHA);
        for wave in self.ambient.waves() {
            let (opacity, stretch) = wave.pulse(t);
            let center = self.viewport.percent_to_px(wave.position_pct)
                + Vec2::new(WAVE_LENGTH_PX * 0.5, 0.0);
            push(
                Sprite::new(SpriteKind::Line, center, Vec2::new(WAVE_LENGTH_PX * stretch, 1.0), &wave_gradient)
                    .with_rotation_deg(wave.angle_deg)
                    .with_opacity(opacity),
            );
        }

        for spec in &FIELDS {
            let glow = spec.evaluate(pointer, t);
            push(
                Sprite::new(
                    SpriteKind::Glow,
                    glow.center,
                    Vec2::splat(glow.diameter_px * glow.scale),
                    &glow.gradient,
                )
                .with_opacity(glow.opacity)
                .with_softness(glow.softness),
            );
        }

        let link_gradient = Gradient::new(PRIMARY, SECONDARY, LINK_ALPHA);
        let link_opacity = pulse(LINK_OPACITY, loop_phase(t, 0.0, LINK_PERIOD_SEC));
        for link in self.emitter.links() {
            push(
                Sprite::new(
                    SpriteKind::Line,
                    (link.from + link.to) * 0.5,
                    Vec2::new(link.length, 1.0),
                    &link_gradient,
                )
                .with_rotation(link.angle)
                .with_opacity(link_opacity),
            );
        }

        let particle_palette = &self.emitter.config().palette;
        for particle in self.emitter.particles() {
            let envelope = particle.envelope();
            let gradient = &particle_palette[particle.gradient % particle_palette.len()];
            push(
                Sprite::new(
                    particle.kind.into(),
                    particle.position,
                    Vec2::splat(particle.size_px * envelope),
                    gradient,
                )
                .with_rotation_deg(particle.spin_deg())
                .with_opacity(envelope),
            );
        }

        let dot_gradient = Gradient::new(PRIMARY, SECONDARY, 1.0);
        let ring_gradient = [Gradient::solid(PRIMARY, 1.0), Gradient::solid(SECONDARY, 1.0)];
        for burst in &self.bursts {
            for ring in burst.rings(t) {
                let gradient = if ring.outer { &ring_gradient[0] } else { &ring_gradient[1] };
                push(
                    Sprite::new(SpriteKind::Ring, ring.center, Vec2::splat(ring.diameter_px), gradient)
                        .with_opacity(ring.opacity),
                );
            }
            for dot in burst.dots(t) {
                push(
                    Sprite::new(
                        SpriteKind::Circle,
                        dot.center,
                        Vec2::splat(BURST_DOT_SIZE_PX * dot.scale),
                        &dot_gradient,
                    )
                    .with_opacity(dot.opacity),
                );
            }
        }

        for spec in &TRAILS {
            let trail = spec.evaluate(pointer, t);
            push(
                Sprite::new(
                    SpriteKind::Glow,
                    trail.center,
                    Vec2::splat(trail.diameter_px * trail.scale),
                    &trail.gradient,
                )
                .with_opacity(trail.opacity)
                .with_softness(trail.softness),
            );
        }
    }
}
