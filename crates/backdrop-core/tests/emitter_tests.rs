// Host-side tests for the particle emitter: tick order, cap and lifetime.

use backdrop_core::*;
use glam::Vec2;

fn config(spawn_pressed: f64, spawn_ambient: f64) -> EmitterConfig {
    EmitterConfig {
        spawn_pressed,
        spawn_ambient,
        ..EmitterConfig::default()
    }
}

fn held_at(x: f32, y: f32) -> PointerState {
    let mut p = PointerState::at(x, y);
    p.press();
    p
}

fn assert_invariants(e: &ParticleEmitter) {
    assert!(e.len() <= e.config().cap, "len {} over cap", e.len());
    for p in e.particles() {
        assert!(p.age < p.lifetime, "age {} lifetime {}", p.age, p.lifetime);
    }
}

#[test]
fn default_rates_respect_cap_and_age() {
    let mut e = ParticleEmitter::new(EmitterConfig::default(), 1);
    let viewport = Viewport::new(800.0, 600.0);
    let pointer = held_at(400.0, 300.0);
    for _ in 0..2000 {
        e.tick(&pointer, viewport);
        assert_invariants(&e);
    }
}

#[test]
fn saturated_spawning_is_held_at_cap() {
    let mut cfg = config(1.0, 1.0);
    cfg.lifetime_ticks = Span::new(170, 180);
    let mut e = ParticleEmitter::new(cfg, 2);
    let viewport = Viewport::new(800.0, 600.0);
    let pointer = held_at(10.0, 10.0);
    let mut evicted = 0;
    for _ in 0..500 {
        evicted += e.tick(&pointer, viewport).evicted;
        assert_invariants(&e);
    }
    assert_eq!(e.len(), 120);
    assert!(evicted > 0);
}

#[test]
fn without_spawning_the_set_only_shrinks() {
    let mut e = ParticleEmitter::new(config(0.0, 0.0), 3);
    for i in 0..50 {
        e.spawn_at(Vec2::new(i as f32, 0.0));
    }
    let viewport = Viewport::new(800.0, 600.0);
    let pointer = PointerState::default();
    let mut last = e.len();
    for _ in 0..180 {
        let report = e.tick(&pointer, viewport);
        assert_eq!(report.spawned(), 0);
        assert!(e.len() <= last);
        last = e.len();
    }
    assert!(e.is_empty());
}

#[test]
fn velocity_decays_geometrically() {
    let mut e = ParticleEmitter::new(config(0.0, 0.0), 4);
    let v0 = Vec2::new(3.0, -2.0);
    e.insert(Particle {
        id: 0,
        position: Vec2::ZERO,
        velocity: v0,
        size_px: 5.0,
        gradient: 0,
        kind: ShapeKind::Circle,
        age: 0,
        lifetime: 1000,
    });
    let viewport = Viewport::new(800.0, 600.0);
    let pointer = PointerState::default();
    for k in 1..=50 {
        e.tick(&pointer, viewport);
        let expected = v0 * 0.98f32.powi(k);
        let v = e.particles()[0].velocity;
        assert!((v - expected).length() < 1e-4, "tick {k}: {v} vs {expected}");
        assert_eq!(e.particles()[0].age, k as u32);
    }
}

#[test]
fn held_pointer_spawns_every_tick_at_pointer() {
    let mut e = ParticleEmitter::new(config(1.0, 0.0), 5);
    let viewport = Viewport::new(800.0, 600.0);
    let pointer = held_at(100.0, 100.0);
    for _ in 0..10 {
        let report = e.tick(&pointer, viewport);
        assert_eq!(report.spawned_pressed, 1);
        assert_eq!(report.spawned_ambient, 0);
    }
    assert_eq!(e.len(), 10);
    let newest = e.particles().back().unwrap();
    assert_eq!(newest.age, 0);
    assert_eq!(newest.position, Vec2::new(100.0, 100.0));
    assert_eq!(e.particles().front().unwrap().age, 9);
}

#[test]
fn released_pointer_does_not_spawn_pressed() {
    let mut e = ParticleEmitter::new(config(1.0, 0.0), 6);
    let pointer = PointerState::at(100.0, 100.0);
    for _ in 0..20 {
        e.tick(&pointer, Viewport::new(800.0, 600.0));
    }
    assert!(e.is_empty());
}

#[test]
fn ambient_spawn_on_empty_viewport_uses_origin() {
    let mut e = ParticleEmitter::new(config(0.0, 1.0), 7);
    let report = e.tick(&PointerState::default(), Viewport::new(0.0, 0.0));
    assert_eq!(report.spawned_ambient, 1);
    assert_eq!(e.particles()[0].position, Vec2::ZERO);
    assert!(e.particles()[0].velocity.is_finite());
}

#[test]
fn ambient_spawns_land_inside_viewport() {
    let mut e = ParticleEmitter::new(config(0.0, 1.0), 8);
    let viewport = Viewport::new(320.0, 240.0);
    for _ in 0..50 {
        e.tick(&PointerState::default(), viewport);
        let p = e.particles().back().unwrap();
        assert!((0.0..320.0).contains(&p.position.x));
        assert!((0.0..240.0).contains(&p.position.y));
    }
}

#[test]
fn eviction_drops_oldest_first() {
    let mut cfg = config(0.0, 0.0);
    cfg.cap = 5;
    let mut e = ParticleEmitter::new(cfg, 9);
    let ids = (0..8)
        .map(|i| e.spawn_at(Vec2::new(i as f32, 0.0)))
        .collect::<Vec<_>>();
    assert_eq!(e.len(), 5);
    let kept = e.particles().iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(kept, ids[3..].to_vec());
    let xs = e.particles().iter().map(|p| p.position.x).collect::<Vec<_>>();
    assert_eq!(xs, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn spawned_particles_use_sampled_ranges() {
    let mut e = ParticleEmitter::new(config(0.0, 0.0), 10);
    for _ in 0..100 {
        e.spawn_at(Vec2::ZERO);
    }
    for p in e.particles() {
        assert!(ShapeKind::PARTICLE.contains(&p.kind));
        assert!((3.0..=13.0).contains(&p.size_px));
        assert!((60..=180).contains(&p.lifetime));
        assert!(p.velocity.x.abs() <= 2.5 && p.velocity.y.abs() <= 2.5);
        assert!(p.gradient < 7);
    }
}

#[test]
fn insert_reassigns_ids_and_clear_empties() {
    let mut e = ParticleEmitter::new(config(0.0, 0.0), 11);
    let first = e.spawn_at(Vec2::ZERO);
    let template = e.particles()[0].clone();
    let second = e.insert(template);
    assert_ne!(first, second);
    assert_eq!(e.len(), 2);
    e.clear();
    assert!(e.is_empty());
}

#[test]
fn particle_envelope_fades_in_and_out() {
    let mut p = Particle {
        id: 0,
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
        size_px: 4.0,
        gradient: 0,
        kind: ShapeKind::Diamond,
        age: 0,
        lifetime: 100,
    };
    assert_eq!(p.envelope(), 0.0);
    assert_eq!(p.spin_deg(), 45.0);
    p.age = 50;
    assert!((p.envelope() - 1.0).abs() < 1e-6);
    assert!((p.spin_deg() - 225.0).abs() < 1e-3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "unvalidated emitter config")]
fn out_of_range_probability_is_caught_at_construction() {
    let _ = ParticleEmitter::new(config(0.4, 1.5), 12);
}
