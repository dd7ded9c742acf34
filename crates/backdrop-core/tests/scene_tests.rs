// Host-side tests for scene assembly, press bursts and cursor effects.

use backdrop_core::cursor::{ORBS, TRAILS};
use backdrop_core::*;
use glam::Vec2;

fn scene(viewport: Viewport) -> Scene {
    match Scene::new(BackdropConfig::default(), viewport, 42) {
        Ok(scene) => scene,
        Err(e) => panic!("default config rejected: {e}"),
    }
}

#[test]
fn sprite_layout_is_gpu_ready() {
    assert_eq!(std::mem::size_of::<Sprite>(), 64);
    let s = Sprite::new(
        SpriteKind::Ring,
        Vec2::new(1.0, 2.0),
        Vec2::splat(3.0),
        &Gradient::solid([1.0, 0.0, 0.0], 1.0),
    );
    let bytes: &[u8] = bytemuck::bytes_of(&s);
    assert_eq!(bytes.len(), 64);
    assert_eq!(s.sprite_kind(), Some(SpriteKind::Ring));
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut cfg = BackdropConfig::default();
    cfg.emitter.cap = 0;
    assert!(Scene::new(cfg, Viewport::new(800.0, 600.0), 1).is_err());
}

#[test]
fn build_sprites_draws_background_first() {
    let s = scene(Viewport::new(800.0, 600.0));
    let pointer = PointerState::at(100.0, 100.0);
    let mut out = Vec::new();
    s.build_sprites(&pointer, &mut out);
    // corners + grid + orbs + shapes + dots + squares + waves + fields
    assert!(out.len() >= 4 + 45 + 2 + 30 + 35 + 6 + 3 + 2, "got {}", out.len());
    for sprite in &out[..4] {
        assert_eq!(sprite.sprite_kind(), Some(SpriteKind::Glow));
    }
    for sprite in &out {
        assert!(sprite.sprite_kind().is_some());
        assert!(sprite.is_visible());
        assert!(sprite.center[0].is_finite() && sprite.center[1].is_finite());
    }
}

#[test]
fn trails_are_drawn_last_at_pointer() {
    let mut s = scene(Viewport::new(800.0, 600.0));
    s.advance(0.5);
    let pointer = PointerState::at(120.0, 80.0);
    let mut out = Vec::new();
    s.build_sprites(&pointer, &mut out);
    for sprite in &out[out.len() - 2..] {
        assert_eq!(sprite.sprite_kind(), Some(SpriteKind::Glow));
        assert_eq!(sprite.center, [120.0, 80.0]);
    }
}

#[test]
fn build_sprites_replaces_previous_contents() {
    let s = scene(Viewport::new(800.0, 600.0));
    let pointer = PointerState::default();
    let mut out = Vec::new();
    s.build_sprites(&pointer, &mut out);
    let first = out.len();
    s.build_sprites(&pointer, &mut out);
    assert_eq!(out.len(), first);
}

#[test]
fn ticking_with_held_pointer_adds_particle_sprites() {
    let mut s = scene(Viewport::new(800.0, 600.0));
    let mut pointer = PointerState::at(400.0, 300.0);
    pointer.press();
    let mut base = Vec::new();
    s.build_sprites(&pointer, &mut base);
    for _ in 0..30 {
        s.tick(&pointer);
    }
    assert!(!s.emitter().is_empty());
    let mut out = Vec::new();
    s.build_sprites(&pointer, &mut out);
    assert!(out.len() > base.len());
}

#[test]
fn presses_are_capped_and_expire() {
    let mut s = scene(Viewport::new(800.0, 600.0));
    let pointer = PointerState::at(10.0, 10.0);
    for _ in 0..6 {
        s.press(&pointer);
        s.advance(0.01);
    }
    assert_eq!(s.bursts().len(), 4);
    s.advance(2.0);
    assert!(s.bursts().is_empty());
}

#[test]
fn release_cuts_running_bursts_short() {
    let mut s = scene(Viewport::new(800.0, 600.0));
    let mut pointer = PointerState::at(200.0, 150.0);
    pointer.press();
    s.press(&pointer);
    s.advance(0.3);
    let mut held = Vec::new();
    s.build_sprites(&pointer, &mut held);
    assert_eq!(s.bursts().len(), 1);

    pointer.release();
    s.release();
    assert!(s.bursts().is_empty());
    let mut released = Vec::new();
    s.build_sprites(&pointer, &mut released);
    let rings = |sprites: &[Sprite]| {
        sprites
            .iter()
            .filter(|sp| sp.sprite_kind() == Some(SpriteKind::Ring))
            .count()
    };
    assert_eq!(rings(&held), 2);
    assert_eq!(rings(&released), 0);
}

#[test]
fn placeholder_dots_move_with_regenerated_field() {
    let mut s = scene(Viewport::new(0.0, 0.0));
    assert!(s
        .ambient()
        .dots()
        .iter()
        .all(|d| d.position_pct == Vec2::new(50.0, 50.0)));
    s.resize(Viewport::new(1024.0, 768.0));
    assert_eq!(s.ambient().dots().len(), 35);
    assert!(s
        .ambient()
        .dots()
        .iter()
        .any(|d| d.position_pct != Vec2::new(50.0, 50.0)));
}

#[test]
fn resize_regenerates_placeholder_field() {
    let mut s = scene(Viewport::new(0.0, 0.0));
    assert!(s.ambient().is_placeholder());
    s.resize(Viewport::new(1024.0, 768.0));
    assert!(!s.ambient().is_placeholder());
    assert_eq!(s.ambient().len(), 30);
    let before = s.ambient().shapes().to_vec();
    s.resize(Viewport::new(640.0, 480.0));
    assert_eq!(s.ambient().shapes(), &before[..]);
    assert_eq!(s.viewport(), Viewport::new(640.0, 480.0));
}

#[test]
fn burst_dots_fly_outward_and_fade() {
    let burst = PressBurst::new(Vec2::new(50.0, 50.0), 1.0);
    let start = burst.dots(1.0).collect::<Vec<_>>();
    assert_eq!(start.len(), 8);
    for dot in &start {
        assert_eq!(dot.center, Vec2::new(50.0, 50.0));
        assert_eq!(dot.opacity, 1.0);
    }
    let mid = burst.dots(1.6).next().unwrap();
    assert!((mid.scale - 1.2).abs() < 1e-4);
    for dot in burst.dots(2.2) {
        assert!(((dot.center - burst.origin).length() - 60.0).abs() < 1e-3);
        assert!(dot.opacity.abs() < 1e-6);
    }
}

#[test]
fn burst_rings_are_staggered() {
    let burst = PressBurst::new(Vec2::ZERO, 0.0);
    assert_eq!(burst.rings(0.1).count(), 1);
    assert_eq!(burst.rings(0.5).count(), 2);
    let late = burst.rings(1.1).collect::<Vec<_>>();
    assert_eq!(late.len(), 1);
    assert!(late[0].outer);
    assert!(!burst.is_finished(1.19));
    assert!(burst.is_finished(1.2));
}

#[test]
fn trails_are_centred_on_pointer() {
    let pointer = PointerState::at(100.0, 100.0);
    for spec in &TRAILS {
        let glow = spec.evaluate(&pointer, 0.3);
        assert_eq!(glow.center, Vec2::new(100.0, 100.0));
    }
    assert_eq!(TRAILS[0].diameter_px, 32.0);
    assert_eq!(TRAILS[1].diameter_px, 24.0);
    assert_eq!(TRAILS[1].period_sec, 0.8);
    // Inner trail peaks at the middle of its shorter loop
    let peak = TRAILS[1].evaluate(&pointer, 0.4);
    assert!((peak.scale - 1.2).abs() < 1e-4);
    assert!((peak.opacity - 0.9).abs() < 1e-4);
}

#[test]
fn orbs_follow_normalized_pointer() {
    let viewport = Viewport::new(800.0, 600.0);
    let centre = PointerState::at(400.0, 300.0);
    assert_eq!(ORBS[0].center(&centre, viewport), Vec2::new(400.0, 300.0));

    let right = PointerState::at(800.0, 300.0);
    assert_eq!(ORBS[0].center(&right, viewport), Vec2::new(700.0, 300.0));
    assert_eq!(ORBS[1].center(&right, viewport), Vec2::new(200.0, 300.0));

    let top_left = PointerState::at(0.0, 0.0);
    assert_eq!(ORBS[1].center(&top_left, viewport), Vec2::new(600.0, 100.0));

    let empty = Viewport::new(0.0, 0.0);
    assert_eq!(ORBS[0].center(&right, empty), Vec2::ZERO);
}
