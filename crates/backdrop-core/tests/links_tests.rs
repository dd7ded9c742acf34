// Host-side tests for proximity links.

use backdrop_core::*;
use glam::Vec2;

#[test]
fn close_pair_is_linked() {
    let links = proximity_links(&[Vec2::ZERO, Vec2::new(50.0, 0.0)], &LinkRule::default());
    assert_eq!(links.len(), 1);
    let link = links[0];
    assert_eq!((link.a, link.b), (0, 1));
    assert!((link.length - 50.0).abs() < 1e-6);
    assert_eq!(link.angle, 0.0);
}

#[test]
fn distant_pair_is_not_linked() {
    let links = proximity_links(&[Vec2::ZERO, Vec2::new(500.0, 0.0)], &LinkRule::default());
    assert!(links.is_empty());
}

#[test]
fn threshold_is_strict() {
    let links = proximity_links(&[Vec2::ZERO, Vec2::new(120.0, 0.0)], &LinkRule::default());
    assert!(links.is_empty());
    let links = proximity_links(&[Vec2::ZERO, Vec2::new(119.9, 0.0)], &LinkRule::default());
    assert_eq!(links.len(), 1);
}

#[test]
fn search_is_bounded_by_prefix_and_window() {
    let positions = vec![Vec2::ZERO; 40];
    let links = proximity_links(&positions, &LinkRule::default());
    assert_eq!(links.len(), 25 * 11);
    for link in &links {
        assert!(link.a < 25);
        assert!(link.b > link.a && link.b - link.a <= 11);
    }
}

#[test]
fn short_sets_are_clamped() {
    let positions = vec![Vec2::ZERO; 4];
    let links = proximity_links(&positions, &LinkRule::default());
    // All pairs of four points
    assert_eq!(links.len(), 6);
    assert!(proximity_links(&[], &LinkRule::default()).is_empty());
}

#[test]
fn emitter_links_only_consider_leading_particles() {
    let cfg = EmitterConfig {
        spawn_pressed: 0.0,
        spawn_ambient: 0.0,
        ..EmitterConfig::default()
    };
    let mut e = ParticleEmitter::new(cfg, 1);
    for _ in 0..60 {
        e.spawn_at(Vec2::new(10.0, 10.0));
    }
    let links = e.links();
    assert_eq!(links.len(), 25 * 11);
    assert!(links.iter().all(|l| l.b < 36));
}
