// Host-side tests for configuration defaults and validation.

use backdrop_core::*;

#[test]
fn defaults_validate() {
    assert_eq!(BackdropConfig::default().validate(), Ok(()));
}

#[test]
fn defaults_match_tuned_constants() {
    let cfg = BackdropConfig::default();
    assert_eq!(cfg.ambient.shape_count, 30);
    assert_eq!(cfg.ambient.dot_count, 35);
    assert_eq!(cfg.ambient.dot_palette.len(), 7);
    assert_eq!(cfg.ambient.palette.len(), 8);
    assert_eq!(cfg.emitter.cap, 120);
    assert_eq!(cfg.emitter.palette.len(), 7);
    assert_eq!(cfg.emitter.links.prefix, 25);
    assert_eq!(cfg.emitter.links.window, 11);
    assert_eq!(cfg.spring.stiffness, 700.0);
    assert_eq!(cfg.spring.damping, 25.0);
}

#[test]
fn probability_outside_unit_interval_is_rejected() {
    let mut cfg = BackdropConfig::default();
    cfg.emitter.spawn_pressed = 1.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Probability { field: "emitter.spawn_pressed", .. })
    ));
    cfg.emitter.spawn_pressed = 0.4;
    cfg.emitter.spawn_ambient = -0.1;
    assert!(matches!(cfg.validate(), Err(ConfigError::Probability { .. })));
}

#[test]
fn empty_palette_is_rejected() {
    let mut cfg = BackdropConfig::default();
    cfg.ambient.palette.clear();
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette("ambient")));
}

#[test]
fn inverted_and_nan_ranges_are_rejected() {
    let mut cfg = AmbientConfig::default();
    cfg.size_px = Span::new(33.0, 8.0);
    assert!(matches!(cfg.validate(), Err(ConfigError::InvertedRange { .. })));
    cfg.size_px = Span::new(f32::NAN, 8.0);
    assert!(matches!(cfg.validate(), Err(ConfigError::InvertedRange { .. })));
}

#[test]
fn infinite_bounds_are_rejected_before_sampling() {
    let mut cfg = BackdropConfig::default();
    cfg.ambient.size_px = Span::new(8.0, f32::INFINITY);
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            field: "ambient.size_px"
        })
    );
    assert!(Scene::new(cfg, Viewport::new(800.0, 600.0), 1).is_err());

    let mut cfg = BackdropConfig::default();
    cfg.ambient.dot_size_px = Span::new(f32::NEG_INFINITY, 8.0);
    assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { .. })));

    let mut cfg = BackdropConfig::default();
    cfg.emitter.speed_max = f32::INFINITY;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            field: "emitter.speed_max"
        })
    );

    let mut cfg = BackdropConfig::default();
    cfg.ambient.drift_px = f32::INFINITY;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { .. })));

    let mut cfg = BackdropConfig::default();
    cfg.spring.stiffness = f32::INFINITY;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { .. })));
}

#[test]
fn damping_must_be_in_unit_interval() {
    let mut cfg = EmitterConfig::default();
    cfg.damping = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::Damping(0.0)));
    cfg.damping = 1.2;
    assert!(cfg.validate().is_err());
    cfg.damping = 1.0;
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_counts_are_rejected() {
    let mut cfg = BackdropConfig::default();
    cfg.emitter.cap = 0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Zero { .. })));

    let mut cfg = BackdropConfig::default();
    cfg.emitter.lifetime_ticks = Span::new(0, 10);
    assert!(matches!(cfg.validate(), Err(ConfigError::Zero { .. })));

    let mut cfg = BackdropConfig::default();
    cfg.ambient.shape_count = 0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Zero { .. })));
}

#[test]
fn errors_name_the_offending_field() {
    let err = ConfigError::InvertedRange {
        field: "ambient.size_px",
    };
    assert!(err.to_string().contains("ambient.size_px"));
}

#[test]
fn span_sampling_handles_collapsed_ranges() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    assert_eq!(Span::new(4.0f32, 4.0).sample(&mut rng), 4.0);
    let s = Span::new(1u32, 3);
    for _ in 0..50 {
        assert!(s.contains(s.sample(&mut rng)));
    }
}
