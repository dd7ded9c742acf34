// Host-side tests for web wiring constants and their relationship to the core tuning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use backdrop_core::constants as tuning;
use constants::*;

#[test]
fn canvas_and_selectors_are_well_formed() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(MAGNETIC_SELECTOR.starts_with("[data-") && MAGNETIC_SELECTOR.ends_with(']'));
    assert!(MAGNETIC_DISABLED_ATTR.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tick_period_matches_sixty_hz() {
    assert!(TICK_INTERVAL_MS > 0);
    // One tick per frame at 60 Hz; particle speeds are tuned per tick
    assert!((TICK_INTERVAL_MS as f32 - 1000.0 / 60.0).abs() < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_matches_spring_clamp() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC <= tuning::SPRING_MAX_DT_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sprite_buffer_starts_large_enough_for_a_full_scene() {
    let ambient = tuning::AMBIENT_SHAPE_COUNT
        + tuning::DOT_COUNT
        + tuning::GEO_SQUARE_COUNT
        + tuning::WAVE_COUNT
        + tuning::GRID_VERTICAL_LINES
        + tuning::GRID_HORIZONTAL_LINES;
    assert!(INITIAL_SPRITE_CAPACITY.is_power_of_two());
    assert!(INITIAL_SPRITE_CAPACITY >= ambient + tuning::PARTICLE_CAP);
}

#[test]
fn clear_color_is_transparent() {
    assert_eq!(CLEAR_COLOR[3], 0.0);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn perspective_is_positive() {
    assert!(TILT_PERSPECTIVE_PX > 0.0);
}
