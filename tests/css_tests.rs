// Host-side tests for CSS transform formatting of magnetic controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use backdrop_core::{MagneticControl, Rect, SpringConfig, Tilt};
use css::*;
use glam::Vec2;

#[test]
fn neutral_tilt_formats_identity_transform() {
    let s = tilt_transform(&Tilt::NEUTRAL, 600.0);
    assert_eq!(
        s,
        "perspective(600px) rotateX(0.000deg) rotateY(0.000deg) scale(1.0000)"
    );
    assert!(is_neutral(&Tilt::NEUTRAL));
}

#[test]
fn tilt_values_are_rendered_in_degrees() {
    let tilt = Tilt {
        rotate_x_deg: -7.5,
        rotate_y_deg: 15.0,
        scale: 1.05,
    };
    let s = tilt_transform(&tilt, 800.0);
    assert!(s.starts_with("perspective(800px)"));
    assert!(s.contains("rotateX(-7.500deg)"));
    assert!(s.contains("rotateY(15.000deg)"));
    assert!(s.contains("scale(1.0500)"));
    assert!(!is_neutral(&tilt));
}

#[test]
fn hovered_control_produces_non_neutral_transform() {
    let mut control = MagneticControl::new(SpringConfig::default());
    control.enter();
    control.pointer_move(Vec2::new(90.0, 10.0), Rect::new(0.0, 0.0, 100.0, 100.0));
    let mut tilt = control.tilt();
    for _ in 0..10 {
        tilt = control.step(1.0 / 60.0);
    }
    assert!(!is_neutral(&tilt));
    assert!(tilt.rotate_y_deg > 0.0);
    assert!(tilt.rotate_x_deg > 0.0);
}
