use backdrop_core::Tilt;

/// CSS `transform` value for a magnetic control.
pub fn tilt_transform(tilt: &Tilt, perspective_px: f32) -> String {
    format!(
        "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
        perspective_px, tilt.rotate_x_deg, tilt.rotate_y_deg, tilt.scale
    )
}

/// True when the tilt is close enough to neutral that the inline transform
/// can be dropped.
pub fn is_neutral(tilt: &Tilt) -> bool {
    tilt.rotate_x_deg.abs() < 1e-3 && tilt.rotate_y_deg.abs() < 1e-3 && (tilt.scale - 1.0).abs() < 1e-4
}
