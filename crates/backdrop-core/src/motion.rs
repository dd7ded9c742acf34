//! Looping keyframe helpers shared by every animated primitive.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smoothstep ease, symmetric around t = 0.5.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Position within one loop in [0, 1). Returns 0 until `delay_sec` has passed.
#[inline]
pub fn loop_phase(elapsed_sec: f32, delay_sec: f32, duration_sec: f32) -> f32 {
    if !(duration_sec > 0.0) || !(elapsed_sec >= delay_sec) {
        return 0.0;
    }
    (elapsed_sec - delay_sec).rem_euclid(duration_sec) / duration_sec
}

/// Three evenly spaced keyframes, eased in-out per segment.
#[inline]
pub fn keyframes3(frames: [f32; 3], phase: f32) -> f32 {
    let phase = phase.clamp(0.0, 1.0);
    if phase < 0.5 {
        lerp(frames[0], frames[1], ease_in_out(phase * 2.0))
    } else {
        lerp(frames[1], frames[2], ease_in_out((phase - 0.5) * 2.0))
    }
}

/// `[rest, peak, rest]` loop.
#[inline]
pub fn pulse(range: (f32, f32), phase: f32) -> f32 {
    keyframes3([range.0, range.1, range.0], phase)
}

/// Linear map from `from` onto `to`, clamped to the output range.
#[inline]
pub fn map_clamped(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    lerp(to.0, to.1, t)
}
