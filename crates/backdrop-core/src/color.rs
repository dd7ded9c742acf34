use crate::constants::{AMBIENT_ALPHA, DOT_ALPHA, GRADIENT_STOPS, PARTICLE_ALPHA, PARTICLE_GRADIENT_COUNT};
use smallvec::SmallVec;

/// Two-stop linear gradient with straight (non-premultiplied) sRGB colours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub from: [f32; 4],
    pub to: [f32; 4],
}

impl Gradient {
    pub const fn new(from: [f32; 3], to: [f32; 3], alpha: f32) -> Self {
        Self {
            from: [from[0], from[1], from[2], alpha],
            to: [to[0], to[1], to[2], alpha],
        }
    }

    /// Single colour fading to fully transparent.
    pub const fn fade(color: [f32; 3], alpha: f32) -> Self {
        Self {
            from: [color[0], color[1], color[2], alpha],
            to: [color[0], color[1], color[2], 0.0],
        }
    }

    pub const fn solid(color: [f32; 3], alpha: f32) -> Self {
        Self::new(color, color, alpha)
    }
}

// Palettes rarely exceed eight entries
pub type Palette = SmallVec<[Gradient; 8]>;

pub fn ambient_palette() -> Palette {
    GRADIENT_STOPS
        .iter()
        .map(|(from, to)| Gradient::new(*from, *to, AMBIENT_ALPHA))
        .collect()
}

pub fn particle_palette() -> Palette {
    GRADIENT_STOPS
        .iter()
        .take(PARTICLE_GRADIENT_COUNT)
        .map(|(from, to)| Gradient::new(*from, *to, PARTICLE_ALPHA))
        .collect()
}

/// The particle gradients at the fainter floating-dot alpha.
pub fn dot_palette() -> Palette {
    GRADIENT_STOPS
        .iter()
        .take(PARTICLE_GRADIENT_COUNT)
        .map(|(from, to)| Gradient::new(*from, *to, DOT_ALPHA))
        .collect()
}
