use crate::color::Gradient;
use crate::shape::ShapeKind;
use glam::Vec2;

/// Signed-distance shape selected in the fragment shader. Values must match
/// the `KIND_*` constants in `sprites.wgsl`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Circle = 0,
    Square = 1,
    Triangle = 2,
    Diamond = 3,
    Star = 4,
    Hexagon = 5,
    /// Tapered segment; the gradient runs along its length.
    Line = 6,
    /// Hollow circle with a hairline border.
    Ring = 7,
    /// Radial falloff with no hard edge.
    Glow = 8,
}

impl From<ShapeKind> for SpriteKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => SpriteKind::Circle,
            ShapeKind::Square => SpriteKind::Square,
            ShapeKind::Triangle => SpriteKind::Triangle,
            ShapeKind::Diamond => SpriteKind::Diamond,
            ShapeKind::Star => SpriteKind::Star,
            ShapeKind::Hexagon => SpriteKind::Hexagon,
        }
    }
}

/// One instanced quad, uploaded to the GPU as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Sprite {
    pub center: [f32; 2],
    pub size: [f32; 2],
    /// Radians, clockwise in screen space.
    pub rotation: f32,
    pub opacity: f32,
    pub kind: u32,
    /// Edge blur as a fraction of the half-size (0 = crisp).
    pub softness: f32,
    pub color_from: [f32; 4],
    pub color_to: [f32; 4],
}

impl Sprite {
    pub fn new(kind: SpriteKind, center: Vec2, size: Vec2, gradient: &Gradient) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            rotation: 0.0,
            opacity: 1.0,
            kind: kind as u32,
            softness: 0.0,
            color_from: gradient.from,
            color_to: gradient.to,
        }
    }

    pub fn with_rotation_deg(mut self, degrees: f32) -> Self {
        self.rotation = degrees.to_radians();
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness.max(0.0);
        self
    }

    pub fn sprite_kind(&self) -> Option<SpriteKind> {
        Some(match self.kind {
            0 => SpriteKind::Circle,
            1 => SpriteKind::Square,
            2 => SpriteKind::Triangle,
            3 => SpriteKind::Diamond,
            4 => SpriteKind::Star,
            5 => SpriteKind::Hexagon,
            6 => SpriteKind::Line,
            7 => SpriteKind::Ring,
            8 => SpriteKind::Glow,
            _ => return None,
        })
    }

    /// Invisible sprites are skipped when building the draw list.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.size[0] > 0.0 && self.size[1] > 0.0
    }
}
