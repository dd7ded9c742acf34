pub mod ambient;
pub mod burst;
pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod emitter;
pub mod links;
pub mod motion;
pub mod particle;
pub mod pointer;
pub mod scene;
pub mod shape;
pub mod sprite;
pub mod spring;
pub mod viewport;
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");

pub use ambient::{
    AccentWave, AmbientField, AmbientShape, Axis, Corner, CornerAccent, FloatingDot, GeoSquare, GridLine,
};
pub use burst::{BurstDot, BurstRing, PressBurst};
pub use color::{Gradient, Palette};
pub use config::{AmbientConfig, BackdropConfig, ConfigError, EmitterConfig, LinkRule, Span, SpringConfig};
pub use cursor::{CursorGlow, GlowSpec, OrbSpec};
pub use emitter::{ParticleEmitter, TickReport};
pub use links::{proximity_links, Link};
pub use particle::Particle;
pub use pointer::PointerState;
pub use scene::Scene;
pub use shape::{MotionProfile, ShapeKind, ShapePose};
pub use sprite::{Sprite, SpriteKind};
pub use spring::{pointer_offset, MagneticControl, Spring, Tilt};
pub use viewport::{Rect, Viewport};
