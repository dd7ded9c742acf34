//! Ambient field: a fixed batch of decorative shapes generated once at mount,
//! the floating-dot layer, the pulsing backdrop grid, the corner accents and
//! a few fixed geometric squares and accent waves.
//!
//! Nothing here is mutated after generation. Every visual quantity is a pure
//! function of elapsed time and the element's own sampled parameters, so two
//! shapes never influence each other.

use crate::color::Gradient;
use crate::config::{AmbientConfig, Span};
use crate::constants::*;
use crate::motion::{loop_phase, pulse};
use crate::shape::{MotionProfile, ShapeKind, ShapePose};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientShape {
    pub id: usize,
    /// Top-left anchor in percent of the viewport.
    pub position_pct: Vec2,
    pub size_px: f32,
    pub kind: ShapeKind,
    pub gradient: usize,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub drift_px: f32,
}

impl AmbientShape {
    pub fn phase(&self, elapsed_sec: f32) -> f32 {
        loop_phase(elapsed_sec, self.delay_sec, self.duration_sec)
    }

    pub fn pose(&self, elapsed_sec: f32) -> ShapePose {
        self.kind.motion().pose(self.phase(elapsed_sec), self.drift_px)
    }

    pub fn anchor_px(&self, viewport: Viewport) -> Vec2 {
        viewport.percent_to_px(self.position_pct)
    }
}

/// Motion shared by every floating dot.
pub const DOT_MOTION: MotionProfile = MotionProfile {
    lift_px: 60.0,
    drifts: true,
    rotation_deg: Some([0.0, 180.0, 360.0]),
    scale: (0.5, 1.8),
    opacity: (0.2, 0.9),
};

pub const GEO_SQUARE_MOTION: MotionProfile = MotionProfile {
    lift_px: 40.0,
    drifts: false,
    rotation_deg: Some([0.0, 180.0, 360.0]),
    scale: (0.8, 1.2),
    opacity: (0.3, 0.8),
};

/// Small round mote. Positioned like an [`AmbientShape`] but always a circle
/// with its own, livelier motion.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingDot {
    pub id: usize,
    pub position_pct: Vec2,
    pub size_px: f32,
    pub gradient: usize,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub drift_px: f32,
}

impl FloatingDot {
    pub fn pose(&self, elapsed_sec: f32) -> ShapePose {
        let phase = loop_phase(elapsed_sec, self.delay_sec, self.duration_sec);
        DOT_MOTION.pose(phase, self.drift_px)
    }

    pub fn anchor_px(&self, viewport: Viewport) -> Vec2 {
        viewport.percent_to_px(self.position_pct)
    }
}

/// One of the rounded squares laid out on a fixed diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoSquare {
    pub index: usize,
    pub position_pct: Vec2,
    pub gradient: Gradient,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl GeoSquare {
    pub fn pose(&self, elapsed_sec: f32) -> ShapePose {
        let phase = loop_phase(elapsed_sec, self.delay_sec, self.duration_sec);
        GEO_SQUARE_MOTION.pose(phase, 0.0)
    }
}

/// Short tilted hairline that stretches and fades in place.
#[derive(Clone, Debug, PartialEq)]
pub struct AccentWave {
    pub position_pct: Vec2,
    pub angle_deg: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl AccentWave {
    /// `(opacity, stretch)` at `elapsed_sec`.
    pub fn pulse(&self, elapsed_sec: f32) -> (f32, f32) {
        let phase = loop_phase(elapsed_sec, self.delay_sec, self.duration_sec);
        (pulse(WAVE_OPACITY, phase), pulse(WAVE_STRETCH, phase))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    /// Offset across the viewport in [0, 1).
    pub fraction: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl GridLine {
    /// `(opacity, stretch)` at `elapsed_sec`.
    pub fn pulse(&self, elapsed_sec: f32) -> (f32, f32) {
        let phase = loop_phase(elapsed_sec, self.delay_sec, self.duration_sec);
        (pulse(GRID_OPACITY, phase), pulse(GRID_STRETCH, phase))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CornerAccent {
    pub corner: Corner,
    pub gradient: Gradient,
    pub delay_sec: f32,
}

impl CornerAccent {
    pub fn anchor(&self, viewport: Viewport) -> Vec2 {
        let size = viewport.size();
        match self.corner {
            Corner::TopLeft => Vec2::ZERO,
            Corner::TopRight => Vec2::new(size.x, 0.0),
            Corner::BottomLeft => Vec2::new(0.0, size.y),
            Corner::BottomRight => size,
        }
    }

    /// `(scale, opacity)` at `elapsed_sec`.
    pub fn pulse(&self, elapsed_sec: f32) -> (f32, f32) {
        let phase = loop_phase(elapsed_sec, self.delay_sec, CORNER_PERIOD_SEC);
        (pulse(CORNER_SCALE, phase), pulse(CORNER_OPACITY, phase))
    }
}

#[derive(Clone, Debug)]
pub struct AmbientField {
    shapes: Vec<AmbientShape>,
    dots: Vec<FloatingDot>,
    grid: Vec<GridLine>,
    corners: [CornerAccent; 4],
    squares: Vec<GeoSquare>,
    waves: Vec<AccentWave>,
    placeholder: bool,
}

impl AmbientField {
    /// Sample `config.shape_count` shapes and `config.dot_count` dots. A
    /// degenerate viewport places each of them at the fallback position
    /// instead of sampling one.
    ///
    /// `config` must have passed [`AmbientConfig::validate`]; sampling from an
    /// unchecked range can panic.
    pub fn generate<R: Rng + ?Sized>(config: &AmbientConfig, viewport: Viewport, rng: &mut R) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated ambient config");
        let palette_len = config.palette.len().max(1);
        let shapes = (0..config.shape_count)
            .map(|id| AmbientShape {
                id,
                position_pct: viewport.random_percent(rng),
                size_px: config.size_px.sample(rng),
                kind: ShapeKind::pick(&ShapeKind::ALL, rng),
                gradient: rng.gen_range(0..palette_len),
                delay_sec: config.delay_sec.sample(rng),
                duration_sec: config.duration_sec.sample(rng),
                drift_px: Span::new(-config.drift_px, config.drift_px).sample(rng),
            })
            .collect::<Vec<_>>();

        let dot_palette_len = config.dot_palette.len().max(1);
        let dots = (0..config.dot_count)
            .map(|id| FloatingDot {
                id,
                position_pct: viewport.random_percent(rng),
                size_px: config.dot_size_px.sample(rng),
                gradient: rng.gen_range(0..dot_palette_len),
                delay_sec: config.delay_sec.sample(rng),
                duration_sec: config.duration_sec.sample(rng),
                drift_px: Span::new(-config.dot_drift_px, config.dot_drift_px).sample(rng),
            })
            .collect::<Vec<_>>();

        let vertical = (0..config.grid_vertical).map(|i| GridLine {
            axis: Axis::Vertical,
            fraction: i as f32 / config.grid_vertical as f32,
            delay_sec: config.grid_delay_sec.sample(rng),
            duration_sec: config.grid_vertical_duration_sec.sample(rng),
        });
        let mut grid = vertical.collect::<Vec<_>>();
        grid.extend((0..config.grid_horizontal).map(|i| GridLine {
            axis: Axis::Horizontal,
            fraction: i as f32 / config.grid_horizontal as f32,
            delay_sec: config.grid_delay_sec.sample(rng),
            duration_sec: config.grid_horizontal_duration_sec.sample(rng),
        }));

        let accent = |corner, color, stagger: f32| CornerAccent {
            corner,
            gradient: Gradient::fade(color, CORNER_ALPHA),
            delay_sec: stagger * CORNER_STAGGER_SEC,
        };
        let corners = [
            accent(Corner::TopLeft, PRIMARY, 0.0),
            accent(Corner::TopRight, SECONDARY, 1.0),
            accent(Corner::BottomLeft, ACCENT, 2.0),
            accent(Corner::BottomRight, PURPLE, 3.0),
        ];

        let squares = (0..GEO_SQUARE_COUNT)
            .map(|index| {
                let step = index as f32;
                let (from, to) = if index % 2 == 0 { (BLUE, TEAL) } else { (PINK, INDIGO) };
                GeoSquare {
                    index,
                    position_pct: Vec2::from(GEO_SQUARE_ORIGIN_PCT)
                        + Vec2::from(GEO_SQUARE_STEP_PCT) * step,
                    gradient: Gradient::new(from, to, GEO_SQUARE_ALPHA),
                    delay_sec: Span::from(GEO_SQUARE_DELAY_SEC).sample(rng),
                    duration_sec: Span::from(GEO_SQUARE_DURATION_SEC).sample(rng),
                }
            })
            .collect::<Vec<_>>();

        let waves = (0..WAVE_COUNT)
            .map(|i| {
                let step = i as f32;
                AccentWave {
                    position_pct: Vec2::from(WAVE_ORIGIN_PCT) + Vec2::from(WAVE_STEP_PCT) * step,
                    angle_deg: WAVE_ANGLE_DEG + WAVE_ANGLE_STEP_DEG * step,
                    delay_sec: Span::from(WAVE_DELAY_SEC).sample(rng),
                    duration_sec: Span::from(WAVE_DURATION_SEC).sample(rng),
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "[ambient] generated {} shapes, {} dots, {} grid lines (viewport {}x{})",
            shapes.len(),
            dots.len(),
            grid.len(),
            viewport.width,
            viewport.height
        );

        Self {
            shapes,
            dots,
            grid,
            corners,
            squares,
            waves,
            placeholder: viewport.is_degenerate(),
        }
    }

    pub fn shapes(&self) -> &[AmbientShape] {
        &self.shapes
    }

    pub fn dots(&self) -> &[FloatingDot] {
        &self.dots
    }

    pub fn squares(&self) -> &[GeoSquare] {
        &self.squares
    }

    pub fn waves(&self) -> &[AccentWave] {
        &self.waves
    }

    pub fn grid(&self) -> &[GridLine] {
        &self.grid
    }

    pub fn corners(&self) -> &[CornerAccent; 4] {
        &self.corners
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True when the field was generated against an empty viewport and all
    /// shapes and dots sit at the fallback position.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}
