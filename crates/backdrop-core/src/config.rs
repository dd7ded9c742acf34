//! Static configuration for the backdrop subsystems.
//!
//! Every knob has a default taken from `constants.rs`. Configuration is
//! validated once when a [`crate::Scene`] is built; after that the simulation
//! itself has no failure paths.

use crate::color::{ambient_palette, dot_palette, particle_palette, Palette};
use crate::constants::*;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field}: range is inverted or not a number")]
    InvertedRange { field: &'static str },
    #[error("{field}: value is not finite")]
    NonFinite { field: &'static str },
    #[error("{field}: probability {value} is outside [0, 1]")]
    Probability { field: &'static str, value: f64 },
    #[error("damping factor {0} must lie in (0, 1]")]
    Damping(f32),
    #[error("{0} palette is empty")]
    EmptyPalette(&'static str),
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Inclusive `[min, max]` sampling range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        if self.min < self.max {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        // `!(a <= b)` also rejects NaN bounds
        if !(self.min <= self.max) {
            return Err(ConfigError::InvertedRange { field });
        }
        Ok(())
    }
}

impl Span<f32> {
    fn check_finite(&self, field: &'static str) -> Result<(), ConfigError> {
        self.check(field)?;
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }
        Ok(())
    }
}

impl<T: Copy> From<(T, T)> for Span<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Probability { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value > 0.0) {
        return Err(ConfigError::Zero { field });
    }
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    Ok(())
}

/// Finite and `>= 0`; used for symmetric `±value` sampling bounds.
fn check_amplitude(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if !(value >= 0.0) {
        return Err(ConfigError::InvertedRange { field });
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct AmbientConfig {
    pub shape_count: usize,
    pub size_px: Span<f32>,
    pub delay_sec: Span<f32>,
    pub duration_sec: Span<f32>,
    pub drift_px: f32,
    pub palette: Palette,
    /// Floating-dot layer; shares `delay_sec` and `duration_sec`.
    pub dot_count: usize,
    pub dot_size_px: Span<f32>,
    pub dot_drift_px: f32,
    pub dot_palette: Palette,
    pub grid_vertical: usize,
    pub grid_horizontal: usize,
    pub grid_delay_sec: Span<f32>,
    pub grid_vertical_duration_sec: Span<f32>,
    pub grid_horizontal_duration_sec: Span<f32>,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            shape_count: AMBIENT_SHAPE_COUNT,
            size_px: AMBIENT_SIZE_PX.into(),
            delay_sec: AMBIENT_DELAY_SEC.into(),
            duration_sec: AMBIENT_DURATION_SEC.into(),
            drift_px: AMBIENT_DRIFT_PX,
            palette: ambient_palette(),
            dot_count: DOT_COUNT,
            dot_size_px: DOT_SIZE_PX.into(),
            dot_drift_px: DOT_DRIFT_PX,
            dot_palette: dot_palette(),
            grid_vertical: GRID_VERTICAL_LINES,
            grid_horizontal: GRID_HORIZONTAL_LINES,
            grid_delay_sec: GRID_DELAY_SEC.into(),
            grid_vertical_duration_sec: GRID_VERTICAL_DURATION_SEC.into(),
            grid_horizontal_duration_sec: GRID_HORIZONTAL_DURATION_SEC.into(),
        }
    }
}

impl AmbientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape_count == 0 {
            return Err(ConfigError::Zero {
                field: "ambient.shape_count",
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette("ambient"));
        }
        if self.dot_count > 0 && self.dot_palette.is_empty() {
            return Err(ConfigError::EmptyPalette("ambient dot"));
        }
        self.size_px.check_finite("ambient.size_px")?;
        self.dot_size_px.check_finite("ambient.dot_size_px")?;
        self.delay_sec.check_finite("ambient.delay_sec")?;
        self.duration_sec.check_finite("ambient.duration_sec")?;
        self.grid_delay_sec.check_finite("ambient.grid_delay_sec")?;
        self.grid_vertical_duration_sec
            .check_finite("ambient.grid_vertical_duration_sec")?;
        self.grid_horizontal_duration_sec
            .check_finite("ambient.grid_horizontal_duration_sec")?;
        check_positive("ambient.duration_sec", self.duration_sec.min)?;
        check_positive(
            "ambient.grid_vertical_duration_sec",
            self.grid_vertical_duration_sec.min,
        )?;
        check_positive(
            "ambient.grid_horizontal_duration_sec",
            self.grid_horizontal_duration_sec.min,
        )?;
        if !(self.delay_sec.min >= 0.0) || !(self.grid_delay_sec.min >= 0.0) {
            return Err(ConfigError::InvertedRange {
                field: "ambient.delay_sec",
            });
        }
        check_amplitude("ambient.drift_px", self.drift_px)?;
        check_amplitude("ambient.dot_drift_px", self.dot_drift_px)?;
        Ok(())
    }
}

/// Window over which proximity links are searched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkRule {
    pub prefix: usize,
    pub window: usize,
    pub max_distance_px: f32,
}

impl Default for LinkRule {
    fn default() -> Self {
        Self {
            prefix: LINK_PREFIX,
            window: LINK_WINDOW,
            max_distance_px: LINK_DISTANCE_PX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EmitterConfig {
    pub cap: usize,
    pub damping: f32,
    pub spawn_pressed: f64,
    pub spawn_ambient: f64,
    pub speed_max: f32,
    pub size_px: Span<f32>,
    pub lifetime_ticks: Span<u32>,
    pub palette: Palette,
    pub links: LinkRule,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            cap: PARTICLE_CAP,
            damping: PARTICLE_DAMPING,
            spawn_pressed: SPAWN_PROBABILITY_PRESSED,
            spawn_ambient: SPAWN_PROBABILITY_AMBIENT,
            speed_max: PARTICLE_SPEED_MAX,
            size_px: PARTICLE_SIZE_PX.into(),
            lifetime_ticks: PARTICLE_LIFETIME_TICKS.into(),
            palette: particle_palette(),
            links: LinkRule::default(),
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cap == 0 {
            return Err(ConfigError::Zero {
                field: "emitter.cap",
            });
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        check_probability("emitter.spawn_pressed", self.spawn_pressed)?;
        check_probability("emitter.spawn_ambient", self.spawn_ambient)?;
        check_amplitude("emitter.speed_max", self.speed_max)?;
        self.size_px.check_finite("emitter.size_px")?;
        self.lifetime_ticks.check("emitter.lifetime_ticks")?;
        if self.lifetime_ticks.min == 0 {
            return Err(ConfigError::Zero {
                field: "emitter.lifetime_ticks",
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette("emitter"));
        }
        if !(self.links.max_distance_px >= 0.0) {
            return Err(ConfigError::InvertedRange {
                field: "emitter.links.max_distance_px",
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("spring.stiffness", self.stiffness)?;
        check_positive("spring.mass", self.mass)?;
        check_amplitude("spring.damping", self.damping)
    }
}

#[derive(Clone, Debug, Default)]
pub struct BackdropConfig {
    pub ambient: AmbientConfig,
    pub emitter: EmitterConfig,
    pub spring: SpringConfig,
}

impl BackdropConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ambient.validate()?;
        self.emitter.validate()?;
        self.spring.validate()
    }
}
