//! Damped springs and the magnetic (pointer-tilting) control state.

use crate::config::SpringConfig;
use crate::constants::*;
use crate::motion::map_clamped;
use crate::viewport::Rect;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            config,
        }
    }

    /// Advance towards `target`. Long frames are clamped and sub-stepped so a
    /// stalled tab cannot make the spring diverge.
    pub fn step(&mut self, target: f32, dt_sec: f32) {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, SPRING_MAX_DT_SEC)
        } else {
            0.0
        };
        let steps = (dt / SPRING_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        for _ in 0..steps {
            let force = -stiffness * (self.value - target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }
        if self.is_settled(target) {
            self.value = target;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self, target: f32) -> bool {
        (self.value - target).abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_DELTA
    }
}

/// Pointer offset from the centre of `rect`, in half-extents, clamped to
/// [-1, 1]. A zero-sized rect yields no offset.
pub fn pointer_offset(pointer: Vec2, rect: Rect) -> Vec2 {
    if rect.is_degenerate() {
        return Vec2::ZERO;
    }
    let half = Vec2::new(rect.width, rect.height) * 0.5;
    ((pointer - rect.center()) / half).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

/// 3D tilt and scale applied to a magnetic control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };
}

impl Default for Tilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Clone, Debug)]
pub struct MagneticControl {
    offset: Vec2,
    hovered: bool,
    pressed: bool,
    disabled: bool,
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
}

impl MagneticControl {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            offset: Vec2::ZERO,
            hovered: false,
            pressed: false,
            disabled: false,
            rotate_x: Spring::new(0.0, config),
            rotate_y: Spring::new(0.0, config),
            scale: Spring::new(1.0, config),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.leave();
        }
    }

    pub fn enter(&mut self) {
        if !self.disabled {
            self.hovered = true;
        }
    }

    pub fn pointer_move(&mut self, pointer: Vec2, rect: Rect) {
        if self.disabled {
            return;
        }
        self.offset = pointer_offset(pointer, rect);
    }

    pub fn leave(&mut self) {
        self.offset = Vec2::ZERO;
        self.hovered = false;
        self.pressed = false;
    }

    pub fn press(&mut self) {
        if !self.disabled {
            self.pressed = true;
        }
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Where the springs are heading for the current input.
    pub fn target(&self) -> Tilt {
        let range = (-TILT_INPUT_RANGE, TILT_INPUT_RANGE);
        Tilt {
            rotate_x_deg: map_clamped(self.offset.y, range, (TILT_MAX_DEG, -TILT_MAX_DEG)),
            rotate_y_deg: map_clamped(self.offset.x, range, (-TILT_MAX_DEG, TILT_MAX_DEG)),
            scale: if self.pressed {
                PRESS_SCALE
            } else if self.hovered {
                HOVER_SCALE
            } else {
                1.0
            },
        }
    }

    pub fn step(&mut self, dt_sec: f32) -> Tilt {
        let target = self.target();
        self.rotate_x.step(target.rotate_x_deg, dt_sec);
        self.rotate_y.step(target.rotate_y_deg, dt_sec);
        self.scale.step(target.scale, dt_sec);
        self.tilt()
    }

    pub fn tilt(&self) -> Tilt {
        Tilt {
            rotate_x_deg: self.rotate_x.value,
            rotate_y_deg: self.rotate_y.value,
            scale: self.scale.value,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        let target = self.target();
        self.rotate_x.is_settled(target.rotate_x_deg)
            && self.rotate_y.is_settled(target.rotate_y_deg)
            && self.scale.is_settled(target.scale)
    }
}
