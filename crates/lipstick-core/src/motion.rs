//! Per-tick animation of the product group: steady spin, damped pointer
//! parallax and a gentle float.

use crate::constants::*;
use crate::scene::Group;
use glam::Vec2;

/// Client-space rectangle of the render container, CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer position normalized to `[-1, 1]` on both axes, +Y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Map a client position into the container's normalized space.
    ///
    /// Positions outside the container clamp to the nearest edge; a
    /// degenerate rectangle maps to the centre.
    pub fn from_client(client: Vec2, rect: Rect) -> Self {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Self::default();
        }
        let x = ((client.x - rect.left) / rect.width) * 2.0 - 1.0;
        let y = -((client.y - rect.top) / rect.height) * 2.0 + 1.0;
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub spin_per_tick: f32,
    pub parallax_gain: f32,
    pub damping: f32,
    pub rest_roll: f32,
    pub float_amplitude: f32,
    pub float_rate_per_ms: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            spin_per_tick: SPIN_PER_TICK,
            parallax_gain: PARALLAX_GAIN,
            damping: PARALLAX_DAMPING,
            rest_roll: REST_ROLL_Z,
            float_amplitude: FLOAT_AMPLITUDE,
            float_rate_per_ms: FLOAT_RATE_PER_MS,
        }
    }
}

impl MotionParams {
    /// Vertical float offset at `now_ms`: `amplitude * sin(rate * t)`.
    pub fn float_offset(&self, now_ms: f64) -> f32 {
        (self.float_amplitude as f64 * (self.float_rate_per_ms * now_ms).sin()) as f32
    }
}

/// Float offset with the default parameters.
pub fn float_offset(now_ms: f64) -> f32 {
    MotionParams::default().float_offset(now_ms)
}

#[derive(Clone, Debug, Default)]
pub struct Motion {
    pub params: MotionParams,
    pointer: Pointer,
    ticks: u64,
}

impl Motion {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            pointer: Pointer::default(),
            ticks: 0,
        }
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = Pointer {
            x: clamp_unit(pointer.x),
            y: clamp_unit(pointer.y),
        };
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one display refresh.
    pub fn step(&mut self, group: &mut Group, now_ms: f64) {
        let p = &self.params;
        group.rotation.y += p.spin_per_tick;

        let target_x = self.pointer.y * p.parallax_gain;
        let target_z = self.pointer.x * p.parallax_gain + p.rest_roll;
        group.rotation.x += (target_x - group.rotation.x) * p.damping;
        group.rotation.z += (target_z - group.rotation.z) * p.damping;

        group.position.y = p.float_offset(now_ms);
        self.ticks += 1;
    }
}
