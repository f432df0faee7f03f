use glam::Vec3;

// Shared scene/motion tuning constants used by the web frontend and the tests.

// Camera
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.5, 11.0);

// Product geometry
pub const RADIAL_SEGMENTS: u32 = 64;

pub const CASE_RADIUS: f32 = 1.2;
pub const CASE_HEIGHT: f32 = 3.0;
pub const CASE_Y: f32 = -1.5;

pub const RING_RADIUS: f32 = 1.12;
pub const RING_HEIGHT: f32 = 0.25;
pub const RING_Y: f32 = 0.1;

pub const TUBE_RADIUS: f32 = 0.95;
pub const TUBE_HEIGHT: f32 = 1.5;
pub const TUBE_Y: f32 = 0.9;

pub const BULLET_RADIUS: f32 = 0.85;
pub const BULLET_HEIGHT: f32 = 2.6;
pub const BULLET_Y: f32 = 2.1;

// Tip slant (applied to bullet vertices above TIP_THRESHOLD_Y)
pub const TIP_THRESHOLD_Y: f32 = 0.0;
pub const TIP_SLOPE: f32 = 0.9;
pub const TIP_CURVE_ABOVE_Y: f32 = 0.5;
pub const TIP_CURVE: f32 = 0.1;

// Wax bump texture
pub const SPECKLE_SIZE: u32 = 512;
pub const SPECKLE_DOTS: u32 = 100_000;
pub const SPECKLE_MAX_OPACITY: f32 = 0.05;
pub const SPECKLE_MAX_RADIUS: f32 = 1.0;
pub const BULLET_BUMP_SCALE: f32 = 0.015;

// Initial group tilt (radians)
pub const REST_TILT_X: f32 = 0.1;
pub const REST_ROLL_Z: f32 = 0.15;

// Per-tick motion
pub const SPIN_PER_TICK: f32 = 0.004; // steady rotation about Y
pub const PARALLAX_GAIN: f32 = 0.3; // pointer [-1,1] -> target radians
pub const PARALLAX_DAMPING: f32 = 0.05; // fraction of the remaining error closed per tick
pub const FLOAT_AMPLITUDE: f32 = 0.15; // world units
pub const FLOAT_RATE_PER_MS: f64 = 0.0015; // radians per millisecond

// Renderer
pub const TONE_MAPPING_EXPOSURE: f32 = 1.2;

// Page shell
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
