// Platform-free scene, motion and page state live in the core crate; the
// product shader ships with it as `PRODUCT_WGSL`.
pub use lipstick_core::*;
