pub mod constants;
pub mod content;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod motion;
pub mod reveal;
pub mod scene;
pub mod shell;
pub mod texture;

pub static PRODUCT_WGSL: &str = include_str!("../shaders/product.wgsl");

pub use error::*;
pub use geometry::{Geometry, SlantTip, Vertex};
pub use lifecycle::*;
pub use motion::*;
pub use reveal::Reveal;
pub use scene::*;
pub use shell::ShellState;
pub use texture::{BumpMap, SpeckleParams};
