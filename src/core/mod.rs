pub mod analysis;
pub mod constants;
pub mod geometry;
pub mod motion;
pub mod params;

pub use analysis::*;
pub use motion::*;
pub use params::*;

// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
