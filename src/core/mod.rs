pub mod analysis;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod interaction;
pub mod mesh;
pub mod params;
pub mod playback;
pub mod state;

pub use analysis::*;
pub use camera::*;
pub use catalog::*;
pub use constants::*;
pub use interaction::*;
pub use mesh::*;
pub use params::*;
pub use playback::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
