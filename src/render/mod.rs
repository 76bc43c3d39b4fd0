pub mod overlay;
pub mod skeleton;
pub mod window;

pub use overlay::{draw_pose, draw_status};
pub use skeleton::SKELETON_CONNECTIONS;
pub use window::MinifbRenderer;
