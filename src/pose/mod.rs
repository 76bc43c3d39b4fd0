pub mod detector;
pub mod keypoint;
pub mod preprocess;

pub use detector::PoseDetector;
pub use keypoint::{Landmark, LandmarkIndex, Pose};
pub use preprocess::{preprocess_frame, POSE_INPUT_SIZE};
