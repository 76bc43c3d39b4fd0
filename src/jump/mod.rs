pub mod baseline;
pub mod observe;
pub mod session;

pub use baseline::{BaselineTracker, Calibration};
pub use observe::BodyObservation;
pub use session::{Height, JumpSession, JumpStatus, Phase};
