//! Platform abstraction layer
//!
//! Host collaborators the frame loop talks to:
//! - Status text (remaining particle count)
//! - Frame scheduling (display refresh, fixed count, paced sleep)

pub mod scheduler;
pub mod status;

#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::Paced;
pub use scheduler::{FixedFrames, FrameScheduler};
#[cfg(target_arch = "wasm32")]
pub use status::ElementStatus;
pub use status::{LogStatus, StatusSink, remaining_text};
