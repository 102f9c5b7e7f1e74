//! 2D drawing module
//!
//! The simulation never touches a drawing API directly: entities are drawn
//! through the [`Surface`] trait, implemented by the browser canvas and by an
//! in-memory recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{Draw, fade};
pub use surface::Surface;
