//! Document surface for in-place markdown cleanup.
//!
//! Provides the [`TextSurface`] capability trait that commands edit through,
//! and a rope-backed [`EditorBuffer`] implementing it.

mod buffer;
mod position;
mod surface;

pub use buffer::EditorBuffer;
pub use position::{ParsePositionError, Position, Selection};
pub use surface::TextSurface;
