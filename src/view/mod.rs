//! Interactive zoom: viewport algebra and pointer-driven selection.

pub mod selection;
pub mod viewport;

// Re-export commonly used types
pub use selection::{Bounds, Point, PointerEvent, SelectionRect, SelectionState};
pub use viewport::{Vec2, Viewport};
