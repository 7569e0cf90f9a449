//! Normalized viewport algebra.
//!
//! A viewport describes the currently zoomed sub-region of the full
//! recording as a rectangle in normalized `[0,1]²` coordinates. Nested zoom
//! selections compose multiplicatively, so a chain of selections collapses
//! into a single viewport over the original space.

use serde::{Deserialize, Serialize};

/// A 2-D point or extent in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A region of a larger space: `offset` is the upper-left corner of the
/// view within that space, `size` its extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset: Vec2,
    pub size: Vec2,
}

impl Viewport {
    /// The whole space: zero offset, unit size. Two-sided identity of
    /// [`subview`](Self::subview).
    pub const IDENTITY: Viewport = Viewport {
        offset: Vec2 { x: 0.0, y: 0.0 },
        size: Vec2 { x: 1.0, y: 1.0 },
    };

    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// The smaller region described by zooming into `self` with
    /// `refinement` (itself normalized relative to `self`).
    ///
    /// Composition is associative and performs no bounds validation:
    /// inverted selections carry negative sizes through, and deeply nested
    /// zooms may drift outside `[0,1]²`. Callers that index buffers clamp
    /// at that point instead.
    pub fn subview(&self, refinement: &Viewport) -> Viewport {
        Viewport {
            offset: Vec2 {
                x: self.offset.x + refinement.offset.x * self.size.x,
                y: self.offset.y + refinement.offset.y * self.size.y,
            },
            size: Vec2 {
                x: self.size.x * refinement.size.x,
                y: self.size.y * refinement.size.y,
            },
        }
    }

    /// True when either extent has collapsed to zero or negative size.
    /// Such viewports are accepted (the user made that selection) but
    /// degrade the next render.
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}
