//! Pointer-driven zoom selection.
//!
//! Turns a stream of press/drag/release/cancel events into viewport
//! refinements. A drag sweeps out a rubber-band rectangle in screen
//! coordinates; on release the rectangle is normalized against the layout
//! bounds and composed into the current viewport. The state machine owns
//! both the transient rectangle and the cumulative viewport, so the render
//! loop threads one value through instead of sharing mutable state.

use super::viewport::{Vec2, Viewport};

/// A position in the renderer's local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The layout box selections are normalized against, in the same pixel
/// coordinate space as the pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pointer events consumed by the selection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release(Point),
    Cancel,
}

/// The rubber-band rectangle of an in-progress drag.
///
/// `origin` is the press point and stays fixed; `corner` follows the
/// pointer. The rectangle is not normalized, so dragging up or left leaves
/// `corner` below `origin` on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRect {
    pub origin: Point,
    pub corner: Point,
}

/// Tracks the active drag selection and the cumulative zoom viewport.
///
/// The viewport starts out absent and adopts the first completed
/// selection; every later selection refines it via
/// [`Viewport::subview`]. It is never reset, only narrowed.
#[derive(Debug, Default)]
pub struct SelectionState {
    selection: Option<SelectionRect>,
    viewport: Option<Viewport>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cumulative viewport, absent until the first selection completes.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// The rubber-band rectangle of the active drag, for the renderer to
    /// draw as feedback. Absent when idle.
    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_some()
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Returns the newly composed viewport when a release completes a
    /// selection, `None` for every other event. Drag and release events
    /// arriving while idle are ignored. An inverted drag (release above or
    /// left of the press) produces a viewport with negative size, which is
    /// propagated unvalidated just like any other composition.
    pub fn handle(&mut self, event: PointerEvent, bounds: Bounds) -> Option<Viewport> {
        match event {
            PointerEvent::Press(p) => {
                self.selection = Some(SelectionRect { origin: p, corner: p });
                None
            }
            PointerEvent::Drag(p) => {
                if let Some(rect) = &mut self.selection {
                    rect.corner = p;
                }
                None
            }
            PointerEvent::Release(p) => {
                let mut rect = self.selection.take()?;
                rect.corner = p;

                let refinement = Self::normalize(&rect, bounds);
                let composed = match self.viewport {
                    Some(current) => current.subview(&refinement),
                    None => refinement,
                };
                self.viewport = Some(composed);
                Some(composed)
            }
            PointerEvent::Cancel => {
                self.selection = None;
                None
            }
        }
    }

    /// Map a screen-space rectangle onto the `[0,1]²` coordinates of the
    /// current view: press point over bounds as offset, signed drag extent
    /// over bounds as size.
    fn normalize(rect: &SelectionRect, bounds: Bounds) -> Viewport {
        let w = bounds.width as f32;
        let h = bounds.height as f32;
        Viewport::new(
            Vec2::new(rect.origin.x as f32 / w, rect.origin.y as f32 / h),
            Vec2::new(
                (rect.corner.x - rect.origin.x) as f32 / w,
                (rect.corner.y - rect.origin.y) as f32 / h,
            ),
        )
    }
}
