//! Pointer gesture state machine.
//!
//! Tracks one active pointer between down and up and converts its movement
//! into incremental orbit deltas. A second pointer pressed mid-drag is
//! ignored until the first is released or cancelled.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A point in CSS pixels relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Result of feeding a pointer event to [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    None,
    /// Drag step in CSS pixels since the previous event.
    Orbit { dx: f64, dy: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    pointer_id: i32,
    last: Point,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    drag: Option<Drag>,
}

impl InputState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag. Returns `false` if another pointer already owns the gesture.
    pub fn pointer_down(&mut self, pointer_id: i32, at: Point) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(Drag { pointer_id, last: at });
        true
    }

    /// Advance the drag owned by `pointer_id`.
    pub fn pointer_move(&mut self, pointer_id: i32, at: Point) -> Gesture {
        let Some(drag) = self.drag.as_mut() else {
            return Gesture::None;
        };
        if drag.pointer_id != pointer_id {
            return Gesture::None;
        }
        let (dx, dy) = (at.x - drag.last.x, at.y - drag.last.y);
        drag.last = at;
        if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
            return Gesture::None;
        }
        Gesture::Orbit { dx, dy }
    }

    /// End the drag owned by `pointer_id`; other pointers are ignored.
    pub fn pointer_up(&mut self, pointer_id: i32) {
        if self.drag.is_some_and(|d| d.pointer_id == pointer_id) {
            self.drag = None;
        }
    }

    /// Drop any gesture, e.g. when the pointer is captured elsewhere.
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
