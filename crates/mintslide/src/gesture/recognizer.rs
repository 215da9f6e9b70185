//! Pointer stream to drag input
//!
//! Normalizes pointer down/move/up into drag start, move and end inputs for
//! the engine. The first movement locks the gesture to an axis: a vertical
//! gesture is left to the page (scrolling) and reports no horizontal
//! displacement on release, a horizontal one reports no vertical drift.

use crate::math::Vec2;

/// Axis a gesture locked onto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Normalized drag input for the engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    Start { start: Vec2, mouse: bool },
    Move { delta: Vec2 },
    End { delta: Vec2, elapsed_ms: f64 },
}

#[derive(Clone, Copy, Debug)]
struct Tracking {
    pointer_id: i32,
    start: Vec2,
    start_ms: f64,
    axis: Option<Axis>,
    last_delta: Vec2,
}

/// Tracks one pointer at a time
#[derive(Clone, Debug, Default)]
pub struct DragRecognizer {
    tracking: Option<Tracking>,
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pointer is being tracked
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Axis of the tracked gesture, once known
    pub fn axis(&self) -> Option<Axis> {
        self.tracking.and_then(|t| t.axis)
    }

    /// Pointer pressed. Ignored while another pointer is tracked.
    pub fn down(&mut self, pointer_id: i32, position: Vec2, now_ms: f64, mouse: bool) -> Option<DragInput> {
        if self.tracking.is_some() {
            return None;
        }
        self.tracking = Some(Tracking {
            pointer_id,
            start: position,
            start_ms: now_ms,
            axis: None,
            last_delta: Vec2::ZERO,
        });
        Some(DragInput::Start { start: position, mouse })
    }

    /// Pointer moved. Only horizontal gestures produce input.
    pub fn moved(&mut self, pointer_id: i32, position: Vec2) -> Option<DragInput> {
        let tracking = self.tracking.as_mut().filter(|t| t.pointer_id == pointer_id)?;
        let delta = position - tracking.start;

        let axis = match tracking.axis {
            Some(axis) => axis,
            None if delta == Vec2::ZERO => return None,
            None => {
                let axis = if delta.is_mostly_vertical() {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                tracking.axis = Some(axis);
                axis
            }
        };

        match axis {
            Axis::Horizontal => {
                tracking.last_delta = delta;
                Some(DragInput::Move { delta })
            }
            Axis::Vertical => None,
        }
    }

    /// Pointer released
    pub fn up(&mut self, pointer_id: i32, position: Vec2, now_ms: f64) -> Option<DragInput> {
        let tracking = self.take(pointer_id)?;
        let raw = position - tracking.start;
        let delta = match tracking.axis {
            Some(Axis::Vertical) => Vec2::new(0.0, raw.y),
            Some(Axis::Horizontal) => Vec2::new(raw.x, 0.0),
            None => raw,
        };
        Some(DragInput::End {
            delta,
            elapsed_ms: now_ms - tracking.start_ms,
        })
    }

    /// Pointer cancelled by the browser; ends with the last horizontal
    /// displacement seen
    pub fn cancel(&mut self, pointer_id: i32, now_ms: f64) -> Option<DragInput> {
        let tracking = self.take(pointer_id)?;
        Some(DragInput::End {
            delta: Vec2::new(tracking.last_delta.x, 0.0),
            elapsed_ms: now_ms - tracking.start_ms,
        })
    }

    fn take(&mut self, pointer_id: i32) -> Option<Tracking> {
        match self.tracking {
            Some(t) if t.pointer_id == pointer_id => self.tracking.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_drag() {
        let mut drag = DragRecognizer::new();

        assert_eq!(
            drag.down(1, Vec2::new(100.0, 50.0), 0.0, true),
            Some(DragInput::Start {
                start: Vec2::new(100.0, 50.0),
                mouse: true
            })
        );
        assert_eq!(
            drag.moved(1, Vec2::new(80.0, 52.0)),
            Some(DragInput::Move {
                delta: Vec2::new(-20.0, 2.0)
            })
        );
        assert_eq!(drag.axis(), Some(Axis::Horizontal));
        assert_eq!(
            drag.up(1, Vec2::new(50.0, 60.0), 120.0),
            Some(DragInput::End {
                delta: Vec2::new(-50.0, 0.0),
                elapsed_ms: 120.0
            })
        );
        assert!(!drag.is_tracking());
    }

    #[test]
    fn test_vertical_drag_reports_no_horizontal_delta() {
        let mut drag = DragRecognizer::new();
        drag.down(1, Vec2::new(100.0, 50.0), 0.0, false);

        assert_eq!(drag.moved(1, Vec2::new(98.0, 80.0)), None);
        assert_eq!(drag.moved(1, Vec2::new(40.0, 90.0)), None);

        match drag.up(1, Vec2::new(40.0, 120.0), 300.0) {
            Some(DragInput::End { delta, .. }) => assert!((delta.x - 0.0).abs() < 0.001),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_other_pointers_ignored() {
        let mut drag = DragRecognizer::new();
        drag.down(1, Vec2::ZERO, 0.0, false);

        assert_eq!(drag.down(2, Vec2::ZERO, 5.0, false), None);
        assert_eq!(drag.moved(2, Vec2::new(-30.0, 0.0)), None);
        assert_eq!(drag.up(2, Vec2::new(-30.0, 0.0), 10.0), None);
        assert!(drag.is_tracking());
    }

    #[test]
    fn test_cancel_uses_last_horizontal_delta() {
        let mut drag = DragRecognizer::new();
        drag.down(7, Vec2::ZERO, 10.0, false);
        drag.moved(7, Vec2::new(-40.0, 1.0));

        assert_eq!(
            drag.cancel(7, 60.0),
            Some(DragInput::End {
                delta: Vec2::new(-40.0, 0.0),
                elapsed_ms: 50.0
            })
        );
    }

    #[test]
    fn test_horizontal_lock_survives_vertical_drift() {
        let mut drag = DragRecognizer::new();
        drag.down(1, Vec2::new(300.0, 100.0), 0.0, false);
        drag.moved(1, Vec2::new(250.0, 102.0));
        assert_eq!(
            drag.moved(1, Vec2::new(150.0, 200.0)),
            Some(DragInput::Move {
                delta: Vec2::new(-150.0, 100.0)
            })
        );

        assert_eq!(
            drag.up(1, Vec2::new(150.0, 260.0), 600.0),
            Some(DragInput::End {
                delta: Vec2::new(-150.0, 0.0),
                elapsed_ms: 600.0
            })
        );
    }

    #[test]
    fn test_release_without_move_keeps_raw_delta() {
        let mut drag = DragRecognizer::new();
        drag.down(1, Vec2::new(100.0, 100.0), 0.0, false);

        assert_eq!(
            drag.up(1, Vec2::new(90.0, 140.0), 80.0),
            Some(DragInput::End {
                delta: Vec2::new(-10.0, 40.0),
                elapsed_ms: 80.0
            })
        );
    }

    #[test]
    fn test_move_without_down_ignored() {
        let mut drag = DragRecognizer::new();
        assert_eq!(drag.moved(1, Vec2::new(5.0, 0.0)), None);
        assert_eq!(drag.up(1, Vec2::new(5.0, 0.0), 5.0), None);
    }
}
