//! Drag state for the gesture engine

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// One sample of an in-progress or finished drag, as reported by the
/// host's drag recognizer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSample {
    /// Pointer position when the drag started
    pub start: Vec2,
    /// Displacement from `start` (px)
    pub delta: Vec2,
    /// Time since the drag started (ms)
    pub elapsed_ms: f64,
}

impl DragSample {
    pub fn new(start: Vec2, delta: Vec2, elapsed_ms: f64) -> Self {
        Self { start, delta, elapsed_ms }
    }
}

/// Current drag state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// A drag is in progress
    Dragging {
        /// Pointer position at drag start
        start: Vec2,
        /// Whether the drag comes from a mouse rather than touch
        mouse: bool,
    },
}

impl DragState {
    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Start position if dragging
    pub fn start(&self) -> Option<Vec2> {
        match self {
            DragState::Dragging { start, .. } => Some(*start),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.start().is_none());
    }

    #[test]
    fn test_dragging_state() {
        let state = DragState::Dragging {
            start: Vec2::new(10.0, 20.0),
            mouse: true,
        };
        assert!(state.is_dragging());
        assert_eq!(state.start(), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_sample_from_json() {
        let sample: DragSample =
            serde_json::from_str(r#"{"start":{"x":5,"y":6},"delta":{"x":-40,"y":2},"elapsedMs":120}"#).unwrap();
        assert!((sample.delta.x + 40.0).abs() < 0.001);
        assert!((sample.elapsed_ms - 120.0).abs() < 0.001);
    }
}
