//! Gesture interpretation
//!
//! Pure functions that turn a drag stream into page decisions:
//! - `resist`: sub-linear displacement at the first/last page
//! - `classify`: flick / deliberate drag / incomplete swipe on release
//!
//! The engine owns the drag state machine (`DragState`) and feeds these
//! with samples from `DragRecognizer`, which turns raw pointer events into
//! axis-locked drag inputs.

mod classify;
mod drag;
mod recognizer;

pub use classify::{
    classify, resist, Direction, GestureOutcome, FLICK_THRESHOLD_MS, SHORT_FLICK_DISTANCE, SKIP_REMAINDER_THRESHOLD,
};
pub use drag::{DragSample, DragState};
pub use recognizer::{Axis, DragInput, DragRecognizer};
