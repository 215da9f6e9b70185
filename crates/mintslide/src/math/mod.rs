//! Core geometry types
//!
//! Plain data types for pointer positions, drag deltas and box sizes.

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
