//! Notifications emitted by the slider
//!
//! The engine queues events in emission order; the embedder drains them
//! with `Slider::take_events` and dispatches to its own callbacks outside of
//! any engine borrow.

use serde::Serialize;

/// Slider notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SliderEvent {
    /// Fired by every commit, before the active page changes
    #[serde(rename_all = "camelCase")]
    BeforePageChange {
        old_page: usize,
        new_page: usize,
        is_first: bool,
        is_last: bool,
    },
    /// Fired by every commit, after the active page changed and the strip
    /// was told to move
    PageChange { page: usize },
    /// Fired exactly once per commit that was not preempted, once the strip
    /// has arrived
    TransitionEnd { page: usize },
    /// A drag ended without moving to another page
    IncompleteSwipe,
    /// Setup finished
    #[serde(rename_all = "camelCase")]
    Setup { total_slides: usize },
}
