//! Host abstraction layer for mintslide
//!
//! This crate defines the `Host` trait that lets the slider engine run
//! against different environments (a browser DOM, an in-memory mock for
//! tests) by abstracting every primitive the engine needs from its
//! surroundings.
//!
//! # Platform Implementations
//!
//! - **Browser**: `web-sys` elements, `window.setInterval`, `performance.now()`
//! - **Mock**: recorded style/class writes and a simulated clock
//!
//! The engine never parses raw input events and never touches the DOM
//! directly; everything goes through these primitives.

/// Identifier of a host-owned timer (interval or timeout)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

impl TimerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// An element the engine can style or tag with classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// The outer slider element
    Container,
    /// The wide element holding every slide side by side
    Strip,
    /// A single slide, by index in document order
    Slide(usize),
    /// A page indicator ("dot"), by page index
    Indicator(usize),
}

/// Host abstraction trait
///
/// Implementations provide environment-specific functionality for:
/// - Capability primitives (style property recognition)
/// - Box measurement
/// - Style and class mutation
/// - Time and timers
///
/// Timers are fire-and-report: the host only schedules them. When one
/// fires, the host calls back into the slider with the `TimerId` it handed
/// out. Clearing an unknown or already cleared timer must be a no-op.
pub trait Host {
    // === Capabilities ===

    /// Whether the style system recognizes the given DOM style property name
    /// (e.g. `"transform"`, `"WebkitTransition"`)
    fn style_property_defined(&self, property: &str) -> bool;

    /// Whether the rendering engine is known to advertise transforms and
    /// transitions while rendering them incorrectly
    fn is_denylisted_engine(&self) -> bool {
        false
    }

    // === Measurement ===

    /// Number of slide elements found in the slide source
    fn slide_count(&self) -> usize;

    /// Rendered box size of the container as `(width, height)` in pixels
    fn container_size(&self) -> (f32, f32);

    /// Rendered width of the first slide in pixels (0 when there is none)
    fn first_slide_width(&self) -> f32;

    // === Mutation ===

    /// Set (`Some`) or remove (`None`) a CSS property on an element
    fn set_style(&mut self, node: Node, property: &str, value: Option<&str>);

    /// Add a class to an element (no-op when already present)
    fn add_class(&mut self, node: Node, class: &str);

    /// Remove a class from an element (no-op when absent)
    fn remove_class(&mut self, node: Node, class: &str);

    /// Move the slides into the strip and attach the strip to the container.
    ///
    /// Hosts that were given an externally supplied strip leave the tree
    /// untouched.
    fn mount_strip(&mut self) -> Result<(), HostError>;

    /// Replace the page indicators with `count` fresh ones, placed before
    /// the strip when `before_strip` is set and after it otherwise
    fn build_indicators(&mut self, count: usize, class: &str, before_strip: bool) -> Result<(), HostError>;

    /// Reset the container's horizontal scroll position
    fn reset_scroll(&mut self);

    // === Time ===

    /// Monotonic time in milliseconds
    fn now_ms(&self) -> f64;

    /// Schedule a repeating timer
    fn set_interval(&mut self, period_ms: u32) -> TimerId;

    /// Schedule a one-shot timer
    fn set_timeout(&mut self, delay_ms: u32) -> TimerId;

    /// Cancel a timer
    fn clear_timer(&mut self, id: TimerId);
}

/// Host errors
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// A required element could not be found or created
    #[error("missing element: {0}")]
    MissingElement(String),

    /// The environment rejected a tree mutation
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_id_roundtrip() {
        let id = TimerId::new(42);
        assert_eq!(id.id(), 42);
        assert_eq!(id, TimerId(42));
    }

    #[test]
    fn test_node_ordering_groups_by_kind() {
        let mut nodes = vec![Node::Indicator(0), Node::Slide(1), Node::Container, Node::Strip, Node::Slide(0)];
        nodes.sort();
        assert_eq!(
            nodes,
            vec![Node::Container, Node::Strip, Node::Slide(0), Node::Slide(1), Node::Indicator(0)]
        );
    }

    #[test]
    fn test_host_error_display() {
        let err = HostError::MissingElement("strip".to_string());
        assert_eq!(err.to_string(), "missing element: strip");
    }
}
