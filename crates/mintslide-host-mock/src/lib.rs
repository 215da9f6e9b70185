//! Mock host implementation for testing mintslide
//!
//! This provides an in-memory implementation of the `Host` trait that can
//! be used for testing the slider engine without a browser. Style and class
//! writes are recorded for assertions, and time only moves when the test
//! advances it.

use std::collections::{BTreeMap, BTreeSet};

use mintslide_host::{Host, HostError, Node, TimerId};

/// A single recorded `set_style` call
#[derive(Clone, Debug, PartialEq)]
pub struct StyleWrite {
    pub node: Node,
    pub property: String,
    pub value: Option<String>,
}

/// Simulated timer state
#[derive(Clone, Copy, Debug)]
struct MockTimer {
    due_ms: f64,
    /// `Some` for intervals, `None` for one-shot timeouts
    period_ms: Option<u32>,
}

/// Mock host for unit and integration testing
///
/// Provides a simulated container, slides, clock and timer queue.
pub struct MockHost {
    /// Simulated time in milliseconds
    time_ms: f64,
    /// Style property names the simulated engine recognizes
    supported: BTreeSet<String>,
    denylisted: bool,
    slide_count: usize,
    /// Container width before any explicit `width` style
    natural_width: f32,
    height: f32,
    slide_width: f32,
    styles: BTreeMap<(Node, String), String>,
    style_log: Vec<StyleWrite>,
    classes: BTreeMap<Node, BTreeSet<String>>,
    mounted: bool,
    fail_mount: bool,
    indicators: Option<(usize, bool)>,
    indicator_builds: usize,
    scroll_resets: usize,
    timers: BTreeMap<TimerId, MockTimer>,
    next_timer: u64,
}

impl MockHost {
    /// Create a mock host with the given number of slides and container
    /// width. No transform or transition support is advertised.
    pub fn new(slide_count: usize, container_width: f32) -> Self {
        Self {
            time_ms: 0.0,
            supported: BTreeSet::new(),
            denylisted: false,
            slide_count,
            natural_width: container_width,
            height: 200.0,
            slide_width: container_width,
            styles: BTreeMap::new(),
            style_log: Vec::new(),
            classes: BTreeMap::new(),
            mounted: false,
            fail_mount: false,
            indicators: None,
            indicator_builds: 0,
            scroll_resets: 0,
            timers: BTreeMap::new(),
            next_timer: 1,
        }
    }

    /// Advertise unprefixed `transform` and `transition` support
    pub fn with_accelerated(self) -> Self {
        self.with_properties(&["transform", "transition"])
    }

    /// Advertise support for the given DOM style property names
    pub fn with_properties(mut self, properties: &[&str]) -> Self {
        self.supported.extend(properties.iter().map(|p| p.to_string()));
        self
    }

    /// Set the rendered width of every slide
    pub fn with_slide_width(mut self, width: f32) -> Self {
        self.slide_width = width;
        self
    }

    /// Set the rendered container height
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Mark the simulated engine as one that lies about its capabilities
    pub fn denylisted(mut self) -> Self {
        self.denylisted = true;
        self
    }

    /// Make `mount_strip` fail
    pub fn failing_mount(mut self) -> Self {
        self.fail_mount = true;
        self
    }

    // === Environment changes ===

    /// Change the container width, as a viewport resize would
    pub fn set_container_width(&mut self, width: f32) {
        self.natural_width = width;
    }

    /// Advance the simulated clock without firing timers
    pub fn advance_time(&mut self, ms: f64) {
        self.time_ms += ms;
    }

    /// Set the simulated clock
    pub fn set_time(&mut self, ms: f64) {
        self.time_ms = ms;
    }

    // === Inspection ===

    /// Current value of a CSS property on an element
    pub fn style(&self, node: Node, property: &str) -> Option<&str> {
        self.styles.get(&(node, property.to_string())).map(String::as_str)
    }

    /// Every `set_style` call in order
    pub fn style_log(&self) -> &[StyleWrite] {
        &self.style_log
    }

    /// Forget recorded style writes (current values are kept)
    pub fn clear_style_log(&mut self) {
        self.style_log.clear();
    }

    /// Whether an element currently carries a class
    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.classes.get(&node).is_some_and(|set| set.contains(class))
    }

    /// Current horizontal strip offset, read back from either the
    /// `transform` or the `left` style
    pub fn strip_offset(&self) -> Option<f32> {
        if let Some(transform) = self.style(Node::Strip, "transform") {
            return transform
                .strip_prefix("translateX(")
                .and_then(|rest| rest.strip_suffix("px)"))
                .and_then(|px| px.parse().ok());
        }
        self.style(Node::Strip, "left").and_then(parse_px)
    }

    /// Whether `mount_strip` has been called
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of indicators currently built, if any
    pub fn indicator_count(&self) -> Option<usize> {
        self.indicators.map(|(count, _)| count)
    }

    /// Whether indicators were placed before the strip
    pub fn indicators_before_strip(&self) -> Option<bool> {
        self.indicators.map(|(_, before)| before)
    }

    /// How many times indicators were (re)built
    pub fn indicator_builds(&self) -> usize {
        self.indicator_builds
    }

    /// How many times the container scroll was reset
    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    /// Number of timers currently scheduled
    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of scheduled repeating timers
    pub fn active_intervals(&self) -> usize {
        self.timers.values().filter(|t| t.period_ms.is_some()).count()
    }

    /// Whether a timer is still scheduled
    pub fn is_timer_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Earliest scheduled timer and its due time
    pub fn next_due(&self) -> Option<(TimerId, f64)> {
        self.timers
            .iter()
            .min_by(|a, b| a.1.due_ms.total_cmp(&b.1.due_ms).then(a.0.cmp(b.0)))
            .map(|(id, timer)| (*id, timer.due_ms))
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// The clock jumps to the timer's due time. Intervals are rescheduled one
    /// period later; timeouts are removed. The caller is expected to deliver
    /// the returned id to the slider.
    pub fn take_due_timer(&mut self, until_ms: f64) -> Option<TimerId> {
        let (id, due_ms) = self.next_due()?;
        if due_ms > until_ms {
            return None;
        }
        self.time_ms = self.time_ms.max(due_ms);
        match self.timers.get(&id).and_then(|t| t.period_ms) {
            Some(period) => {
                if let Some(timer) = self.timers.get_mut(&id) {
                    timer.due_ms += f64::from(period.max(1));
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some(id)
    }

    fn schedule(&mut self, delay_ms: u32, period_ms: Option<u32>) -> TimerId {
        let id = TimerId::new(self.next_timer);
        self.next_timer += 1;
        self.timers.insert(
            id,
            MockTimer {
                due_ms: self.time_ms + f64::from(delay_ms),
                period_ms,
            },
        );
        id
    }
}

fn parse_px(value: &str) -> Option<f32> {
    value.strip_suffix("px").and_then(|px| px.parse().ok())
}

impl Host for MockHost {
    fn style_property_defined(&self, property: &str) -> bool {
        self.supported.contains(property)
    }

    fn is_denylisted_engine(&self) -> bool {
        self.denylisted
    }

    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn container_size(&self) -> (f32, f32) {
        let width = self
            .style(Node::Container, "width")
            .and_then(parse_px)
            .unwrap_or(self.natural_width);
        (width, self.height)
    }

    fn first_slide_width(&self) -> f32 {
        if self.slide_count == 0 {
            return 0.0;
        }
        self.style(Node::Slide(0), "width")
            .and_then(parse_px)
            .unwrap_or(self.slide_width)
    }

    fn set_style(&mut self, node: Node, property: &str, value: Option<&str>) {
        self.style_log.push(StyleWrite {
            node,
            property: property.to_string(),
            value: value.map(str::to_string),
        });
        let key = (node, property.to_string());
        match value {
            Some(v) => {
                self.styles.insert(key, v.to_string());
            }
            None => {
                self.styles.remove(&key);
            }
        }
    }

    fn add_class(&mut self, node: Node, class: &str) {
        self.classes.entry(node).or_default().insert(class.to_string());
    }

    fn remove_class(&mut self, node: Node, class: &str) {
        if let Some(set) = self.classes.get_mut(&node) {
            set.remove(class);
        }
    }

    fn mount_strip(&mut self) -> Result<(), HostError> {
        if self.fail_mount {
            return Err(HostError::Dom("mount rejected".to_string()));
        }
        self.mounted = true;
        Ok(())
    }

    fn build_indicators(&mut self, count: usize, _class: &str, before_strip: bool) -> Result<(), HostError> {
        self.classes.retain(|node, _| !matches!(node, Node::Indicator(_)));
        self.indicators = Some((count, before_strip));
        self.indicator_builds += 1;
        Ok(())
    }

    fn reset_scroll(&mut self) {
        self.scroll_resets += 1;
    }

    fn now_ms(&self) -> f64 {
        self.time_ms
    }

    fn set_interval(&mut self, period_ms: u32) -> TimerId {
        self.schedule(period_ms, Some(period_ms))
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        self.schedule(delay_ms, None)
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_width_follows_style() {
        let mut host = MockHost::new(3, 500.0);
        assert!((host.container_size().0 - 500.0).abs() < 0.001);

        host.set_style(Node::Container, "width", Some("320px"));
        assert!((host.container_size().0 - 320.0).abs() < 0.001);

        host.set_style(Node::Container, "width", None);
        assert!((host.container_size().0 - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_strip_offset_reads_transform_and_left() {
        let mut host = MockHost::new(3, 300.0);
        assert!(host.strip_offset().is_none());

        host.set_style(Node::Strip, "left", Some("-150px"));
        assert!((host.strip_offset().unwrap() + 150.0).abs() < 0.001);

        host.set_style(Node::Strip, "transform", Some("translateX(-600px)"));
        assert!((host.strip_offset().unwrap() + 600.0).abs() < 0.001);
    }

    #[test]
    fn test_interval_reschedules() {
        let mut host = MockHost::new(1, 100.0);
        let id = host.set_interval(15);

        assert_eq!(host.take_due_timer(10.0), None);
        assert_eq!(host.take_due_timer(15.0), Some(id));
        assert!((host.now_ms() - 15.0).abs() < 0.001);
        assert_eq!(host.take_due_timer(29.0), None);
        assert_eq!(host.take_due_timer(30.0), Some(id));
        assert!(host.is_timer_active(id));

        host.clear_timer(id);
        assert!(!host.is_timer_active(id));
        // Clearing twice is fine
        host.clear_timer(id);
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut host = MockHost::new(1, 100.0);
        let id = host.set_timeout(100);

        assert_eq!(host.take_due_timer(1000.0), Some(id));
        assert_eq!(host.take_due_timer(1000.0), None);
        assert_eq!(host.active_timers(), 0);
    }

    #[test]
    fn test_classes_are_sets() {
        let mut host = MockHost::new(1, 100.0);
        host.add_class(Node::Container, "active");
        host.add_class(Node::Container, "active");
        assert!(host.has_class(Node::Container, "active"));

        host.remove_class(Node::Container, "active");
        assert!(!host.has_class(Node::Container, "active"));
        host.remove_class(Node::Strip, "missing");
    }
}
