//! Position driver
//!
//! Owns the physical strip offset and moves it either through a CSS
//! transition (accelerated strategy) or through an interval-stepped ease-out
//! animation (fallback strategy). The strategy is fixed at construction from
//! the capability probe.

mod easing;
mod fallback;

pub use easing::{cubic_bezier, ease_out, lerp, EASE_OUT_POINTS};
pub use fallback::FallbackAnimation;

use mintslide_host::{Host, Node, TimerId};

use crate::capability::Capabilities;

/// Tick period of the fallback animator in milliseconds
pub const FALLBACK_FRAME_MS: u32 = 15;

/// Offsets closer than this are treated as equal
const OFFSET_EPSILON: f32 = 0.01;

/// Animation strategy chosen at setup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The host animates natively via a CSS transition
    Accelerated,
    /// The driver steps the offset from a repeating timer
    Fallback,
}

/// How the completion of an `animate_to` request will be observed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The offset is already final; nothing further will report completion
    Immediate,
    /// The host will report a native transition-end event
    Native,
    /// A fallback frame will report `FrameOutcome::Finished`
    Frames,
}

/// Result of delivering a timer tick to the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The timer is not the driver's current animation timer
    Ignored,
    /// The animation advanced and keeps running
    Running,
    /// The animation reached its target and stopped
    Finished,
}

/// Drives the strip offset
#[derive(Debug)]
pub struct PositionDriver {
    transform_property: Option<&'static str>,
    transition_property: Option<&'static str>,
    /// Whether the host reports native transition-end events
    native_completion: bool,
    /// Last offset written to the strip (px)
    offset: f32,
    /// In-flight fallback animation
    animation: Option<FallbackAnimation>,
    /// Timer stepping `animation`; at most one per driver
    timer: Option<TimerId>,
}

impl PositionDriver {
    /// Create a driver for the probed capabilities
    pub fn new(caps: &Capabilities) -> Self {
        Self {
            transform_property: caps.transform_property,
            transition_property: caps.transition_property,
            native_completion: caps.transition_end_event.is_some(),
            offset: 0.0,
            animation: None,
            timer: None,
        }
    }

    /// Strategy in use
    pub fn strategy(&self) -> Strategy {
        if self.transition_property.is_some() {
            Strategy::Accelerated
        } else {
            Strategy::Fallback
        }
    }

    /// Current physical offset (px)
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a fallback animation is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether `id` is the driver's animation timer
    #[inline]
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    /// Jump to `offset` without animating. Any in-flight fallback animation
    /// is cancelled.
    pub fn set_offset<H: Host + ?Sized>(&mut self, host: &mut H, offset: f32) {
        match self.strategy() {
            Strategy::Accelerated => self.write_duration(host, 0),
            Strategy::Fallback => self.cancel(host),
        }
        self.write(host, offset);
    }

    /// Move to `offset` over `duration_ms`
    pub fn animate_to<H: Host + ?Sized>(&mut self, host: &mut H, offset: f32, duration_ms: u32) -> Completion {
        let unchanged = (offset - self.offset).abs() < OFFSET_EPSILON;

        match self.strategy() {
            Strategy::Accelerated => {
                self.write_duration(host, duration_ms);
                self.write(host, offset);
                if duration_ms == 0 || unchanged || !self.native_completion {
                    Completion::Immediate
                } else {
                    Completion::Native
                }
            }
            Strategy::Fallback => {
                self.cancel(host);
                if duration_ms == 0 || unchanged {
                    self.write(host, offset);
                    return Completion::Immediate;
                }
                self.animation = Some(FallbackAnimation::new(self.offset, offset, host.now_ms(), duration_ms));
                self.timer = Some(host.set_interval(FALLBACK_FRAME_MS));
                log::trace!("fallback animation {} -> {} over {}ms", self.offset, offset, duration_ms);
                Completion::Frames
            }
        }
    }

    /// Advance the fallback animation for a fired timer
    pub fn handle_frame<H: Host + ?Sized>(&mut self, host: &mut H, id: TimerId) -> FrameOutcome {
        if !self.owns_timer(id) {
            return FrameOutcome::Ignored;
        }
        let animation = match &self.animation {
            Some(anim) => anim.clone(),
            None => {
                self.cancel(host);
                return FrameOutcome::Ignored;
            }
        };

        let now = host.now_ms();
        if animation.is_complete(now) {
            self.cancel(host);
            self.write(host, animation.target());
            FrameOutcome::Finished
        } else {
            self.write(host, animation.current(now));
            FrameOutcome::Running
        }
    }

    /// Stop any fallback animation. Safe to call when nothing is running.
    pub fn cancel<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(id) = self.timer.take() {
            host.clear_timer(id);
        }
        self.animation = None;
    }

    fn write_duration<H: Host + ?Sized>(&self, host: &mut H, duration_ms: u32) {
        if let Some(property) = self.transition_property {
            if duration_ms > 0 {
                host.set_style(Node::Strip, property, Some(&format!("{duration_ms}ms")));
            } else {
                host.set_style(Node::Strip, property, None);
            }
        }
    }

    fn write<H: Host + ?Sized>(&mut self, host: &mut H, offset: f32) {
        match self.transform_property {
            Some(property) => host.set_style(Node::Strip, property, Some(&format!("translateX({offset}px)"))),
            None => host.set_style(Node::Strip, "left", Some(&format!("{offset}px"))),
        }
        self.offset = offset;
    }
}
