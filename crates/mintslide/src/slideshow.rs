//! Automatic slideshow timer

use mintslide_host::{Host, TimerId};

/// Slideshow state: at most one pending timeout at a time
#[derive(Clone, Debug, PartialEq)]
pub struct Slideshow {
    /// Whether the slideshow is running (may be paused with no timer armed)
    active: bool,
    /// Pending step timeout
    timer: Option<TimerId>,
    /// Delay between steps (ms)
    interval_ms: u32,
}

impl Slideshow {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            active: false,
            timer: None,
            interval_ms,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    /// Start (or restart) the slideshow and schedule the next step
    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.active = true;
        self.arm(host);
    }

    /// Reschedule the next step from now, if running
    pub fn rearm<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.active {
            self.arm(host);
        }
    }

    /// Cancel the pending step but stay active; the next `rearm` resumes
    pub fn pause<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(id) = self.timer.take() {
            host.clear_timer(id);
        }
    }

    /// Stop the slideshow
    pub fn stop<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.pause(host);
        self.active = false;
    }

    /// Consume a fired step timer. Returns whether the timer was ours.
    pub fn fire<H: Host + ?Sized>(&mut self, host: &mut H, id: TimerId) -> bool {
        if !self.owns_timer(id) {
            return false;
        }
        host.clear_timer(id);
        self.timer = None;
        true
    }

    fn arm<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.pause(host);
        self.timer = Some(host.set_timeout(self.interval_ms));
    }
}
