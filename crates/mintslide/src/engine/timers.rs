//! Routing of fired host timers

use mintslide_host::{Host, TimerId};

use crate::event::SliderEvent;
use crate::position::FrameOutcome;
use super::Slider;

impl<H: Host> Slider<H> {
    /// Deliver a fired timer. Returns whether the timer belonged to the
    /// slider; stale ids are ignored.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.driver.owns_timer(id) {
            if self.driver.handle_frame(&mut self.host, id) == FrameOutcome::Finished {
                if let Some(page) = self.pending_transition.take() {
                    self.events.push(SliderEvent::TransitionEnd { page });
                }
            }
            return true;
        }

        if self.slideshow.fire(&mut self.host, id) {
            log::debug!("slideshow step from page {}", self.pages.active());
            self.next();
            return true;
        }

        log::warn!("ignoring stale timer {}", id.id());
        false
    }
}
