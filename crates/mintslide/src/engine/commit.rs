//! The commit path shared by gestures, navigation, focus, indicators,
//! resize and the slideshow

use mintslide_host::{Host, Node};

use crate::event::SliderEvent;
use crate::position::{Completion, Strategy};
use super::Slider;

impl<H: Host> Slider<H> {
    /// Make `candidate` (clamped) the active page and move the strip there
    /// over `duration_ms`.
    ///
    /// Always notifies, even when the page does not change. Returns the page
    /// actually committed.
    pub(crate) fn commit(&mut self, candidate: i64, duration_ms: u32) -> usize {
        let new_page = self.pages.clamp(candidate);
        let old_page = self.pages.active();

        self.events.push(SliderEvent::BeforePageChange {
            old_page,
            new_page,
            is_first: self.pages.is_first(new_page),
            is_last: self.pages.is_last(new_page),
        });

        self.pages.set_active(new_page);
        self.sync_indicators(old_page, new_page);

        let offset = self.geometry.page_offset(new_page);
        let completion = self.driver.animate_to(&mut self.host, offset, duration_ms);
        self.slideshow.rearm(&mut self.host);

        self.events.push(SliderEvent::PageChange { page: new_page });

        match completion {
            Completion::Immediate => {
                self.pending_transition = None;
                self.events.push(SliderEvent::TransitionEnd { page: new_page });
            }
            Completion::Native | Completion::Frames => {
                if let Some(preempted) = self.pending_transition.replace(new_page) {
                    log::debug!("commit to page {new_page} preempts pending transition to page {preempted}");
                }
            }
        }

        log::debug!("commit: page {old_page} -> {new_page} ({duration_ms}ms, {completion:?})");
        new_page
    }

    /// Report that the host's native transition finished.
    ///
    /// Emits `TransitionEnd` for the latest pending commit; returns whether
    /// anything was delivered.
    pub fn handle_transition_end(&mut self) -> bool {
        if self.driver.strategy() != Strategy::Accelerated {
            log::warn!("transition end ignored: fallback animator in use");
            return false;
        }
        match self.pending_transition.take() {
            Some(page) => {
                self.events.push(SliderEvent::TransitionEnd { page });
                true
            }
            None => {
                log::warn!("transition end without a pending commit");
                false
            }
        }
    }

    /// Drop the pending transition-end of the last commit
    pub(crate) fn preempt_transition(&mut self) {
        if let Some(page) = self.pending_transition.take() {
            log::trace!("pending transition to page {page} preempted");
        }
    }

    fn sync_indicators(&mut self, old_page: usize, new_page: usize) {
        if !self.options.dots {
            return;
        }
        self.host.remove_class(Node::Indicator(old_page), &self.classes.active);
        self.host.add_class(Node::Indicator(new_page), &self.classes.active);
    }
}
