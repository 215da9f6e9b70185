//! Drag handling: live preview and release classification

use mintslide_host::{Host, Node};

use crate::event::SliderEvent;
use crate::gesture::{classify, resist, Direction, DragInput, DragSample, DragState, GestureOutcome};
use crate::math::Vec2;
use super::Slider;

/// Strip offsets closer than this to the page anchor need no snap-back (px)
const SNAP_BACK_EPSILON: f32 = 0.5;

impl<H: Host> Slider<H> {
    /// Start a drag at `start`. `mouse` marks pointer drags from a mouse.
    ///
    /// Mouse drags are ignored unless `mouse_drag` is enabled.
    pub fn drag_start(&mut self, start: Vec2, mouse: bool) {
        if mouse && !self.options.mouse_drag {
            return;
        }
        self.drag = DragState::Dragging { start, mouse };
        if self.options.mouse_drag {
            self.host.add_class(Node::Container, &self.classes.drag);
        }
        self.slideshow.pause(&mut self.host);
    }

    /// Preview a drag displaced by `delta` from its start
    pub fn drag_move(&mut self, delta: Vec2) {
        if !self.drag.is_dragging() {
            return;
        }

        let active = self.pages.active();
        let resisted = resist(
            delta.x,
            self.geometry.page_width,
            self.pages.is_first(active),
            self.pages.is_last(active),
        );
        let preview = self.geometry.page_offset(active) + resisted;

        self.preempt_transition();
        self.driver.set_offset(&mut self.host, preview);
        log::trace!("drag preview: delta={} resisted={resisted} offset={preview}", delta.x);
    }

    /// Finish a drag displaced by `delta` after `elapsed_ms`.
    ///
    /// Returns the committed page, or `None` when the drag had no horizontal
    /// intent (or no drag was in progress).
    pub fn drag_end(&mut self, delta: Vec2, elapsed_ms: f64) -> Option<usize> {
        let start = self.drag.start()?;
        self.drag = DragState::Idle;
        if self.options.mouse_drag {
            self.host.remove_class(Node::Container, &self.classes.drag);
        }
        if self.options.stop_slideshow_after_interaction {
            self.stop_slideshow();
        }

        let sample = DragSample::new(start, delta, elapsed_ms);
        match classify(&sample, self.geometry.page_width) {
            GestureOutcome::Cancelled => {
                self.events.push(SliderEvent::IncompleteSwipe);
                self.snap_back();
                self.slideshow.rearm(&mut self.host);
                None
            }
            outcome @ GestureOutcome::Settle { direction, .. } => {
                let pages = outcome.pages() as i64;
                let active = self.pages.active() as i64;
                let target = match direction {
                    Direction::Forward => active + pages,
                    Direction::Backward => active - pages,
                };
                let page = self.commit(target, self.options.touch_speed);
                if pages == 0 {
                    self.events.push(SliderEvent::IncompleteSwipe);
                }
                Some(page)
            }
        }
    }

    /// Feed one normalized input from a `DragRecognizer`. Returns the page
    /// committed by a drag end, if any.
    pub fn apply_drag(&mut self, input: DragInput) -> Option<usize> {
        match input {
            DragInput::Start { start, mouse } => {
                self.drag_start(start, mouse);
                None
            }
            DragInput::Move { delta } => {
                self.drag_move(delta);
                None
            }
            DragInput::End { delta, elapsed_ms } => self.drag_end(delta, elapsed_ms),
        }
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Return the strip to the active page after a drag that committed
    /// nothing. No page notifications are emitted.
    fn snap_back(&mut self) {
        let anchor = self.geometry.page_offset(self.pages.active());
        if (self.driver.offset() - anchor).abs() < SNAP_BACK_EPSILON {
            return;
        }
        self.driver.animate_to(&mut self.host, anchor, self.options.touch_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlideWidth, SliderOptions};
    use mintslide_host_mock::MockHost;

    fn slider_with(host: MockHost, options: SliderOptions) -> Slider<MockHost> {
        let mut slider = Slider::setup(host, options).unwrap().unwrap();
        slider.take_events();
        slider
    }

    fn slider(host: MockHost) -> Slider<MockHost> {
        let options = SliderOptions {
            slide_width: SlideWidth::Full,
            ..SliderOptions::default()
        };
        slider_with(host, options)
    }

    fn drag(slider: &mut Slider<MockHost>, dx: f32, elapsed_ms: f64) -> Option<usize> {
        slider.drag_start(Vec2::new(200.0, 50.0), false);
        slider.drag_move(Vec2::new(dx, 0.0));
        slider.drag_end(Vec2::new(dx, 0.0), elapsed_ms)
    }

    #[test]
    fn test_preview_follows_pointer() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());
        slider.slide_to(1, Some(0));

        slider.drag_start(Vec2::new(200.0, 50.0), false);
        slider.drag_move(Vec2::new(-40.0, 3.0));

        assert!((slider.offset() + 340.0).abs() < 0.001);
        assert_eq!(slider.host().style(Node::Strip, "transition-duration"), None);
    }

    #[test]
    fn test_preview_resisted_at_first_page() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());

        slider.drag_start(Vec2::new(0.0, 0.0), false);
        slider.drag_move(Vec2::new(150.0, 0.0));

        assert!((slider.offset() - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());

        slider.drag_move(Vec2::new(-100.0, 0.0));

        assert!((slider.offset() - 0.0).abs() < 0.001);
        assert_eq!(slider.drag_end(Vec2::new(-100.0, 0.0), 50.0), None);
        assert!(slider.take_events().is_empty());
    }

    #[test]
    fn test_flick_commits_next_page() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());

        assert_eq!(drag(&mut slider, -50.0, 150.0), Some(1));

        let events = slider.take_events();
        assert!(!events.contains(&SliderEvent::IncompleteSwipe));
        assert_eq!(slider.host().style(Node::Strip, "transition-duration"), Some("300ms"));
    }

    #[test]
    fn test_slow_short_drag_is_incomplete_swipe() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());

        assert_eq!(drag(&mut slider, -50.0, 400.0), Some(0));

        let events = slider.take_events();
        assert_eq!(events.last(), Some(&SliderEvent::IncompleteSwipe));
        assert_eq!(slider.current_page(), 0);
        assert!((slider.offset() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_vertical_drag_snaps_back_silently() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());

        slider.drag_start(Vec2::new(0.0, 0.0), false);
        slider.drag_move(Vec2::new(-20.0, 5.0));
        let result = slider.drag_end(Vec2::new(-20.0, 90.0), 300.0);

        assert_eq!(result, None);
        assert_eq!(slider.take_events(), vec![SliderEvent::IncompleteSwipe]);
        assert!((slider.offset() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_mouse_drag_toggles_drag_class() {
        let mut slider = slider(MockHost::new(3, 300.0));

        slider.drag_start(Vec2::new(0.0, 0.0), true);
        assert!(slider.is_dragging());
        assert!(slider.host().has_class(Node::Container, "peppermint-drag"));

        slider.drag_end(Vec2::new(0.0, 0.0), 10.0);
        assert!(!slider.is_dragging());
        assert!(!slider.host().has_class(Node::Container, "peppermint-drag"));
    }

    #[test]
    fn test_mouse_drag_disabled_ignores_mouse() {
        let options = SliderOptions {
            slide_width: SlideWidth::Full,
            mouse_drag: false,
            ..SliderOptions::default()
        };
        let mut slider = slider_with(MockHost::new(3, 300.0), options);

        slider.drag_start(Vec2::new(0.0, 0.0), true);
        assert!(!slider.is_dragging());

        slider.drag_start(Vec2::new(0.0, 0.0), false);
        assert!(slider.is_dragging());
        assert!(!slider.host().has_class(Node::Container, "peppermint-drag"));
    }

    #[test]
    fn test_backward_drag_past_first_page_clamps() {
        let mut slider = slider(MockHost::new(3, 300.0).with_accelerated());

        assert_eq!(drag(&mut slider, 400.0, 1000.0), Some(0));
        assert_eq!(slider.current_page(), 0);
    }
}
