//! Slideshow controls

use mintslide_host::Host;

use super::Slider;

impl<H: Host> Slider<H> {
    /// Start auto-advancing every `slideshow_interval` ms
    pub fn start_slideshow(&mut self) {
        log::debug!("slideshow started");
        self.slideshow.start(&mut self.host);
    }

    /// Stop auto-advancing
    pub fn stop_slideshow(&mut self) {
        if self.slideshow.is_active() {
            log::debug!("slideshow stopped");
        }
        self.slideshow.stop(&mut self.host);
    }

    /// Cancel the pending step; the next commit re-arms it
    pub fn pause_slideshow(&mut self) {
        self.slideshow.pause(&mut self.host);
    }

    /// Whether the slideshow is running
    pub fn is_slideshow_active(&self) -> bool {
        self.slideshow.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlideWidth, SliderOptions};
    use crate::math::Vec2;
    use mintslide_host_mock::MockHost;

    fn slider(stop_after_interaction: bool) -> Slider<MockHost> {
        let options = SliderOptions {
            slide_width: SlideWidth::Full,
            slideshow: true,
            slideshow_interval: 1000,
            stop_slideshow_after_interaction: stop_after_interaction,
            ..SliderOptions::default()
        };
        let mut slider = Slider::setup(MockHost::new(3, 300.0), options).unwrap().unwrap();
        slider.take_events();
        slider
    }

    #[test]
    fn test_slideshow_starts_at_setup() {
        let slider = slider(false);

        assert!(slider.is_slideshow_active());
        assert_eq!(slider.host().active_timers(), 1);
    }

    #[test]
    fn test_drag_pauses_and_release_resumes() {
        let mut slider = slider(false);

        slider.drag_start(Vec2::new(0.0, 0.0), false);
        assert_eq!(slider.host().active_timers(), 0);
        assert!(slider.is_slideshow_active());

        slider.drag_end(Vec2::new(0.0, 0.0), 50.0);
        assert_eq!(slider.host().active_timers(), 1);
    }

    #[test]
    fn test_release_stops_when_configured() {
        let mut slider = slider(true);

        slider.drag_start(Vec2::new(0.0, 0.0), false);
        slider.drag_end(Vec2::new(-50.0, 0.0), 100.0);

        assert!(!slider.is_slideshow_active());
    }

    #[test]
    fn test_indicator_activation_stops_when_configured() {
        let mut slider = slider(true);

        slider.activate_indicator(2);

        assert!(!slider.is_slideshow_active());
        assert_eq!(slider.current_page(), 2);
    }

    #[test]
    fn test_stop_and_restart() {
        let mut slider = slider(false);

        slider.stop_slideshow();
        assert!(!slider.is_slideshow_active());
        slider.next();
        assert_eq!(slider.host().active_timers(), 1, "only the fallback animation timer");
        assert_eq!(slider.host().active_intervals(), 1);

        slider.start_slideshow();
        assert!(slider.is_slideshow_active());
    }

    #[test]
    fn test_pause_keeps_slideshow_active() {
        let mut slider = slider(false);

        slider.pause_slideshow();

        assert!(slider.is_slideshow_active());
        assert_eq!(slider.host().active_timers(), 0);
    }
}
