//! Resize handling and page indicators

use mintslide_host::{Host, Node};

use crate::error::SliderError;
use super::Slider;

impl<H: Host> Slider<H> {
    /// Recompute geometry after the container may have changed size and snap
    /// the active page to its new offset without animating.
    ///
    /// Indicators are rebuilt when the page count changed.
    pub fn recalc_width(&mut self) -> Result<(), SliderError> {
        let previous_pages = self.geometry.total_pages;
        let total_slides = self.host.slide_count();

        self.geometry = self.layout.recompute(&mut self.host, total_slides);
        self.pages.set_last_index(self.geometry.last_page_index());

        if self.options.dots && self.geometry.total_pages != previous_pages {
            log::debug!(
                "page count changed {} -> {}, rebuilding indicators",
                previous_pages,
                self.geometry.total_pages
            );
            self.build_indicators()?;
        }

        let active = self.pages.active() as i64;
        self.commit(active, 0);
        Ok(())
    }

    /// Replace the indicators with one per page and mark the active one
    pub(crate) fn build_indicators(&mut self) -> Result<(), SliderError> {
        self.host
            .build_indicators(self.geometry.total_pages, &self.classes.dots, self.options.dots_first)?;
        let active = self.pages.clamp(self.pages.active() as i64);
        self.host.add_class(Node::Indicator(active), &self.classes.active);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlideWidth, SliderOptions};
    use crate::event::SliderEvent;
    use mintslide_host_mock::MockHost;

    fn slider(options: SliderOptions) -> Slider<MockHost> {
        let host = MockHost::new(9, 400.0).with_accelerated();
        let mut slider = Slider::setup(host, options).unwrap().unwrap();
        slider.take_events();
        slider
    }

    fn fixed(dots: bool) -> SliderOptions {
        SliderOptions {
            slide_width: SlideWidth::Fixed(100.0),
            dots,
            ..SliderOptions::default()
        }
    }

    #[test]
    fn test_resize_snaps_without_animation() {
        let mut slider = slider(fixed(false));
        slider.slide_to(2, None);
        slider.take_events();

        slider.host_mut().set_container_width(250.0);
        slider.recalc_width().unwrap();

        assert_eq!(slider.slides_per_page(), 2);
        assert_eq!(slider.total_pages(), 5);
        assert_eq!(slider.current_page(), 2);
        assert!((slider.offset() + 400.0).abs() < 0.001);
        assert_eq!(slider.host().style(Node::Strip, "transition-duration"), None);
        assert_eq!(slider.take_events().last(), Some(&SliderEvent::TransitionEnd { page: 2 }));
    }

    #[test]
    fn test_resize_clamps_active_page() {
        let mut slider = slider(fixed(false));
        slider.host_mut().set_container_width(200.0);
        slider.recalc_width().unwrap();
        slider.slide_to(4, Some(0));

        slider.host_mut().set_container_width(900.0);
        slider.recalc_width().unwrap();

        assert_eq!(slider.total_pages(), 1);
        assert_eq!(slider.current_page(), 0);
    }

    #[test]
    fn test_indicators_built_at_setup() {
        let slider = slider(fixed(true));

        assert_eq!(slider.host().indicator_count(), Some(3));
        assert_eq!(slider.host().indicators_before_strip(), Some(false));
        assert!(slider.host().has_class(Node::Indicator(0), "peppermint-active"));
    }

    #[test]
    fn test_indicators_rebuilt_only_when_page_count_changes() {
        let mut slider = slider(fixed(true));
        assert_eq!(slider.host().indicator_builds(), 1);

        slider.recalc_width().unwrap();
        assert_eq!(slider.host().indicator_builds(), 1);

        slider.host_mut().set_container_width(250.0);
        slider.recalc_width().unwrap();
        assert_eq!(slider.host().indicator_builds(), 2);
        assert_eq!(slider.host().indicator_count(), Some(5));
        assert!(slider.host().has_class(Node::Indicator(0), "peppermint-active"));
    }

    #[test]
    fn test_indicator_follows_active_page() {
        let mut slider = slider(fixed(true));

        slider.next();

        assert!(!slider.host().has_class(Node::Indicator(0), "peppermint-active"));
        assert!(slider.host().has_class(Node::Indicator(1), "peppermint-active"));
    }
}
