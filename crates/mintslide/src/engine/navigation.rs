//! Programmatic navigation and read-only getters

use mintslide_host::Host;

use crate::capability::Capabilities;
use crate::layout::SliderGeometry;
use crate::math::Size;
use crate::position::Strategy;
use super::Slider;

impl<H: Host> Slider<H> {
    /// Go to the next page, wrapping to the first page when `loop_navigation`
    /// is set and clamping otherwise
    pub fn next(&mut self) -> usize {
        let active = self.pages.active();
        let target = if active < self.pages.last_index() {
            active + 1
        } else if self.options.loop_navigation {
            0
        } else {
            active
        };
        self.commit(target as i64, self.options.speed)
    }

    /// Go to the previous page, wrapping to the last page when
    /// `loop_navigation` is set and clamping otherwise
    pub fn prev(&mut self) -> usize {
        let active = self.pages.active();
        let target = if active > 0 {
            active - 1
        } else if self.options.loop_navigation {
            self.pages.last_index()
        } else {
            0
        };
        self.commit(target as i64, self.options.speed)
    }

    /// Go to `page` (clamped) over `speed_ms`, or the configured speed.
    /// Does nothing when already there.
    pub fn slide_to(&mut self, page: i64, speed_ms: Option<u32>) -> usize {
        let target = self.pages.clamp(page);
        if target != self.pages.active() {
            self.commit(target as i64, speed_ms.unwrap_or(self.options.speed));
        }
        self.pages.active()
    }

    /// Bring the page holding `slide_index` into view after focus moved
    /// into that slide
    pub fn focus_slide(&mut self, slide_index: usize) -> usize {
        self.host.reset_scroll();
        let page = self.geometry.page_of_slide(slide_index);
        self.commit(page as i64, self.options.speed)
    }

    /// Go to the page of an activated indicator
    pub fn activate_indicator(&mut self, page: usize) -> usize {
        if self.options.stop_slideshow_after_interaction {
            self.stop_slideshow();
        }
        let page = i64::try_from(page).unwrap_or(i64::MAX);
        self.commit(page, self.options.speed)
    }

    /// Active page
    #[inline]
    pub fn current_page(&self) -> usize {
        self.pages.active()
    }

    /// Number of pages
    #[inline]
    pub fn total_pages(&self) -> usize {
        self.geometry.total_pages
    }

    #[inline]
    pub fn slides_per_page(&self) -> usize {
        self.geometry.slides_per_page
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> &SliderGeometry {
        &self.geometry
    }

    /// Container box size as measured by the host
    pub fn slider_dimensions(&self) -> Size {
        Size::from(self.host.container_size())
    }

    /// Probed capabilities
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Animation strategy in use
    pub fn strategy(&self) -> Strategy {
        self.driver.strategy()
    }

    /// Current physical strip offset (px)
    pub fn offset(&self) -> f32 {
        self.driver.offset()
    }
}
