//! Layout manager
//!
//! Measures the container through the host, computes `SliderGeometry` and
//! writes the resulting widths back (container clamp, strip width, per-slide
//! widths, optional strip height).

mod geometry;

pub use geometry::SliderGeometry;

use mintslide_host::{Host, Node};

use crate::config::SlideWidth;

/// Computes and applies slider geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutManager {
    mode: SlideWidth,
    height_ratio: Option<f32>,
}

impl LayoutManager {
    pub fn new(mode: SlideWidth, height_ratio: Option<f32>) -> Self {
        Self { mode, height_ratio }
    }

    /// Measure, compute and apply geometry.
    ///
    /// Calling this twice without the container changing yields the same
    /// geometry: in fixed-width mode the container clamp from the previous
    /// pass is removed before measuring.
    pub fn recompute<H: Host + ?Sized>(&self, host: &mut H, total_slides: usize) -> SliderGeometry {
        let geometry = match self.mode {
            SlideWidth::Fixed(_) => {
                host.set_style(Node::Container, "width", None);
                let (container_width, _) = host.container_size();
                let geometry = SliderGeometry::compute(self.mode, container_width, 0.0, total_slides);
                host.set_style(Node::Container, "width", Some(&px(geometry.page_width)));
                host.set_style(Node::Strip, "width", Some(&px(geometry.strip_width)));
                geometry
            }
            SlideWidth::Full => {
                let (container_width, _) = host.container_size();
                let geometry = SliderGeometry::compute(self.mode, container_width, 0.0, total_slides);
                // Pixel widths avoid sub-pixel rounding drift between slides
                host.set_style(Node::Strip, "width", Some(&px(geometry.strip_width)));
                let slide_width = px(geometry.page_width);
                for index in 0..total_slides {
                    host.set_style(Node::Slide(index), "width", Some(&slide_width));
                }
                geometry
            }
            SlideWidth::Auto => {
                let (container_width, _) = host.container_size();
                let first_slide_width = host.first_slide_width();
                SliderGeometry::compute(self.mode, container_width, first_slide_width, total_slides)
            }
        };

        if let Some(ratio) = self.height_ratio {
            host.set_style(Node::Strip, "height", Some(&px((geometry.page_width * ratio).ceil())));
        }

        log::debug!(
            "layout: page_width={} slides_per_page={} total_pages={}",
            geometry.page_width,
            geometry.slides_per_page,
            geometry.total_pages
        );
        geometry
    }
}

fn px(value: f32) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintslide_host_mock::MockHost;

    #[test]
    fn test_fixed_mode_clamps_container() {
        let mut host = MockHost::new(7, 350.0);
        let layout = LayoutManager::new(SlideWidth::Fixed(100.0), None);

        let geometry = layout.recompute(&mut host, 7);

        assert_eq!(geometry.slides_per_page, 3);
        assert_eq!(host.style(Node::Container, "width"), Some("300px"));
        assert_eq!(host.style(Node::Strip, "width"), Some("900px"));
    }

    #[test]
    fn test_fixed_mode_is_idempotent() {
        let mut host = MockHost::new(7, 350.0);
        let layout = LayoutManager::new(SlideWidth::Fixed(100.0), None);

        let first = layout.recompute(&mut host, 7);
        let second = layout.recompute(&mut host, 7);

        assert_eq!(first, second);
    }

    #[test]
    fn test_full_mode_sizes_every_slide() {
        let mut host = MockHost::new(3, 320.0);
        let layout = LayoutManager::new(SlideWidth::Full, None);

        let geometry = layout.recompute(&mut host, 3);

        assert!((geometry.page_width - 320.0).abs() < 0.001);
        assert_eq!(host.style(Node::Strip, "width"), Some("960px"));
        for index in 0..3 {
            assert_eq!(host.style(Node::Slide(index), "width"), Some("320px"));
        }
    }

    #[test]
    fn test_auto_mode_writes_nothing() {
        let mut host = MockHost::new(6, 600.0).with_slide_width(200.0);
        let layout = LayoutManager::new(SlideWidth::Auto, None);

        let geometry = layout.recompute(&mut host, 6);

        assert_eq!(geometry.slides_per_page, 3);
        assert_eq!(geometry.total_pages, 2);
        assert!(host.style_log().is_empty());
    }

    #[test]
    fn test_height_ratio_sets_strip_height() {
        let mut host = MockHost::new(3, 301.0);
        let layout = LayoutManager::new(SlideWidth::Full, Some(0.5));

        layout.recompute(&mut host, 3);

        // ceil(301 * 0.5)
        assert_eq!(host.style(Node::Strip, "height"), Some("151px"));
    }

    #[test]
    fn test_narrower_container_reduces_slides_per_page() {
        let mut host = MockHost::new(9, 400.0);
        let layout = LayoutManager::new(SlideWidth::Fixed(100.0), None);

        let wide = layout.recompute(&mut host, 9);
        host.set_container_width(250.0);
        let narrow = layout.recompute(&mut host, 9);

        assert_eq!(wide.slides_per_page, 4);
        assert_eq!(wide.total_pages, 3);
        assert_eq!(narrow.slides_per_page, 2);
        assert_eq!(narrow.total_pages, 5);
        assert_eq!(host.style(Node::Container, "width"), Some("200px"));
    }
}
