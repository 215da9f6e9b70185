//! Slider geometry: page width, slides per page, page count

use serde::Serialize;

use crate::config::SlideWidth;

/// Computed geometry of the slider
///
/// Recomputed wholesale by the layout manager, never patched field by field.
/// `strip_width == page_width * total_pages` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderGeometry {
    /// Horizontal span of one page (px)
    pub page_width: f32,
    /// Slides shown on one page, at least 1
    pub slides_per_page: usize,
    /// Number of slides
    pub total_slides: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
    /// Total scrollable width of the strip (px)
    pub strip_width: f32,
}

impl SliderGeometry {
    /// Compute geometry from measurements
    ///
    /// # Arguments
    /// * `mode` - Slide width configuration
    /// * `container_width` - Rendered container width with no width forced on it
    /// * `first_slide_width` - Rendered width of the first slide (used by `Auto`)
    /// * `total_slides` - Number of slides
    pub fn compute(mode: SlideWidth, container_width: f32, first_slide_width: f32, total_slides: usize) -> Self {
        let container_width = sanitize(container_width);

        let (page_width, slides_per_page) = match mode {
            SlideWidth::Full => (container_width, 1),
            SlideWidth::Auto => {
                let slide = sanitize(first_slide_width);
                let per_page = if slide > 0.0 {
                    (container_width / slide).round() as usize
                } else {
                    1
                };
                (container_width, per_page.max(1))
            }
            SlideWidth::Fixed(slide) => {
                let slide = sanitize(slide);
                let per_page = if slide > 0.0 {
                    ((container_width / slide).floor() as usize).max(1)
                } else {
                    1
                };
                (per_page as f32 * slide, per_page)
            }
        };

        let total_pages = total_slides.div_ceil(slides_per_page).max(1);

        Self {
            page_width,
            slides_per_page,
            total_slides,
            total_pages,
            strip_width: page_width * total_pages as f32,
        }
    }

    /// Index of the last page
    #[inline]
    pub fn last_page_index(&self) -> usize {
        self.total_pages - 1
    }

    /// Strip offset that shows `page` (px, zero or negative)
    #[inline]
    pub fn page_offset(&self, page: usize) -> f32 {
        -(page as f32) * self.page_width
    }

    /// Page that contains slide `slide`
    #[inline]
    pub fn page_of_slide(&self, slide: usize) -> usize {
        slide / self.slides_per_page
    }
}

/// Negative, NaN and infinite measurements count as zero
fn sanitize(px: f32) -> f32 {
    if px.is_finite() && px > 0.0 {
        px
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_mode_one_slide_per_page() {
        let geometry = SliderGeometry::compute(SlideWidth::Full, 300.0, 100.0, 5);

        assert!((geometry.page_width - 300.0).abs() < 0.001);
        assert_eq!(geometry.slides_per_page, 1);
        assert_eq!(geometry.total_pages, 5);
        assert!((geometry.strip_width - 1500.0).abs() < 0.001);
        assert_eq!(geometry.last_page_index(), 4);
    }

    #[test]
    fn test_fixed_mode_fits_whole_slides() {
        let geometry = SliderGeometry::compute(SlideWidth::Fixed(100.0), 350.0, 0.0, 7);

        assert_eq!(geometry.slides_per_page, 3);
        assert!((geometry.page_width - 300.0).abs() < 0.001);
        assert_eq!(geometry.total_pages, 3);
        assert!((geometry.strip_width - 900.0).abs() < 0.001);
    }

    #[test]
    fn test_fixed_mode_slide_wider_than_container() {
        let geometry = SliderGeometry::compute(SlideWidth::Fixed(500.0), 320.0, 0.0, 4);

        assert_eq!(geometry.slides_per_page, 1);
        assert_eq!(geometry.total_pages, 4);
        assert!((geometry.page_width - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_auto_mode_measures_first_slide() {
        let geometry = SliderGeometry::compute(SlideWidth::Auto, 600.0, 190.0, 10);

        // 600 / 190 = 3.16 rounds to 3
        assert_eq!(geometry.slides_per_page, 3);
        assert!((geometry.page_width - 600.0).abs() < 0.001);
        assert_eq!(geometry.total_pages, 4);
    }

    #[test]
    fn test_auto_mode_unmeasurable_slide() {
        let geometry = SliderGeometry::compute(SlideWidth::Auto, 600.0, 0.0, 3);
        assert_eq!(geometry.slides_per_page, 1);
        assert_eq!(geometry.total_pages, 3);

        let geometry = SliderGeometry::compute(SlideWidth::Auto, 100.0, 900.0, 3);
        assert_eq!(geometry.slides_per_page, 1);
    }

    #[test]
    fn test_degenerate_measurements_never_go_below_one() {
        let geometry = SliderGeometry::compute(SlideWidth::Full, f32::NAN, 0.0, 0);
        assert_eq!(geometry.slides_per_page, 1);
        assert_eq!(geometry.total_pages, 1);
        assert!((geometry.page_width - 0.0).abs() < 0.001);

        let geometry = SliderGeometry::compute(SlideWidth::Fixed(100.0), -50.0, 0.0, 2);
        assert_eq!(geometry.slides_per_page, 1);
        assert_eq!(geometry.total_pages, 2);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let a = SliderGeometry::compute(SlideWidth::Fixed(120.0), 500.0, 0.0, 9);
        let b = SliderGeometry::compute(SlideWidth::Fixed(120.0), 500.0, 0.0, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_page_offset_and_slide_lookup() {
        let geometry = SliderGeometry::compute(SlideWidth::Fixed(100.0), 300.0, 0.0, 8);

        assert!((geometry.page_offset(0) - 0.0).abs() < 0.001);
        assert!((geometry.page_offset(2) + 600.0).abs() < 0.001);
        assert_eq!(geometry.page_of_slide(0), 0);
        assert_eq!(geometry.page_of_slide(5), 1);
        assert_eq!(geometry.page_of_slide(7), 2);
    }
}
