//! Slider configuration
//!
//! Every recognized option with its default. Options deserialize from the
//! camelCase keys used by the browser binding (`touchSpeed`, `slideWidth`,
//! ...); missing keys fall back to the defaults below.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::SliderError;

/// Default programmatic transition duration in milliseconds
pub const DEFAULT_SPEED_MS: u32 = 300;

/// Default post-touch transition duration in milliseconds
pub const DEFAULT_TOUCH_SPEED_MS: u32 = 300;

/// Default delay between slideshow steps in milliseconds
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u32 = 4000;

/// Default prefix for generated class names
pub const DEFAULT_CSS_PREFIX: &str = "peppermint-";

/// How slide width, and therefore slides per page, is determined
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SlideWidth {
    /// Page width is the container width; slides per page are inferred from
    /// the rendered width of the first slide
    #[default]
    Auto,
    /// One slide per page, each slide stretched to the container width
    Full,
    /// Fixed slide width in pixels; as many whole slides per page as fit
    Fixed(f32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlideWidth {
    Pixels(f32),
    Keyword(String),
}

impl<'de> Deserialize<'de> for SlideWidth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<RawSlideWidth>::deserialize(deserializer)? {
            None => Ok(SlideWidth::Auto),
            Some(RawSlideWidth::Pixels(px)) => Ok(SlideWidth::Fixed(px)),
            Some(RawSlideWidth::Keyword(word)) => match word.as_str() {
                "full" => Ok(SlideWidth::Full),
                "auto" => Ok(SlideWidth::Auto),
                other => Err(de::Error::custom(format!(
                    "unknown slide width `{other}`, expected a number, \"full\" or \"auto\""
                ))),
            },
        }
    }
}

/// Any JSON number as a page index; out-of-range values are clamped later
fn page_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    // Saturating cast, NaN becomes 0
    Ok(raw.floor() as i64)
}

/// Slider options
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    /// Transition duration for programmatic navigation (ms)
    pub speed: u32,
    /// Transition duration after a drag is released (ms)
    pub touch_speed: u32,
    /// Page shown after setup, clamped into range. Fractions round down.
    #[serde(deserialize_with = "page_index")]
    pub start_slide: i64,
    /// Accept mouse drags in addition to touch
    pub mouse_drag: bool,
    /// Leave the widget inert when there is at most one slide
    pub disable_if_one_slide: bool,
    /// Prefix for every generated class name
    pub css_prefix: String,
    /// Derive strip height from page width
    pub slide_height_ratio: Option<f32>,
    /// Slide width mode
    pub slide_width: SlideWidth,
    /// The host supplies its own strip element instead of having one created
    pub slides_container: bool,
    /// `next`/`prev` wrap around at the ends instead of stopping
    pub loop_navigation: bool,
    /// Render one indicator per page
    pub dots: bool,
    /// Place indicators before the strip
    pub dots_first: bool,
    /// Start auto-advancing right after setup
    pub slideshow: bool,
    /// Delay between auto-advance steps (ms)
    pub slideshow_interval: u32,
    /// Stop auto-advancing once the user drags or picks an indicator
    pub stop_slideshow_after_interaction: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_MS,
            touch_speed: DEFAULT_TOUCH_SPEED_MS,
            start_slide: 0,
            mouse_drag: true,
            disable_if_one_slide: true,
            css_prefix: DEFAULT_CSS_PREFIX.to_string(),
            slide_height_ratio: None,
            slide_width: SlideWidth::Auto,
            slides_container: false,
            loop_navigation: true,
            dots: false,
            dots_first: false,
            slideshow: false,
            slideshow_interval: DEFAULT_SLIDESHOW_INTERVAL_MS,
            stop_slideshow_after_interaction: false,
        }
    }
}

impl SliderOptions {
    /// Reject values that can never produce a usable layout
    pub fn validate(&self) -> Result<(), SliderError> {
        if let SlideWidth::Fixed(px) = self.slide_width {
            if !px.is_finite() || px <= 0.0 {
                return Err(SliderError::invalid(
                    "slideWidth",
                    format!("must be a positive number of pixels, got {px}"),
                ));
            }
        }

        if let Some(ratio) = self.slide_height_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(SliderError::invalid(
                    "slideHeightRatio",
                    format!("must be a positive number, got {ratio}"),
                ));
            }
        }

        if self.slideshow_interval == 0 {
            return Err(SliderError::invalid("slideshowInterval", "must be at least 1 ms"));
        }

        Ok(())
    }

    /// Class names generated from `css_prefix`
    pub fn class_names(&self) -> ClassNames {
        ClassNames::with_prefix(&self.css_prefix)
    }
}

/// Generated class names
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    /// Container before setup (removed once the slider is live)
    pub inactive: String,
    /// Container once the slider is live; also the active indicator
    pub active: String,
    /// Container when mouse dragging is enabled
    pub mouse: String,
    /// Container while a drag is in progress
    pub drag: String,
    /// The strip
    pub slides: String,
    /// The indicator list
    pub dots: String,
}

impl ClassNames {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            inactive: format!("{prefix}inactive"),
            active: format!("{prefix}active"),
            mouse: format!("{prefix}mouse"),
            drag: format!("{prefix}drag"),
            slides: format!("{prefix}slides"),
            dots: format!("{prefix}dots"),
        }
    }
}
