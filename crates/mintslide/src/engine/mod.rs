//! Slider engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `commit`: The single commit path and transition-end bookkeeping
//! - `gesture`: Drag start/move/end handling
//! - `navigation`: next/prev/slideTo, focus and indicator activation, getters
//! - `layout`: Resize handling and indicator rebuilds
//! - `slideshow`: Public slideshow controls
//! - `timers`: Routing of fired host timers

mod commit;
mod gesture;
mod layout;
mod navigation;
mod slideshow;
mod timers;

use mintslide_host::{Host, Node};

use crate::capability::Capabilities;
use crate::config::{ClassNames, SliderOptions};
use crate::error::SliderError;
use crate::event::SliderEvent;
use crate::gesture::DragState;
use crate::layout::{LayoutManager, SliderGeometry};
use crate::page::PageState;
use crate::position::PositionDriver;
use crate::slideshow::Slideshow;

/// Slider engine
///
/// Owns the host and every piece of slider state:
/// - Page state (active page, bounds)
/// - Geometry from the layout manager
/// - Position driver (strip offset, fallback animation timer)
/// - Drag state machine
/// - Slideshow timer
///
/// Notifications are queued rather than called back directly; drain them
/// with [`Slider::take_events`] after each call.
pub struct Slider<H: Host> {
    pub(crate) host: H,
    pub(crate) options: SliderOptions,
    pub(crate) classes: ClassNames,
    pub(crate) capabilities: Capabilities,
    pub(crate) layout: LayoutManager,
    pub(crate) geometry: SliderGeometry,
    pub(crate) pages: PageState,
    pub(crate) driver: PositionDriver,
    pub(crate) drag: DragState,
    pub(crate) slideshow: Slideshow,
    /// Page of the latest commit still waiting for its transition to end
    pub(crate) pending_transition: Option<usize>,
    pub(crate) events: Vec<SliderEvent>,
}

impl<H: Host> Slider<H> {
    /// Set up a slider over the host's slides.
    ///
    /// Returns `Ok(None)` when `disable_if_one_slide` is set and there is at
    /// most one slide; the host is left untouched in that case.
    pub fn setup(mut host: H, options: SliderOptions) -> Result<Option<Self>, SliderError> {
        options.validate()?;

        let total_slides = host.slide_count();
        if options.disable_if_one_slide && total_slides <= 1 {
            log::debug!("setup skipped: {total_slides} slide(s)");
            return Ok(None);
        }
        if total_slides == 0 {
            return Err(SliderError::NoSlides);
        }

        let capabilities = Capabilities::probe(&host);
        let driver = PositionDriver::new(&capabilities);
        let classes = options.class_names();

        host.add_class(Node::Strip, &classes.slides);
        host.mount_strip()?;

        host.add_class(Node::Container, &classes.active);
        host.remove_class(Node::Container, &classes.inactive);
        if options.mouse_drag {
            host.add_class(Node::Container, &classes.mouse);
        }

        let layout = LayoutManager::new(options.slide_width, options.slide_height_ratio);
        let geometry = layout.recompute(&mut host, total_slides);
        let pages = PageState::new(geometry.last_page_index());
        let slideshow = Slideshow::new(options.slideshow_interval);

        let mut slider = Self {
            host,
            options,
            classes,
            capabilities,
            layout,
            geometry,
            pages,
            driver,
            drag: DragState::Idle,
            slideshow,
            pending_transition: None,
            events: Vec::new(),
        };

        if slider.options.dots {
            slider.build_indicators()?;
        }

        let start_page = slider.options.start_slide;
        slider.commit(start_page, 0);

        if slider.options.slideshow {
            slider.slideshow.start(&mut slider.host);
        }

        log::debug!(
            "slider ready: {} slides, {} pages, strategy={:?}",
            total_slides,
            slider.geometry.total_pages,
            slider.driver.strategy()
        );
        slider.events.push(SliderEvent::Setup { total_slides });
        Ok(Some(slider))
    }

    /// Drain queued notifications in emission order
    pub fn take_events(&mut self) -> Vec<SliderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Options the slider was set up with
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Borrow the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
