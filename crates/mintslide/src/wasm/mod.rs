//! WASM exports for the slider
//!
//! This module wires a `Slider<DomHost>` to browser events (pointer drags,
//! transition ends, resizes, focus) and exposes it to JavaScript as
//! `MintSlider`. Notifications are delivered to the callbacks found on the
//! options object once the engine borrow is released, so callbacks may call
//! back into the slider.

mod dom;
mod logger;

pub use dom::DomHost;
pub use logger::ConsoleLogger;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Function, Reflect};
use mintslide_host::TimerId;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, PointerEvent};

use crate::config::SliderOptions;
use crate::engine::Slider;
use crate::event::SliderEvent;
use crate::gesture::{Axis, DragInput, DragRecognizer};
use crate::math::Vec2;

/// User callbacks read from the options object
struct Callbacks {
    before_page_change: Option<Function>,
    on_page_change: Option<Function>,
    on_transition_end: Option<Function>,
    on_incomplete_swipe: Option<Function>,
    on_setup: Option<Function>,
}

impl Callbacks {
    fn from_options(options: &JsValue) -> Self {
        let get = |name: &str| {
            Reflect::get(options, &JsValue::from_str(name))
                .ok()
                .and_then(|value| value.dyn_into::<Function>().ok())
        };
        Self {
            before_page_change: get("beforePageChange"),
            on_page_change: get("onPageChange"),
            on_transition_end: get("onTransitionEnd"),
            on_incomplete_swipe: get("onIncompleteSwipe"),
            on_setup: get("onSetup"),
        }
    }

    fn dispatch(&self, event: &SliderEvent) {
        let result = match event {
            SliderEvent::BeforePageChange {
                old_page,
                new_page,
                is_first,
                is_last,
            } => self.before_page_change.as_ref().map(|f| {
                let args = js_sys::Array::of4(
                    &JsValue::from(*old_page as u32),
                    &JsValue::from(*new_page as u32),
                    &JsValue::from(*is_first),
                    &JsValue::from(*is_last),
                );
                f.apply(&JsValue::NULL, &args)
            }),
            SliderEvent::PageChange { page } => self
                .on_page_change
                .as_ref()
                .map(|f| f.call1(&JsValue::NULL, &JsValue::from(*page as u32))),
            SliderEvent::TransitionEnd { page } => self
                .on_transition_end
                .as_ref()
                .map(|f| f.call1(&JsValue::NULL, &JsValue::from(*page as u32))),
            SliderEvent::IncompleteSwipe => self.on_incomplete_swipe.as_ref().map(|f| f.call0(&JsValue::NULL)),
            SliderEvent::Setup { total_slides } => self
                .on_setup
                .as_ref()
                .map(|f| f.call1(&JsValue::NULL, &JsValue::from(*total_slides as u32))),
        };
        if let Some(Err(err)) = result {
            log::error!("callback for {event:?} threw: {err:?}");
        }
    }
}

/// State shared between the exported object and browser callbacks
struct Shared {
    slider: RefCell<Option<Slider<DomHost>>>,
    recognizer: RefCell<DragRecognizer>,
    callbacks: Callbacks,
}

impl Shared {
    /// Run `f` against the slider, then dispatch the events it queued
    fn with_slider<R>(&self, f: impl FnOnce(&mut Slider<DomHost>) -> R) -> Option<R> {
        let (result, events) = {
            let mut guard = match self.slider.try_borrow_mut() {
                Ok(guard) => guard,
                Err(_) => {
                    log::warn!("slider is busy, call dropped");
                    return None;
                }
            };
            let slider = guard.as_mut()?;
            let result = f(slider);
            (result, slider.take_events())
        };
        for event in &events {
            self.callbacks.dispatch(event);
        }
        Some(result)
    }

    fn with_weak<R>(weak: &Weak<Shared>, f: impl FnOnce(&mut Slider<DomHost>) -> R) -> Option<R> {
        weak.upgrade().and_then(|shared| shared.with_slider(f))
    }
}

/// A registered browser event listener
struct Listener {
    target: EventTarget,
    kind: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        capture: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback_and_bool(kind, callback.as_ref().unchecked_ref(), capture)?;
        Ok(Self {
            target: target.clone(),
            kind,
            capture,
            callback,
        })
    }

    fn detach(&self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Slider widget for JavaScript
#[wasm_bindgen]
pub struct MintSlider {
    shared: Rc<Shared>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl MintSlider {
    /// Set up a slider on `container`.
    ///
    /// `options` takes the camelCase option keys plus the callbacks
    /// `beforePageChange`, `onPageChange`, `onTransitionEnd`,
    /// `onIncompleteSwipe` and `onSetup`. `slidesContainer` may be `true`
    /// (first child element) or the strip element itself.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> Result<MintSlider, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        ConsoleLogger::init();

        let (slider_options, strip_element) = parse_options(&options)?;
        let shared = Rc::new(Shared {
            slider: RefCell::new(None),
            recognizer: RefCell::new(DragRecognizer::new()),
            callbacks: Callbacks::from_options(&options),
        });

        let external_strip = if slider_options.slides_container {
            let strip = match strip_element {
                Some(strip) => Some(strip),
                None => container
                    .first_element_child()
                    .and_then(|child| child.dyn_into::<HtmlElement>().ok()),
            };
            Some(strip.ok_or_else(|| JsValue::from_str("slidesContainer has no element"))?)
        } else {
            None
        };

        let weak = Rc::downgrade(&shared);
        let on_timer = Rc::new(move |id: TimerId| {
            Shared::with_weak(&weak, |slider| {
                slider.handle_timer(id);
                slider.host_mut().forget_fired(id);
            });
        });
        let weak = Rc::downgrade(&shared);
        let on_indicator = Rc::new(move |page: usize| {
            Shared::with_weak(&weak, |slider| slider.activate_indicator(page));
        });

        let host = DomHost::new(container.clone(), external_strip, on_timer, on_indicator).map_err(to_js_error)?;
        let Some(mut slider) = Slider::setup(host, slider_options).map_err(to_js_error)? else {
            return Ok(MintSlider {
                shared,
                listeners: Vec::new(),
            });
        };

        let setup_events = slider.take_events();
        let transition_end_event = slider.capabilities().transition_end_event;
        let strip = slider.host().strip().clone();
        let slides = slider.host().slides().to_vec();
        *shared.slider.borrow_mut() = Some(slider);

        let _ = container.style().set_property("touch-action", "pan-y");
        let listeners = attach_listeners(&shared, &container, &strip, &slides, transition_end_event)?;

        // Notify once the caller holds the returned object
        let weak = Rc::downgrade(&shared);
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(shared) = weak.upgrade() {
                for event in &setup_events {
                    shared.callbacks.dispatch(event);
                }
            }
        });

        Ok(MintSlider { shared, listeners })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Go to the next page
    #[wasm_bindgen]
    pub fn next(&self) -> usize {
        self.shared.with_slider(|slider| slider.next()).unwrap_or(0)
    }

    /// Go to the previous page
    #[wasm_bindgen]
    pub fn prev(&self) -> usize {
        self.shared.with_slider(|slider| slider.prev()).unwrap_or(0)
    }

    /// Go to `page` over `speed` ms (configured speed when omitted)
    #[wasm_bindgen]
    pub fn slide_to(&self, page: i32, speed: Option<u32>) -> usize {
        self.shared
            .with_slider(|slider| slider.slide_to(i64::from(page), speed))
            .unwrap_or(0)
    }

    /// Recompute layout after the container changed size
    #[wasm_bindgen]
    pub fn recalc_width(&self) -> Result<(), JsValue> {
        match self.shared.with_slider(|slider| slider.recalc_width()) {
            Some(result) => result.map_err(to_js_error),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Slideshow
    // =========================================================================

    #[wasm_bindgen]
    pub fn start_slideshow(&self) {
        self.shared.with_slider(|slider| slider.start_slideshow());
    }

    #[wasm_bindgen]
    pub fn stop_slideshow(&self) {
        self.shared.with_slider(|slider| slider.stop_slideshow());
    }

    #[wasm_bindgen]
    pub fn pause_slideshow(&self) {
        self.shared.with_slider(|slider| slider.pause_slideshow());
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Active page
    #[wasm_bindgen]
    pub fn current_page(&self) -> usize {
        self.read(|slider| slider.current_page()).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn total_pages(&self) -> usize {
        self.read(|slider| slider.total_pages()).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn slides_per_page(&self) -> usize {
        self.read(|slider| slider.slides_per_page()).unwrap_or(0)
    }

    /// Container size as `[width, height]`
    #[wasm_bindgen]
    pub fn slider_dimensions(&self) -> Vec<f32> {
        self.read(|slider| {
            let size = slider.slider_dimensions();
            vec![size.width, size.height]
        })
        .unwrap_or_default()
    }

    /// Get geometry as JSON
    #[wasm_bindgen]
    pub fn geometry_json(&self) -> String {
        self.read(|slider| serde_json::to_string(slider.geometry()).unwrap_or_else(|_| "{}".to_string()))
            .unwrap_or_else(|| "null".to_string())
    }

    /// Whether the slider is live (false when disabled for a single slide)
    #[wasm_bindgen]
    pub fn is_enabled(&self) -> bool {
        self.read(|_| ()).is_some()
    }

    /// Remove listeners, cancel timers and release the slider
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        for listener in &self.listeners {
            listener.detach();
        }
        dom::defer_drop(std::mem::take(&mut self.listeners));

        if let Ok(mut guard) = self.shared.slider.try_borrow_mut() {
            if let Some(mut slider) = guard.take() {
                slider.stop_slideshow();
                slider.host_mut().teardown();
                dom::defer_drop(slider);
            }
        }
    }
}

impl MintSlider {
    fn read<R>(&self, f: impl FnOnce(&Slider<DomHost>) -> R) -> Option<R> {
        let guard = self.shared.slider.try_borrow().ok()?;
        guard.as_ref().map(f)
    }
}

fn attach_listeners(
    shared: &Rc<Shared>,
    container: &HtmlElement,
    strip: &HtmlElement,
    slides: &[HtmlElement],
    transition_end_event: Option<&'static str>,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    if let Some(kind) = transition_end_event {
        let weak = Rc::downgrade(shared);
        let strip_value = JsValue::from(strip.clone());
        listeners.push(Listener::attach(strip, kind, false, move |event: Event| {
            // Transitions of elements inside slides bubble up here too
            if event.target().map(JsValue::from).as_ref() == Some(&strip_value) {
                Shared::with_weak(&weak, |slider| slider.handle_transition_end());
            }
        })?);
    }

    for kind in ["pointerdown", "pointermove", "pointerup", "pointercancel"] {
        let weak = Rc::downgrade(shared);
        let capture_target = container.clone();
        listeners.push(Listener::attach(container, kind, false, move |event: Event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if let Some(input) = recognize(&shared, kind, pointer, &capture_target) {
                shared.with_slider(|slider| slider.apply_drag(input));
            }
        })?);
    }

    let window: EventTarget = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .into();
    for kind in ["resize", "orientationchange"] {
        let weak = Rc::downgrade(shared);
        listeners.push(Listener::attach(&window, kind, false, move |_event: Event| {
            if let Some(Err(err)) = Shared::with_weak(&weak, |slider| slider.recalc_width()) {
                log::error!("recalc after {kind} failed: {err}");
            }
        })?);
    }

    for (index, slide) in slides.iter().enumerate() {
        let weak = Rc::downgrade(shared);
        listeners.push(Listener::attach(slide, "focus", true, move |_event: Event| {
            Shared::with_weak(&weak, |slider| slider.focus_slide(index));
        })?);
    }

    Ok(listeners)
}

/// Feed one pointer event to the recognizer
fn recognize(shared: &Shared, kind: &str, pointer: &PointerEvent, container: &HtmlElement) -> Option<DragInput> {
    let mut recognizer = shared.recognizer.try_borrow_mut().ok()?;
    let id = pointer.pointer_id();
    let position = Vec2::new(pointer.client_x() as f32, pointer.client_y() as f32);
    let now = js_sys::Date::now();

    match kind {
        "pointerdown" => {
            let mouse = pointer.pointer_type() == "mouse";
            if mouse && pointer.button() != 0 {
                return None;
            }
            let input = recognizer.down(id, position, now, mouse);
            if input.is_some() {
                let _ = container.set_pointer_capture(id);
            }
            input
        }
        "pointermove" => {
            let input = recognizer.moved(id, position);
            if recognizer.axis() == Some(Axis::Horizontal) {
                pointer.prevent_default();
            }
            input
        }
        "pointerup" => recognizer.up(id, position, now),
        _ => recognizer.cancel(id, now),
    }
}

/// Split the options object into typed options and an optional strip
/// element
fn parse_options(options: &JsValue) -> Result<(SliderOptions, Option<HtmlElement>), JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok((SliderOptions::default(), None));
    }

    let strip_element = Reflect::get(options, &JsValue::from_str("slidesContainer"))
        .ok()
        .and_then(|value| value.dyn_into::<HtmlElement>().ok());

    let json: String = js_sys::JSON::stringify(options)?.into();
    let mut value: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;
    if let Some(object) = value.as_object_mut() {
        if strip_element.is_some() {
            object.insert("slidesContainer".to_string(), serde_json::Value::Bool(true));
        }
    }

    let parsed: SliderOptions =
        serde_json::from_value(value).map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;
    Ok((parsed, strip_element))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
