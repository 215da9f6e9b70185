//! Browser DOM host
//!
//! Implements `Host` over `web-sys`: styles and classes go straight to the
//! elements, timers go through `window.setInterval`/`setTimeout` with
//! closures that report back through `on_timer`.

use std::collections::HashMap;
use std::rc::Rc;

use mintslide_host::{Host, HostError, Node, TimerId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

/// Called with the id of a fired timer
pub type TimerCallback = Rc<dyn Fn(TimerId)>;

/// Called with the page of an activated indicator
pub type IndicatorCallback = Rc<dyn Fn(usize)>;

struct DomTimer {
    handle: i32,
    repeating: bool,
    _callback: Closure<dyn FnMut()>,
}

/// DOM-backed host
pub struct DomHost {
    window: Window,
    document: Document,
    container: HtmlElement,
    strip: HtmlElement,
    /// Strip supplied by the page rather than created here
    external_strip: bool,
    slides: Vec<HtmlElement>,
    indicator_list: Option<HtmlElement>,
    indicators: Vec<HtmlElement>,
    indicator_listeners: Vec<Closure<dyn FnMut(Event)>>,
    timers: HashMap<TimerId, DomTimer>,
    next_timer: u64,
    on_timer: TimerCallback,
    on_indicator: IndicatorCallback,
}

impl DomHost {
    /// Create a host over `container`.
    ///
    /// With `external_strip` the slides are the children of that element;
    /// otherwise they are the container's children and a strip is created
    /// for them on mount.
    pub fn new(
        container: HtmlElement,
        external_strip: Option<HtmlElement>,
        on_timer: TimerCallback,
        on_indicator: IndicatorCallback,
    ) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or_else(|| HostError::MissingElement("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| HostError::MissingElement("document".to_string()))?;

        let (strip, slides, external) = match external_strip {
            Some(strip) => {
                let slides = html_children(&strip);
                (strip, slides, true)
            }
            None => {
                let strip = create_html(&document, "div")?;
                (strip, html_children(&container), false)
            }
        };

        Ok(Self {
            window,
            document,
            container,
            strip,
            external_strip: external,
            slides,
            indicator_list: None,
            indicators: Vec::new(),
            indicator_listeners: Vec::new(),
            timers: HashMap::new(),
            next_timer: 1,
            on_timer,
            on_indicator,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn strip(&self) -> &HtmlElement {
        &self.strip
    }

    pub fn slides(&self) -> &[HtmlElement] {
        &self.slides
    }

    /// Drop the bookkeeping of a one-shot timer the browser already fired
    pub fn forget_fired(&mut self, id: TimerId) {
        if self.timers.get(&id).is_some_and(|timer| !timer.repeating) {
            if let Some(timer) = self.timers.remove(&id) {
                defer_drop(timer);
            }
        }
    }

    /// Cancel every timer and remove the indicators
    pub fn teardown(&mut self) {
        let ids: Vec<TimerId> = self.timers.keys().copied().collect();
        for id in ids {
            self.clear_timer(id);
        }
        self.remove_indicators();
    }

    fn element(&self, node: Node) -> Option<&HtmlElement> {
        match node {
            Node::Container => Some(&self.container),
            Node::Strip => Some(&self.strip),
            Node::Slide(index) => self.slides.get(index),
            Node::Indicator(index) => self.indicators.get(index),
        }
    }

    fn remove_indicators(&mut self) {
        if let Some(list) = self.indicator_list.take() {
            list.remove();
        }
        self.indicators.clear();
        defer_drop(std::mem::take(&mut self.indicator_listeners));
    }

    fn schedule(&mut self, delay_ms: u32, repeating: bool) -> TimerId {
        let id = TimerId::new(self.next_timer);
        self.next_timer += 1;

        let on_timer = self.on_timer.clone();
        let callback = Closure::wrap(Box::new(move || on_timer(id)) as Box<dyn FnMut()>);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let function = callback.as_ref().unchecked_ref();
        let handle = if repeating {
            self.window
                .set_interval_with_callback_and_timeout_and_arguments_0(function, delay)
        } else {
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(function, delay)
        };

        match handle {
            Ok(handle) => {
                self.timers.insert(
                    id,
                    DomTimer {
                        handle,
                        repeating,
                        _callback: callback,
                    },
                );
            }
            Err(err) => log::warn!("failed to schedule timer: {err:?}"),
        }
        id
    }
}

impl Host for DomHost {
    fn style_property_defined(&self, property: &str) -> bool {
        js_sys::Reflect::has(&self.strip.style(), &JsValue::from_str(property)).unwrap_or(false)
    }

    fn is_denylisted_engine(&self) -> bool {
        // Presto-based Opera advertises transforms it cannot render
        js_sys::Reflect::get(&self.window, &JsValue::from_str("opera"))
            .map(|opera| !opera.is_undefined())
            .unwrap_or(false)
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn container_size(&self) -> (f32, f32) {
        (self.container.offset_width() as f32, self.container.offset_height() as f32)
    }

    fn first_slide_width(&self) -> f32 {
        self.slides.first().map_or(0.0, |slide| slide.offset_width() as f32)
    }

    fn set_style(&mut self, node: Node, property: &str, value: Option<&str>) {
        let Some(element) = self.element(node) else {
            return;
        };
        let style = element.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(err) = result {
            log::warn!("failed to set {property} on {node:?}: {err:?}");
        }
    }

    fn add_class(&mut self, node: Node, class: &str) {
        if let Some(element) = self.element(node) {
            let _ = element.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, node: Node, class: &str) {
        if let Some(element) = self.element(node) {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn mount_strip(&mut self) -> Result<(), HostError> {
        if self.external_strip {
            return Ok(());
        }
        self.container.append_child(&self.strip).map_err(dom_error)?;
        for slide in &self.slides {
            self.strip.append_child(slide).map_err(dom_error)?;
        }
        Ok(())
    }

    fn build_indicators(&mut self, count: usize, class: &str, before_strip: bool) -> Result<(), HostError> {
        self.remove_indicators();

        let list = create_html(&self.document, "ul")?;
        list.class_list().add_1(class).map_err(dom_error)?;

        for page in 0..count {
            let item = create_html(&self.document, "li")?;
            item.set_tab_index(0);
            item.set_text_content(Some(&(page + 1).to_string()));

            let on_indicator = self.on_indicator.clone();
            let listener = Closure::wrap(Box::new(move |event: Event| {
                let activate = match event.dyn_ref::<KeyboardEvent>() {
                    Some(key) => key.key() == "Enter",
                    None => true,
                };
                if activate {
                    on_indicator(page);
                }
            }) as Box<dyn FnMut(Event)>);

            for kind in ["click", "keydown"] {
                item.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
                    .map_err(dom_error)?;
            }
            list.append_child(&item).map_err(dom_error)?;

            self.indicators.push(item);
            self.indicator_listeners.push(listener);
        }

        if before_strip {
            let strip: &web_sys::Node = &self.strip;
            self.container.insert_before(&list, Some(strip)).map_err(dom_error)?;
        } else {
            self.container.append_child(&list).map_err(dom_error)?;
        }
        self.indicator_list = Some(list);
        Ok(())
    }

    fn reset_scroll(&mut self) {
        self.container.set_scroll_left(0);

        // Some engines scroll the focused element into view after the focus
        // handler returns; reset once more on the next task
        let container = self.container.clone();
        let again = Closure::once_into_js(move || container.set_scroll_left(0));
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(again.unchecked_ref(), 0);
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn set_interval(&mut self, period_ms: u32) -> TimerId {
        self.schedule(period_ms, true)
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        self.schedule(delay_ms, false)
    }

    fn clear_timer(&mut self, id: TimerId) {
        let Some(timer) = self.timers.remove(&id) else {
            return;
        };
        if timer.repeating {
            self.window.clear_interval_with_handle(timer.handle);
        } else {
            self.window.clear_timeout_with_handle(timer.handle);
        }
        // The timer may be the one whose callback is running right now
        defer_drop(timer);
    }
}

/// Drop `value` on a later microtask
pub(crate) fn defer_drop<T: 'static>(value: T) {
    wasm_bindgen_futures::spawn_local(async move {
        drop(value);
    });
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, HostError> {
    document
        .create_element(tag)
        .map_err(dom_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HostError::Dom(format!("<{tag}> is not an HTML element")))
}

fn html_children(parent: &Element) -> Vec<HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn dom_error(err: JsValue) -> HostError {
    HostError::Dom(format!("{err:?}"))
}
