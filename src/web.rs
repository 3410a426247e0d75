//! Browser-backed implementation of the [`crate::dom`] capabilities.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Reflect};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, HtmlImageElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::dom::{
    ClickHandler, ClickPoint, Dom, EntriesHandler, Intercept, IntersectionEntry, ObserverOptions,
    PageElement, Rect, Scheduler, VisibilityObserver,
};
use crate::error::EffectsError;

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn from_window() -> Result<Self, EffectsError> {
        let window = web_sys::window().ok_or(EffectsError::MissingWindow)?;
        let document = window.document().ok_or(EffectsError::MissingDocument)?;
        Ok(WebDom { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Runs `task` once the markup has been parsed, right away if it already has.
    pub fn when_ready(&self, task: impl FnOnce() + 'static) -> Result<(), EffectsError> {
        if self.document.ready_state() != "loading" {
            task();
            return Ok(());
        }
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let callback = Closure::once_into_js(task);
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                callback.unchecked_ref(),
                &options,
            )?;
        Ok(())
    }
}

impl Dom for WebDom {
    type Element = WebElement;
    type Observer = WebObserver;

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        // `querySelector` throws on selectors like "#1-intro"; treat as no match
        self.document.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn create_element(&self, tag: &str) -> Option<WebElement> {
        self.document.create_element(tag).ok().map(WebElement)
    }

    fn head(&self) -> Option<WebElement> {
        self.document.head().map(|head| WebElement(head.into()))
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut()>) {
        let callback = Closure::<dyn FnMut()>::new(move || handler());
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Could not listen for scroll: {}", EffectsError::from(e));
            return;
        }
        // Lives as long as the page
        callback.forget();
    }

    fn intersection_observer(
        &self,
        options: &ObserverOptions,
        mut handler: EntriesHandler<WebElement, WebObserver>,
    ) -> Option<WebObserver> {
        let supported = Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return None;
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .map(|entry| {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        IntersectionEntry {
                            target: WebElement(entry.target()),
                            is_intersecting: entry.is_intersecting(),
                        }
                    })
                    .collect();
                handler(entries, &WebObserver(observer));
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                callback.forget();
                Some(WebObserver(observer))
            }
            Err(e) => {
                warn!("IntersectionObserver rejected options: {}", EffectsError::from(e));
                None
            }
        }
    }

    fn open_new_context(&self, url: &str) -> Result<(), EffectsError> {
        match self.window.open_with_url_and_target(url, "_blank")? {
            Some(_) => Ok(()),
            None => Err(EffectsError::Js("popup blocked".to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(Element);

impl WebElement {
    pub fn new(element: Element) -> Self {
        WebElement(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl PageElement for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            warn!("Could not add class {}: {}", class, EffectsError::from(e));
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            left: rect.left(),
            bottom: rect.bottom(),
            right: rect.right(),
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.html() {
            if let Err(e) = html.style().set_property(property, value) {
                warn!("Could not set {} to {}: {}", property, value, EffectsError::from(e));
            }
        }
    }

    fn set_css_text(&self, css: &str) {
        if let Some(html) = self.html() {
            html.style().set_css_text(css);
        }
    }

    fn text(&self) -> Option<String> {
        self.0.text_content()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_id(&self, id: &str) {
        self.0.set_id(id);
    }

    fn append_child(&self, child: &Self) -> Result<(), EffectsError> {
        self.0.append_child(&child.0)?;
        Ok(())
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn is_loaded(&self) -> bool {
        self.0
            .dyn_ref::<HtmlImageElement>()
            .map_or(true, |img| img.complete())
    }

    fn on_click(&self, mut handler: ClickHandler) {
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let point = ClickPoint {
                client_x: f64::from(event.client_x()),
                client_y: f64::from(event.client_y()),
            };
            if handler(point) == Intercept::PreventDefault {
                event.prevent_default();
            }
        });
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            warn!("Could not listen for clicks: {}", EffectsError::from(e));
            return;
        }
        callback.forget();
    }

    fn on_load_once(&self, handler: Box<dyn FnOnce()>) {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let callback = Closure::once_into_js(move || handler());
        if let Err(e) = self.0.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            callback.unchecked_ref(),
            &options,
        ) {
            warn!("Could not listen for image load: {}", EffectsError::from(e));
        }
    }
}

pub struct WebObserver(IntersectionObserver);

impl VisibilityObserver<WebElement> for WebObserver {
    fn observe(&self, element: &WebElement) {
        self.0.observe(element.element());
    }

    fn unobserve(&self, element: &WebElement) {
        self.0.unobserve(element.element());
    }
}

/// Timers through `gloo-timers`, frames through `requestAnimationFrame`.
#[derive(Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        BrowserScheduler { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) -> bool {
        let callback = Closure::once_into_js(move || task());
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(_) => true,
            Err(e) => {
                warn!("requestAnimationFrame failed: {}", EffectsError::from(e));
                false
            }
        }
    }
}
