//! Capabilities the page effects need from the document.
//!
//! Every behaviour is written against these traits instead of calling
//! `web_sys` directly, so the same code runs against the browser
//! ([`crate::web`]) and against an in-memory document in tests.

use crate::error::EffectsError;

/// Viewport-relative box of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Rect {
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }
}

/// Pointer position of a click in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// What a click handler wants done with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    PreventDefault,
    Passthrough,
}

#[derive(Debug, Clone)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: String,
    pub threshold: f64,
}

pub type ClickHandler = Box<dyn FnMut(ClickPoint) -> Intercept>;

/// Receives a batch of entries together with the observer that produced
/// them, so a handler can unobserve targets it is done with.
pub type EntriesHandler<E, O> = Box<dyn FnMut(Vec<IntersectionEntry<E>>, &O)>;

pub trait PageElement: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn bounding_rect(&self) -> Rect;
    fn set_style(&self, property: &str, value: &str);
    /// Replaces the whole inline style declaration.
    fn set_css_text(&self, css: &str);
    fn text(&self) -> Option<String>;
    fn set_text(&self, text: &str);
    fn set_id(&self, id: &str);
    fn append_child(&self, child: &Self) -> Result<(), EffectsError>;
    fn remove(&self);
    /// `true` once an image has finished loading. Non-images are always loaded.
    fn is_loaded(&self) -> bool;
    fn on_click(&self, handler: ClickHandler);
    /// Runs `handler` on the first `load` event only.
    fn on_load_once(&self, handler: Box<dyn FnOnce()>);
}

pub trait VisibilityObserver<E> {
    fn observe(&self, element: &E);
    fn unobserve(&self, element: &E);
}

pub trait Dom: Clone + 'static {
    type Element: PageElement;
    type Observer: VisibilityObserver<Self::Element> + 'static;

    /// Matching elements in document order. An invalid selector matches nothing.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    fn head(&self) -> Option<Self::Element>;
    fn viewport_height(&self) -> f64;
    /// Vertical scroll position of the window (`pageYOffset`).
    fn scroll_offset(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
    fn on_scroll(&self, handler: Box<dyn FnMut()>);
    /// `None` when the browser has no viewport-intersection detection.
    fn intersection_observer(
        &self,
        options: &ObserverOptions,
        handler: EntriesHandler<Self::Element, Self::Observer>,
    ) -> Option<Self::Observer>;
    fn open_new_context(&self, url: &str) -> Result<(), EffectsError>;
}

/// Deferred execution on the page's event loop.
pub trait Scheduler: Clone + 'static {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    /// Returns `false` if the frame could not be requested; `task` is dropped.
    fn next_frame(&self, task: Box<dyn FnOnce()>) -> bool;
}
