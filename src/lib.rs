//! Cosmetic page effects for the Elsy Beauty site: entrance animations,
//! smooth anchor scrolling, image fade-in, hero parallax, button ripples and
//! the Calendly booking link.

use js_sys::Reflect;
use log::warn;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
pub mod effects;
pub mod error;
pub mod web;

pub use config::EffectsConfig;
pub use error::EffectsError;

use dom::{Dom, Scheduler};
use effects::images::ImageFadeSummary;
use effects::reveal::RevealMode;
use effects::scroll::FrameThrottle;

/// What got wired up on the page.
#[derive(Debug, Clone)]
pub struct PageEffects {
    pub reveal: RevealMode,
    pub anchor_links: usize,
    pub images: ImageFadeSummary,
    pub ripple_buttons: usize,
    pub scroll: FrameThrottle,
}

/// Wires every effect against the current markup. Call once the document
/// has been parsed.
pub fn init_page_effects<D: Dom, S: Scheduler>(
    dom: &D,
    scheduler: &S,
    config: &EffectsConfig,
) -> PageEffects {
    PageEffects {
        reveal: effects::reveal::init_reveal(dom, scheduler, config),
        anchor_links: effects::anchors::init_smooth_scrolling(dom, config),
        images: effects::images::init_image_loading(dom, config),
        ripple_buttons: effects::ripple::init_ripples(dom, scheduler, config),
        scroll: effects::scroll::init_scroll_effects(dom, scheduler, config),
    }
}

/// Publishes [`open_calendly`] as `window.openCalendly` so inline handlers
/// such as `onclick="openCalendly()"` can reach it.
pub fn expose_open_calendly(window: &web_sys::Window) -> Result<(), EffectsError> {
    let callback = Closure::<dyn FnMut()>::new(open_calendly);
    Reflect::set(window, &JsValue::from_str("openCalendly"), callback.as_ref())?;
    callback.forget();
    Ok(())
}

/// Called from the page's "Book now" buttons.
#[wasm_bindgen(js_name = openCalendly)]
pub fn open_calendly() {
    match web::WebDom::from_window() {
        Ok(dom) => {
            let config = EffectsConfig::load(&dom);
            effects::booking::open_booking(&dom, &config.booking_url);
        }
        Err(e) => warn!("Cannot open booking page: {}", e),
    }
}
