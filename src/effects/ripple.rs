use log::{debug, warn};

use crate::config::EffectsConfig;
use crate::dom::{ClickPoint, Dom, Intercept, PageElement, Rect, Scheduler};

pub const KEYFRAMES_ID: &str = "ripple-keyframes";
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

/// Click position relative to the button's top-left corner.
pub fn ripple_origin(click: ClickPoint, button: &Rect) -> (f64, f64) {
    (click.client_x - button.left, click.client_y - button.top)
}

pub fn ripple_css(x: f64, y: f64, size: f64, duration_ms: u32) -> String {
    let half = size / 2.0;
    format!(
        "position: absolute;\
         background: rgba(255,255,255,0.3);\
         border-radius: 50%;\
         transform: scale(0);\
         animation: ripple {}s linear;\
         pointer-events: none;\
         left: {}px;\
         top: {}px;\
         width: {}px;\
         height: {}px;\
         margin-left: -{}px;\
         margin-top: -{}px;",
        f64::from(duration_ms) / 1000.0,
        x,
        y,
        size,
        size,
        half,
        half
    )
}

/// Appends the ripple keyframes to `<head>` unless an earlier call already did.
/// Returns `true` if the rule was added by this call.
pub fn inject_keyframes<D: Dom>(dom: &D) -> bool {
    if dom.query(&format!("style#{}", KEYFRAMES_ID)).is_some() {
        return false;
    }
    let (Some(head), Some(style)) = (dom.head(), dom.create_element("style")) else {
        return false;
    };
    style.set_id(KEYFRAMES_ID);
    style.set_text(RIPPLE_KEYFRAMES);
    match head.append_child(&style) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not add ripple keyframes: {}", e);
            false
        }
    }
}

fn spawn_ripple<D: Dom, S: Scheduler>(
    dom: &D,
    scheduler: &S,
    button: &D::Element,
    click: ClickPoint,
    size: f64,
    duration_ms: u32,
) {
    let Some(ripple) = dom.create_element("span") else {
        return;
    };
    let (x, y) = ripple_origin(click, &button.bounding_rect());
    ripple.set_css_text(&ripple_css(x, y, size, duration_ms));

    button.set_style("position", "relative");
    button.set_style("overflow", "hidden");
    if let Err(e) = button.append_child(&ripple) {
        warn!("Could not attach ripple: {}", e);
        return;
    }

    scheduler.after(duration_ms, Box::new(move || ripple.remove()));
}

pub fn init_ripples<D: Dom, S: Scheduler>(dom: &D, scheduler: &S, config: &EffectsConfig) -> usize {
    inject_keyframes(dom);

    let buttons = dom.query_all(&config.button_selector);
    for button in &buttons {
        let dom = dom.clone();
        let scheduler = scheduler.clone();
        let target = button.clone();
        let size = config.ripple_size;
        let duration_ms = config.ripple_duration_ms;
        button.on_click(Box::new(move |click: ClickPoint| {
            spawn_ripple(&dom, &scheduler, &target, click, size, duration_ms);
            Intercept::Passthrough
        }));
    }
    debug!("Ripple effect wired for {} buttons", buttons.len());
    buttons.len()
}
