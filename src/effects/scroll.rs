use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::config::EffectsConfig;
use crate::dom::{Dom, PageElement, Scheduler};
use crate::effects::reveal::{reveal, within_view};

/// Coalesces bursts of events into a single animation-frame callback.
///
/// Owned by the listener that uses it; clones share the pending flag.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    pending: Rc<Cell<bool>>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` for the next frame unless a callback is already queued.
    /// Returns `true` if a new frame was requested. A refused request leaves
    /// the throttle idle so the next event can try again.
    pub fn schedule<S: Scheduler>(&self, scheduler: &S, task: impl FnOnce() + 'static) -> bool {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        let pending = Rc::clone(&self.pending);
        let requested = scheduler.next_frame(Box::new(move || {
            task();
            pending.set(false);
        }));
        if !requested {
            self.pending.set(false);
        }
        requested
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Hero image transform for the given scroll position, `None` once the hero
/// has scrolled a full viewport away.
pub fn parallax_transform(scrolled: f64, viewport_height: f64, factor: f64, scale: f64) -> Option<String> {
    if scrolled >= viewport_height {
        return None;
    }
    Some(format!("translateY({}px) scale({})", scrolled * factor, scale))
}

pub fn apply_parallax<D: Dom>(dom: &D, config: &EffectsConfig) {
    let Some(hero) = dom.query(&config.hero_selector) else {
        return;
    };
    if let Some(transform) = parallax_transform(
        dom.scroll_offset(),
        dom.viewport_height(),
        config.parallax_factor,
        config.parallax_scale,
    ) {
        hero.set_style("transform", &transform);
    }
}

/// Reveals animated elements the observer has not caught yet. Returns how
/// many were revealed.
pub fn sweep_unrevealed<D: Dom>(dom: &D, config: &EffectsConfig) -> usize {
    let viewport_height = dom.viewport_height();
    let mut revealed = 0;
    for element in dom.query_all(&config.animated_selector()) {
        if element.has_class(&config.visible_class) {
            continue;
        }
        if within_view(&element.bounding_rect(), viewport_height, -config.scroll_sweep_margin)
            && reveal(&element, &config.visible_class)
        {
            revealed += 1;
        }
    }
    revealed
}

/// Binds the window scroll listener. The returned throttle is the one the
/// listener uses, handy for inspecting whether a frame is queued.
pub fn init_scroll_effects<D: Dom, S: Scheduler>(
    dom: &D,
    scheduler: &S,
    config: &EffectsConfig,
) -> FrameThrottle {
    let throttle = FrameThrottle::new();
    let listener_throttle = throttle.clone();
    let listener_dom = dom.clone();
    let scheduler = scheduler.clone();
    let config = config.clone();
    dom.on_scroll(Box::new(move || {
        let dom = listener_dom.clone();
        let config = config.clone();
        listener_throttle.schedule(&scheduler, move || {
            apply_parallax(&dom, &config);
            let revealed = sweep_unrevealed(&dom, &config);
            if revealed > 0 {
                debug!("Scroll sweep revealed {} elements", revealed);
            }
        });
    }));
    throttle
}
