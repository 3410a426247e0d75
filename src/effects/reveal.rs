use log::{debug, info};

use crate::config::EffectsConfig;
use crate::dom::{
    Dom, EntriesHandler, IntersectionEntry, ObserverOptions, PageElement, Rect, Scheduler,
    VisibilityObserver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// The page has no animated elements.
    Idle,
    /// Elements are watched by an intersection observer.
    Observed(usize),
    /// No intersection support, every element was revealed up front.
    Fallback(usize),
}

/// Adds the visible marker unless the element already carries it.
/// Returns whether the element was newly revealed.
pub fn reveal<E: PageElement>(element: &E, visible_class: &str) -> bool {
    if element.has_class(visible_class) {
        return false;
    }
    element.add_class(visible_class);
    true
}

/// A box counts as in view when its top is above `viewport_height + margin`
/// and its bottom is below the top of the viewport. A negative margin pulls
/// the bottom line up.
pub fn within_view(rect: &Rect, viewport_height: f64, margin: f64) -> bool {
    rect.top < viewport_height + margin && rect.bottom > 0.0
}

pub fn init_reveal<D: Dom, S: Scheduler>(
    dom: &D,
    scheduler: &S,
    config: &EffectsConfig,
) -> RevealMode {
    let elements = dom.query_all(&config.animated_selector());
    if elements.is_empty() {
        return RevealMode::Idle;
    }

    let options = ObserverOptions {
        root_margin: config.root_margin.clone(),
        threshold: config.threshold,
    };
    let visible_class = config.visible_class.clone();
    let on_entries: EntriesHandler<D::Element, D::Observer> = Box::new(
        move |entries: Vec<IntersectionEntry<D::Element>>, observer: &D::Observer| {
            for entry in entries.into_iter().filter(|entry| entry.is_intersecting) {
                reveal(&entry.target, &visible_class);
                observer.unobserve(&entry.target);
            }
        },
    );

    let Some(observer) = dom.intersection_observer(&options, on_entries) else {
        for element in &elements {
            reveal(element, &config.visible_class);
        }
        info!(
            "No IntersectionObserver, revealed {} elements immediately",
            elements.len()
        );
        return RevealMode::Fallback(elements.len());
    };

    for element in &elements {
        observer.observe(element);
    }
    let count = elements.len();
    debug!("Observing {} animated elements", count);

    // Elements above the fold may finish loading before the observer reports them
    let dom = dom.clone();
    let visible_class = config.visible_class.clone();
    let margin = config.initial_sweep_margin;
    scheduler.after(
        config.sweep_delay_ms,
        Box::new(move || {
            let viewport_height = dom.viewport_height();
            for element in &elements {
                if within_view(&element.bounding_rect(), viewport_height, margin) {
                    reveal(element, &visible_class);
                    observer.unobserve(element);
                }
            }
        }),
    );

    RevealMode::Observed(count)
}
