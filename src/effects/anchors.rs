use log::debug;

use crate::config::EffectsConfig;
use crate::dom::{ClickPoint, Dom, Intercept, PageElement};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Scroll position that brings the fragment target just below the header,
/// or `None` when the link should keep its default behaviour.
pub fn scroll_target<D: Dom>(dom: &D, href: &str, header_offset: f64) -> Option<f64> {
    if href == "#" {
        return None;
    }
    let target = dom.query(href)?;
    Some(target.bounding_rect().top + dom.scroll_offset() - header_offset)
}

pub fn init_smooth_scrolling<D: Dom>(dom: &D, config: &EffectsConfig) -> usize {
    let links = dom.query_all(ANCHOR_SELECTOR);
    for link in &links {
        let dom = dom.clone();
        let source = link.clone();
        let header_offset = config.header_offset;
        link.on_click(Box::new(move |_: ClickPoint| {
            let Some(href) = source.attribute("href") else {
                return Intercept::Passthrough;
            };
            match scroll_target(&dom, &href, header_offset) {
                Some(top) => {
                    dom.smooth_scroll_to(top);
                    Intercept::PreventDefault
                }
                None => Intercept::Passthrough,
            }
        }));
    }
    debug!("Smooth scrolling wired for {} anchor links", links.len());
    links.len()
}
