use log::debug;

use crate::config::EffectsConfig;
use crate::dom::{Dom, PageElement};

/// Images with the scale-in entrance animation drive their own opacity.
pub const SCALE_IN_CLASS: &str = "fade-in-scale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageFadeSummary {
    pub shown: usize,
    pub waiting: usize,
}

pub fn init_image_loading<D: Dom>(dom: &D, config: &EffectsConfig) -> ImageFadeSummary {
    let mut summary = ImageFadeSummary::default();
    for img in dom.query_all("img") {
        if img.has_class(SCALE_IN_CLASS) {
            continue;
        }
        if img.is_loaded() {
            img.set_style("opacity", "1");
            summary.shown += 1;
            continue;
        }

        img.set_style("opacity", "0");
        img.set_style("transition", &config.image_transition);
        // A failed load never fires `load`, so the image stays hidden
        let loaded = img.clone();
        img.on_load_once(Box::new(move || {
            loaded.set_style("opacity", "1");
        }));
        summary.waiting += 1;
    }
    debug!(
        "Images: {} already loaded, {} fading in on load",
        summary.shown, summary.waiting
    );
    summary
}
