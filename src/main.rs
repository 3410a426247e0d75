use elsy_frontend::web::{BrowserScheduler, WebDom};
use elsy_frontend::{config, expose_open_calendly, init_page_effects, EffectsConfig};
use log::{info, warn};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page effects");
    let dom = match WebDom::from_window() {
        Ok(dom) => dom,
        Err(e) => {
            warn!("Page effects disabled: {}", e);
            return;
        }
    };

    if let Err(e) = expose_open_calendly(dom.window()) {
        warn!("openCalendly not available to the page: {}", e);
    }

    let scheduler = BrowserScheduler::new(dom.window().clone());
    let ready_dom = dom.clone();
    let wired = dom.when_ready(move || {
        let config = EffectsConfig::load(&ready_dom);
        let effects = init_page_effects(&ready_dom, &scheduler, &config);
        info!(
            "Page effects ready: {:?}, {} anchor links, {} ripple buttons",
            effects.reveal, effects.anchor_links, effects.ripple_buttons
        );
    });
    if let Err(e) = wired {
        warn!("Could not wait for DOMContentLoaded: {}", e);
    }
}
