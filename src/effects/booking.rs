use log::{info, warn};

use crate::dom::Dom;

/// Opens the booking page in a new tab. A blocked popup is logged, nothing more.
pub fn open_booking<D: Dom>(dom: &D, url: &str) {
    match dom.open_new_context(url) {
        Ok(()) => info!("Opened booking page {}", url),
        Err(e) => warn!("Could not open booking page {}: {}", url, e),
    }
}
