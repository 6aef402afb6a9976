//! Browser platform backed by `window`

use super::Platform;

/// `window.confirm` / `window.alert` / `Date.now()` / `location.hash`
#[derive(Debug, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn set_fragment(&self, fragment: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(fragment) {
                log::warn!("Failed to set location hash: {:?}", e);
            }
        }
    }
}

/// Current `location.hash` (empty if unavailable)
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
