//! Browser backends: `window.localStorage` and seed fetch

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::store::KeyValueStore;
use crate::error::{PortalError, Result};

/// `window.localStorage` wrapper
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's LocalStorage
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PortalError::Storage("LocalStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_storage_error)
    }
}

fn js_storage_error(err: JsValue) -> PortalError {
    PortalError::Storage(format!("{:?}", err))
}

/// Fetch the seed document as text
pub async fn fetch_seed(url: &str) -> Result<String> {
    let fetch_error = |reason: String| PortalError::SeedFetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_error("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| fetch_error("not a Response".to_string()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let text = response.text().map_err(|e| fetch_error(format!("{:?}", e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?;
    text.as_string()
        .ok_or_else(|| fetch_error("body is not text".to_string()))
}
