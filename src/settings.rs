//! Portal configuration
//!
//! Optional overrides live in LocalStorage next to the employee data.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PAGE_SIZE, DEFAULT_SEED_URL, DEFAULT_STORAGE_KEY};
use crate::i18n::Language;

/// Portal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// LocalStorage key holding the employee array
    pub storage_key: String,
    /// Seed document fetched when nothing is stored
    pub seed_url: String,
    /// Rows per list page
    pub page_size: usize,
    /// Language the shell starts in
    pub default_language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_url: DEFAULT_SEED_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_language: Language::En,
        }
    }
}

impl AppConfig {
    /// LocalStorage key for overrides
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "employee_portal_config";

    /// Parse an override blob; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Replace unusable values with defaults
    pub fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!("page_size of 0 ignored, using {}", DEFAULT_PAGE_SIZE);
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.storage_key.is_empty() {
            self.storage_key = DEFAULT_STORAGE_KEY.to_string();
        }
        self
    }

    /// Load configuration overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded portal config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring invalid portal config: {}", e),
                }
            }
        }

        log::info!("Using default portal config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
