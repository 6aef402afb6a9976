//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Blocking dialogs (confirm, alert)
//! - Wall-clock time for id minting
//! - Location fragment (routing)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Browser services the components depend on
pub trait Platform {
    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;
    /// Blocking acknowledgment
    fn alert(&self, message: &str);
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
    /// Replace the location fragment (e.g. `#/employees`)
    fn set_fragment(&self, fragment: &str);
}

/// Headless platform for native runs: confirms everything, logs dialogs
#[derive(Debug, Default)]
pub struct HeadlessPlatform;

impl Platform for HeadlessPlatform {
    fn confirm(&self, message: &str) -> bool {
        log::info!("confirm: {}", message);
        true
    }

    fn alert(&self, message: &str) {
        log::info!("alert: {}", message);
    }

    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn set_fragment(&self, fragment: &str) {
        log::debug!("navigate: {}", fragment);
    }
}
