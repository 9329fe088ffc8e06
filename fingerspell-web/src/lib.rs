//! Fingerspell Web - ASL finger-spelling letters from MediaPipe hand landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macros
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Camera capture, the hand tracker, frame drawing and spell correction all
//! live on the JS side. This crate turns each frame's landmarks into labels.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(s: &str) {
    web_sys::console::log_1(&s.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(s: &str) {
    web_sys::console::warn_1(&s.into());
}

// Native builds (tests) have no console to write to
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(_s: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_s: &str) {}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

macro_rules! console_warn {
    ($($t:tt)*) => ($crate::warn(&format_args!($($t)*).to_string()))
}

// ============================================================================
// MODULES
// ============================================================================

pub mod hand;
pub mod classifier;
pub mod session;
mod bridge;

pub use bridge::{
    BridgeError,
    FrameClassifier,
    TrackerConfig,
    WordSession,
    DEFAULT_MAX_HANDS,
    MAX_SUPPORTED_HANDS,
    DEFAULT_MIN_DETECTION_CONFIDENCE,
    DEFAULT_MIN_TRACKING_CONFIDENCE,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✋ Fingerspell classifier loaded");
}

/// Default tracker settings for the JS MediaPipe setup
#[wasm_bindgen]
pub fn default_tracker_config() -> TrackerConfig {
    TrackerConfig::new()
}
