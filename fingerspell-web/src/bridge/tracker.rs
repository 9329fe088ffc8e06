//! Hand tracker settings handed to the JS MediaPipe setup
//!
//! Rust owns the defaults so the page and the classifier agree on how many
//! hands a frame can carry.

use wasm_bindgen::prelude::*;

pub const DEFAULT_MAX_HANDS: usize = 1;
/// Upper bound accepted from JS
pub const MAX_SUPPORTED_HANDS: usize = 2;
pub const DEFAULT_MIN_DETECTION_CONFIDENCE: f32 = 0.5;
pub const DEFAULT_MIN_TRACKING_CONFIDENCE: f32 = 0.5;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    static_image_mode: bool,
    max_num_hands: usize,
    min_detection_confidence: f32,
    min_tracking_confidence: f32,
}

#[wasm_bindgen]
impl TrackerConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TrackerConfig {
        TrackerConfig {
            // Video stream: track between frames instead of re-detecting
            static_image_mode: false,
            max_num_hands: DEFAULT_MAX_HANDS,
            min_detection_confidence: DEFAULT_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_MIN_TRACKING_CONFIDENCE,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn static_image_mode(&self) -> bool {
        self.static_image_mode
    }

    #[wasm_bindgen(setter)]
    pub fn set_static_image_mode(&mut self, value: bool) {
        self.static_image_mode = value;
    }

    #[wasm_bindgen(getter)]
    pub fn max_num_hands(&self) -> usize {
        self.max_num_hands
    }

    /// Clamped to 1..=2
    #[wasm_bindgen(setter)]
    pub fn set_max_num_hands(&mut self, value: usize) {
        self.max_num_hands = value.clamp(1, MAX_SUPPORTED_HANDS);
    }

    #[wasm_bindgen(getter)]
    pub fn min_detection_confidence(&self) -> f32 {
        self.min_detection_confidence
    }

    #[wasm_bindgen(setter)]
    pub fn set_min_detection_confidence(&mut self, value: f32) {
        self.min_detection_confidence = clamp_confidence(value, self.min_detection_confidence);
    }

    #[wasm_bindgen(getter)]
    pub fn min_tracking_confidence(&self) -> f32 {
        self.min_tracking_confidence
    }

    #[wasm_bindgen(setter)]
    pub fn set_min_tracking_confidence(&mut self, value: f32) {
        self.min_tracking_confidence = clamp_confidence(value, self.min_tracking_confidence);
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// NaN keeps the previous value
fn clamp_confidence(value: f32, previous: f32) -> f32 {
    if value.is_nan() {
        previous
    } else {
        value.clamp(0.0, 1.0)
    }
}
