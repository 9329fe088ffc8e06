//! Classifier tuning knobs

use crate::hand::ThumbConvention;

/// Thumb-tip touch distance for the fist family, in normalized frame units.
///
/// Absolute, not scaled by hand size: only meaningful for a hand occupying
/// roughly the frame fraction the rules were tuned on.
pub const DEFAULT_TOUCH_THRESHOLD: f32 = 0.04;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    pub thumb: ThumbConvention,
    /// Thumb tip to index DIP below this → T
    pub index_touch_threshold: f32,
    /// Thumb tip to middle DIP below this → N
    pub middle_touch_threshold: f32,
}

impl ClassifierConfig {
    pub fn with_thumb(mut self, thumb: ThumbConvention) -> Self {
        self.thumb = thumb;
        self
    }

    pub fn with_touch_thresholds(mut self, index: f32, middle: f32) -> Self {
        self.index_touch_threshold = index;
        self.middle_touch_threshold = middle;
        self
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thumb: ThumbConvention::default(),
            index_touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            middle_touch_threshold: DEFAULT_TOUCH_THRESHOLD,
        }
    }
}
