//! Per-frame classification entry point
//!
//! JS calls `process_frame` once per video frame with every hand the tracker
//! found, then reads labels back for the overlay. Labels from the previous
//! frame never influence the current one.

use wasm_bindgen::prelude::*;
use crate::classifier::{classify_hand, Classification, ClassifierConfig, Label};
use crate::hand::{parse_hands, ThumbConvention};
use super::error::BridgeError;
use super::tracker::TrackerConfig;

/// Separator between per-hand labels in the overlay text
const OVERLAY_SEPARATOR: &str = " | ";

#[wasm_bindgen]
pub struct FrameClassifier {
    tracker: TrackerConfig,
    config: ClassifierConfig,
    /// One entry per hand of the last processed frame
    results: Vec<Classification>,
}

#[wasm_bindgen]
impl FrameClassifier {
    #[wasm_bindgen(constructor)]
    pub fn new(tracker: &TrackerConfig) -> FrameClassifier {
        FrameClassifier {
            tracker: *tracker,
            config: ClassifierConfig::default(),
            results: Vec::with_capacity(tracker.max_num_hands()),
        }
    }

    /// Classify all hands in one frame.
    ///
    /// `flat_data` holds `num_hands * 21 * 3` floats. Returns the number of
    /// hands classified. A malformed frame clears the previous labels.
    pub fn process_frame(&mut self, flat_data: &[f32], num_hands: usize) -> Result<usize, JsValue> {
        self.classify_frame(flat_data, num_hands).map_err(|e| {
            console_warn!("Frame rejected: {}", e);
            JsValue::from(e)
        })
    }

    #[wasm_bindgen(getter)]
    pub fn hand_count(&self) -> usize {
        self.results.len()
    }

    /// Label of the hand at `index`, or "No hand detected"
    pub fn label_at(&self, index: usize) -> String {
        self.label(index).to_string()
    }

    /// Label of the first hand, or "No hand detected"
    pub fn primary_label(&self) -> String {
        self.label_at(0)
    }

    /// Finger-state bits ("01100", thumb first) of the hand at `index`
    pub fn finger_pattern_at(&self, index: usize) -> Option<String> {
        self.results.get(index).map(|c| c.fingers.to_string())
    }

    /// All labels joined for drawing on the frame
    pub fn overlay_text(&self) -> String {
        if self.results.is_empty() {
            return Label::NoHand.to_string();
        }
        self.results
            .iter()
            .map(|c| c.label.to_string())
            .collect::<Vec<_>>()
            .join(OVERLAY_SEPARATOR)
    }

    /// `true`: extended thumb tip lies left of its joint (right hand, mirrored view)
    pub fn set_thumb_convention(&mut self, tip_left_of_joint: bool) {
        let thumb = if tip_left_of_joint {
            ThumbConvention::TipLeftOfJoint
        } else {
            ThumbConvention::TipRightOfJoint
        };
        self.config = self.config.with_thumb(thumb);
        console_log!("Thumb convention: {:?}", thumb);
    }

    /// Override the fist-family touch distances (normalized frame units)
    pub fn set_touch_thresholds(&mut self, index: f32, middle: f32) -> Result<(), JsValue> {
        self.update_thresholds(index, middle)?;
        console_log!("Touch thresholds: index {:.3}, middle {:.3}", index, middle);
        Ok(())
    }
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

impl FrameClassifier {
    pub(crate) fn classify_frame(
        &mut self,
        flat_data: &[f32],
        num_hands: usize,
    ) -> Result<usize, BridgeError> {
        self.results.clear();
        let hands = parse_hands(flat_data, num_hands, self.tracker.max_num_hands())?;
        self.results
            .extend(hands.iter().map(|hand| classify_hand(hand, &self.config)));
        Ok(self.results.len())
    }

    pub(crate) fn update_thresholds(&mut self, index: f32, middle: f32) -> Result<(), BridgeError> {
        for value in [index, middle] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BridgeError::InvalidThreshold(value));
            }
        }
        self.config = self.config.with_touch_thresholds(index, middle);
        Ok(())
    }

    /// Label of the hand at `index`; `NoHand` past the end
    pub fn label(&self, index: usize) -> Label {
        self.results
            .get(index)
            .map_or(Label::NoHand, |c| c.label)
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Letter;
    use crate::hand::fixtures::{flatten, open_hand, pose};
    use crate::hand::LandmarkError;

    fn two_hand_tracker() -> TrackerConfig {
        let mut tracker = TrackerConfig::new();
        tracker.set_max_num_hands(2);
        tracker
    }

    #[test]
    fn test_empty_frame_is_no_hand() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        assert_eq!(frame.classify_frame(&[], 0).unwrap(), 0);
        assert_eq!(frame.primary_label(), "No hand detected");
        assert_eq!(frame.overlay_text(), "No hand detected");
        assert_eq!(frame.finger_pattern_at(0), None);
    }

    #[test]
    fn test_single_hand_letter() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        let flat = flatten(&[pose([false, true, true, false, false])]);
        assert_eq!(frame.classify_frame(&flat, 1).unwrap(), 1);
        assert_eq!(frame.label(0), Label::Letter(Letter::V));
        assert_eq!(frame.primary_label(), "V");
        assert_eq!(frame.finger_pattern_at(0).as_deref(), Some("01100"));
    }

    #[test]
    fn test_open_hand_is_searching() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        frame.classify_frame(&flatten(&[open_hand()]), 1).unwrap();
        assert_eq!(frame.primary_label(), "Searching...");
    }

    #[test]
    fn test_two_hands_overlay() {
        let mut frame = FrameClassifier::new(&two_hand_tracker());
        let flat = flatten(&[
            pose([false, true, true, true, true]),
            pose([true, false, false, false, true]),
        ]);
        assert_eq!(frame.classify_frame(&flat, 2).unwrap(), 2);
        assert_eq!(frame.overlay_text(), "B | Y");
        assert_eq!(frame.label_at(1), "Y");
        assert_eq!(frame.label_at(2), "No hand detected");
    }

    #[test]
    fn test_extra_hands_beyond_tracker_limit_dropped() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        let flat = flatten(&[pose([false, false, false, false, true]), open_hand()]);
        assert_eq!(frame.classify_frame(&flat, 2).unwrap(), 1);
        assert_eq!(frame.overlay_text(), "I");
    }

    #[test]
    fn test_malformed_frame_clears_labels() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        frame.classify_frame(&flatten(&[pose([false, true, true, true, false])]), 1).unwrap();
        assert_eq!(frame.primary_label(), "W");

        let err = frame.classify_frame(&[0.5; 10], 1).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Landmarks(LandmarkError::Truncated { expected: 63, actual: 10 })
        ));
        assert_eq!(frame.hand_count(), 0);
        assert_eq!(frame.primary_label(), "No hand detected");
    }

    #[test]
    fn test_frames_independent() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        let b = flatten(&[pose([false, true, true, true, true])]);
        let d = flatten(&[pose([false, true, false, false, false])]);
        frame.classify_frame(&b, 1).unwrap();
        frame.classify_frame(&d, 1).unwrap();
        assert_eq!(frame.primary_label(), "D");
        frame.classify_frame(&b, 1).unwrap();
        assert_eq!(frame.primary_label(), "B");
    }

    #[test]
    fn test_threshold_validation() {
        let mut frame = FrameClassifier::new(&TrackerConfig::new());
        assert!(frame.update_thresholds(0.0, 0.04).is_err());
        assert!(frame.update_thresholds(0.04, f32::NAN).is_err());
        assert_eq!(frame.config().index_touch_threshold, 0.04);

        frame.update_thresholds(0.05, 0.03).unwrap();
        assert_eq!(frame.config().index_touch_threshold, 0.05);
        assert_eq!(frame.config().middle_touch_threshold, 0.03);
    }
}
