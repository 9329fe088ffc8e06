//! Hand module - landmark sets and the finger-state extractor
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod geometry;
mod fingers;

pub use landmarks::{
    parse_hands,
    HandLandmark,
    HandLandmarks,
    LandmarkError,
    LANDMARK_COUNT,
    FLOATS_PER_HAND,
    // Indices (MediaPipe hand - 21 total)
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use geometry::planar_distance;
pub use fingers::{extract_finger_state, Digit, FingerState, ThumbConvention};

#[cfg(test)]
pub(crate) use landmarks::fixtures;
