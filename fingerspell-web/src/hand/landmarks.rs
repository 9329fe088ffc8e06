//! Hand landmark sets as delivered by the MediaPipe hand tracker
//!
//! JS hands over every detected hand of a frame as one flat Float32Array:
//! `num_hands * 21 * 3` floats, `x, y, z` interleaved per landmark.

use std::fmt;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmarks per detected hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per hand in the flat transport array (x, y, z per landmark)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One keypoint in normalized frame coordinates (x, y in 0-1)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    /// Relative depth. Carried for completeness, never used for classification.
    pub z: f32,
}

impl HandLandmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Exactly 21 landmarks for one detected hand, in MediaPipe order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Landmark at a MediaPipe index (0 = wrist ... 20 = pinky tip)
    pub fn point(&self, index: usize) -> HandLandmark {
        self.points[index]
    }

    pub fn points(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl Default for HandLandmarks {
    fn default() -> Self {
        Self {
            points: [HandLandmark::default(); LANDMARK_COUNT],
        }
    }
}

/// Why a flat landmark array could not be turned into hands
#[derive(Clone, Debug, PartialEq)]
pub enum LandmarkError {
    /// Fewer floats than `num_hands * 63`
    Truncated { expected: usize, actual: usize },
    /// NaN or infinite coordinate
    NonFinite { hand: usize, index: usize },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::Truncated { expected, actual } => write!(
                f,
                "Invalid hand landmark data length: {} (expected at least {})",
                actual, expected
            ),
            LandmarkError::NonFinite { hand, index } => write!(
                f,
                "Non-finite coordinate at hand {} landmark {}",
                hand, index
            ),
        }
    }
}

impl std::error::Error for LandmarkError {}

// ============================================================================
// PARSING
// ============================================================================

/// Split a flat landmark array into per-hand sets.
///
/// `num_hands` is clamped to `max_hands`. Trailing floats beyond the clamped
/// hand count are ignored. Zero hands is not an error.
pub fn parse_hands(
    flat_data: &[f32],
    num_hands: usize,
    max_hands: usize,
) -> Result<Vec<HandLandmarks>, LandmarkError> {
    let hand_count = num_hands.min(max_hands);
    let expected = hand_count * FLOATS_PER_HAND;
    if flat_data.len() < expected {
        return Err(LandmarkError::Truncated {
            expected,
            actual: flat_data.len(),
        });
    }

    let mut hands = Vec::with_capacity(hand_count);
    for (h, chunk) in flat_data.chunks_exact(FLOATS_PER_HAND).take(hand_count).enumerate() {
        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (i, xyz) in chunk.chunks_exact(3).enumerate() {
            if !xyz.iter().all(|v| v.is_finite()) {
                return Err(LandmarkError::NonFinite { hand: h, index: i });
            }
            points[i] = HandLandmark::new(xyz[0], xyz[1], xyz[2]);
        }
        hands.push(HandLandmarks::new(points));
    }

    Ok(hands)
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Synthetic hand poses for tests.
///
/// An upright right hand as it appears in a mirrored frame: wrist at the
/// bottom, fingers pointing up (smaller y), thumb on the image left.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// All five digits extended
    pub fn open_hand() -> HandLandmarks {
        let mut p = [HandLandmark::default(); LANDMARK_COUNT];
        p[WRIST] = HandLandmark::new(0.50, 0.90, 0.0);

        // Thumb reaches out to the left
        p[THUMB_CMC] = HandLandmark::new(0.44, 0.84, 0.0);
        p[THUMB_MCP] = HandLandmark::new(0.40, 0.78, 0.0);
        p[THUMB_IP] = HandLandmark::new(0.36, 0.73, 0.0);
        p[THUMB_TIP] = HandLandmark::new(0.32, 0.69, 0.0);

        let columns = [
            (INDEX_MCP, 0.44),
            (MIDDLE_MCP, 0.50),
            (RING_MCP, 0.56),
            (PINKY_MCP, 0.61),
        ];
        for (mcp, x) in columns {
            p[mcp] = HandLandmark::new(x, 0.70, 0.0);
            p[mcp + 1] = HandLandmark::new(x, 0.60, 0.0);
            p[mcp + 2] = HandLandmark::new(x, 0.53, 0.0);
            p[mcp + 3] = HandLandmark::new(x, 0.47, 0.0);
        }

        HandLandmarks::new(p)
    }

    /// Pose built from a (thumb, index, middle, ring, pinky) extension pattern
    pub fn pose(pattern: [bool; 5]) -> HandLandmarks {
        let mut p = *open_hand().points();

        if !pattern[0] {
            // Thumb tucked across the palm, right of its IP joint
            p[THUMB_TIP] = HandLandmark::new(0.46, 0.72, 0.0);
        }

        let fingers = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
        for (digit, mcp) in fingers.into_iter().enumerate() {
            if !pattern[digit + 1] {
                // Curl: tip folds back down below the PIP joint
                let x = p[mcp].x;
                p[mcp + 2] = HandLandmark::new(x, 0.66, 0.0);
                p[mcp + 3] = HandLandmark::new(x, 0.68, 0.0);
            }
        }

        HandLandmarks::new(p)
    }

    /// Flatten hands into the JS transport layout
    pub fn flatten(hands: &[HandLandmarks]) -> Vec<f32> {
        hands
            .iter()
            .flat_map(|h| h.points().iter().flat_map(|lm| [lm.x, lm.y, lm.z]))
            .collect()
    }
}
