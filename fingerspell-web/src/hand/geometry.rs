//! Planar landmark distances

use nalgebra::{distance, Point2};
use super::landmarks::HandLandmark;

/// Euclidean distance between two landmarks in normalized (x, y) units.
///
/// z is dropped. No hand-size normalization: the result is a fraction of the
/// frame, so thresholds built on it depend on how large the hand appears.
pub fn planar_distance(a: HandLandmark, b: HandLandmark) -> f32 {
    distance(&Point2::new(a.x, a.y), &Point2::new(b.x, b.y))
}
