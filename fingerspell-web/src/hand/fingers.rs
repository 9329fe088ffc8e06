//! Finger-state extraction - which digits are extended
//!
//! Pure per-frame geometry. Strict comparisons only: no margin, no
//! hysteresis, so a tip sitting level with its joint may flip between frames.

use super::landmarks::{
    HandLandmarks,
    THUMB_IP, THUMB_TIP,
    INDEX_PIP, INDEX_TIP,
    MIDDLE_PIP, MIDDLE_TIP,
    RING_PIP, RING_TIP,
    PINKY_PIP, PINKY_TIP,
};

/// Digits in vector order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Digit {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Digit {
    pub const ALL: [Digit; 5] = [
        Digit::Thumb,
        Digit::Index,
        Digit::Middle,
        Digit::Ring,
        Digit::Pinky,
    ];

    /// (tip, reference joint) landmark indices
    fn joints(self) -> (usize, usize) {
        match self {
            Digit::Thumb => (THUMB_TIP, THUMB_IP),
            Digit::Index => (INDEX_TIP, INDEX_PIP),
            Digit::Middle => (MIDDLE_TIP, MIDDLE_PIP),
            Digit::Ring => (RING_TIP, RING_PIP),
            Digit::Pinky => (PINKY_TIP, PINKY_PIP),
        }
    }
}

/// Which side of the IP joint an extended thumb tip lies on.
///
/// The detector gives no handedness-independent answer, so the caller picks
/// one. `TipLeftOfJoint` fits a right hand in a mirrored selfie view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThumbConvention {
    /// Extended iff `tip.x < ip.x`
    #[default]
    TipLeftOfJoint,
    /// Extended iff `tip.x > ip.x`
    TipRightOfJoint,
}

impl ThumbConvention {
    pub fn is_extended(self, tip_x: f32, joint_x: f32) -> bool {
        match self {
            ThumbConvention::TipLeftOfJoint => tip_x < joint_x,
            ThumbConvention::TipRightOfJoint => tip_x > joint_x,
        }
    }
}

/// Extended (true) / curled (false) per digit: thumb, index, middle, ring, pinky
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerState([bool; 5]);

impl FingerState {
    pub const fn new(states: [bool; 5]) -> Self {
        Self(states)
    }

    pub fn is_extended(&self, digit: Digit) -> bool {
        self.0[digit as usize]
    }

    pub fn thumb(&self) -> bool {
        self.0[0]
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    /// Count of extended digits
    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }
}

impl std::fmt::Display for FingerState {
    /// Compact "01111" form, thumb first
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for up in self.0 {
            f.write_str(if up { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Compute the finger-state vector for one hand
pub fn extract_finger_state(hand: &HandLandmarks, thumb: ThumbConvention) -> FingerState {
    let mut states = [false; 5];

    for digit in Digit::ALL {
        let (tip_idx, joint_idx) = digit.joints();
        let tip = hand.point(tip_idx);
        let joint = hand.point(joint_idx);

        states[digit as usize] = match digit {
            Digit::Thumb => thumb.is_extended(tip.x, joint.x),
            // Image y grows downward: extended tips sit above their joint
            _ => tip.y < joint.y,
        };
    }

    FingerState(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::fixtures::{open_hand, pose};
    use crate::hand::{HandLandmark, INDEX_TIP, INDEX_PIP, THUMB_TIP};

    #[test]
    fn test_open_hand_all_extended() {
        let state = extract_finger_state(&open_hand(), ThumbConvention::TipLeftOfJoint);
        assert_eq!(state.as_array(), [true; 5]);
        assert_eq!(state.extended_count(), 5);
    }

    #[test]
    fn test_pose_round_trips_through_extractor() {
        let patterns = [
            [false, true, true, true, true],
            [false, true, false, false, false],
            [true, false, false, false, true],
            [false, false, false, false, false],
        ];
        for pattern in patterns {
            let state = extract_finger_state(&pose(pattern), ThumbConvention::TipLeftOfJoint);
            assert_eq!(state.as_array(), pattern, "pattern {:?}", pattern);
        }
    }

    #[test]
    fn test_thumb_convention_flips_thumb_only() {
        let hand = open_hand();
        let left = extract_finger_state(&hand, ThumbConvention::TipLeftOfJoint);
        let right = extract_finger_state(&hand, ThumbConvention::TipRightOfJoint);
        assert!(left.thumb());
        assert!(!right.thumb());
        assert_eq!(left.as_array()[1..], right.as_array()[1..]);
    }

    #[test]
    fn test_tip_level_with_joint_is_curled() {
        let mut points = *open_hand().points();
        points[INDEX_TIP].y = points[INDEX_PIP].y;
        let state = extract_finger_state(&HandLandmarks::new(points), ThumbConvention::default());
        assert!(!state.is_extended(Digit::Index));
    }

    #[test]
    fn test_thumb_level_with_joint_is_curled_both_ways() {
        let mut points = *open_hand().points();
        points[THUMB_TIP] = HandLandmark::new(points[THUMB_IP].x, 0.5, 0.0);
        let hand = HandLandmarks::new(points);
        assert!(!extract_finger_state(&hand, ThumbConvention::TipLeftOfJoint).thumb());
        assert!(!extract_finger_state(&hand, ThumbConvention::TipRightOfJoint).thumb());
    }

    #[test]
    fn test_deterministic() {
        let hand = pose([true, true, false, false, false]);
        let a = extract_finger_state(&hand, ThumbConvention::default());
        let b = extract_finger_state(&hand, ThumbConvention::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_thumb_first() {
        let state = FingerState::new([false, true, true, false, false]);
        assert_eq!(state.to_string(), "01100");
    }
}
