//! Rule-based letter classification
//!
//! An ordered table of finger-state patterns. The first matching rule wins;
//! nothing matching yields `Label::Undetermined`.

use crate::hand::{
    extract_finger_state, planar_distance, FingerState, HandLandmarks,
    INDEX_DIP, MIDDLE_DIP, THUMB_TIP,
};
use super::config::ClassifierConfig;
use super::label::{Label, Letter};

/// What part of the finger-state vector a rule looks at
#[derive(Clone, Copy, Debug)]
pub enum Matcher {
    /// All five digits, thumb first
    Exact([bool; 5]),
    /// Index..pinky only, thumb free
    Fingers([bool; 4]),
}

impl Matcher {
    fn matches(&self, state: &FingerState) -> bool {
        let s = state.as_array();
        match self {
            Matcher::Exact(p) => s == *p,
            Matcher::Fingers(p) => s[1..] == p[..],
        }
    }
}

/// How a matched rule turns into a letter
#[derive(Clone, Copy, Debug)]
pub enum Resolve {
    Fixed(Letter),
    /// Split on the thumb: `extended` if the thumb is out, else `curled`
    Thumb { extended: Letter, curled: Letter },
    /// Closed fist: thumb-tip contact with index/middle DIP picks T, N or A
    Fist,
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub matcher: Matcher,
    pub resolve: Resolve,
}

const fn exact(p: [u8; 5], resolve: Resolve) -> Rule {
    Rule {
        matcher: Matcher::Exact([p[0] == 1, p[1] == 1, p[2] == 1, p[3] == 1, p[4] == 1]),
        resolve,
    }
}

/// Priority order, top first. Patterns are (thumb, index, middle, ring, pinky).
pub const RULES: [Rule; 7] = [
    exact([0, 1, 1, 1, 1], Resolve::Fixed(Letter::B)),
    // Index alone: L with the thumb out, D with it tucked
    Rule {
        matcher: Matcher::Fingers([true, false, false, false]),
        resolve: Resolve::Thumb { extended: Letter::L, curled: Letter::D },
    },
    exact([0, 0, 0, 0, 1], Resolve::Fixed(Letter::I)),
    exact([1, 0, 0, 0, 1], Resolve::Fixed(Letter::Y)),
    exact([0, 1, 1, 0, 0], Resolve::Fixed(Letter::V)),
    exact([0, 1, 1, 1, 0], Resolve::Fixed(Letter::W)),
    exact([0, 0, 0, 0, 0], Resolve::Fist),
];

/// Finger state together with the label derived from it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub fingers: FingerState,
    pub label: Label,
}

fn resolve_fist(hand: &HandLandmarks, config: &ClassifierConfig) -> Letter {
    let thumb_tip = hand.point(THUMB_TIP);
    if planar_distance(thumb_tip, hand.point(INDEX_DIP)) < config.index_touch_threshold {
        Letter::T
    } else if planar_distance(thumb_tip, hand.point(MIDDLE_DIP)) < config.middle_touch_threshold {
        Letter::N
    } else {
        Letter::A
    }
}

/// Walk the rule table for an already extracted finger state.
///
/// `hand` is consulted only by the fist rule.
pub fn classify_state(
    state: &FingerState,
    hand: &HandLandmarks,
    config: &ClassifierConfig,
) -> Label {
    let Some(rule) = RULES.iter().find(|r| r.matcher.matches(state)) else {
        return Label::Undetermined;
    };

    let letter = match rule.resolve {
        Resolve::Fixed(letter) => letter,
        Resolve::Thumb { extended, curled } => {
            if state.thumb() { extended } else { curled }
        }
        Resolve::Fist => resolve_fist(hand, config),
    };

    Label::Letter(letter)
}

/// Classify one hand, keeping the intermediate finger state
pub fn classify_hand(hand: &HandLandmarks, config: &ClassifierConfig) -> Classification {
    let fingers = extract_finger_state(hand, config.thumb);
    Classification {
        fingers,
        label: classify_state(&fingers, hand, config),
    }
}

/// Classify the hand in view, if any
pub fn classify(hand: Option<&HandLandmarks>, config: &ClassifierConfig) -> Label {
    match hand {
        Some(hand) => classify_hand(hand, config).label,
        None => Label::NoHand,
    }
}
