//! Classifier output labels

use std::fmt;

/// Letters the rule table can produce
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    D,
    I,
    L,
    N,
    T,
    V,
    W,
    Y,
}

impl Letter {
    pub const ALL: [Letter; 10] = [
        Letter::A,
        Letter::B,
        Letter::D,
        Letter::I,
        Letter::L,
        Letter::N,
        Letter::T,
        Letter::V,
        Letter::W,
        Letter::Y,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::D => 'D',
            Letter::I => 'I',
            Letter::L => 'L',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::V => 'V',
            Letter::W => 'W',
            Letter::Y => 'Y',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        Self::ALL.into_iter().find(|l| l.as_char() == upper)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Result of classifying one hand (or its absence)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Letter(Letter),
    /// A hand is present but no rule matched
    Undetermined,
    NoHand,
}

impl Label {
    pub const UNDETERMINED_TEXT: &'static str = "Searching...";
    pub const NO_HAND_TEXT: &'static str = "No hand detected";

    pub fn letter(&self) -> Option<Letter> {
        match self {
            Label::Letter(l) => Some(*l),
            _ => None,
        }
    }
}

impl From<Letter> for Label {
    fn from(letter: Letter) -> Self {
        Label::Letter(letter)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Letter(l) => write!(f, "{}", l),
            Label::Undetermined => f.write_str(Self::UNDETERMINED_TEXT),
            Label::NoHand => f.write_str(Self::NO_HAND_TEXT),
        }
    }
}
