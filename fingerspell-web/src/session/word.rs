//! Confirmed-letter buffer for one spelling session
//!
//! Plain state value: handlers take the buffer, apply one event, and hand
//! back the new buffer. Nothing here is global.

use crate::classifier::{Label, Letter};

/// User actions that change the word
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Append the label if it is a letter; sentinels are ignored
    Confirm(Label),
    /// Drop the last letter
    Backspace,
    /// Replace the whole word with an externally corrected spelling
    UseCorrection(String),
    Clear,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBuffer {
    letters: Vec<char>,
}

impl WordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::Confirm(label) => {
                if let Some(letter) = label.letter() {
                    self.letters.push(letter.as_char());
                }
            }
            SessionEvent::Backspace => {
                self.letters.pop();
            }
            SessionEvent::UseCorrection(word) => {
                let cleaned: Vec<char> = word
                    .trim()
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .map(|c| c.to_ascii_uppercase())
                    .collect();
                // An empty suggestion keeps what the user spelled
                if !cleaned.is_empty() {
                    self.letters = cleaned;
                }
            }
            SessionEvent::Clear => self.letters.clear(),
        }
        self
    }

    /// Convenience for the common case of confirming a recognized letter
    pub fn push(self, letter: Letter) -> Self {
        self.apply(SessionEvent::Confirm(Label::Letter(letter)))
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
