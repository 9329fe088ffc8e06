//! Word session object owned by the page
//!
//! JS creates one `WordSession` per spelling session and keeps the handle.
//! Each button handler feeds one event through `WordBuffer::apply`.

use wasm_bindgen::prelude::*;
use crate::session::{SessionEvent, WordBuffer};
use super::frame::FrameClassifier;

#[wasm_bindgen]
#[derive(Default)]
pub struct WordSession {
    word: WordBuffer,
}

#[wasm_bindgen]
impl WordSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WordSession {
        WordSession::default()
    }

    /// Append the first hand's current letter. Returns false when the frame
    /// holds no letter (no hand, or still searching).
    pub fn confirm_current(&mut self, frame: &FrameClassifier) -> bool {
        let label = frame.label(0);
        self.dispatch(SessionEvent::Confirm(label));
        label.letter().is_some()
    }

    pub fn backspace(&mut self) {
        self.dispatch(SessionEvent::Backspace);
    }

    /// Replace the word with a spelling suggested by the page's corrector
    pub fn use_correction(&mut self, corrected: &str) {
        self.dispatch(SessionEvent::UseCorrection(corrected.to_string()));
    }

    pub fn clear(&mut self) {
        self.dispatch(SessionEvent::Clear);
        console_log!("Word cleared");
    }

    #[wasm_bindgen(getter)]
    pub fn word(&self) -> String {
        self.word.as_string()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.word.len()
    }
}

impl WordSession {
    fn dispatch(&mut self, event: SessionEvent) {
        self.word = std::mem::take(&mut self.word).apply(event);
    }
}
