//! Session module - the word being spelled
//!
//! Re-exports only. All logic in submodules.

mod word;

pub use word::{SessionEvent, WordBuffer};
