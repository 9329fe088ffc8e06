//! Classifier module - finger-spelling letters from hand landmarks
//!
//! Pure and stateless: one call per detected hand per frame.

mod label;
mod config;
mod rules;

pub use label::{Label, Letter};
pub use config::{ClassifierConfig, DEFAULT_TOUCH_THRESHOLD};
pub use rules::{classify, classify_hand, classify_state, Classification, Matcher, Resolve, Rule, RULES};
