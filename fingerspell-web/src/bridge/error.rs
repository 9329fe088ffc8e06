//! Errors surfaced to JavaScript

use std::fmt;
use wasm_bindgen::prelude::*;
use crate::hand::LandmarkError;

pub enum BridgeError {
    Landmarks(LandmarkError),
    /// Touch threshold must be finite and positive
    InvalidThreshold(f32),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Landmarks(e) => write!(f, "{}", e),
            BridgeError::InvalidThreshold(v) => {
                write!(f, "Invalid touch threshold: {} (must be > 0)", v)
            }
        }
    }
}

impl fmt::Debug for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<LandmarkError> for BridgeError {
    fn from(err: LandmarkError) -> Self {
        BridgeError::Landmarks(err)
    }
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
