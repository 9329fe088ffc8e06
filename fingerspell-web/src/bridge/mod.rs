//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod tracker;
mod frame;
mod session;

pub use error::BridgeError;
pub use tracker::{
    TrackerConfig,
    DEFAULT_MAX_HANDS,
    MAX_SUPPORTED_HANDS,
    DEFAULT_MIN_DETECTION_CONFIDENCE,
    DEFAULT_MIN_TRACKING_CONFIDENCE,
};
pub use frame::FrameClassifier;
pub use session::WordSession;
