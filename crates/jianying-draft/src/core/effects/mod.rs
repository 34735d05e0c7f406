//! Effects Module
//!
//! Video effects, filters and audio effects, plus resolution of their slider
//! parameters against catalog metadata.

mod audio;
mod models;
mod params;

pub use audio::AudioEffect;
pub use models::*;
pub use params::{resolve_params, EffectParamInstance};
