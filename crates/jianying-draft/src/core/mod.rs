//! Draft Core
//!
//! Typed model of a draft's video segments and their decorations, the resource
//! catalog they are resolved against, and JSON export in the host's schema.

pub mod animations;
pub mod effects;
pub mod masks;
pub mod metadata;
pub mod settings;
pub mod timeline;
pub mod transitions;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
