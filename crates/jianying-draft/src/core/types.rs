//! Core Type Definitions
//!
//! Defines fundamental types used throughout the crate.

use uuid::Uuid;

// =============================================================================
// ID Types
// =============================================================================

/// Material unique identifier (32 lowercase hex chars)
pub type MaterialId = String;

/// Segment unique identifier
pub type SegmentId = String;

/// Identifier of a decoration material (effect, filter, mask, ...)
pub type DecorationId = String;

/// Generates a new random identifier in the simple hex form the draft format uses.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// =============================================================================
// Time Types
// =============================================================================

/// Time in microseconds, the draft format's native unit
pub type Microseconds = i64;

/// One second in microseconds
pub const SEC: Microseconds = 1_000_000;
