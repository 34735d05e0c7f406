//! Transitions
//!
//! A transition belongs to the segment *before* the cut it decorates.

use serde_json::{json, Value};

use crate::core::metadata::TransitionMeta;
use crate::core::{generate_id, DecorationId, Microseconds};

/// A transition material
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub id: DecorationId,
    pub name: String,
    pub effect_id: String,
    pub resource_id: String,
    pub duration: Microseconds,
    /// Whether the transition overlaps the neighbouring segments
    pub is_overlap: bool,
}

impl Transition {
    /// Creates a transition; `duration` defaults to the metadata's default duration
    pub fn new(meta: &TransitionMeta, duration: Option<Microseconds>) -> Self {
        Self {
            id: generate_id(),
            name: meta.name.clone(),
            effect_id: meta.effect_id.clone(),
            resource_id: meta.resource_id.clone(),
            duration: duration.unwrap_or(meta.default_duration),
            is_overlap: meta.is_overlap,
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "category_id": "",
            "category_name": "",
            "duration": self.duration,
            "effect_id": self.effect_id,
            "id": self.id,
            "is_overlap": self.is_overlap,
            "name": self.name,
            "platform": "all",
            "resource_id": self.resource_id,
            "type": "transition",
        })
    }
}
