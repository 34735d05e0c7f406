//! Media Segment Base
//!
//! Timing, speed, volume and keyframe state shared by every media segment placed
//! on a track, plus the segment's `extra_material_refs` bookkeeping.

use serde_json::{json, Value};

use super::{KeyframeList, KeyframeProperty, Timerange};
use crate::core::{generate_id, DecorationId, MaterialId, Microseconds, SegmentId};

// =============================================================================
// Speed
// =============================================================================

/// Playback speed material owned by a segment
#[derive(Clone, Debug, PartialEq)]
pub struct Speed {
    pub id: DecorationId,
    pub speed: f64,
}

impl Speed {
    pub fn new(speed: f64) -> Self {
        Self {
            id: generate_id(),
            speed,
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "curve_speed": null,
            "id": self.id,
            "mode": 0,
            "speed": self.speed,
            "type": "speed",
        })
    }
}

// =============================================================================
// MediaSegment
// =============================================================================

/// Base state of a segment that plays a slice of a material
#[derive(Clone, Debug, PartialEq)]
pub struct MediaSegment {
    pub id: SegmentId,
    pub material_id: MaterialId,
    /// Slice of the material that is played
    pub source_timerange: Timerange,
    /// Placement on the track
    pub target_timerange: Timerange,
    pub speed: Speed,
    /// Volume (1.0 = 100%)
    pub volume: f64,
    pub common_keyframes: Vec<KeyframeList>,
    /// Ids of every material this segment depends on; the speed id comes first
    pub extra_material_refs: Vec<DecorationId>,
}

impl MediaSegment {
    pub fn new(
        material_id: &str,
        source_timerange: Timerange,
        target_timerange: Timerange,
        speed: f64,
        volume: f64,
    ) -> Self {
        let speed = Speed::new(speed);
        let extra_material_refs = vec![speed.id.clone()];
        Self {
            id: generate_id(),
            material_id: material_id.to_string(),
            source_timerange,
            target_timerange,
            speed,
            volume,
            common_keyframes: Vec::new(),
            extra_material_refs,
        }
    }

    /// Returns the segment's length on the track
    pub fn duration(&self) -> Microseconds {
        self.target_timerange.duration
    }

    /// Gets the keyframe track for a property
    pub fn keyframe_track(&self, property: KeyframeProperty) -> Option<&KeyframeList> {
        self.common_keyframes
            .iter()
            .find(|list| list.property == property)
    }

    /// Appends a point to the property's track, creating the track on first use
    pub fn push_keyframe(&mut self, property: KeyframeProperty, time_offset: Microseconds, value: f64) {
        if let Some(list) = self
            .common_keyframes
            .iter_mut()
            .find(|list| list.property == property)
        {
            list.add_keyframe(time_offset, value);
            return;
        }

        let mut list = KeyframeList::new(property);
        list.add_keyframe(time_offset, value);
        self.common_keyframes.push(list);
    }

    pub fn export_json(&self) -> Value {
        json!({
            "enable_adjust": true,
            "enable_color_correct_adjust": false,
            "enable_color_curves": true,
            "enable_color_match_adjust": false,
            "enable_color_wheels": true,
            "enable_lut": true,
            "enable_smart_color_adjust": false,
            "last_nonzero_volume": 1.0,
            "reverse": false,
            "track_attribute": 0,
            "track_render_index": 0,
            "visible": true,
            "id": self.id,
            "material_id": self.material_id,
            "target_timerange": self.target_timerange.export_json(),
            "common_keyframes": self.common_keyframes.iter().map(KeyframeList::export_json).collect::<Vec<_>>(),
            "keyframe_refs": [],
            "source_timerange": self.source_timerange.export_json(),
            "speed": self.speed.speed,
            "volume": self.volume,
            "extra_material_refs": self.extra_material_refs,
        })
    }
}
