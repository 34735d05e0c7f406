//! Keyframe Tracks
//!
//! Per-property keyframe lists attached to a segment.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::{generate_id, Microseconds};

/// A segment property that can be controlled by keyframes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyframeProperty {
    /// Horizontal position, in half canvas widths
    PositionX,
    /// Vertical position, in half canvas heights
    PositionY,
    /// Clockwise rotation in degrees
    Rotation,
    ScaleX,
    ScaleY,
    /// Locked X/Y scale. Stored on the `ScaleX` track.
    UniformScale,
    /// Opacity, 0-1
    Alpha,
    Saturation,
    Contrast,
    Brightness,
    Volume,
}

impl KeyframeProperty {
    /// Returns the `property_type` tag used in the draft JSON
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::PositionX => "KFTypePositionX",
            Self::PositionY => "KFTypePositionY",
            Self::Rotation => "KFTypeRotation",
            Self::ScaleX => "KFTypeScaleX",
            Self::ScaleY => "KFTypeScaleY",
            Self::UniformScale => "UNIFORM_SCALE",
            Self::Alpha => "KFTypeAlpha",
            Self::Saturation => "KFTypeSaturation",
            Self::Contrast => "KFTypeContrast",
            Self::Brightness => "KFTypeBrightness",
            Self::Volume => "KFTypeVolume",
        }
    }
}

/// A single control point
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub id: String,
    /// Offset from the start of the owning segment
    pub time_offset: Microseconds,
    pub values: Vec<f64>,
}

impl Keyframe {
    pub fn new(time_offset: Microseconds, value: f64) -> Self {
        Self {
            id: generate_id(),
            time_offset,
            values: vec![value],
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "curveType": "Line",
            "graphID": "",
            "left_control": {"x": 0.0, "y": 0.0},
            "right_control": {"x": 0.0, "y": 0.0},
            "id": self.id,
            "time_offset": self.time_offset,
            "values": self.values,
        })
    }
}

/// Keyframes of one property, kept sorted by time offset
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeList {
    pub id: String,
    pub property: KeyframeProperty,
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeList {
    pub fn new(property: KeyframeProperty) -> Self {
        Self {
            id: generate_id(),
            property,
            keyframes: Vec::new(),
        }
    }

    /// Inserts a point, keeping the list ordered. Equal offsets keep insertion order.
    pub fn add_keyframe(&mut self, time_offset: Microseconds, value: f64) {
        let pos = self
            .keyframes
            .partition_point(|kf| kf.time_offset <= time_offset);
        self.keyframes.insert(pos, Keyframe::new(time_offset, value));
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn export_json(&self) -> Value {
        json!({
            "id": self.id,
            "keyframe_list": self.keyframes.iter().map(Keyframe::export_json).collect::<Vec<_>>(),
            "material_id": "",
            "property_type": self.property.wire_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_stay_sorted() {
        let mut list = KeyframeList::new(KeyframeProperty::Alpha);
        list.add_keyframe(2_000_000, 0.0);
        list.add_keyframe(0, 1.0);
        list.add_keyframe(1_000_000, 0.5);

        let offsets: Vec<_> = list.keyframes.iter().map(|kf| kf.time_offset).collect();
        assert_eq!(offsets, vec![0, 1_000_000, 2_000_000]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_keyframe_list_export() {
        let mut list = KeyframeList::new(KeyframeProperty::ScaleX);
        list.add_keyframe(500, 1.2);

        let json = list.export_json();
        assert_eq!(json["property_type"], "KFTypeScaleX");
        assert_eq!(json["material_id"], "");
        assert_eq!(json["keyframe_list"][0]["time_offset"], 500);
        assert_eq!(json["keyframe_list"][0]["values"], json!([1.2]));
        assert_eq!(json["keyframe_list"][0]["curveType"], "Line");
    }

    #[test]
    fn test_property_wire_names() {
        assert_eq!(KeyframeProperty::PositionY.wire_name(), "KFTypePositionY");
        assert_eq!(KeyframeProperty::UniformScale.wire_name(), "UNIFORM_SCALE");
        assert_eq!(KeyframeProperty::Volume.wire_name(), "KFTypeVolume");
    }
}
