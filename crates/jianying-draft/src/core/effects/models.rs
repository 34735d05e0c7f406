//! Effect Model Definitions
//!
//! Video effect and filter materials attached to segments.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use super::params::{resolve_params, EffectParamInstance};
use crate::core::metadata::{EffectMeta, VideoEffectKind, VideoEffectType};
use crate::core::{generate_id, CoreResult, DecorationId};

// =============================================================================
// Apply Target
// =============================================================================

/// What an effect or filter acts on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyTarget {
    /// Only the owning segment
    #[default]
    Segment,
    /// The whole project
    Global,
}

impl ApplyTarget {
    /// Returns the numeric `apply_target_type` code
    pub fn code(&self) -> u8 {
        match self {
            Self::Segment => 0,
            Self::Global => 2,
        }
    }
}

// =============================================================================
// Video Effect
// =============================================================================

/// A scene or character effect instance
#[derive(Clone, Debug, PartialEq)]
pub struct VideoEffect {
    pub id: DecorationId,
    pub name: String,
    pub effect_id: String,
    pub resource_id: String,
    pub kind: VideoEffectKind,
    pub apply_target: ApplyTarget,
    pub adjust_params: Vec<EffectParamInstance>,
}

impl VideoEffect {
    /// Creates an effect, resolving `params` (0-100 scale) against the metadata
    pub fn new(effect_type: &VideoEffectType, params: &[Option<f64>], apply_target: ApplyTarget) -> CoreResult<Self> {
        let meta = &effect_type.meta;
        Ok(Self {
            id: generate_id(),
            name: meta.name.clone(),
            effect_id: meta.effect_id.clone(),
            resource_id: meta.resource_id.clone(),
            kind: effect_type.kind,
            apply_target,
            adjust_params: resolve_params(meta, params)?,
        })
    }

    /// Returns the exported `type` tag
    pub fn effect_type(&self) -> &'static str {
        match self.kind {
            VideoEffectKind::Scene => "video_effect",
            VideoEffectKind::Character => "face_effect",
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "adjust_params": self.adjust_params.iter().map(EffectParamInstance::export_json).collect::<Vec<_>>(),
            "apply_target_type": self.apply_target.code(),
            "apply_time_range": null,
            "category_id": "",
            "category_name": "",
            "common_keyframes": [],
            "disable_effect_faces": [],
            "effect_id": self.effect_id,
            "formula_id": "",
            "id": self.id,
            "name": self.name,
            "platform": "all",
            "render_index": 11000,
            "resource_id": self.resource_id,
            "source_platform": 0,
            "time_range": null,
            "track_render_index": 0,
            "type": self.effect_type(),
            "value": 1.0,
            "version": "",
        })
    }
}

// =============================================================================
// Filter
// =============================================================================

/// A filter instance; its only parameter is the intensity
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub id: DecorationId,
    pub meta: EffectMeta,
    /// Intensity, 0-1
    pub intensity: f64,
    pub apply_target: ApplyTarget,
}

impl Filter {
    /// Creates a filter. Filters without parameters always use intensity 1.0; any
    /// other request is logged and ignored.
    pub fn new(meta: &EffectMeta, intensity: f64, apply_target: ApplyTarget) -> Self {
        let intensity = if meta.params.is_empty() && intensity != 1.0 {
            warn!(
                "Filter '{}' cannot set intensity, input intensity {} is ignored",
                meta.name, intensity
            );
            1.0
        } else {
            intensity
        };

        Self {
            id: generate_id(),
            meta: meta.clone(),
            intensity,
            apply_target,
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "adjust_params": [],
            "algorithm_artifact_path": "",
            "apply_target_type": self.apply_target.code(),
            "bloom_params": null,
            "category_id": "",
            "category_name": "",
            "color_match_info": {
                "source_feature_path": "",
                "target_feature_path": "",
                "target_image_path": "",
            },
            "effect_id": self.meta.effect_id,
            "enable_skin_tone_correction": false,
            "exclusion_group": [],
            "face_adjust_params": [],
            "formula_id": "",
            "id": self.id,
            "intensity_key": "",
            "multi_language_current": "",
            "name": self.meta.name,
            "panel_id": "",
            "platform": "all",
            "resource_id": self.meta.resource_id,
            "source_platform": 1,
            "sub_type": "none",
            "time_range": null,
            "type": "filter",
            "value": self.intensity,
            "version": "",
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::core::metadata::{Catalog, EffectParam};

    fn keys(value: &Value) -> BTreeSet<String> {
        value
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn filter_meta(params: Vec<EffectParam>) -> EffectMeta {
        EffectMeta {
            name: "Film".to_string(),
            is_vip: false,
            resource_id: "res".to_string(),
            effect_id: "eff".to_string(),
            md5_like_id: String::new(),
            params,
        }
    }

    #[test]
    fn test_apply_target_codes() {
        assert_eq!(ApplyTarget::Segment.code(), 0);
        assert_eq!(ApplyTarget::Global.code(), 2);
        assert_eq!(ApplyTarget::default(), ApplyTarget::Segment);
    }

    #[test]
    fn test_video_effect_kind_sets_type() {
        let catalog = Catalog::fixture();
        let scene = catalog.video_effect(VideoEffectKind::Scene, "模糊").unwrap();
        let face = catalog
            .video_effect(VideoEffectKind::Character, "彩色描边")
            .unwrap();

        let scene = VideoEffect::new(&scene, &[], ApplyTarget::Segment).unwrap();
        let face = VideoEffect::new(&face, &[Some(0.0)], ApplyTarget::Global).unwrap();

        assert_eq!(scene.export_json()["type"], "video_effect");
        assert_eq!(face.export_json()["type"], "face_effect");
        assert_eq!(face.export_json()["apply_target_type"], 2);
        assert_eq!(face.adjust_params[0].value, 0.0);
        assert_eq!(face.adjust_params[1].value, 0.4);
    }

    #[test]
    fn test_video_effect_export_keys() {
        let effect_type = Catalog::fixture()
            .video_effect(VideoEffectKind::Scene, "胶片闪光")
            .unwrap();
        let effect = VideoEffect::new(&effect_type, &[], ApplyTarget::Segment).unwrap();
        let json = effect.export_json();

        let expected: BTreeSet<String> = [
            "adjust_params",
            "apply_target_type",
            "apply_time_range",
            "category_id",
            "category_name",
            "common_keyframes",
            "disable_effect_faces",
            "effect_id",
            "formula_id",
            "id",
            "name",
            "platform",
            "render_index",
            "resource_id",
            "source_platform",
            "time_range",
            "track_render_index",
            "type",
            "value",
            "version",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(keys(&json), expected);
        assert_eq!(json["effect_id"], effect_type.meta.effect_id.as_str());
        assert_eq!(json["id"], effect.id.as_str());
        assert_eq!(json["render_index"], 11000);
        assert_eq!(json["adjust_params"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_video_effect_rejects_extra_params() {
        let effect_type = Catalog::fixture()
            .video_effect(VideoEffectKind::Scene, "模糊")
            .unwrap();
        assert!(VideoEffect::new(&effect_type, &[None, None], ApplyTarget::Segment).is_err());
    }

    #[test]
    fn test_filter_keeps_intensity_with_params() {
        let meta = filter_meta(vec![EffectParam::new("effects_adjust_filter", 1.0, 0.0, 1.0)]);
        let filter = Filter::new(&meta, 0.3, ApplyTarget::Segment);
        assert_eq!(filter.intensity, 0.3);
    }

    #[test]
    fn test_filter_without_params_forces_full_intensity() {
        let meta = filter_meta(vec![]);
        let filter = Filter::new(&meta, 0.3, ApplyTarget::Segment);
        assert_eq!(filter.intensity, 1.0);
        assert_eq!(filter.export_json()["value"], 1.0);
    }

    #[test]
    fn test_filter_export_keys() {
        let meta = filter_meta(vec![]);
        let filter = Filter::new(&meta, 1.0, ApplyTarget::Global);
        let json = filter.export_json();

        let expected: BTreeSet<String> = [
            "adjust_params",
            "algorithm_artifact_path",
            "apply_target_type",
            "bloom_params",
            "category_id",
            "category_name",
            "color_match_info",
            "effect_id",
            "enable_skin_tone_correction",
            "exclusion_group",
            "face_adjust_params",
            "formula_id",
            "id",
            "intensity_key",
            "multi_language_current",
            "name",
            "panel_id",
            "platform",
            "resource_id",
            "source_platform",
            "sub_type",
            "time_range",
            "type",
            "value",
            "version",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(keys(&json), expected);
        assert_eq!(json["type"], "filter");
        assert_eq!(json["apply_target_type"], 2);
        assert_eq!(json["source_platform"], 1);
        assert_eq!(keys(&json["color_match_info"]).len(), 3);
    }
}
