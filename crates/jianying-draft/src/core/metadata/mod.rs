//! Metadata Catalog
//!
//! Immutable records describing the host application's built-in effects, filters,
//! animations, masks and transitions: their ids and parameter schemas.
//!
//! The built-in tables live in [`Catalog::builtin`]. Additional entries can be
//! loaded from a JSON file with the same shape as [`Catalog`] and merged on top.

mod builtin;

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{CoreError, CoreResult, Microseconds};

// =============================================================================
// Metadata Records
// =============================================================================

/// One named slider of an effect
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectParam {
    /// Slider name as the host application knows it
    pub name: String,
    pub default_value: f64,
    pub min_value: f64,
    pub max_value: f64,
}

impl EffectParam {
    pub fn new(name: &str, default_value: f64, min_value: f64, max_value: f64) -> Self {
        Self {
            name: name.to_string(),
            default_value,
            min_value,
            max_value,
        }
    }
}

/// Effect, filter or audio effect metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectMeta {
    pub name: String,
    #[serde(default)]
    pub is_vip: bool,
    pub resource_id: String,
    pub effect_id: String,
    /// Content hash of the effect package
    #[serde(default)]
    pub md5_like_id: String,
    /// Parameters in slider order; position defines how override values map
    #[serde(default)]
    pub params: Vec<EffectParam>,
}

/// Intro, outro or group animation metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationMeta {
    pub title: String,
    #[serde(default)]
    pub is_vip: bool,
    /// Default duration
    pub duration: Microseconds,
    pub resource_id: String,
    pub effect_id: String,
    #[serde(default)]
    pub md5_like_id: String,
}

/// Geometric kind of a mask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskShape {
    Line,
    Mirror,
    Circle,
    Rectangle,
    Heart,
    Star,
}

impl MaskShape {
    /// Returns the `resource_type` tag used in the draft JSON
    pub fn resource_type(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Mirror => "mirror",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Heart | Self::Star => "geometric_shape",
        }
    }
}

/// Mask metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskMeta {
    pub name: String,
    pub shape: MaskShape,
    pub resource_id: String,
    pub effect_id: String,
    /// Intrinsic width/height ratio of the mask shape
    pub default_aspect_ratio: f64,
}

impl MaskMeta {
    pub fn resource_type(&self) -> &'static str {
        self.shape.resource_type()
    }
}

/// Transition metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionMeta {
    pub name: String,
    #[serde(default)]
    pub is_vip: bool,
    pub resource_id: String,
    pub effect_id: String,
    #[serde(default)]
    pub md5_like_id: String,
    pub default_duration: Microseconds,
    /// Whether the transition overlaps the neighbouring segments
    pub is_overlap: bool,
}

// =============================================================================
// Tagged Metadata
// =============================================================================

/// Which family a video effect comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoEffectKind {
    /// Whole-frame scene effect
    Scene,
    /// Character (face/body) effect
    Character,
}

/// Video effect metadata tagged with its family
#[derive(Clone, Debug, PartialEq)]
pub struct VideoEffectType {
    pub kind: VideoEffectKind,
    pub meta: EffectMeta,
}

impl VideoEffectType {
    pub fn scene(meta: EffectMeta) -> Self {
        Self {
            kind: VideoEffectKind::Scene,
            meta,
        }
    }

    pub fn character(meta: EffectMeta) -> Self {
        Self {
            kind: VideoEffectKind::Character,
            meta,
        }
    }
}

/// Slot an animation occupies on a segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    Intro,
    Outro,
    Group,
}

/// Animation metadata tagged with its slot
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationType {
    pub kind: AnimationKind,
    pub meta: AnimationMeta,
}

impl AnimationType {
    pub fn intro(meta: AnimationMeta) -> Self {
        Self {
            kind: AnimationKind::Intro,
            meta,
        }
    }

    pub fn outro(meta: AnimationMeta) -> Self {
        Self {
            kind: AnimationKind::Outro,
            meta,
        }
    }

    pub fn group(meta: AnimationMeta) -> Self {
        Self {
            kind: AnimationKind::Group,
            meta,
        }
    }
}

/// Family of an audio effect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioEffectKind {
    /// Voice changer ("音色")
    Tone,
    /// Scene sound ("场景音")
    Scene,
    /// Speech to song ("声音成曲")
    SpeechToSong,
}

/// Audio effect metadata tagged with its family
#[derive(Clone, Debug, PartialEq)]
pub struct AudioEffectType {
    pub kind: AudioEffectKind,
    pub meta: EffectMeta,
}

// =============================================================================
// Name Lookup
// =============================================================================

/// Catalog entries addressable by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for EffectMeta {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for AnimationMeta {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Named for MaskMeta {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TransitionMeta {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Lowercases and strips spaces and underscores
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn find_by_name<'a, T: Named>(entries: &'a [T], kind: &'static str, name: &str) -> CoreResult<&'a T> {
    let wanted = normalize_name(name);
    entries
        .iter()
        .find(|entry| normalize_name(entry.name()) == wanted)
        .ok_or_else(|| CoreError::UnknownEffectName {
            kind,
            name: name.to_string(),
        })
}

/// Replaces entries with the same normalized name, appends the rest
fn merge_entries<T: Named>(base: &mut Vec<T>, extra: Vec<T>) {
    for entry in extra {
        let key = normalize_name(entry.name());
        match base.iter().position(|e| normalize_name(e.name()) == key) {
            Some(pos) => base[pos] = entry,
            None => base.push(entry),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

static BUILTIN: LazyLock<Catalog> = LazyLock::new(builtin::catalog);

#[cfg(test)]
static FIXTURE: LazyLock<Catalog> = LazyLock::new(|| {
    let mut catalog = builtin::catalog();
    catalog.merge(builtin::placeholder_rows());
    catalog
});

/// All metadata tables
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub scene_effects: Vec<EffectMeta>,
    pub character_effects: Vec<EffectMeta>,
    pub filters: Vec<EffectMeta>,
    pub masks: Vec<MaskMeta>,
    pub transitions: Vec<TransitionMeta>,
    pub intros: Vec<AnimationMeta>,
    pub outros: Vec<AnimationMeta>,
    pub group_animations: Vec<AnimationMeta>,
    pub audio_tone_effects: Vec<EffectMeta>,
    pub audio_scene_effects: Vec<EffectMeta>,
    pub audio_speech_to_song_effects: Vec<EffectMeta>,
}

impl Catalog {
    /// Returns the process-wide built-in catalog.
    ///
    /// Only masks and audio effects are built in. Video effects, filters,
    /// transitions and animations must be loaded from a host catalog file.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Built-in tables plus placeholder rows for every other section
    #[cfg(test)]
    pub(crate) fn fixture() -> &'static Catalog {
        &FIXTURE
    }

    /// Parses a catalog from JSON; missing sections are empty
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog JSON file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            "Loaded catalog from {} ({} entries)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Total number of entries across all sections
    pub fn len(&self) -> usize {
        self.scene_effects.len()
            + self.character_effects.len()
            + self.filters.len()
            + self.masks.len()
            + self.transitions.len()
            + self.intros.len()
            + self.outros.len()
            + self.group_animations.len()
            + self.audio_tone_effects.len()
            + self.audio_scene_effects.len()
            + self.audio_speech_to_song_effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlays `other` onto this catalog; same-named entries are replaced
    pub fn merge(&mut self, other: Catalog) {
        debug!("Merging {} catalog entries", other.len());
        merge_entries(&mut self.scene_effects, other.scene_effects);
        merge_entries(&mut self.character_effects, other.character_effects);
        merge_entries(&mut self.filters, other.filters);
        merge_entries(&mut self.masks, other.masks);
        merge_entries(&mut self.transitions, other.transitions);
        merge_entries(&mut self.intros, other.intros);
        merge_entries(&mut self.outros, other.outros);
        merge_entries(&mut self.group_animations, other.group_animations);
        merge_entries(&mut self.audio_tone_effects, other.audio_tone_effects);
        merge_entries(&mut self.audio_scene_effects, other.audio_scene_effects);
        merge_entries(
            &mut self.audio_speech_to_song_effects,
            other.audio_speech_to_song_effects,
        );
    }

    /// Looks up a scene or character effect
    pub fn video_effect(&self, kind: VideoEffectKind, name: &str) -> CoreResult<VideoEffectType> {
        let meta = match kind {
            VideoEffectKind::Scene => find_by_name(&self.scene_effects, "scene effect", name)?,
            VideoEffectKind::Character => {
                find_by_name(&self.character_effects, "character effect", name)?
            }
        };
        Ok(VideoEffectType {
            kind,
            meta: meta.clone(),
        })
    }

    pub fn filter(&self, name: &str) -> CoreResult<&EffectMeta> {
        find_by_name(&self.filters, "filter", name)
    }

    pub fn mask(&self, name: &str) -> CoreResult<&MaskMeta> {
        find_by_name(&self.masks, "mask", name)
    }

    pub fn transition(&self, name: &str) -> CoreResult<&TransitionMeta> {
        find_by_name(&self.transitions, "transition", name)
    }

    /// Looks up an intro, outro or group animation
    pub fn animation(&self, kind: AnimationKind, name: &str) -> CoreResult<AnimationType> {
        let meta = match kind {
            AnimationKind::Intro => find_by_name(&self.intros, "intro animation", name)?,
            AnimationKind::Outro => find_by_name(&self.outros, "outro animation", name)?,
            AnimationKind::Group => find_by_name(&self.group_animations, "group animation", name)?,
        };
        Ok(AnimationType {
            kind,
            meta: meta.clone(),
        })
    }

    /// Looks up an audio effect of the given family
    pub fn audio_effect(&self, kind: AudioEffectKind, name: &str) -> CoreResult<AudioEffectType> {
        let meta = match kind {
            AudioEffectKind::Tone => find_by_name(&self.audio_tone_effects, "audio tone effect", name)?,
            AudioEffectKind::Scene => {
                find_by_name(&self.audio_scene_effects, "audio scene effect", name)?
            }
            AudioEffectKind::SpeechToSong => find_by_name(
                &self.audio_speech_to_song_effects,
                "speech-to-song effect",
                name,
            )?,
        };
        Ok(AudioEffectType {
            kind,
            meta: meta.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Motion_Blur Fast"), "motionblurfast");
        assert_eq!(normalize_name("_8bit"), "8bit");
        assert_eq!(normalize_name("低 保_真"), "低保真");
    }

    #[test]
    fn test_builtin_lookup_is_lenient() {
        let catalog = Catalog::builtin();

        let scene = catalog.audio_effect(AudioEffectKind::Scene, "_8BIT").unwrap();
        assert_eq!(scene.meta.name, "8bit");
        assert_eq!(scene.meta.params.len(), 3);

        let mask = catalog.mask("矩形").unwrap();
        assert_eq!(mask.shape, MaskShape::Rectangle);
        assert_eq!(mask.resource_type(), "rectangle");
    }

    #[test]
    fn test_lookup_miss_is_unknown_name() {
        let err = Catalog::builtin().filter("does not exist").unwrap_err();
        assert!(matches!(err, CoreError::UnknownEffectName { kind: "filter", .. }));

        let err = Catalog::builtin()
            .animation(AnimationKind::Group, "nope")
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownEffectName { .. }));
    }

    #[test]
    fn test_builtin_ships_only_known_resources() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.masks.len(), 6);
        assert!(!catalog.audio_tone_effects.is_empty());
        assert!(!catalog.audio_scene_effects.is_empty());
        assert!(!catalog.audio_speech_to_song_effects.is_empty());

        assert!(catalog.scene_effects.is_empty());
        assert!(catalog.character_effects.is_empty());
        assert!(catalog.filters.is_empty());
        assert!(catalog.transitions.is_empty());
        assert!(catalog.intros.is_empty());
        assert!(catalog.outros.is_empty());
        assert!(catalog.group_animations.is_empty());
        assert!(matches!(
            catalog.filter("冷白"),
            Err(CoreError::UnknownEffectName { kind: "filter", .. })
        ));
    }

    #[test]
    fn test_fixture_extends_builtin() {
        let fixture = Catalog::fixture();
        assert!(fixture.len() > Catalog::builtin().len());
        assert_eq!(fixture.masks, Catalog::builtin().masks);
        assert!(fixture.filter("冷白").is_ok());
    }

    #[test]
    fn test_animation_lookup_carries_kind() {
        let intro = Catalog::fixture().animation(AnimationKind::Intro, "渐显").unwrap();
        assert_eq!(intro.kind, AnimationKind::Intro);
        assert!(intro.meta.duration > 0);
    }

    #[test]
    fn test_catalog_from_json_and_merge() {
        let json = r#"{
            "filters": [
                {"name": "Custom Look", "resourceId": "1", "effectId": "2",
                 "params": [{"name": "effects_adjust_filter", "defaultValue": 1.0, "minValue": 0.0, "maxValue": 1.0}]}
            ],
            "masks": [
                {"name": "圆形", "shape": "circle", "resourceId": "x", "effectId": "y", "defaultAspectRatio": 2.0}
            ]
        }"#;
        let extra = Catalog::from_json_str(json).unwrap();
        assert_eq!(extra.len(), 2);

        let mut catalog = Catalog::builtin().clone();
        let before = catalog.masks.len();
        catalog.merge(extra);

        assert_eq!(catalog.filter("custom_look").unwrap().params.len(), 1);
        assert_eq!(catalog.masks.len(), before);
        assert_eq!(catalog.mask("圆形").unwrap().default_aspect_ratio, 2.0);
    }
}
