//! Video Segment
//!
//! A video or image segment on a track, together with everything decorating it:
//! clip transform, effects, filters, animations, mask, transition and keyframes.

use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{KeyframeProperty, MediaSegment, TimeValue, Timerange, VideoMaterial};
use crate::core::animations::{Animation, SegmentAnimations};
use crate::core::effects::{ApplyTarget, Filter, VideoEffect};
use crate::core::masks::{Mask, MaskOptions};
use crate::core::metadata::{AnimationKind, AnimationType, EffectMeta, MaskMeta, TransitionMeta, VideoEffectType};
use crate::core::transitions::Transition;
use crate::core::{CoreError, CoreResult};

// =============================================================================
// Clip Settings
// =============================================================================

/// Image transform of a segment. Keyframes override these values at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipSettings {
    /// Opacity, 0-1
    pub alpha: f64,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    /// Clockwise rotation in degrees
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Horizontal offset, in half canvas widths
    pub transform_x: f64,
    /// Vertical offset, in half canvas heights
    pub transform_y: f64,
}

impl Default for ClipSettings {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            flip_horizontal: false,
            flip_vertical: false,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            transform_x: 0.0,
            transform_y: 0.0,
        }
    }
}

impl ClipSettings {
    pub fn export_json(&self) -> Value {
        json!({
            "alpha": self.alpha,
            "flip": {"horizontal": self.flip_horizontal, "vertical": self.flip_vertical},
            "rotation": self.rotation,
            "scale": {"x": self.scale_x, "y": self.scale_y},
            "transform": {"x": self.transform_x, "y": self.transform_y},
        })
    }
}

// =============================================================================
// Construction Options
// =============================================================================

/// Optional timing and appearance for [`VideoSegment::with_options`]
#[derive(Clone, Debug, PartialEq)]
pub struct VideoSegmentOptions {
    /// Slice of the material to play. Defaults to the start of the material,
    /// as long as the target range at the given speed.
    pub source_timerange: Option<Timerange>,
    /// Playback speed. When given together with `source_timerange`, it overrides
    /// the target duration; when omitted it is derived from the two ranges.
    pub speed: Option<f64>,
    pub volume: f64,
    pub clip_settings: Option<ClipSettings>,
}

impl Default for VideoSegmentOptions {
    fn default() -> Self {
        Self {
            source_timerange: None,
            speed: None,
            volume: 1.0,
            clip_settings: None,
        }
    }
}

// =============================================================================
// Video Segment
// =============================================================================

/// A video/image segment and its decorations
#[derive(Clone, Debug, PartialEq)]
pub struct VideoSegment {
    pub base: MediaSegment,
    /// Material size in pixels, `(width, height)`
    pub material_size: (u32, u32),
    pub clip_settings: ClipSettings,
    /// Whether X/Y scale are locked together
    pub uniform_scale: bool,
    pub effects: Vec<VideoEffect>,
    pub filters: Vec<Filter>,
    pub animations: Option<SegmentAnimations>,
    pub mask: Option<Mask>,
    pub transition: Option<Transition>,
}

impl VideoSegment {
    /// Creates a segment playing `material` from its start at normal speed
    pub fn new(material: &VideoMaterial, target_timerange: Timerange) -> CoreResult<Self> {
        Self::with_options(material, target_timerange, VideoSegmentOptions::default())
    }

    /// Creates a segment with explicit timing options.
    ///
    /// Fails with `SourceRangeExceeded` if the (given or derived) source range ends
    /// past the material's duration.
    pub fn with_options(
        material: &VideoMaterial,
        target_timerange: Timerange,
        options: VideoSegmentOptions,
    ) -> CoreResult<Self> {
        if let Some(speed) = options.speed {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(CoreError::InvalidTimerange(format!(
                    "speed must be positive, got {}",
                    speed
                )));
            }
        }

        let (source_timerange, target_timerange, speed) =
            match (options.source_timerange, options.speed) {
                (Some(source), Some(speed)) => {
                    let duration = (source.duration as f64 / speed).round_ties_even() as i64;
                    (source, Timerange::new(target_timerange.start, duration), speed)
                }
                (Some(source), None) => {
                    if target_timerange.duration <= 0 {
                        return Err(CoreError::InvalidTimerange(
                            "target duration must be positive to derive speed".to_string(),
                        ));
                    }
                    let speed = source.duration as f64 / target_timerange.duration as f64;
                    (source, target_timerange, speed)
                }
                (None, speed) => {
                    let speed = speed.unwrap_or(1.0);
                    let duration = (target_timerange.duration as f64 * speed).round_ties_even() as i64;
                    (Timerange::new(0, duration), target_timerange, speed)
                }
            };

        if source_timerange.end() > material.duration {
            return Err(CoreError::SourceRangeExceeded {
                start: source_timerange.start,
                end: source_timerange.end(),
                material_duration: material.duration,
            });
        }

        Ok(Self {
            base: MediaSegment::new(
                &material.material_id,
                source_timerange,
                target_timerange,
                speed,
                options.volume,
            ),
            material_size: (material.width, material.height),
            clip_settings: options.clip_settings.unwrap_or_default(),
            uniform_scale: true,
            effects: Vec::new(),
            filters: Vec::new(),
            animations: None,
            mask: None,
            transition: None,
        })
    }

    /// Ids of every material this segment depends on
    pub fn extra_material_refs(&self) -> &[String] {
        &self.base.extra_material_refs
    }

    /// Adds an intro, outro or group animation; its timing is derived from the
    /// segment duration.
    pub fn add_animation(&mut self, animation_type: &AnimationType) -> CoreResult<&mut Self> {
        let target_duration = self.base.duration();
        let default_duration = animation_type.meta.duration;
        let (start, duration) = match animation_type.kind {
            AnimationKind::Intro => (0, default_duration),
            AnimationKind::Outro => (target_duration - default_duration, default_duration),
            AnimationKind::Group => (0, target_duration),
        };
        if start < 0 {
            warn!(
                "Outro '{}' ({}us) is longer than segment {} ({}us); start offset is {}",
                animation_type.meta.title, default_duration, self.base.id, target_duration, start
            );
        }

        let refs = &mut self.base.extra_material_refs;
        let animations = self.animations.get_or_insert_with(|| {
            let container = SegmentAnimations::new();
            refs.push(container.id.clone());
            container
        });
        animations.add_animation(Animation::new(animation_type, start, duration))?;

        debug!(
            "Added {} animation '{}' to segment {}",
            animation_type.kind.as_str(),
            animation_type.meta.title,
            self.base.id
        );
        Ok(self)
    }

    /// Adds an effect acting on this segment. `params` are on the 0-100 scale;
    /// missing entries keep their defaults.
    pub fn add_effect(&mut self, effect_type: &VideoEffectType, params: &[Option<f64>]) -> CoreResult<&mut Self> {
        if params.len() > effect_type.meta.params.len() {
            return Err(CoreError::InvalidParameterCount {
                name: effect_type.meta.name.clone(),
                given: params.len(),
                expected: effect_type.meta.params.len(),
            });
        }

        let effect = VideoEffect::new(effect_type, params, ApplyTarget::Segment)?;
        debug!("Added effect '{}' to segment {}", effect.name, self.base.id);
        self.base.extra_material_refs.push(effect.id.clone());
        self.effects.push(effect);
        Ok(self)
    }

    /// Adds a filter. `intensity` is on the 0-100 scale and defaults to 100.
    pub fn add_filter(&mut self, meta: &EffectMeta, intensity: Option<f64>) -> &mut Self {
        let intensity = intensity.map_or(1.0, |value| value / 100.0);
        let filter = Filter::new(meta, intensity, ApplyTarget::Segment);
        debug!("Added filter '{}' to segment {}", meta.name, self.base.id);
        self.base.extra_material_refs.push(filter.id.clone());
        self.filters.push(filter);
        self
    }

    /// Adds a keyframe for `property` at `time_offset` from the segment start.
    ///
    /// Keyframing `ScaleX` or `ScaleY` turns uniform scale off for good; a
    /// `UniformScale` keyframe afterwards fails with `UniformScaleConflict`.
    pub fn add_keyframe(
        &mut self,
        property: KeyframeProperty,
        time_offset: impl Into<TimeValue>,
        value: f64,
    ) -> CoreResult<&mut Self> {
        let time_offset = time_offset.into().to_micros()?;

        let property = match property {
            KeyframeProperty::ScaleX | KeyframeProperty::ScaleY => {
                self.uniform_scale = false;
                property
            }
            KeyframeProperty::UniformScale => {
                if !self.uniform_scale {
                    return Err(CoreError::UniformScaleConflict);
                }
                KeyframeProperty::ScaleX
            }
            other => other,
        };

        self.base.push_keyframe(property, time_offset, value);
        Ok(self)
    }

    /// Adds the segment's mask. Only one mask is allowed per segment.
    pub fn add_mask(&mut self, meta: &MaskMeta, options: MaskOptions) -> CoreResult<&mut Self> {
        if self.mask.is_some() {
            return Err(CoreError::MultipleMasks);
        }

        let mask = Mask::resolve(meta, self.material_size, options)?;
        debug!("Added mask '{}' to segment {}", meta.name, self.base.id);
        self.base.extra_material_refs.push(mask.id.clone());
        self.mask = Some(mask);
        Ok(self)
    }

    /// Adds the transition into the next segment. Only one transition is allowed
    /// per segment; `duration` defaults to the metadata's default.
    pub fn add_transition(&mut self, meta: &TransitionMeta, duration: Option<TimeValue>) -> CoreResult<&mut Self> {
        if self.transition.is_some() {
            return Err(CoreError::MultipleTransitions);
        }

        let duration = duration.map(|d| d.to_micros()).transpose()?;
        let transition = Transition::new(meta, duration);
        debug!(
            "Added transition '{}' ({}us) to segment {}",
            meta.name, transition.duration, self.base.id
        );
        self.base.extra_material_refs.push(transition.id.clone());
        self.transition = Some(transition);
        Ok(self)
    }

    pub fn export_json(&self) -> Value {
        let mut json = self.base.export_json();
        if let Value::Object(map) = &mut json {
            map.insert("clip".to_string(), self.clip_settings.export_json());
            map.insert(
                "hdr_settings".to_string(),
                json!({"intensity": 1.0, "mode": 1, "nits": 1000}),
            );
            map.insert(
                "uniform_scale".to_string(),
                json!({"on": self.uniform_scale, "value": 1.0}),
            );
        }
        json
    }

    /// Exports the materials this segment references, grouped under the draft's
    /// material list keys.
    pub fn export_materials(&self) -> Value {
        json!({
            "speeds": [self.base.speed.export_json()],
            "material_animations": self.animations.iter().map(SegmentAnimations::export_json).collect::<Vec<_>>(),
            "video_effects": self.effects.iter().map(VideoEffect::export_json).collect::<Vec<_>>(),
            "effects": self.filters.iter().map(Filter::export_json).collect::<Vec<_>>(),
            "common_mask": self.mask.iter().map(Mask::export_json).collect::<Vec<_>>(),
            "transitions": self.transition.iter().map(Transition::export_json).collect::<Vec<_>>(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
