//! Segment Animations
//!
//! Intro, outro and group animations attached to a segment. A segment carries at
//! most one intro and one outro, or a single group animation on its own.

use serde_json::{json, Value};

use crate::core::metadata::{AnimationKind, AnimationType};
use crate::core::{generate_id, CoreError, CoreResult, DecorationId, Microseconds};

impl AnimationKind {
    /// Returns the exported `type` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "in",
            Self::Outro => "out",
            Self::Group => "group",
        }
    }

    pub fn category_id(&self) -> &'static str {
        match self {
            Self::Intro => "ruchang",
            Self::Outro => "chuchang",
            Self::Group => "group",
        }
    }

    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Intro => "入场",
            Self::Outro => "出场",
            Self::Group => "组合",
        }
    }
}

/// One animation placed relative to the owning segment
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub name: String,
    pub effect_id: String,
    pub resource_id: String,
    pub kind: AnimationKind,
    /// Offset from the start of the segment
    pub start: Microseconds,
    pub duration: Microseconds,
}

impl Animation {
    pub fn new(animation_type: &AnimationType, start: Microseconds, duration: Microseconds) -> Self {
        let meta = &animation_type.meta;
        Self {
            name: meta.title.clone(),
            effect_id: meta.effect_id.clone(),
            resource_id: meta.resource_id.clone(),
            kind: animation_type.kind,
            start,
            duration,
        }
    }

    pub fn export_json(&self) -> Value {
        json!({
            "anim_adjust_params": null,
            "platform": "all",
            "panel": "video",
            "material_type": "video",
            "name": self.name,
            "id": self.effect_id,
            "type": self.kind.as_str(),
            "resource_id": self.resource_id,
            "category_id": self.kind.category_id(),
            "category_name": self.kind.category_name(),
            "start": self.start,
            "duration": self.duration,
        })
    }
}

/// The animation material of a segment
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentAnimations {
    pub id: DecorationId,
    /// Always `"sticker_animation"` for segments built here
    pub animation_type: String,
    pub animations: Vec<Animation>,
}

impl Default for SegmentAnimations {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentAnimations {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            animation_type: "sticker_animation".to_string(),
            animations: Vec::new(),
        }
    }

    /// Returns true if an animation of `kind` is present
    pub fn has(&self, kind: AnimationKind) -> bool {
        self.animations.iter().any(|a| a.kind == kind)
    }

    /// Appends an animation.
    ///
    /// Fails with `DuplicateAnimation` if the slot is taken, and with
    /// `IncompatibleAnimation` when a group animation would share the list.
    pub fn add_animation(&mut self, animation: Animation) -> CoreResult<()> {
        if self.has(animation.kind) {
            return Err(CoreError::DuplicateAnimation(animation.kind.as_str()));
        }
        if self.has(AnimationKind::Group) {
            return Err(CoreError::IncompatibleAnimation(
                "group animation contradicts with any other animation".to_string(),
            ));
        }
        if animation.kind == AnimationKind::Group && !self.animations.is_empty() {
            return Err(CoreError::IncompatibleAnimation(
                "cannot add group animation when other animations exist".to_string(),
            ));
        }

        self.animations.push(animation);
        Ok(())
    }

    pub fn export_json(&self) -> Value {
        json!({
            "id": self.id,
            "type": self.animation_type,
            "multi_language_current": "none",
            "animations": self.animations.iter().map(Animation::export_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::AnimationMeta;

    fn animation(kind: AnimationKind) -> Animation {
        let meta = AnimationMeta {
            title: "Fade".to_string(),
            is_vip: false,
            duration: 500_000,
            resource_id: "res".to_string(),
            effect_id: "eff".to_string(),
            md5_like_id: String::new(),
        };
        Animation::new(&AnimationType { kind, meta }, 0, 500_000)
    }

    #[test]
    fn test_category_follows_kind() {
        let json = animation(AnimationKind::Outro).export_json();
        assert_eq!(json["type"], "out");
        assert_eq!(json["category_id"], "chuchang");
        assert_eq!(json["category_name"], "出场");
        assert_eq!(AnimationKind::Intro.category_id(), "ruchang");
        assert_eq!(AnimationKind::Group.category_name(), "组合");
    }

    #[test]
    fn test_animation_export_keys() {
        let json = animation(AnimationKind::Intro).export_json();
        let mut keys: Vec<_> = json.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "anim_adjust_params",
                "category_id",
                "category_name",
                "duration",
                "id",
                "material_type",
                "name",
                "panel",
                "platform",
                "resource_id",
                "start",
                "type",
            ]
        );
        assert_eq!(json["id"], "eff");
        assert!(json["anim_adjust_params"].is_null());
    }

    #[test]
    fn test_intro_and_outro_coexist() {
        let mut anims = SegmentAnimations::new();
        anims.add_animation(animation(AnimationKind::Intro)).unwrap();
        anims.add_animation(animation(AnimationKind::Outro)).unwrap();
        assert_eq!(anims.animations.len(), 2);
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let mut anims = SegmentAnimations::new();
        anims.add_animation(animation(AnimationKind::Intro)).unwrap();
        let err = anims.add_animation(animation(AnimationKind::Intro)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateAnimation("in")));
        assert_eq!(anims.animations.len(), 1);
    }

    #[test]
    fn test_group_is_exclusive() {
        let mut anims = SegmentAnimations::new();
        anims.add_animation(animation(AnimationKind::Outro)).unwrap();
        let err = anims.add_animation(animation(AnimationKind::Group)).unwrap_err();
        assert!(matches!(err, CoreError::IncompatibleAnimation(_)));

        let mut anims = SegmentAnimations::new();
        anims.add_animation(animation(AnimationKind::Group)).unwrap();
        let err = anims.add_animation(animation(AnimationKind::Intro)).unwrap_err();
        assert!(matches!(err, CoreError::IncompatibleAnimation(_)));
        assert_eq!(anims.animations.len(), 1);
    }

    #[test]
    fn test_container_export() {
        let mut anims = SegmentAnimations::default();
        anims.add_animation(animation(AnimationKind::Intro)).unwrap();
        let json = anims.export_json();

        assert_eq!(json["type"], "sticker_animation");
        assert_eq!(json["multi_language_current"], "none");
        assert_eq!(json["id"], anims.id.as_str());
        assert_eq!(json["animations"].as_array().map(Vec::len), Some(1));
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }
}
