//! Audio voice effects (voice changer, scene sound, speech-to-song).

use serde_json::{json, Value};

use super::params::{resolve_params, EffectParamInstance};
use crate::core::metadata::{AudioEffectKind, AudioEffectType};
use crate::core::{generate_id, CoreResult, DecorationId};

/// An audio effect instance
#[derive(Clone, Debug, PartialEq)]
pub struct AudioEffect {
    pub id: DecorationId,
    pub name: String,
    pub resource_id: String,
    pub kind: AudioEffectKind,
    pub audio_adjust_params: Vec<EffectParamInstance>,
}

impl AudioEffect {
    /// Creates an audio effect, resolving `params` (0-100 scale) against the metadata
    pub fn new(effect_type: &AudioEffectType, params: &[Option<f64>]) -> CoreResult<Self> {
        let meta = &effect_type.meta;
        Ok(Self {
            id: generate_id(),
            name: meta.name.clone(),
            resource_id: meta.resource_id.clone(),
            kind: effect_type.kind,
            audio_adjust_params: resolve_params(meta, params)?,
        })
    }

    /// Returns `(category_id, category_name, sub_type)` for the effect family
    pub fn category(&self) -> (&'static str, &'static str, u8) {
        match self.kind {
            AudioEffectKind::Scene => ("sound_effect", "场景音", 1),
            AudioEffectKind::Tone => ("tone", "音色", 2),
            AudioEffectKind::SpeechToSong => ("speech_to_song", "声音成曲", 3),
        }
    }

    pub fn export_json(&self) -> Value {
        let (category_id, category_name, sub_type) = self.category();
        json!({
            "audio_adjust_params": self.audio_adjust_params.iter().map(EffectParamInstance::export_json).collect::<Vec<_>>(),
            "category_id": category_id,
            "category_name": category_name,
            "id": self.id,
            "is_ugc": false,
            "name": self.name,
            "production_path": "",
            "resource_id": self.resource_id,
            "speaker_id": "",
            "sub_type": sub_type,
            "time_range": {"duration": 0, "start": 0},
            "type": "audio_effect",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::Catalog;
    use crate::core::CoreError;

    #[test]
    fn test_tone_effect_export() {
        let effect_type = Catalog::builtin()
            .audio_effect(AudioEffectKind::Tone, "大叔")
            .unwrap();
        let effect = AudioEffect::new(&effect_type, &[Some(50.0)]).unwrap();
        let json = effect.export_json();

        assert_eq!(json["category_id"], "tone");
        assert_eq!(json["category_name"], "音色");
        assert_eq!(json["sub_type"], 2);
        assert_eq!(json["type"], "audio_effect");
        assert_eq!(json["resource_id"], "7020344898033291790");
        assert_eq!(json["audio_adjust_params"][0]["value"], 0.5);
        assert_eq!(json["audio_adjust_params"][1]["value"], 1.0);
        assert_eq!(json.as_object().map(|o| o.len()), Some(12));
    }

    #[test]
    fn test_scene_and_song_categories() {
        let catalog = Catalog::builtin();
        let scene = catalog.audio_effect(AudioEffectKind::Scene, "水下").unwrap();
        let song = catalog
            .audio_effect(AudioEffectKind::SpeechToSong, "lofi")
            .unwrap();

        let scene = AudioEffect::new(&scene, &[]).unwrap();
        let song = AudioEffect::new(&song, &[]).unwrap();

        assert_eq!(scene.category(), ("sound_effect", "场景音", 1));
        assert_eq!(song.category(), ("speech_to_song", "声音成曲", 3));
        assert!(song.audio_adjust_params.is_empty());
    }

    #[test]
    fn test_parameterless_audio_effect_rejects_values() {
        let effect_type = Catalog::builtin()
            .audio_effect(AudioEffectKind::Tone, "台湾小哥")
            .unwrap();
        let err = AudioEffect::new(&effect_type, &[Some(10.0)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameterCount { .. }));
    }
}
