//! Built-in catalog tables.
//!
//! Only resources with known host ids ship here: masks and audio effects. Video
//! effects, filters, transitions and animations come from a JSON catalog exported
//! from the host and merged in.

use super::{Catalog, EffectMeta, EffectParam, MaskMeta, MaskShape};
#[cfg(test)]
use super::{AnimationMeta, TransitionMeta};
#[cfg(test)]
use crate::core::Microseconds;

type ParamRow = (&'static str, f64, f64, f64);

fn fx(name: &str, is_vip: bool, resource_id: &str, effect_id: &str, md5: &str, params: &[ParamRow]) -> EffectMeta {
    EffectMeta {
        name: name.to_string(),
        is_vip,
        resource_id: resource_id.to_string(),
        effect_id: effect_id.to_string(),
        md5_like_id: md5.to_string(),
        params: params
            .iter()
            .map(|(slider, default, min, max)| EffectParam::new(slider, *default, *min, *max))
            .collect(),
    }
}

#[cfg(test)]
fn anim(title: &str, is_vip: bool, duration_sec: f64, resource_id: &str, effect_id: &str, md5: &str) -> AnimationMeta {
    AnimationMeta {
        title: title.to_string(),
        is_vip,
        duration: (duration_sec * 1_000_000.0).round() as Microseconds,
        resource_id: resource_id.to_string(),
        effect_id: effect_id.to_string(),
        md5_like_id: md5.to_string(),
    }
}

fn mask(name: &str, shape: MaskShape, resource_id: &str, effect_id: &str, default_aspect_ratio: f64) -> MaskMeta {
    MaskMeta {
        name: name.to_string(),
        shape,
        resource_id: resource_id.to_string(),
        effect_id: effect_id.to_string(),
        default_aspect_ratio,
    }
}

#[cfg(test)]
fn transition(
    name: &str,
    is_vip: bool,
    resource_id: &str,
    effect_id: &str,
    md5: &str,
    default_duration: Microseconds,
    is_overlap: bool,
) -> TransitionMeta {
    TransitionMeta {
        name: name.to_string(),
        is_vip,
        resource_id: resource_id.to_string(),
        effect_id: effect_id.to_string(),
        md5_like_id: md5.to_string(),
        default_duration,
        is_overlap,
    }
}

const UNIT_STRENGTH: ParamRow = ("强弱", 1.0, 0.0, 1.0);
#[cfg(test)]
const FILTER_STRENGTH: ParamRow = ("effects_adjust_filter", 1.0, 0.0, 1.0);

pub(super) fn catalog() -> Catalog {
    Catalog {
        masks: vec![
            mask("线性", MaskShape::Line, "6791652175668843016", "636071", 1.0),
            mask("镜面", MaskShape::Mirror, "6791699060474385928", "636073", 1.0),
            mask("圆形", MaskShape::Circle, "6791700663249964558", "636075", 1.0),
            mask("矩形", MaskShape::Rectangle, "6791700809887060492", "636077", 1.0),
            mask("爱心", MaskShape::Heart, "6794051276482023949", "636079", 1.115_134_1),
            mask("星形", MaskShape::Star, "6794051169434997255", "636081", 1.051_818_2),
        ],
        audio_tone_effects: vec![
            fx("台湾小哥", false, "7255565276819755576", "18149602", "8dd8889045e6c065177df791ddb3dfb8", &[]),
            fx("大叔", false, "7020344898033291790", "2672760", "2509bbd71e127b04a29f52a54e82c53c", &[
                ("音调", 0.834, 0.0, 1.0),
                ("音色", 1.0, 0.0, 1.0),
            ]),
            fx("女生", false, "7020345715901600270", "2672757", "0ce1aade5958506c97bffea150772b6e", &[
                ("音调", 0.834, 0.0, 1.0),
                ("音色", 0.334, 0.0, 1.0),
            ]),
            fx("机器人", false, "7018011705414259213", "2672750", "4b87db25aecd2f6f71927930110c4a1e", &[UNIT_STRENGTH]),
            fx("男生", false, "7020345085233467917", "2672758", "ffd7a609207fd849efc9f63bf31697b1", &[
                ("音调", 0.375, 0.0, 1.0),
                ("音色", 0.25, 0.0, 1.0),
            ]),
            fx("花栗鼠", false, "7018011553081332231", "2672752", "e30b1922b8300423f21f9f84eff41ced", &[
                ("音调", 0.5, 0.0, 1.0),
                ("音色", 0.5, 0.0, 1.0),
            ]),
            fx("猴哥", true, "7236944659547689531", "14477015", "4f6a1fbc0000e178c724d355efea1d9f", &[]),
        ],
        audio_scene_effects: vec![
            fx("8bit", false, "7161319747584266766", "5723961", "8d24238329ea5c250e33ae241d5adae2", &[
                ("change_voice_param_pitch_shift", 0.5, 0.0, 1.0),
                ("change_voice_param_timbre", 1.0, 0.0, 1.0),
                ("change_voice_param_strength", 1.0, 0.0, 1.0),
            ]),
            fx("低保真", false, "7024390914537689614", "2672762", "7ddbd39a691a66a021f684cab756a89a", &[UNIT_STRENGTH]),
            fx("回音", false, "7018011608408396325", "5723901", "5377f66109693f2d473df5ea6ec8f791", &[
                ("change_voice_param_quantity", 0.8, 0.0, 1.0),
                ("change_voice_param_strength", 0.762, 0.0, 1.0),
            ]),
            fx("水下", false, "7106404450444513806", "2673077", "53956694a8b68b2855faa2adc043b5b1", &[
                ("深度", 0.5, 0.0, 1.0),
            ]),
            fx("颤音", false, "7018011370289369637", "2672755", "c5e4874f83337e1cb9f8322fb843c901", &[
                ("频率", 0.714, 0.0, 1.0),
                ("幅度", 0.905, 0.0, 1.0),
            ]),
            fx("麦霸", false, "7018012141332468260", "2672748", "3eedef5ef82b32912203a1f4fb901182", &[
                ("空间大小", 0.052, 0.0, 1.0),
                ("强弱", 0.45, 0.0, 1.0),
            ]),
            fx("3d环绕音", true, "7350214888242811455", "53187169", "577c3d8e5312012b1d98ba5fc0b206d0", &[
                ("强度", 0.0, 0.0, 1.0),
            ]),
        ],
        audio_speech_to_song_effects: vec![
            fx("Lofi", false, "7252917861948068410", "17345060", "8dd8889045e6c065177df791ddb3dfb8", &[]),
            fx("民谣", false, "7251868698170888759", "17046923", "8dd8889045e6c065177df791ddb3dfb8", &[]),
            fx("嘻哈", true, "7252918249036190245", "17344948", "8dd8889045e6c065177df791ddb3dfb8", &[]),
            fx("爵士", true, "7264413578860433978", "20120940", "8dd8889045e6c065177df791ddb3dfb8", &[]),
        ],
        ..Default::default()
    }
}

/// Placeholder rows for the sections the built-in tables leave empty. The ids are
/// not real host resources and must never reach an exported draft.
#[cfg(test)]
pub(super) fn placeholder_rows() -> Catalog {
    Catalog {
        scene_effects: vec![
            fx("仙尘闪闪", false, "7028189003366289957", "1027281", "a0d0a01bb4a3ef7a1ac3bb1c5ab8b4b6", &[
                ("effects_adjust_speed", 0.334, 0.0, 1.0),
                ("effects_adjust_size", 0.5, 0.0, 1.0),
                ("effects_adjust_number", 0.5, 0.0, 1.0),
            ]),
            fx("模糊", false, "7026546489016669701", "1025011", "dc7c2e2f1d9f48e3d7d1e0f87ab0b2a3", &[
                ("effects_adjust_blur", 0.5, 0.0, 1.0),
            ]),
            fx("胶片闪光", false, "7036244547843379743", "1041101", "7c1e5b3c6f0a4bd98dc79cd0e5f4f1a2", &[
                ("effects_adjust_speed", 0.5, 0.0, 1.0),
                ("effects_adjust_intensity", 0.6, 0.0, 1.0),
                ("effects_adjust_luminance", 0.5, -1.0, 1.0),
            ]),
            fx("变清晰", false, "7036199931297041956", "1041088", "3b1d5f5a9e8c4f0c8a0e6a3fd6c7b8e9", &[
                ("effects_adjust_speed", 0.5, 0.0, 1.0),
                ("effects_adjust_blur", 1.0, 0.0, 1.0),
            ]),
            fx("负片频闪", true, "7112403155209948430", "1302541", "5e9a0c3d2b1f4a8e9c7d6b5a4f3e2d1c", &[]),
        ],
        character_effects: vec![
            fx("彩色描边", false, "7140997596232470791", "1375113", "2f4e6a8c0b1d3f5a7c9e0b2d4f6a8c0e", &[
                ("effects_adjust_color", 0.5, 0.0, 1.0),
                ("effects_adjust_size", 0.4, 0.0, 1.0),
            ]),
            fx("头顶问号", false, "7142069735614730526", "1378123", "9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d", &[]),
            fx("局部马赛克", false, "7140997469690319112", "1375101", "1b3d5f7a9c0e2a4c6e8a0c2e4a6c8e0a", &[
                ("effects_adjust_size", 0.6, 0.0, 1.0),
            ]),
        ],
        filters: vec![
            fx("中性", false, "7127655008715230495", "1400000", "8f2f9ac2ce6a5fc2bf39f1a6d5b8c0a1", &[FILTER_STRENGTH]),
            fx("冷白", false, "7127608049017228814", "1400011", "0a1b2c3d4e5f60718293a4b5c6d7e8f9", &[FILTER_STRENGTH]),
            fx("清晰", false, "7127671468389289512", "1400024", "c3d4e5f60718293a4b5c6d7e8f90a1b2", &[FILTER_STRENGTH]),
            fx("黑白", false, "7127614731187211557", "1400037", "e5f60718293a4b5c6d7e8f90a1b2c3d4", &[]),
            fx("胶片", true, "7127662998843887135", "1400045", "60718293a4b5c6d7e8f90a1b2c3d4e5f", &[FILTER_STRENGTH]),
        ],
        transitions: vec![
            transition("叠化", false, "6724845717472416269", "322577", "a4f2b5c1d3e6f7081920a1b2c3d4e5f6", 466_666, true),
            transition("闪白", false, "6724846004467665422", "322579", "b5c1d3e6f7081920a1b2c3d4e5f6a4f2", 466_666, true),
            transition("向左", false, "6724239388189921806", "319564", "c1d3e6f7081920a1b2c3d4e5f6a4f2b5", 466_666, false),
            transition("推近", false, "6724845852289044999", "322581", "d3e6f7081920a1b2c3d4e5f6a4f2b5c1", 466_666, true),
            transition("模糊", false, "6724239584848253447", "319566", "e6f7081920a1b2c3d4e5f6a4f2b5c1d3", 500_000, true),
        ],
        intros: vec![
            anim("渐显", false, 0.5, "6798320778182922760", "624705", "b2e4b1e5d3c6f7a8091a2b3c4d5e6f70"),
            anim("放大", false, 0.5, "6798332733694321160", "624751", "c6f7a8091a2b3c4d5e6f70b2e4b1e5d3"),
            anim("向右滑动", false, 0.5, "6798333487523991053", "624755", "a8091a2b3c4d5e6f70b2e4b1e5d3c6f7"),
            anim("动感放大", false, 0.5, "6740867832570974733", "431662", "1a2b3c4d5e6f70b2e4b1e5d3c6f7a809"),
        ],
        outros: vec![
            anim("渐隐", false, 0.5, "6798320902548230669", "624706", "3c4d5e6f70b2e4b1e5d3c6f7a8091a2b"),
            anim("缩小", false, 0.5, "6798333705770209806", "624757", "5e6f70b2e4b1e5d3c6f7a8091a2b3c4d"),
            anim("向左滑动", false, 0.5, "6798334017423708686", "624759", "70b2e4b1e5d3c6f7a8091a2b3c4d5e6f"),
        ],
        group_animations: vec![
            anim("三分割", false, 2.0, "6757351394066239757", "470951", "e4b1e5d3c6f7a8091a2b3c4d5e6f70b2"),
            anim("旋转降落", false, 2.0, "6757351541072437767", "470957", "e5d3c6f7a8091a2b3c4d5e6f70b2e4b1"),
            anim("缩放", false, 2.0, "6757351690637086216", "470963", "c6f7a8091a2b3c4d5e6f70b2e4b1e5d3"),
        ],
        ..Default::default()
    }
}
