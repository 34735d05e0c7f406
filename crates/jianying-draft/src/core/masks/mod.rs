//! Mask System Module
//!
//! A single geometric mask on a video segment. Geometry is resolved from the mask
//! metadata, the material's pixel size and caller options.
//!
//! # Example
//!
//! ```ignore
//! use jianying_draft::core::masks::{Mask, MaskOptions};
//!
//! let meta = Catalog::builtin().mask("矩形")?;
//! let mask = Mask::resolve(meta, (1920, 1080), MaskOptions {
//!     size: 0.4,
//!     rect_width: Some(0.6),
//!     round_corner: Some(20.0),
//!     ..Default::default()
//! })?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::metadata::{MaskMeta, MaskShape};
use crate::core::{generate_id, CoreError, CoreResult, DecorationId};

// =============================================================================
// Options
// =============================================================================

/// Caller-facing mask parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaskOptions {
    /// Center X, in material pixels from the center
    pub center_x: f64,
    /// Center Y, in material pixels from the center
    pub center_y: f64,
    /// Main size as a fraction of the material height
    pub size: f64,
    /// Clockwise rotation in degrees
    pub rotation: f64,
    /// Feather, 0-100
    pub feather: f64,
    pub invert: bool,
    /// Rectangle width as a fraction of the material width. Rectangle only.
    pub rect_width: Option<f64>,
    /// Corner rounding, 0-100. Rectangle only.
    pub round_corner: Option<f64>,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            size: 0.5,
            rotation: 0.0,
            feather: 0.0,
            invert: false,
            rect_width: None,
            round_corner: None,
        }
    }
}

// =============================================================================
// Mask
// =============================================================================

/// A mask material
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pub id: DecorationId,
    pub meta: MaskMeta,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
    pub rotation: f64,
    pub invert: bool,
    /// Feather, 0-1
    pub feather: f64,
    /// Corner rounding, 0-1
    pub round_corner: f64,
}

impl Mask {
    /// Resolves final geometry for a material of `(width, height)` pixels.
    /// Both dimensions must be non-zero.
    ///
    /// Non-rectangular masks keep their intrinsic aspect ratio: the width is
    /// `size * height * default_aspect_ratio / width`. Rectangles use
    /// `rect_width`, falling back to `size`.
    pub fn resolve(meta: &MaskMeta, material_size: (u32, u32), options: MaskOptions) -> CoreResult<Self> {
        let is_rectangle = meta.shape == MaskShape::Rectangle;
        if !is_rectangle && (options.rect_width.is_some() || options.round_corner.is_some()) {
            return Err(CoreError::InvalidMaskConfiguration(format!(
                "`rect_width` and `round_corner` can only be set for rectangle masks, not '{}'",
                meta.name
            )));
        }

        let (material_width, material_height) = material_size;
        if material_width == 0 || material_height == 0 {
            return Err(CoreError::InvalidMaskConfiguration(format!(
                "material size {}x{} has a zero dimension",
                material_width, material_height
            )));
        }

        let width = if is_rectangle {
            options.rect_width.unwrap_or(options.size)
        } else {
            options.size * f64::from(material_height) * meta.default_aspect_ratio
                / f64::from(material_width)
        };

        Ok(Self {
            id: generate_id(),
            meta: meta.clone(),
            center_x: options.center_x,
            center_y: options.center_y,
            width,
            height: options.size,
            aspect_ratio: meta.default_aspect_ratio,
            rotation: options.rotation,
            invert: options.invert,
            feather: options.feather / 100.0,
            round_corner: options.round_corner.unwrap_or(0.0) / 100.0,
        })
    }

    pub fn export_json(&self) -> Value {
        json!({
            "config": {
                "aspectRatio": self.aspect_ratio,
                "centerX": self.center_x,
                "centerY": self.center_y,
                "feather": self.feather,
                "height": self.height,
                "invert": self.invert,
                "rotation": self.rotation,
                "roundCorner": self.round_corner,
                "width": self.width,
            },
            "id": self.id,
            "name": self.meta.name,
            "platform": "all",
            "position_info": "",
            "resource_type": self.meta.resource_type(),
            "resource_id": self.meta.resource_id,
            "type": "mask",
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
