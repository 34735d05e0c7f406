//! Source Materials
//!
//! The media a segment cuts from. Probing files is left to the caller; a material is
//! built from already-known dimensions and duration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{generate_id, MaterialId, Microseconds, SEC};

/// Duration the host application assigns to still images (3 hours)
pub const PHOTO_DURATION: Microseconds = 10_800 * SEC;

/// Kind of visual material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Video,
    Photo,
}

impl MaterialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Photo => "photo",
        }
    }
}

/// A local video or image file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMaterial {
    pub material_id: MaterialId,
    pub material_name: String,
    pub path: PathBuf,
    pub kind: MaterialKind,
    /// Total duration
    pub duration: Microseconds,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl VideoMaterial {
    /// Creates a video material with known duration and pixel size
    pub fn video(path: impl AsRef<Path>, duration: Microseconds, width: u32, height: u32) -> Self {
        Self::new(path.as_ref(), MaterialKind::Video, duration, width, height)
    }

    /// Creates an image material; images get the fixed [`PHOTO_DURATION`]
    pub fn photo(path: impl AsRef<Path>, width: u32, height: u32) -> Self {
        Self::new(path.as_ref(), MaterialKind::Photo, PHOTO_DURATION, width, height)
    }

    fn new(path: &Path, kind: MaterialKind, duration: Microseconds, width: u32, height: u32) -> Self {
        let material_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            material_id: generate_id(),
            material_name,
            path: path.to_path_buf(),
            kind,
            duration,
            width,
            height,
        }
    }

    /// Overrides the display name (defaults to the file name)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.material_name = name.into();
        self
    }
}
