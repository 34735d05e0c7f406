//! Draft Settings
//!
//! Library configuration: logging output and extra catalog files.
//!
//! Loading is tolerant. A missing or corrupt file yields defaults, and
//! out-of-range values are corrected by [`DraftSettings::normalize`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::metadata::Catalog;
use crate::core::CoreResult;

/// Settings schema version for migration support
pub const SETTINGS_VERSION: u32 = 1;

/// Conventional settings file name
pub const SETTINGS_FILE: &str = "jianying-draft.json";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Library settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftSettings {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            logging: LoggingSettings::default(),
            catalog: CatalogSettings::default(),
        }
    }
}

impl DraftSettings {
    /// Corrects bad values in place instead of failing
    pub fn normalize(&mut self) {
        self.version = SETTINGS_VERSION;

        self.logging.level = normalize_enum(&self.logging.level, LOG_LEVELS, default_log_level());
        if self
            .logging
            .log_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            self.logging.log_dir = None;
        }
        if self
            .catalog
            .extra_catalog_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            self.catalog.extra_catalog_path = None;
        }
    }

    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("Settings file {} not found, using defaults", path.display());
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file: {}", e))
            .and_then(|content| {
                serde_json::from_str::<DraftSettings>(&content)
                    .map_err(|e| format!("Failed to parse settings file: {}", e))
            });

        match parsed {
            Ok(mut settings) => {
                if settings.version < SETTINGS_VERSION {
                    info!(
                        "Migrating settings from version {} to {}",
                        settings.version, SETTINGS_VERSION
                    );
                }
                settings.normalize();
                info!("Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Normalizes and writes the settings to `path` through a temp file and rename
    pub fn save(&self, path: &Path) -> CoreResult<DraftSettings> {
        let mut normalized = self.clone();
        normalized.normalize();

        let content = serde_json::to_string_pretty(&normalized)?;

        let temp_path = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }
        fs::rename(&temp_path, path)?;

        info!("Settings saved to {}", path.display());
        Ok(normalized)
    }

    /// Returns the built-in catalog merged with the configured extra catalog file.
    ///
    /// Unlike the settings file itself, a configured catalog that fails to load is
    /// an error.
    pub fn catalog(&self) -> CoreResult<Catalog> {
        let mut catalog = Catalog::builtin().clone();
        if let Some(path) = &self.catalog.extra_catalog_path {
            catalog.merge(Catalog::load(path)?);
        }
        Ok(catalog)
    }
}

fn normalize_enum(value: &str, allowed: &[&str], fallback: String) -> String {
    if allowed.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        value.to_ascii_lowercase()
    } else {
        fallback
    }
}

/// Logging output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSettings {
    /// Default level ("trace" to "error"); `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Colored stdout output
    #[serde(default)]
    pub ansi: bool,

    /// Directory for daily rolling log files; no file output when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            ansi: false,
            log_dir: None,
        }
    }
}

/// Resource catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSettings {
    /// JSON catalog merged over the built-in tables
    #[serde(default)]
    pub extra_catalog_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::{AudioEffectKind, EffectMeta, MaskShape};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = DraftSettings::default();
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.log_dir.is_none());
        assert!(settings.catalog.extra_catalog_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: DraftSettings =
            serde_json::from_value(json!({"logging": {"ansi": true}})).unwrap();

        assert!(settings.logging.ansi);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn test_camel_case_keys() {
        let mut settings = DraftSettings::default();
        settings.logging.log_dir = Some(PathBuf::from("/tmp/logs"));
        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json["logging"]["logDir"], "/tmp/logs");
        assert!(json["catalog"].get("extraCatalogPath").is_some());
    }

    #[test]
    fn test_normalize_corrects_values() {
        let mut settings = DraftSettings::default();
        settings.version = 0;
        settings.logging.level = "WARN".to_string();
        settings.logging.log_dir = Some(PathBuf::new());
        settings.normalize();

        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.logging.level, "warn");
        assert!(settings.logging.log_dir.is_none());

        settings.logging.level = "loud".to_string();
        settings.normalize();
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let settings = DraftSettings::load(&temp.path().join(SETTINGS_FILE));
        assert_eq!(settings, DraftSettings::default());
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(DraftSettings::load(&path), DraftSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);

        let mut settings = DraftSettings::default();
        settings.logging.level = "Debug".to_string();
        settings.logging.log_dir = Some(temp.path().join("logs"));
        let saved = settings.save(&path).unwrap();

        assert_eq!(saved.logging.level, "debug");
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(DraftSettings::load(&path), saved);
    }

    #[test]
    fn test_catalog_without_extra_is_builtin() {
        let catalog = DraftSettings::default().catalog().unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_catalog_merges_extra_file() {
        let temp = TempDir::new().unwrap();
        let catalog_path = temp.path().join("catalog.json");

        let extra = Catalog {
            audio_tone_effects: vec![EffectMeta {
                name: "大叔".to_string(),
                is_vip: true,
                resource_id: "override".to_string(),
                effect_id: "override".to_string(),
                md5_like_id: String::new(),
                params: Vec::new(),
            }],
            filters: vec![EffectMeta {
                name: "Custom".to_string(),
                is_vip: false,
                resource_id: "custom".to_string(),
                effect_id: "custom".to_string(),
                md5_like_id: String::new(),
                params: Vec::new(),
            }],
            ..Default::default()
        };
        fs::write(&catalog_path, serde_json::to_string(&extra).unwrap()).unwrap();

        let mut settings = DraftSettings::default();
        settings.catalog.extra_catalog_path = Some(catalog_path);
        let catalog = settings.catalog().unwrap();

        let tone = catalog.audio_effect(AudioEffectKind::Tone, "大叔").unwrap();
        assert_eq!(tone.meta.resource_id, "override");
        assert!(tone.meta.params.is_empty());
        assert_eq!(catalog.filter("custom").unwrap().effect_id, "custom");
        assert_eq!(catalog.len(), Catalog::builtin().len() + 1);
        assert_eq!(catalog.mask("矩形").unwrap().shape, MaskShape::Rectangle);
    }

    #[test]
    fn test_catalog_missing_extra_file_fails() {
        let mut settings = DraftSettings::default();
        settings.catalog.extra_catalog_path = Some(PathBuf::from("/nonexistent/catalog.json"));
        assert!(settings.catalog().is_err());
    }
}
