//! Jianying Draft Library
//!
//! Builds video segments for a Jianying/CapCut draft: timing, clip transform,
//! effects, filters, animations, masks, transitions and keyframes, all resolved
//! against a resource catalog and exported as the host's JSON fragments.
//!
//! ## Example
//!
//! ```ignore
//! use jianying_draft::core::metadata::AnimationKind;
//! use jianying_draft::core::settings::DraftSettings;
//! use jianying_draft::core::timeline::{trange, VideoMaterial, VideoSegment};
//!
//! // Built-in masks and audio effects, plus the host catalog named in the settings
//! let catalog = DraftSettings::load(Path::new("jianying-draft.json")).catalog()?;
//! let material = VideoMaterial::video("clip.mp4", 10_000_000, 1920, 1080);
//! let mut segment = VideoSegment::new(&material, trange("0s", "5s")?)?;
//! segment
//!     .add_animation(&catalog.animation(AnimationKind::Intro, "渐显")?)?
//!     .add_transition(catalog.transition("叠化")?, None)?;
//!
//! let fragment = segment.export_json();
//! let materials = segment.export_materials();
//! ```

pub mod core;

use std::sync::OnceLock;

use crate::core::settings::LoggingSettings;

pub use crate::core::{CoreError, CoreResult};

/// Log file name prefix inside the configured log directory
pub const LOG_FILE_NAME: &str = "jianying-draft.log";

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides `settings.level`. When `settings.log_dir` is set, logs are
/// also written to a daily rolling file there. Calling this again after a
/// subscriber is installed has no effect.
pub fn init_logging(settings: &LoggingSettings) {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(settings.ansi);

    // Best effort: an unusable log dir only disables the file layer.
    let file_layer = settings.log_dir.as_ref().and_then(|log_dir| {
        std::fs::create_dir_all(log_dir).ok()?;
        let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
    });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer);

    let _ = tracing::subscriber::set_global_default(subscriber);
}
