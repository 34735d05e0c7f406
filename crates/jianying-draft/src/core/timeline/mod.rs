//! Timeline Module
//!
//! Time values, materials and the segments placed on tracks.

mod keyframe;
mod material;
mod segment;
mod time;
mod video_segment;

pub use keyframe::{Keyframe, KeyframeList, KeyframeProperty};
pub use material::{MaterialKind, VideoMaterial, PHOTO_DURATION};
pub use segment::{MediaSegment, Speed};
pub use time::{tim, trange, TimeValue, Timerange};
pub use video_segment::{ClipSettings, VideoSegment, VideoSegmentOptions};
