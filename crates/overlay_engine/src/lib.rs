//! Overlay engine: frame scheduling, load interception, and progress IO.
mod dispatch;
mod intercept;
mod runtime;
mod track;

pub use dispatch::{FrameClock, FrameDispatcher, IntervalFrameClock};
pub use intercept::{ImageLoadHub, LoadHandler};
pub use runtime::{OverlaySettings, ReaderOverlay, LOADING_TASK};
pub use track::{
    publish_body_progress, ImageProgressTracker, ProgressSink, TrackError, TrackOutcome,
    TrackSettings,
};
