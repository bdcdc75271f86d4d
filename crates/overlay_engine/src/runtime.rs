use std::sync::Arc;
use std::time::Duration;

use overlay_core::{
    ActivationRule, ActivePageProbe, ProgressBar, ProgressSurface, RelevanceFilter, TrackerArbiter,
};

use crate::dispatch::{FrameDispatcher, IntervalFrameClock};
use crate::intercept::ImageLoadHub;
use crate::track::{ImageProgressTracker, ProgressSink, TrackSettings};

/// Task label for bar updates. Publishes from competing generations
/// coalesce under it through the dispatcher's overwrite rule.
pub const LOADING_TASK: &str = "loading";

/// Settings for one overlay attachment.
#[derive(Debug, Clone)]
pub struct OverlaySettings {
    pub activation: ActivationRule,
    pub frame_interval: Duration,
    pub track: TrackSettings,
}

impl OverlaySettings {
    pub fn new(activation: ActivationRule) -> Self {
        Self {
            activation,
            frame_interval: Duration::from_millis(16),
            track: TrackSettings::default(),
        }
    }
}

/// Publishes fractions by scheduling a bar render for the next frame.
struct DispatcherSink {
    dispatcher: FrameDispatcher,
    bar: Arc<ProgressBar>,
}

impl ProgressSink for DispatcherSink {
    fn publish(&self, fraction: f64) {
        let bar = Arc::clone(&self.bar);
        self.dispatcher
            .schedule(LOADING_TASK, move || bar.render(fraction));
    }
}

/// A loading-progress overlay attached to one host page.
pub struct ReaderOverlay {
    hub: Arc<ImageLoadHub>,
    _frame_loop: tokio::task::JoinHandle<()>,
}

impl ReaderOverlay {
    /// Wires the overlay onto a host page; `None` when `page_url` is outside
    /// the activation scope. The returned overlay exposes the load hub the
    /// host reports image constructions to; everything downstream of the hub
    /// (relevance check, tracking, rendering) runs internally and never
    /// propagates a failure back into the host.
    pub fn attach(
        page_url: &str,
        probe: Arc<dyn ActivePageProbe>,
        surface: Box<dyn ProgressSurface>,
        settings: OverlaySettings,
    ) -> Option<Self> {
        if !settings.activation.matches(page_url) {
            log::debug!("overlay not attached: {page_url} outside activation scope");
            return None;
        }

        let bar = Arc::new(ProgressBar::new(surface));
        let dispatcher = FrameDispatcher::new();
        let frame_loop = dispatcher.spawn(IntervalFrameClock::new(settings.frame_interval));

        let arbiter = TrackerArbiter::new();
        let tracker = Arc::new(ImageProgressTracker::new(settings.track, arbiter));
        let filter = RelevanceFilter::new(probe);

        let hub = Arc::new(ImageLoadHub::new(move |src: String| {
            if !filter.relevant(&src) {
                log::trace!("ignoring image load {src}");
                return;
            }
            log::debug!("tracking page image {src}");
            let tracker = Arc::clone(&tracker);
            let sink = DispatcherSink {
                dispatcher: dispatcher.clone(),
                bar: Arc::clone(&bar),
            };
            tokio::spawn(async move {
                match tracker.track(&src, &sink).await {
                    Ok(outcome) => log::debug!("page image {src}: {outcome:?}"),
                    // Degraded, not fatal: the bar stays inactive for this load.
                    Err(err) => log::warn!("page image {src}: {err}"),
                }
            });
        }));

        log::info!("overlay attached to {page_url}");
        Some(Self {
            hub,
            _frame_loop: frame_loop,
        })
    }

    /// Observation point the host reports image constructions to.
    pub fn load_hub(&self) -> Arc<ImageLoadHub> {
        Arc::clone(&self.hub)
    }
}
