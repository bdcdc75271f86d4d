use std::time::Duration;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use thiserror::Error;

use overlay_core::{Generation, TrackerArbiter};

/// Network settings for page image tracking requests.
#[derive(Debug, Clone)]
pub struct TrackSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Receiver for published load fractions.
pub trait ProgressSink: Send + Sync {
    fn publish(&self, fraction: f64);
}

/// How a tracker run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Body stream exhausted; `bytes` were read in total.
    Completed { bytes: u64 },
    /// No usable total size; only the initial zero fraction was published.
    SizeUnknown,
    /// A newer run took the bar; this one stopped publishing.
    Superseded,
}

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout: {0}")]
    Timeout(String),
}

fn map_reqwest_error(err: reqwest::Error) -> TrackError {
    if err.is_timeout() {
        return TrackError::Timeout(err.to_string());
    }
    TrackError::Network(err.to_string())
}

/// Streams the page image at a URL and publishes fractional load progress.
#[derive(Debug, Clone)]
pub struct ImageProgressTracker {
    settings: TrackSettings,
    arbiter: TrackerArbiter,
}

impl ImageProgressTracker {
    pub fn new(settings: TrackSettings, arbiter: TrackerArbiter) -> Self {
        Self { settings, arbiter }
    }

    fn build_client(&self) -> Result<reqwest::Client, TrackError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)
    }

    /// Tracks one relevant load: takes the bar by beginning a new
    /// generation, publishes zero once response headers arrive, then
    /// publishes `bytes_read / total` after every chunk until the stream
    /// ends or a newer run supersedes this one.
    pub async fn track(
        &self,
        src: &str,
        sink: &dyn ProgressSink,
    ) -> Result<TrackOutcome, TrackError> {
        let generation = self.arbiter.begin();
        let client = self.build_client()?;
        let response = client.get(src).send().await.map_err(map_reqwest_error)?;

        // Reset the bar as soon as headers arrive, before any body bytes.
        sink.publish(0.0);

        let total = response.content_length().unwrap_or(0);
        if total == 0 {
            // Without a declared size there is no fraction to animate.
            return Ok(TrackOutcome::SizeUnknown);
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(map_reqwest_error));
        publish_body_progress(stream, total, generation, &self.arbiter, sink).await
    }
}

/// Drives the chunk loop for one tracker run. Staleness is checked once per
/// received chunk; a superseded run stops before publishing that chunk's
/// fraction. A single oversized chunk therefore delays supersession until it
/// completes.
pub async fn publish_body_progress<S>(
    mut stream: S,
    total: u64,
    generation: Generation,
    arbiter: &TrackerArbiter,
    sink: &dyn ProgressSink,
) -> Result<TrackOutcome, TrackError>
where
    S: Stream<Item = Result<Bytes, TrackError>> + Unpin,
{
    let mut received: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if !arbiter.is_current(generation) {
            return Ok(TrackOutcome::Superseded);
        }
        received += chunk.len() as u64;
        sink.publish(received as f64 / total as f64);
    }
    Ok(TrackOutcome::Completed { bytes: received })
}
