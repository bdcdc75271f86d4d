use std::sync::{Arc, Mutex};
use std::time::Duration;

use overlay_core::TaskSet;

/// Source of display-refresh ticks driving the dispatcher.
#[async_trait::async_trait]
pub trait FrameClock: Send {
    /// Completes when the next frame should be flushed.
    async fn next_frame(&mut self);
}

/// Frame clock ticking at a fixed interval, approximating the display
/// refresh rate.
pub struct IntervalFrameClock {
    interval: tokio::time::Interval,
}

impl IntervalFrameClock {
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        // A stalled frame must not be followed by a burst of catch-up flushes.
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        Self { interval }
    }
}

impl Default for IntervalFrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}

#[async_trait::async_trait]
impl FrameClock for IntervalFrameClock {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Coalesces same-labeled visual updates into one applied update per frame.
#[derive(Clone, Default)]
pub struct FrameDispatcher {
    tasks: Arc<Mutex<TaskSet>>,
}

impl FrameDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `task` under `label` for the next frame, dropping any
    /// unexecuted task previously registered under the same label.
    pub fn schedule(&self, label: &str, task: impl FnOnce() + Send + 'static) {
        self.tasks
            .lock()
            .expect("lock task set")
            .schedule(label, Box::new(task));
    }

    /// Runs the flush loop forever: one drain of the task set per frame.
    /// The host page's lifetime bounds the loop; there is no shutdown path.
    pub async fn run(self, mut clock: impl FrameClock) {
        let mut tick: u64 = 0;
        loop {
            clock.next_frame().await;
            tick += 1;
            overlay_logging::set_frame_tick(tick);
            let drained = self.tasks.lock().expect("lock task set").drain();
            for task in drained {
                task();
            }
        }
    }

    /// Spawns the flush loop on the ambient tokio runtime.
    pub fn spawn(&self, clock: impl FrameClock + 'static) -> tokio::task::JoinHandle<()> {
        let dispatcher = self.clone();
        tokio::spawn(dispatcher.run(clock))
    }
}
