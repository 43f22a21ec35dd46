use vitrine::{Counter, CounterFrame};

use crate::{FrameHandle, FrameScheduler, TextSink};

/// Drives a [`Counter`] from a [`FrameScheduler`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `start` when the counter should run (it requests the first frame)
/// - `on_frame` for every due frame handed out by the scheduler
/// - `stop` to end the run; the pending frame is cancelled before `stop` returns
#[derive(Clone, Debug)]
pub struct CounterDriver {
    counter: Counter,
    frame: Option<FrameHandle>,
}

impl CounterDriver {
    pub fn new(counter: Counter) -> Self {
        Self {
            counter,
            frame: None,
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn into_counter(self) -> Counter {
        self.counter
    }

    pub fn is_animating(&self) -> bool {
        self.counter.is_animating()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Starts a run and schedules its first frame as `task`.
    ///
    /// Returns `false` if the counter is already running.
    pub fn start<T>(&mut self, now_ms: u64, frames: &mut FrameScheduler<T>, task: T) -> bool {
        if !self.counter.start(now_ms) {
            return false;
        }
        self.frame = Some(frames.request(task));
        true
    }

    pub fn stop<T>(&mut self, frames: &mut FrameScheduler<T>) {
        self.counter.stop();
        if let Some(handle) = self.frame.take() {
            frames.cancel(handle);
        }
    }

    /// Renders one frame into `sink` and schedules the next one while the run continues.
    ///
    /// Frames whose handle is not this driver's pending frame are ignored.
    pub fn on_frame<T>(
        &mut self,
        handle: FrameHandle,
        now_ms: u64,
        frames: &mut FrameScheduler<T>,
        task: T,
        sink: &mut impl TextSink,
    ) -> Option<CounterFrame> {
        if self.frame != Some(handle) {
            vwarn!(?handle, "stale counter frame ignored");
            return None;
        }
        self.frame = None;

        let frame = self.counter.tick(now_ms)?;
        sink.set_text(&frame.text);
        if !frame.done {
            self.frame = Some(frames.request(task));
        }
        Some(frame)
    }
}
