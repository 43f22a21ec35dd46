use crate::error::{Error, Result};
use crate::{CounterFrame, CounterOptions, CounterSnapshot, CounterState, Tween};

/// Every run starts from zero.
const START_VALUE: f64 = 0.0;

/// A headless counter animation.
///
/// The counter holds no UI objects. Adapters drive it by calling:
/// - `start(now_ms)` when the counter should begin (e.g. its card became visible)
/// - `tick(now_ms)` once per animation frame, writing `CounterFrame::text` to the display
///
/// `start` is ignored while a run is in progress, and `stop` takes effect immediately:
/// no frame is produced after it returns.
#[derive(Clone, Debug)]
pub struct Counter {
    options: CounterOptions,
    state: CounterState,
}

impl Counter {
    pub fn new(options: CounterOptions) -> Result<Self> {
        if !options.target.is_finite() {
            return Err(Error::InvalidTarget(options.target));
        }
        if options.duration_ms == 0 {
            return Err(Error::InvalidConfiguration("counter duration must be positive"));
        }
        vdebug!(
            target_value = options.target,
            duration_ms = options.duration_ms,
            suffix = options.suffix.as_str(),
            "Counter::new"
        );
        Ok(Self {
            options,
            state: CounterState::Idle,
        })
    }

    pub fn options(&self) -> &CounterOptions {
        &self.options
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, CounterState::Running { .. })
    }

    /// Begins a run at `now_ms`.
    ///
    /// Returns `false` (and changes nothing) if a run is already in progress.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_animating() {
            vtrace!(now_ms, "Counter::start ignored: already running");
            return false;
        }
        let tween = Tween::new(
            START_VALUE,
            self.options.target,
            now_ms,
            self.options.duration_ms,
            self.options.easing,
        );
        self.state = CounterState::Running { tween };
        vtrace!(now_ms, "Counter::start");
        true
    }

    /// Ends the current run, if any. The display keeps whatever text was last rendered.
    pub fn stop(&mut self) {
        if self.is_animating() {
            vtrace!("Counter::stop");
        }
        self.state = CounterState::Idle;
    }

    /// Advances the run and returns the frame to display.
    ///
    /// Returns `None` when idle. The frame with `done == true` carries the formatted
    /// target value, after which the counter is idle again.
    pub fn tick(&mut self, now_ms: u64) -> Option<CounterFrame> {
        let CounterState::Running { tween } = self.state else {
            return None;
        };

        let value = tween.sample(now_ms);
        let done = tween.is_done(now_ms);
        if done {
            self.state = CounterState::Idle;
            vtrace!(now_ms, value, "Counter finished");
        }

        Some(CounterFrame {
            value,
            text: self.options.suffix.format(value),
            done,
        })
    }

    /// Formatted text of the final frame.
    pub fn final_text(&self) -> String {
        self.options.suffix.format(self.options.target)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        let (is_animating, start_ms) = match self.state {
            CounterState::Idle => (false, None),
            CounterState::Running { tween } => (true, Some(tween.start_ms)),
        };
        CounterSnapshot {
            target: self.options.target,
            duration_ms: self.options.duration_ms,
            is_animating,
            start_ms,
        }
    }
}
