use crate::error::{Error, Result};
use crate::{AutoPlay, CarouselEvent, CarouselOptions, CarouselRender, CarouselSnapshot, Gesture};

/// A headless carousel state machine.
///
/// State is the current slide index crossed with the autoplay mode. Every input (controls,
/// indicators, hover, touch, timer) arrives as a [`CarouselEvent`] through [`Carousel::handle`]
/// or the equivalent command methods, and is applied to completion before the next one.
///
/// Any operation that assigns the index returns a [`CarouselRender`] that the adapter applies
/// to the track and indicators.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    index: usize,
    autoplay: AutoPlay,
    gesture: Option<Gesture>,
    /// Timestamp of the last autoplay tick (or of `start_autoplay_timer`).
    last_tick_ms: Option<u64>,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Result<Self> {
        if options.slide_count == 0 {
            return Err(Error::InvalidConfiguration("carousel needs at least one slide"));
        }
        if options.indicator_count != 0 && options.indicator_count != options.slide_count {
            return Err(Error::InvalidConfiguration(
                "indicator count must be zero or equal to the slide count",
            ));
        }
        if options.autoplay_interval_ms == 0 {
            return Err(Error::InvalidConfiguration("autoplay interval must be positive"));
        }
        if !(options.swipe_threshold.is_finite() && options.swipe_threshold >= 0.0) {
            return Err(Error::InvalidConfiguration(
                "swipe threshold must be a finite, non-negative distance",
            ));
        }
        vdebug!(
            slides = options.slide_count,
            indicators = options.indicator_count,
            interval_ms = options.autoplay_interval_ms,
            "Carousel::new"
        );
        Ok(Self {
            autoplay: options.autoplay,
            options,
            index: 0,
            gesture: None,
            last_tick_ms: None,
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.options.slide_count
    }

    pub fn autoplay(&self) -> AutoPlay {
        self.autoplay
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_playing()
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// The render for the current state (e.g. for the initial paint).
    pub fn render(&self) -> CarouselRender {
        CarouselRender {
            index: self.index,
            indicator_count: self.options.indicator_count,
        }
    }

    pub fn next(&mut self) -> CarouselRender {
        self.set_index((self.index + 1) % self.slide_count())
    }

    pub fn prev(&mut self) -> CarouselRender {
        let n = self.slide_count();
        self.set_index((self.index + n - 1) % n)
    }

    /// Jumps to `index`. Out-of-range indexes are rejected and leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<CarouselRender> {
        if index >= self.slide_count() {
            vwarn!(index, len = self.slide_count(), "Carousel::go_to: index out of range");
            return Err(Error::IndexOutOfRange {
                index,
                len: self.slide_count(),
            });
        }
        Ok(self.set_index(index))
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay = AutoPlay::Paused;
    }

    pub fn resume_autoplay(&mut self) {
        self.autoplay = AutoPlay::Playing;
    }

    /// One autoplay period elapsed. Advances only while autoplay is playing.
    pub fn autoplay_tick(&mut self) -> Option<CarouselRender> {
        if !self.is_autoplaying() {
            vtrace!(index = self.index, "autoplay tick skipped: paused");
            return None;
        }
        Some(self.next())
    }

    pub fn touch_start(&mut self, x: f64) {
        self.gesture = Some(Gesture {
            start_x: x,
            current_x: x,
        });
        self.pause_autoplay();
    }

    pub fn touch_move(&mut self, x: f64) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.current_x = x;
        }
    }

    /// Resolves the active gesture: a drag longer than the swipe threshold moves one slide
    /// in the drag direction. Autoplay resumes either way.
    pub fn touch_end(&mut self) -> Option<CarouselRender> {
        let gesture = self.gesture.take()?;
        let diff = gesture.diff();
        let render = if diff.abs() > self.options.swipe_threshold {
            vtrace!(diff, "swipe");
            Some(if diff > 0.0 { self.next() } else { self.prev() })
        } else {
            None
        };
        self.resume_autoplay();
        render
    }

    /// Applies one input event.
    ///
    /// Returns the render when the index was assigned, `Ok(None)` for events that only
    /// affect autoplay or gesture tracking.
    pub fn handle(&mut self, event: CarouselEvent) -> Result<Option<CarouselRender>> {
        let render = match event {
            CarouselEvent::Next => Some(self.next()),
            CarouselEvent::Prev => Some(self.prev()),
            CarouselEvent::GoTo(index) => Some(self.go_to(index)?),
            CarouselEvent::PointerEnter => {
                self.pause_autoplay();
                None
            }
            CarouselEvent::PointerLeave => {
                self.resume_autoplay();
                None
            }
            CarouselEvent::TouchStart { x } => {
                self.touch_start(x);
                None
            }
            CarouselEvent::TouchMove { x } => {
                self.touch_move(x);
                None
            }
            CarouselEvent::TouchEnd => self.touch_end(),
            CarouselEvent::AutoPlayTick => self.autoplay_tick(),
        };
        Ok(render)
    }

    /// Starts the fixed-period autoplay timer at `now_ms`.
    pub fn start_autoplay_timer(&mut self, now_ms: u64) {
        self.last_tick_ms = Some(now_ms);
    }

    pub fn stop_autoplay_timer(&mut self) {
        self.last_tick_ms = None;
    }

    pub fn is_timer_running(&self) -> bool {
        self.last_tick_ms.is_some()
    }

    /// Advances the autoplay timer.
    ///
    /// Fires one tick per full interval elapsed since the previous tick. The timer fires
    /// regardless of the autoplay mode; paused ticks are consumed without moving.
    /// Returns the render when at least one tick moved the carousel.
    pub fn tick(&mut self, now_ms: u64) -> Option<CarouselRender> {
        let last = self.last_tick_ms?;
        let interval = self.options.autoplay_interval_ms;
        let fired = now_ms.saturating_sub(last) / interval;
        if fired == 0 {
            return None;
        }
        // Mode can't change between ticks of one call, so all of them move or none do.
        self.last_tick_ms = Some(last + fired * interval);
        if !self.is_autoplaying() {
            vtrace!(fired, "autoplay ticks skipped: paused");
            return None;
        }
        let n = self.slide_count();
        let steps = (fired % n as u64) as usize;
        Some(self.set_index((self.index + steps) % n))
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.index,
            slide_count: self.options.slide_count,
            autoplay: self.autoplay,
            is_dragging: self.gesture.is_some(),
        }
    }

    fn set_index(&mut self, index: usize) -> CarouselRender {
        debug_assert!(index < self.slide_count());
        self.index = index;
        vtrace!(index, "Carousel index");
        self.render()
    }
}
