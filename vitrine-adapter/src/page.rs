use core::fmt;
use std::collections::HashMap;

use vitrine::{
    Carousel, CarouselEvent, CarouselOptions, Counter, CounterOptions,
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_COUNTER_DURATION_MS, DEFAULT_SWIPE_THRESHOLD,
};

use crate::error::InitError;
use crate::{
    Bounds, CounterDriver, DEFAULT_NAV_OFFSET, DEFAULT_PARALLAX_SPEED, FrameScheduler,
    HoverEffect, Hoverable, KeyedText, LazyImages, NavSection, PageHost, RevealOptions,
    RevealTracker, ScrollCoalescer, TriggerGuard, Viewport, active_section,
    anchor_scroll_target, apply_carousel_render, is_in_initial_view, parallax_transform,
};

/// Marker classes written to the host.
pub mod class {
    pub const SECTION_ANIMATE: &str = "section-animate";
    pub const VISIBLE: &str = "visible";
    pub const ACTIVE: &str = "active";
    pub const LOADING: &str = "loading";
}

/// Page-wide configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageOptions {
    pub reveal: RevealOptions,
    pub nav_offset: f64,
    pub parallax_speed: f64,
    pub counter_duration_ms: u64,
    pub autoplay_interval_ms: u64,
    pub swipe_threshold: f64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            reveal: RevealOptions::default(),
            nav_offset: DEFAULT_NAV_OFFSET,
            parallax_speed: DEFAULT_PARALLAX_SPEED,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// The carousel region found on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselLayout {
    pub slide_count: usize,
    pub indicator_count: usize,
}

/// A counter display element, as found on the page.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterElement<K> {
    pub key: K,
    /// Raw target attribute; parsed like a leading decimal number (`"98"`, `"2.5M"`).
    pub target: String,
    /// Raw suffix attribute.
    pub suffix: String,
    /// The revealable card containing this counter; revealing it starts the counter.
    pub card: Option<K>,
    /// Bounds at load time, for the initial-view check.
    pub bounds: Option<Bounds>,
}

/// An image whose real source is deferred until it scrolls into view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LazyImage<K> {
    pub key: K,
    pub src: String,
}

/// Every page region the composition root wires up. Empty regions are simply skipped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout<K> {
    pub carousel: Option<CarouselLayout>,
    pub counters: Vec<CounterElement<K>>,
    /// Cards that fade in when revealed.
    pub cards: Vec<K>,
    pub lazy_images: Vec<LazyImage<K>>,
    /// Navigable sections in document order.
    pub sections: Vec<NavSection<K>>,
    pub parallax: Vec<K>,
    /// Elements with a hover style effect.
    pub hover: Vec<Hoverable<K>>,
    /// Stylesheets (e.g. web fonts) to preload at startup.
    pub preload: Vec<String>,
}

impl<K> Default for PageLayout<K> {
    fn default() -> Self {
        Self {
            carousel: None,
            counters: Vec::new(),
            cards: Vec::new(),
            lazy_images: Vec::new(),
            sections: Vec::new(),
            parallax: Vec::new(),
            hover: Vec::new(),
            preload: Vec::new(),
        }
    }
}

/// Host input routed through [`Page::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent<K> {
    Carousel(CarouselEvent),
    Scroll { scroll_y: f64 },
    /// An element's bounds changed (after scroll, resize or layout).
    Layout { key: K, bounds: Bounds },
    Resize(Viewport),
    /// The pointer entered an element (hover effects).
    PointerEnter { key: K },
    PointerLeave { key: K },
    /// An in-page anchor link was clicked; scrolls its target to just below the header.
    AnchorClick { target_top: f64, header_height: f64 },
}

#[derive(Clone, Debug)]
struct CounterSlot<K> {
    key: K,
    card: Option<K>,
    driver: CounterDriver,
}

/// Parses the leading decimal number of `raw`, ignoring leading whitespace and any
/// trailing text (`"2.5M"` is 2.5). Like `parseFloat`, a signed `Infinity` is accepted
/// but no other non-decimal spelling is.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }
    let end = decimal_prefix_len(s);
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Byte length of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix with at
/// least one mantissa digit, or 0.
fn decimal_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;
    if b.get(i) == Some(&b'.') {
        let frac_end = digits(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

/// The composition root: builds every page component from an injected host and layout,
/// and routes host events and frames to them.
///
/// A component that fails to initialise is logged, recorded in [`Page::init_errors`], and
/// left out; the rest of the page keeps working.
pub struct Page<H: PageHost> {
    host: H,
    options: PageOptions,
    viewport: Viewport,
    carousel: Option<Carousel>,
    counters: Vec<CounterSlot<H::Key>>,
    frames: FrameScheduler<usize>,
    reveal: RevealTracker<H::Key>,
    animated: TriggerGuard<H::Key>,
    lazy: LazyImages<H::Key>,
    sections: Vec<NavSection<H::Key>>,
    active_section: Option<H::Key>,
    parallax: Vec<H::Key>,
    hover: HashMap<H::Key, HoverEffect>,
    scroll: ScrollCoalescer,
    scroll_y: f64,
    init_errors: Vec<InitError>,
}

impl<H: PageHost> Page<H> {
    pub fn new(
        host: H,
        options: PageOptions,
        layout: PageLayout<H::Key>,
        viewport: Viewport,
        now_ms: u64,
    ) -> Self {
        let mut page = Self {
            host,
            options,
            viewport,
            carousel: None,
            counters: Vec::new(),
            frames: FrameScheduler::new(),
            reveal: RevealTracker::new(options.reveal),
            animated: TriggerGuard::new(),
            lazy: LazyImages::new(),
            sections: layout.sections,
            active_section: None,
            parallax: layout.parallax,
            hover: layout
                .hover
                .into_iter()
                .map(|h| (h.key, h.effect))
                .collect(),
            scroll: ScrollCoalescer::new(),
            scroll_y: 0.0,
            init_errors: Vec::new(),
        };

        for href in &layout.preload {
            page.host.preload_style(href);
        }

        if let Some(carousel) = layout.carousel {
            page.init_carousel(carousel, now_ms);
        }

        for card in layout.cards {
            page.host.set_class(&card, class::SECTION_ANIMATE, true);
            page.reveal.observe(card);
        }

        for image in layout.lazy_images {
            page.lazy.observe(image.key, image.src);
        }

        let mut initially_visible = Vec::new();
        for element in layout.counters {
            let visible = element
                .bounds
                .is_some_and(|b| is_in_initial_view(b, viewport));
            if page.init_counter(element) && visible {
                initially_visible.push(page.counters.len() - 1);
            }
        }
        for index in initially_visible {
            page.trigger_counter(index, now_ms);
        }

        vdebug!(
            counters = page.counters.len(),
            carousel = page.carousel.is_some(),
            errors = page.init_errors.len(),
            "page initialised"
        );
        page
    }

    fn init_carousel(&mut self, layout: CarouselLayout, now_ms: u64) {
        let options = CarouselOptions::new(layout.slide_count)
            .with_indicator_count(layout.indicator_count)
            .with_autoplay_interval_ms(self.options.autoplay_interval_ms)
            .with_swipe_threshold(self.options.swipe_threshold);
        match Carousel::new(options) {
            Ok(mut carousel) => {
                apply_carousel_render(&mut self.host, carousel.render());
                carousel.start_autoplay_timer(now_ms);
                self.carousel = Some(carousel);
            }
            Err(err) => self.record_init_error(InitError::Carousel(err)),
        }
    }

    fn init_counter(&mut self, element: CounterElement<H::Key>) -> bool {
        let Some(target) = parse_leading_number(&element.target) else {
            self.record_init_error(InitError::UnparsableTarget {
                key: format!("{:?}", element.key),
                raw: element.target,
            });
            return false;
        };
        let options = CounterOptions::new(target)
            .with_suffix(element.suffix.as_str())
            .with_duration_ms(self.options.counter_duration_ms);
        match Counter::new(options) {
            Ok(counter) => {
                self.counters.push(CounterSlot {
                    key: element.key,
                    card: element.card,
                    driver: CounterDriver::new(counter),
                });
                true
            }
            Err(source) => {
                self.record_init_error(InitError::Counter {
                    key: format!("{:?}", element.key),
                    source,
                });
                false
            }
        }
    }

    fn record_init_error(&mut self, err: InitError) {
        verror!(error = %err, "component initialisation failed");
        self.init_errors.push(err);
    }

    /// Logs an error raised by host glue outside the page components.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn report_error(&self, err: &dyn fmt::Display) {
        verror!(error = %err, "unhandled page error");
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn init_errors(&self) -> &[InitError] {
        &self.init_errors
    }

    pub fn active_section(&self) -> Option<&H::Key> {
        self.active_section.as_ref()
    }

    pub fn is_counter_animating(&self, key: &H::Key) -> bool {
        self.counters
            .iter()
            .any(|c| &c.key == key && c.driver.is_animating())
    }

    pub fn is_counter_triggered(&self, key: &H::Key) -> bool {
        self.animated.is_claimed(key)
    }

    pub fn is_revealed(&self, key: &H::Key) -> bool {
        self.reveal.is_revealed(key)
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Applies one host event.
    ///
    /// Only carousel commands can fail (e.g. an indicator index past the last slide). The
    /// error is logged and returned; page state is unchanged.
    pub fn handle(&mut self, event: PageEvent<H::Key>, now_ms: u64) -> vitrine::Result<()> {
        match event {
            PageEvent::Carousel(event) => {
                let Some(carousel) = self.carousel.as_mut() else {
                    return Ok(());
                };
                match carousel.handle(event) {
                    Ok(Some(render)) => apply_carousel_render(&mut self.host, render),
                    Ok(None) => {}
                    Err(err) => {
                        vwarn!(error = %err, ?event, "carousel command rejected");
                        return Err(err);
                    }
                }
            }
            PageEvent::Scroll { scroll_y } => {
                self.scroll_y = scroll_y;
                self.scroll.on_scroll();
            }
            PageEvent::Layout { key, bounds } => self.on_layout(key, bounds, now_ms),
            PageEvent::Resize(viewport) => {
                self.viewport = viewport;
            }
            PageEvent::PointerEnter { key } => self.on_hover(&key, true),
            PageEvent::PointerLeave { key } => self.on_hover(&key, false),
            PageEvent::AnchorClick {
                target_top,
                header_height,
            } => {
                let top = anchor_scroll_target(target_top, header_height);
                vtrace!(top, "anchor scroll");
                self.host.scroll_to(top);
            }
        }
        Ok(())
    }

    fn on_hover(&mut self, key: &H::Key, hovered: bool) {
        if let Some(&effect) = self.hover.get(key) {
            effect.apply(&mut self.host, key, hovered);
        }
    }

    fn on_layout(&mut self, key: H::Key, bounds: Bounds, now_ms: u64) {
        if self.reveal.update(&key, bounds, self.viewport) {
            self.host.set_class(&key, class::VISIBLE, true);
            let cards: Vec<usize> = self
                .counters
                .iter()
                .enumerate()
                .filter(|(_, c)| c.card.as_ref() == Some(&key))
                .map(|(i, _)| i)
                .collect();
            for index in cards {
                self.trigger_counter(index, now_ms);
            }
        }

        if let Some(src) = self.lazy.update(&key, bounds, self.viewport) {
            self.host.set_src(&key, &src);
            self.host.set_class(&key, class::LOADING, false);
        }
    }

    /// Starts a counter unless it was already triggered once.
    fn trigger_counter(&mut self, index: usize, now_ms: u64) {
        let slot = &mut self.counters[index];
        if !self.animated.try_claim(slot.key.clone()) {
            return;
        }
        vtrace!(key = ?slot.key, now_ms, "counter triggered");
        slot.driver.start(now_ms, &mut self.frames, index);
    }

    /// Stops a running counter. Its pending frame is cancelled immediately.
    pub fn stop_counter(&mut self, key: &H::Key) {
        for slot in self.counters.iter_mut().filter(|c| &c.key == key) {
            slot.driver.stop(&mut self.frames);
        }
    }

    /// Runs one frame: the carousel timer, due counter frames, then coalesced scroll work.
    pub fn frame(&mut self, now_ms: u64) {
        if let Some(render) = self.carousel.as_mut().and_then(|c| c.tick(now_ms)) {
            apply_carousel_render(&mut self.host, render);
        }

        for (handle, index) in self.frames.take_due() {
            let slot = &mut self.counters[index];
            let mut sink = KeyedText {
                host: &mut self.host,
                key: &slot.key,
            };
            slot.driver
                .on_frame(handle, now_ms, &mut self.frames, index, &mut sink);
        }

        if self.scroll.on_frame() {
            self.update_active_section();
            self.update_parallax();
        }
    }

    fn update_active_section(&mut self) {
        let current =
            active_section(&self.sections, self.scroll_y, self.options.nav_offset).cloned();
        if current == self.active_section {
            return;
        }
        for section in &self.sections {
            if let Some(link) = &section.link {
                let on = current.as_ref() == Some(&section.section);
                self.host.set_class(link, class::ACTIVE, on);
            }
        }
        self.active_section = current;
    }

    fn update_parallax(&mut self) {
        let css = parallax_transform(self.scroll_y, self.options.parallax_speed);
        for key in &self.parallax {
            self.host.set_transform(key, &css);
        }
    }
}

impl<H: PageHost + fmt::Debug> fmt::Debug for Page<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("host", &self.host)
            .field("viewport", &self.viewport)
            .field("carousel", &self.carousel)
            .field("counters", &self.counters.len())
            .field("pending_frames", &self.frames.len())
            .field("init_errors", &self.init_errors)
            .finish_non_exhaustive()
    }
}
