use vitrine::CarouselRender;

use crate::ElementKey;

/// A writable text slot (e.g. a counter's display element).
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

/// The carousel's visual surface: the slide track and its indicators.
pub trait CarouselSink {
    /// Sets the track's horizontal translation, e.g. `translateX(-100%)`.
    fn set_track_transform(&mut self, css: &str);
    /// Toggles the "active" marker on one indicator.
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// Writes a carousel render: the track transform, then every indicator's active flag.
pub fn apply_carousel_render(sink: &mut (impl CarouselSink + ?Sized), render: CarouselRender) {
    sink.set_track_transform(&render.transform());
    for (i, active) in render.indicators().enumerate() {
        sink.set_indicator_active(i, active);
    }
}

/// Everything a [`crate::Page`] writes to. Implemented once per host (DOM binding, TUI, tests).
pub trait PageHost: CarouselSink {
    type Key: ElementKey;

    fn set_text(&mut self, key: &Self::Key, text: &str);
    /// Adds (`on == true`) or removes a marker class such as `visible` or `active`.
    fn set_class(&mut self, key: &Self::Key, class: &str, on: bool);
    /// Sets an element's transform style (parallax, hover lift); an empty `css` clears it.
    fn set_transform(&mut self, key: &Self::Key, css: &str);
    /// Swaps in an image's real source.
    fn set_src(&mut self, key: &Self::Key, src: &str);
    /// Sets one inline style property; an empty `value` removes it.
    fn set_style(&mut self, key: &Self::Key, property: &str, value: &str);
    /// Requests a smooth scroll of the page to `top`.
    fn scroll_to(&mut self, top: f64);
    /// Adds a `<link rel="preload" as="style">` for `href`.
    fn preload_style(&mut self, href: &str);
}

/// Borrows one keyed text element of a [`PageHost`] as a [`TextSink`].
pub struct KeyedText<'a, H: PageHost + ?Sized> {
    pub host: &'a mut H,
    pub key: &'a H::Key,
}

impl<H: PageHost + ?Sized> TextSink for KeyedText<'_, H> {
    fn set_text(&mut self, text: &str) {
        self.host.set_text(self.key, text);
    }
}
