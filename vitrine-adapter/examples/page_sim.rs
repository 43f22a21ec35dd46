// Example: a simulated host driving a whole page (carousel, counters, reveal, scroll).
use std::collections::BTreeMap;

use vitrine::CarouselEvent;
use vitrine_adapter::{
    Bounds, CarouselLayout, CarouselSink, CounterElement, HoverEffect, Hoverable, NavSection,
    Page, PageEvent, PageHost, PageLayout, PageOptions, Viewport,
};

#[derive(Debug, Default)]
struct ConsoleHost {
    texts: BTreeMap<&'static str, String>,
}

impl CarouselSink for ConsoleHost {
    fn set_track_transform(&mut self, css: &str) {
        println!("  track -> {css}");
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if active {
            println!("  indicator {index} active");
        }
    }
}

impl PageHost for ConsoleHost {
    type Key = &'static str;

    fn set_text(&mut self, key: &Self::Key, text: &str) {
        self.texts.insert(*key, text.to_owned());
    }

    fn set_class(&mut self, key: &Self::Key, class: &str, on: bool) {
        println!("  {key}: {}{class}", if on { '+' } else { '-' });
    }

    fn set_transform(&mut self, key: &Self::Key, css: &str) {
        println!("  {key}: transform {css}");
    }

    fn set_src(&mut self, key: &Self::Key, src: &str) {
        println!("  {key}: src {src}");
    }

    fn set_style(&mut self, key: &Self::Key, property: &str, value: &str) {
        println!("  {key}: {property}: {value:?}");
    }

    fn scroll_to(&mut self, top: f64) {
        println!("  scroll to {top}px");
    }

    fn preload_style(&mut self, href: &str) {
        println!("  preload {href}");
    }
}

fn main() {
    let viewport = Viewport::new(1280.0, 720.0);
    let layout = PageLayout {
        carousel: Some(CarouselLayout {
            slide_count: 3,
            indicator_count: 3,
        }),
        counters: vec![
            CounterElement {
                key: "stat-users",
                target: "2.5".to_owned(),
                suffix: "M".to_owned(),
                card: None,
                bounds: Some(Bounds::new(0.0, 400.0, 200.0, 80.0)),
            },
            CounterElement {
                key: "stat-uptime",
                target: "98".to_owned(),
                suffix: "%".to_owned(),
                card: Some("case-1"),
                bounds: None,
            },
        ],
        cards: vec!["case-1"],
        sections: vec![
            NavSection {
                section: "home",
                link: Some("nav-home"),
                top: 0.0,
            },
            NavSection {
                section: "cases",
                link: Some("nav-cases"),
                top: 1_400.0,
            },
        ],
        parallax: vec!["floating-orb"],
        hover: vec![Hoverable {
            key: "service-1",
            effect: HoverEffect::Glow,
        }],
        preload: vec![
            "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap"
                .to_owned(),
        ],
        ..PageLayout::default()
    };

    println!("init:");
    let mut page = Page::new(
        ConsoleHost::default(),
        PageOptions::default(),
        layout,
        viewport,
        0,
    );

    let mut now_ms = 0u64;
    while now_ms <= 6_000 {
        if now_ms == 1_200 {
            println!("t={now_ms}ms scroll to cases:");
            page.handle(PageEvent::Scroll { scroll_y: 1_300.0 }, now_ms)
                .unwrap();
            page.handle(
                PageEvent::Layout {
                    key: "case-1",
                    bounds: Bounds::new(0.0, 200.0, 400.0, 300.0),
                },
                now_ms,
            )
            .unwrap();
        }
        if now_ms == 2_400 {
            println!("t={now_ms}ms hover service card, then jump to cases:");
            page.handle(PageEvent::PointerEnter { key: "service-1" }, now_ms)
                .unwrap();
            page.handle(
                PageEvent::AnchorClick {
                    target_top: 1_400.0,
                    header_height: 72.0,
                },
                now_ms,
            )
            .unwrap();
        }
        if now_ms == 4_000 {
            println!("t={now_ms}ms next slide:");
            page.handle(PageEvent::Carousel(CarouselEvent::Next), now_ms)
                .unwrap();
        }

        page.frame(now_ms);
        if now_ms % 800 == 0 {
            println!("t={now_ms}ms counters={:?}", page.host().texts);
        }
        now_ms += 16;
    }

    if let Err(err) = page.handle(PageEvent::Carousel(CarouselEvent::GoTo(7)), now_ms) {
        page.report_error(&err);
        println!("rejected: {err}");
    }
}
