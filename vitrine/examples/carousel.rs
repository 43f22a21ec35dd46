// Example: carousel driven by a timer, hover and a swipe.
use vitrine::{Carousel, CarouselEvent, CarouselOptions};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(3)).unwrap();
    c.start_autoplay_timer(0);
    println!("initial: {}", c.render().transform());

    let mut now_ms = 0u64;
    for step in 0..12 {
        now_ms += 2_500;

        // Hover over the carousel between 10s and 20s.
        let event = match step {
            3 => Some(CarouselEvent::PointerEnter),
            7 => Some(CarouselEvent::PointerLeave),
            _ => None,
        };
        if let Some(event) = event {
            c.handle(event).unwrap();
        }

        if let Some(r) = c.tick(now_ms) {
            let dots: String = r.indicators().map(|on| if on { '●' } else { '○' }).collect();
            println!("t={now_ms}ms slide={} {} {dots}", r.index, r.transform());
        }
    }

    // A swipe to the left moves forward one slide.
    for event in [
        CarouselEvent::TouchStart { x: 320.0 },
        CarouselEvent::TouchMove { x: 200.0 },
        CarouselEvent::TouchEnd,
    ] {
        if let Some(r) = c.handle(event).unwrap() {
            println!("swipe -> slide={}", r.index);
        }
    }

    match c.go_to(9) {
        Ok(r) => println!("jumped to {}", r.index),
        Err(err) => println!("go_to rejected: {err}"),
    }
}
