// Example: adapter-driven counter animation at ~60fps.
use vitrine::{Counter, CounterOptions};

fn main() {
    let mut counters = [
        Counter::new(CounterOptions::new(2.5).with_suffix("M")).unwrap(),
        Counter::new(CounterOptions::new(98.0).with_suffix("%")).unwrap(),
        Counter::new(CounterOptions::new(500.0).with_suffix("+")).unwrap(),
    ];

    // Simulate the cards becoming visible at t=0.
    for c in &mut counters {
        c.start(0);
    }

    let mut now_ms = 0u64;
    let mut frame = 0u64;
    loop {
        let mut running = false;
        let mut texts = Vec::with_capacity(counters.len());
        for c in &mut counters {
            if let Some(f) = c.tick(now_ms) {
                running |= !f.done;
                texts.push(f.text);
            }
        }

        if frame % 15 == 0 || !running {
            println!("t={now_ms}ms {}", texts.join(" | "));
        }
        if !running {
            break;
        }

        // Simulate a 60fps "tick".
        now_ms = now_ms.saturating_add(16);
        frame += 1;
    }

    // A second start on a running counter is ignored.
    let mut c = Counter::new(CounterOptions::new(10.0)).unwrap();
    println!("first start={} second start={}", c.start(0), c.start(8));
}
