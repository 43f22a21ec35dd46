use crate::*;

const ALL_EASINGS: [Easing; 4] = [
    Easing::Linear,
    Easing::SmoothStep,
    Easing::EaseInOutCubic,
    Easing::EaseOutQuart,
];

fn counter(target: f64, suffix: &str) -> Counter {
    Counter::new(CounterOptions::new(target).with_suffix(suffix)).unwrap()
}

fn carousel(n: usize) -> Carousel {
    Carousel::new(CarouselOptions::new(n)).unwrap()
}

fn assert_render_consistent(c: &Carousel, r: CarouselRender) {
    assert_eq!(r.index, c.index());
    assert_eq!(r.offset_percent(), -(c.index() as i64) * 100);
    let active: Vec<usize> = r
        .indicators()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect();
    assert_eq!(active, vec![c.index()]);
}

#[test]
fn easings_hit_endpoints_and_are_monotonic() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.sample(1.0), 1.0, "{easing:?}");

        let mut last = 0.0;
        for step in 0..=1000 {
            let v = easing.sample(step as f64 / 1000.0);
            assert!(v >= last, "{easing:?} decreased at step {step}");
            last = v;
        }
    }
}

#[test]
fn easing_clamps_input() {
    assert_eq!(Easing::EaseOutQuart.sample(-1.0), 0.0);
    assert_eq!(Easing::EaseOutQuart.sample(3.0), 1.0);
}

#[test]
fn ease_out_quart_decelerates() {
    assert_eq!(Easing::EaseOutQuart.sample(0.5), 0.9375);
    // Most of the distance is covered early.
    assert!(Easing::EaseOutQuart.sample(0.25) > 0.6);
}

#[test]
fn tween_reports_exact_target_when_done() {
    let tween = Tween::new(0.0, 0.3, 100, 700, Easing::EaseOutQuart);
    assert_eq!(tween.progress(50), 0.0);
    assert_eq!(tween.sample(100), 0.0);
    assert!(!tween.is_done(799));
    assert!(tween.is_done(800));
    assert_eq!(tween.sample(800), 0.3);
    assert_eq!(tween.sample(10_000), 0.3);
}

#[test]
fn tween_zero_duration_is_clamped() {
    let tween = Tween::new(0.0, 10.0, 0, 0, Easing::Linear);
    assert_eq!(tween.duration_ms, 1);
    assert_eq!(tween.sample(1), 10.0);
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    tween.retarget(50, 0.0, 100);
    assert_eq!(tween.from, 50.0);
    assert_eq!(tween.to, 0.0);
    assert_eq!(tween.start_ms, 50);
    assert_eq!(tween.sample(150), 0.0);
}

#[test]
fn suffix_parse() {
    assert_eq!(Suffix::parse("M"), Suffix::Millions);
    assert_eq!(Suffix::parse("%"), Suffix::Percent);
    assert_eq!(Suffix::parse("+"), Suffix::Plus);
    assert_eq!(Suffix::parse(""), Suffix::None);
    assert_eq!(Suffix::parse("k"), Suffix::Raw("k".to_owned()));
    assert_eq!(Suffix::from("x").to_string(), "x");
}

#[test]
fn suffix_formatting() {
    assert_eq!(Suffix::Millions.format(2.5), "2.5M");
    assert_eq!(Suffix::Millions.format(0.0), "0.0M");
    assert_eq!(Suffix::Millions.format(1.25), "1.3M");
    assert_eq!(Suffix::Millions.format(0.25), "0.3M");
    assert_eq!(Suffix::Millions.format(12.25), "12.3M");
    assert_eq!(Suffix::Millions.format(-1.25), "-1.3M");
    assert_eq!(Suffix::Millions.format(2.04), "2.0M");
    assert_eq!(Suffix::Percent.format(98.0), "98%");
    assert_eq!(Suffix::Percent.format(97.99), "97%");
    assert_eq!(Suffix::Plus.format(500.0), "500+");
    assert_eq!(Suffix::Raw("k".to_owned()).format(12.7), "12k");
    assert_eq!(Suffix::None.format(7.9), "7");
    assert_eq!(Suffix::None.format(-2.5), "-3");
}

#[test]
fn suffix_never_renders_negative_zero() {
    assert_eq!(Suffix::None.format(-0.0), "0");
    assert_eq!(Suffix::Millions.format(-0.0), "0.0M");
}

#[test]
fn counter_rejects_non_finite_target() {
    for target in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Counter::new(CounterOptions::new(target)).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(_)));
    }
}

#[test]
fn counter_rejects_zero_duration() {
    let err = Counter::new(CounterOptions::new(10.0).with_duration_ms(0)).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn counter_defaults() {
    let c = Counter::new(CounterOptions::new(42.0)).unwrap();
    assert_eq!(c.options().duration_ms, DEFAULT_COUNTER_DURATION_MS);
    assert_eq!(c.options().easing, Easing::EaseOutQuart);
    assert_eq!(c.options().suffix, Suffix::None);
    assert_eq!(c.state(), CounterState::Idle);
}

#[test]
fn counter_converges_to_formatted_target() {
    let cases = [
        (2.5, "M", 2_000, "2.5M"),
        (1.25, "M", 2_000, "1.3M"),
        (98.0, "%", 2_000, "98%"),
        (500.0, "+", 750, "500+"),
        (12.0, "", 1, "12"),
        (-40.0, "", 333, "-40"),
    ];
    for (target, suffix, duration, expected) in cases {
        let mut c = Counter::new(
            CounterOptions::new(target)
                .with_suffix(suffix)
                .with_duration_ms(duration),
        )
        .unwrap();
        assert!(c.start(1_000));
        let frame = c.tick(1_000 + duration).unwrap();
        assert!(frame.done);
        assert_eq!(frame.value, target);
        assert_eq!(frame.text, expected);
        assert_eq!(frame.text, c.final_text());
        assert!(!c.is_animating());
        assert_eq!(c.tick(1_000 + duration + 16), None);
    }
}

#[test]
fn counter_first_frame_starts_at_zero() {
    let mut c = counter(2.5, "M");
    c.start(0);
    let frame = c.tick(0).unwrap();
    assert_eq!(frame.value, 0.0);
    assert_eq!(frame.text, "0.0M");
    assert!(!frame.done);
}

#[test]
fn counter_formats_every_frame() {
    let mut c = counter(98.0, "%");
    c.start(0);
    // Halfway through, ease-out-quart has covered 93.75% of the distance.
    let frame = c.tick(1_000).unwrap();
    assert_eq!(frame.value, 91.875);
    assert_eq!(frame.text, "91%");
}

#[test]
fn counter_values_are_monotonic() {
    for target in [1234.5, -77.0] {
        let mut c = counter(target, "");
        c.start(0);
        let mut last = 0.0;
        let mut now = 0;
        loop {
            let frame = c.tick(now).unwrap();
            if target > 0.0 {
                assert!(frame.value >= last);
            } else {
                assert!(frame.value <= last);
            }
            last = frame.value;
            if frame.done {
                break;
            }
            now += 16;
        }
        assert_eq!(last, target);
    }
}

#[test]
fn counter_start_is_idempotent_while_running() {
    let mut c = counter(100.0, "+");
    assert!(c.start(0));
    assert!(!c.start(5));
    assert_eq!(c.snapshot().start_ms, Some(0));

    // The run still completes on the original schedule, not a restarted one.
    let frame = c.tick(2_000).unwrap();
    assert!(frame.done);
    assert_eq!(frame.text, "100+");
}

#[test]
fn counter_stop_prevents_further_frames() {
    let mut c = counter(100.0, "");
    c.start(0);
    assert!(c.tick(16).is_some());
    c.stop();
    assert!(!c.is_animating());
    assert_eq!(c.tick(32), None);
    assert_eq!(c.tick(5_000), None);
}

#[test]
fn counter_can_run_again_after_completion() {
    let mut c = counter(10.0, "");
    c.start(0);
    assert!(c.tick(2_000).unwrap().done);
    assert!(c.start(3_000));
    let frame = c.tick(3_000).unwrap();
    assert_eq!(frame.text, "0");
}

#[test]
fn counter_ignores_timestamps_before_start() {
    let mut c = counter(10.0, "");
    c.start(1_000);
    let frame = c.tick(900).unwrap();
    assert_eq!(frame.value, 0.0);
    assert!(!frame.done);
}

#[test]
fn carousel_rejects_invalid_configuration() {
    let invalid = [
        CarouselOptions::new(0),
        CarouselOptions::new(3).with_indicator_count(2),
        CarouselOptions::new(3).with_autoplay_interval_ms(0),
        CarouselOptions::new(3).with_swipe_threshold(f64::NAN),
        CarouselOptions::new(3).with_swipe_threshold(-1.0),
    ];
    for options in invalid {
        let err = Carousel::new(options.clone()).unwrap_err();
        assert!(
            matches!(err, Error::InvalidConfiguration(_)),
            "{options:?} -> {err:?}"
        );
    }
}

#[test]
fn carousel_without_indicators_is_valid() {
    let mut c = Carousel::new(CarouselOptions::new(3).with_indicator_count(0)).unwrap();
    let r = c.next();
    assert_eq!(r.indicators().count(), 0);
    assert!(!r.is_indicator_active(1));
    assert_eq!(r.transform(), "translateX(-100%)");
}

#[test]
fn carousel_defaults() {
    let c = carousel(4);
    assert_eq!(c.index(), 0);
    assert_eq!(c.slide_count(), 4);
    assert!(c.is_autoplaying());
    assert_eq!(c.options().autoplay_interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
    assert_eq!(c.options().swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
    assert_eq!(c.render().transform(), "translateX(0%)");
}

#[test]
fn carousel_next_wraps_around() {
    for n in 1..=6 {
        let mut c = carousel(n);
        for _ in 0..n {
            let r = c.next();
            assert_render_consistent(&c, r);
        }
        assert_eq!(c.index(), 0, "n={n}");
    }
}

#[test]
fn carousel_prev_wraps_to_last() {
    let mut c = carousel(5);
    let r = c.prev();
    assert_eq!(c.index(), 4);
    assert_eq!(r.transform(), "translateX(-400%)");
    assert_render_consistent(&c, r);

    let mut single = carousel(1);
    single.prev();
    assert_eq!(single.index(), 0);
}

#[test]
fn carousel_go_to_validates_index() {
    let mut c = carousel(3);
    let r = c.go_to(2).unwrap();
    assert_render_consistent(&c, r);

    let err = c.go_to(3).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(c.index(), 2);
    assert_eq!(err.to_string(), "slide index 3 out of range for 3 slides");
}

#[test]
fn carousel_handle_routes_events() {
    let mut c = carousel(3);
    assert_eq!(c.handle(CarouselEvent::Next).unwrap().unwrap().index, 1);
    assert_eq!(c.handle(CarouselEvent::Prev).unwrap().unwrap().index, 0);
    assert_eq!(c.handle(CarouselEvent::GoTo(2)).unwrap().unwrap().index, 2);
    assert!(c.handle(CarouselEvent::GoTo(7)).is_err());

    assert_eq!(c.handle(CarouselEvent::PointerEnter).unwrap(), None);
    assert_eq!(c.autoplay(), AutoPlay::Paused);
    assert_eq!(c.handle(CarouselEvent::AutoPlayTick).unwrap(), None);
    assert_eq!(c.index(), 2);

    assert_eq!(c.handle(CarouselEvent::PointerLeave).unwrap(), None);
    assert_eq!(c.autoplay(), AutoPlay::Playing);
    assert_eq!(c.handle(CarouselEvent::AutoPlayTick).unwrap().unwrap().index, 0);
}

#[test]
fn carousel_paused_ticks_never_move() {
    let mut c = carousel(3);
    c.start_autoplay_timer(0);
    c.pause_autoplay();
    for i in 1..=20 {
        assert_eq!(c.tick(i * 5_000), None);
    }
    assert_eq!(c.index(), 0);
}

#[test]
fn carousel_timer_fires_every_interval() {
    let mut c = carousel(4);
    assert_eq!(c.tick(10_000), None, "timer not started");

    c.start_autoplay_timer(1_000);
    assert!(c.is_timer_running());
    assert_eq!(c.tick(5_999), None);
    assert_eq!(c.tick(6_000).unwrap().index, 1);
    assert_eq!(c.tick(6_500), None);

    // Two periods elapsed in one call: two ticks.
    assert_eq!(c.tick(16_000).unwrap().index, 3);

    c.stop_autoplay_timer();
    assert_eq!(c.tick(60_000), None);
    assert_eq!(c.index(), 3);
}

#[test]
fn carousel_timer_consumes_paused_periods() {
    let mut c = carousel(3);
    c.start_autoplay_timer(0);
    c.pause_autoplay();
    assert_eq!(c.tick(5_000), None);
    c.resume_autoplay();
    // The 5000ms tick already fired while paused; the next one is due at 10000ms.
    assert_eq!(c.tick(9_999), None);
    assert_eq!(c.tick(10_000).unwrap().index, 1);
}

#[test]
fn carousel_timer_catches_up_in_one_step() {
    let mut c = carousel(3);
    c.start_autoplay_timer(0);
    // 1_000_000_001 elapsed periods: 1_000_000_001 % 3 == 2 slides forward.
    let now = 5_000 * 1_000_000_001;
    assert_eq!(c.tick(now).unwrap().index, 2);
    assert_eq!(c.tick(now + 4_999), None);
    assert_eq!(c.tick(now + 5_000).unwrap().index, 0);
}

#[test]
fn carousel_timer_with_wall_clock_timestamps() {
    let mut c = carousel(4);
    c.start_autoplay_timer(0);
    c.pause_autoplay();
    // An epoch-millisecond clock after a zero epoch must not stall.
    assert_eq!(c.tick(1_760_000_000_000), None);
    c.resume_autoplay();
    assert_eq!(c.tick(1_760_000_000_000), None);
    assert_eq!(c.tick(1_760_000_005_000).unwrap().index, 1);
}

#[test]
fn carousel_custom_interval() {
    let mut c = Carousel::new(CarouselOptions::new(3).with_autoplay_interval_ms(100)).unwrap();
    c.start_autoplay_timer(0);
    assert_eq!(c.tick(100).unwrap().index, 1);
}

#[test]
fn carousel_autoplay_can_start_paused() {
    let c = Carousel::new(CarouselOptions::new(3).with_autoplay(AutoPlay::Paused)).unwrap();
    assert!(!c.is_autoplaying());
}

fn swipe(c: &mut Carousel, from: f64, to: f64) -> Option<CarouselRender> {
    c.handle(CarouselEvent::TouchStart { x: from }).unwrap();
    c.handle(CarouselEvent::TouchMove { x: to }).unwrap();
    c.handle(CarouselEvent::TouchEnd).unwrap()
}

#[test]
fn swipe_below_threshold_does_nothing() {
    let mut c = carousel(3);
    assert_eq!(swipe(&mut c, 200.0, 151.0), None);
    assert_eq!(swipe(&mut c, 151.0, 200.0), None);
    assert_eq!(swipe(&mut c, 200.0, 150.0), None, "threshold is exclusive");
    assert_eq!(c.index(), 0);
}

#[test]
fn swipe_above_threshold_moves_once_in_drag_direction() {
    let mut c = carousel(3);
    // Finger moves left: diff > 0 -> next.
    let r = swipe(&mut c, 200.0, 149.0).unwrap();
    assert_eq!(r.index, 1);
    assert_render_consistent(&c, r);

    // Finger moves right: diff < 0 -> prev.
    let r = swipe(&mut c, 149.0, 200.0).unwrap();
    assert_eq!(r.index, 0);
}

#[test]
fn swipe_uses_last_move_position() {
    let mut c = carousel(3);
    c.touch_start(300.0);
    c.touch_move(100.0);
    c.touch_move(280.0);
    assert_eq!(c.touch_end(), None);
}

#[test]
fn tap_without_move_never_swipes() {
    let mut c = carousel(3);
    // An earlier gesture leaves no trace behind.
    swipe(&mut c, 500.0, 0.0);
    assert_eq!(c.index(), 1);
    c.touch_start(400.0);
    assert_eq!(c.touch_end(), None);
    assert_eq!(c.index(), 1);
}

#[test]
fn gesture_pauses_and_resumes_autoplay() {
    let mut c = carousel(3);
    c.touch_start(10.0);
    assert!(!c.is_autoplaying());
    assert!(c.snapshot().is_dragging);
    c.touch_move(12.0);
    assert_eq!(c.touch_end(), None);
    assert!(c.is_autoplaying());
    assert!(c.gesture().is_none());
}

#[test]
fn touch_move_and_end_without_start_are_ignored() {
    let mut c = carousel(3);
    c.touch_move(500.0);
    assert!(c.gesture().is_none());
    c.pause_autoplay();
    assert_eq!(c.touch_end(), None);
    // No gesture was active, so autoplay stays paused.
    assert!(!c.is_autoplaying());
}

#[test]
fn render_is_consistent_after_every_transition() {
    let mut c = carousel(4);
    c.start_autoplay_timer(0);
    let events = [
        CarouselEvent::Next,
        CarouselEvent::GoTo(3),
        CarouselEvent::Next,
        CarouselEvent::Prev,
        CarouselEvent::Prev,
        CarouselEvent::AutoPlayTick,
        CarouselEvent::GoTo(0),
    ];
    for event in events {
        if let Some(r) = c.handle(event).unwrap() {
            assert_render_consistent(&c, r);
        }
    }
    let r = c.tick(5_000).unwrap();
    assert_render_consistent(&c, r);
}

#[test]
fn carousel_snapshot() {
    let mut c = carousel(3);
    c.next();
    c.pause_autoplay();
    assert_eq!(
        c.snapshot(),
        CarouselSnapshot {
            index: 1,
            slide_count: 3,
            autoplay: AutoPlay::Paused,
            is_dragging: false,
        }
    );
}
