//! Tests for counter parsing and animation.
//!
//! Verifies round-tripping of authored stat texts through a full animation
//! run, progress monotonicity, and malformed-input degradation.

use super::{COUNTER_DURATION_MS, CounterAnimation, CounterParseError, CounterTarget};

fn target(text: &str) -> CounterTarget {
    CounterTarget::parse(text).unwrap()
}

/// Run a full animation at a 100ms frame cadence, returning every frame text.
fn run_to_completion(anim: &mut CounterAnimation) -> Vec<String> {
    let mut texts = Vec::new();
    let mut now = 0.0;
    loop {
        let frame = anim.frame(now);
        let done = frame.done;
        texts.push(frame.text);
        if done {
            return texts;
        }
        now += 100.0;
    }
}

#[test]
fn test_parse_plain_plus() {
    let t = target("500+");
    assert_eq!(t.value, 500.0);
    assert!(t.plus);
    assert!(!t.percent);
    assert!(!t.thousands);
}

#[test]
fn test_parse_percent() {
    let t = target("98%");
    assert_eq!(t.value, 98.0);
    assert!(t.percent);
    assert!(!t.plus);
}

#[test]
fn test_parse_thousands_scales_value() {
    let t = target("5K+");
    assert_eq!(t.value, 5000.0);
    assert!(t.thousands);
    assert!(t.plus);
}

#[test]
fn test_parse_no_digits_is_zero() {
    let t = target("hello");
    assert_eq!(t.value, 0.0);
    assert_eq!(t.final_text(), "0");
}

#[test]
fn test_parse_bad_number_is_error() {
    assert_eq!(
        CounterTarget::parse("1.2.3"),
        Err(CounterParseError::BadNumber("1.2.3".to_string()))
    );
}

#[test]
fn test_parse_or_zero_degrades() {
    let t = CounterTarget::parse_or_zero("1.2.3%");
    assert_eq!(t.value, 0.0);
    assert!(t.percent);
    assert_eq!(t.final_text(), "0%");
}

#[test]
fn test_round_trip_plain() {
    let mut anim = CounterAnimation::new(target("500+"));
    let texts = run_to_completion(&mut anim);
    assert_eq!(texts.last().unwrap(), "500+");
}

#[test]
fn test_round_trip_percent() {
    let mut anim = CounterAnimation::new(target("98%"));
    let texts = run_to_completion(&mut anim);
    assert_eq!(texts.last().unwrap(), "98%");
}

#[test]
fn test_round_trip_thousands() {
    let mut anim = CounterAnimation::new(target("5K+"));
    let texts = run_to_completion(&mut anim);
    assert_eq!(texts.last().unwrap(), "5K+");
}

#[test]
fn test_first_frame_starts_at_zero() {
    let mut anim = CounterAnimation::new(target("500+"));
    let frame = anim.frame(1234.5);
    assert_eq!(frame.progress, 0.0);
    assert_eq!(frame.text, "0+");
}

#[test]
fn test_progress_is_monotone() {
    let mut anim = CounterAnimation::new(target("98%"));
    // Deliberately jittered timestamps, including one stale step back
    let times = [0.0, 100.0, 90.0, 400.0, 399.0, 1500.0, 2600.0];
    let mut last = 0.0;
    for now in times {
        let frame = anim.frame(now);
        assert!(frame.progress >= last, "progress regressed at t={now}");
        last = frame.progress;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn test_done_fires_on_terminal_frame() {
    let mut anim = CounterAnimation::new(target("500+"));
    anim.frame(0.0);
    let mid = anim.frame(COUNTER_DURATION_MS / 2.0);
    assert!(!mid.done);
    assert!(!anim.is_finished());
    let end = anim.frame(COUNTER_DURATION_MS);
    assert!(end.done);
    assert_eq!(end.progress, 1.0);
    assert!(anim.is_finished());
}

#[test]
fn test_midpoint_interpolation() {
    let mut anim = CounterAnimation::new(target("500+"));
    anim.frame(0.0);
    let mid = anim.frame(COUNTER_DURATION_MS / 2.0);
    assert_eq!(mid.text, "250+");
}

#[test]
fn test_restart_uses_stored_target() {
    // Two runs from the same parsed record: no drift between passes
    let t = target("5K+");
    let first = run_to_completion(&mut CounterAnimation::new(t.clone()));
    let second = run_to_completion(&mut CounterAnimation::new(t));
    assert_eq!(first.last(), second.last());
    assert_eq!(second.first().unwrap(), "0K+");
}

#[test]
fn test_zero_target_animates_zero() {
    let mut anim = CounterAnimation::new(target(""));
    let texts = run_to_completion(&mut anim);
    assert_eq!(texts.first().unwrap(), "0");
    assert_eq!(texts.last().unwrap(), "0");
}

#[test]
fn test_zero_duration_finishes_immediately() {
    let mut anim = CounterAnimation::with_duration(target("98%"), 0.0);
    let frame = anim.frame(777.0);
    assert!(frame.done);
    assert_eq!(frame.text, "98%");
}
