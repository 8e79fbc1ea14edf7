use pagefx_core::clock::{drive, AnimationState, FrameDriven, FrameStatus, ManualClock};
use pagefx_core::counter::{displayed_value, parse_goal, EasedCounter};
use std::cell::RefCell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Goal parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_goal_coercions() {
    assert_eq!(parse_goal(Some("200")), 200);
    assert_eq!(parse_goal(Some("  42 ")), 42);
    assert_eq!(parse_goal(Some("12.9")), 12);
    assert_eq!(parse_goal(Some("1e3")), 1000);
    assert_eq!(parse_goal(None), 0);
    assert_eq!(parse_goal(Some("")), 0);
    assert_eq!(parse_goal(Some("abc")), 0);
    assert_eq!(parse_goal(Some("-5")), 0);
    assert_eq!(parse_goal(Some("NaN")), 0);
    assert_eq!(parse_goal(Some("inf")), 0);
}

// ---------------------------------------------------------------------------
// Easing curve
// ---------------------------------------------------------------------------

#[test]
fn test_value_endpoints() {
    assert_eq!(displayed_value(200, 0.0, 1100.0), 0);
    assert_eq!(displayed_value(200, 1100.0, 1100.0), 200);
    assert_eq!(displayed_value(200, 5000.0, 1100.0), 200);
}

#[test]
fn test_values_non_decreasing_and_bounded() {
    for goal in [1u64, 7, 200, 1000, 123_456] {
        let mut prev = 0;
        for ms in 0..=1100 {
            let v = displayed_value(goal, ms as f64, 1100.0);
            assert!(v >= prev, "goal {goal}: {v} < {prev} at {ms}ms");
            assert!(v <= goal, "goal {goal}: {v} overshoots at {ms}ms");
            prev = v;
        }
        assert_eq!(prev, goal);
    }
}

#[test]
fn test_values_match_double_precision_curve() {
    let duration = 1100.0;
    for goal in [200u64, 12_345, 5_000_000] {
        for step in 0..11_000u32 {
            let elapsed = step as f64 * 0.1;
            let t = elapsed / duration;
            let inv = 1.0 - t;
            let expected = (goal as f64 * (1.0 - inv * inv * inv)).floor() as u64;
            assert_eq!(
                displayed_value(goal, elapsed, duration),
                expected,
                "goal {goal} at {elapsed:.1}ms"
            );
        }
    }
}

#[test]
fn test_ease_out_is_ahead_of_linear() {
    // Halfway through, ease-out cubic has covered 87.5%.
    assert_eq!(displayed_value(200, 550.0, 1100.0), 175);
}

// ---------------------------------------------------------------------------
// Animation lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_counter_state_machine() {
    let text = Rc::new(RefCell::new(String::new()));
    let mut counter = EasedCounter::new(200, 1100.0, text.clone());
    assert_eq!(counter.state(), AnimationState::Idle);

    assert_eq!(counter.frame(1000.0), FrameStatus::Continue);
    assert_eq!(counter.state(), AnimationState::Running { start_ms: 1000.0 });
    assert_eq!(*text.borrow(), "0");

    assert_eq!(counter.frame(1550.0), FrameStatus::Continue);
    assert_eq!(*text.borrow(), "175");

    assert_eq!(counter.frame(2100.0), FrameStatus::Done);
    assert_eq!(counter.state(), AnimationState::Done);
    assert_eq!(*text.borrow(), "200");

    // Done is terminal.
    text.borrow_mut().clear();
    assert_eq!(counter.frame(9000.0), FrameStatus::Done);
    assert_eq!(*text.borrow(), "", "a finished counter never renders again");
}

#[test]
fn test_counter_driven_by_clock_terminates() {
    let clock = ManualClock::new();
    let text = Rc::new(RefCell::new(String::new()));
    let counter = Rc::new(RefCell::new(EasedCounter::new(200, 1100.0, text.clone())));
    drive(clock.clone(), counter.clone());

    let mut shown = Vec::new();
    let mut now = 500.0;
    while clock.pending() > 0 {
        clock.advance_to(now);
        shown.push(text.borrow().parse::<u64>().unwrap());
        now += 16.7;
        assert!(now < 5000.0, "counter never finished");
    }

    assert_eq!(shown.first(), Some(&0));
    assert_eq!(shown.last(), Some(&200));
    assert!(shown.windows(2).all(|w| w[0] <= w[1]), "displayed values went backwards");
    assert_eq!(counter.borrow().state(), AnimationState::Done);
}

#[test]
fn test_coalesced_frames_jump_straight_to_goal() {
    let text = Rc::new(RefCell::new(String::new()));
    let mut counter = EasedCounter::new(37, 1100.0, text.clone());
    counter.frame(0.0);
    // Tab was hidden; next frame arrives seconds later.
    assert_eq!(counter.frame(4000.0), FrameStatus::Done);
    assert_eq!(*text.borrow(), "37");
}

#[test]
fn test_zero_goal_counts_to_zero() {
    let text = Rc::new(RefCell::new(String::new()));
    let mut counter = EasedCounter::new(parse_goal(Some("n/a")), 1100.0, text.clone());
    counter.frame(0.0);
    counter.frame(1100.0);
    assert_eq!(*text.borrow(), "0");
    assert_eq!(counter.goal(), 0);
}
