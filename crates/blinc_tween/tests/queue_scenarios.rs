//! Integration tests for the tween queue
//!
//! These tests verify that:
//! - Tweens land exactly on their end values and leave the queue
//! - The frame loop starts on demand and does no work while idle
//! - Independent targets and independent queues do not interfere
//! - Lenient inputs (unknown easing names, zero durations) behave predictably

use blinc_tween::{
    AnimationQueue, Easing, EndPoints, ManualClock, ManualFrames, MemoryStore, Property,
    PropertyStore, StyleValue, TweenError,
};

type Queue = AnimationQueue<&'static str, ManualFrames, ManualClock>;

fn new_queue() -> Queue {
    AnimationQueue::new(ManualFrames::new(), ManualClock::new(0.0))
}

/// Fire the pending frame `step_ms` after the previous one
fn frame(queue: &mut Queue, store: &mut MemoryStore<&'static str>, step_ms: f64) -> bool {
    queue.clock_mut().advance(step_ms);
    queue.on_frame(store).unwrap()
}

/// Test that a linear tween from 0 to 100 over 100ms ends exactly at 100
#[test]
fn test_linear_left_scenario() {
    let mut store = MemoryStore::new().with("element_a", Property::Left, 0.0);
    let mut queue = new_queue();

    queue
        .animate(
            &mut store,
            "element_a",
            [(Property::Left, 100.0)],
            100,
            "linear",
        )
        .unwrap();
    assert_eq!(queue.active_count(), 1);

    // Simulate a 60fps host until past the duration
    let mut frames = 0;
    while queue.is_running() {
        frame(&mut queue, &mut store, 16.0);
        frames += 1;
    }

    assert_eq!(frames, 7);
    assert_eq!(store.value(&"element_a", Property::Left), Some(100.0));
    assert_eq!(store.raw(&"element_a", Property::Left), Some("100px"));
    assert_eq!(queue.active_count(), 0);

    // Trajectory is monotonic and never overshoots
    let history = store.history(&"element_a", Property::Left);
    assert!(history.windows(2).all(|w| w[0] <= w[1]));
    assert!(history.iter().all(|v| (0.0..=100.0).contains(v)));
}

/// Test that two targets animate independently and the loop waits for both
#[test]
fn test_two_targets_share_one_loop() {
    let mut store = MemoryStore::new()
        .with("a", Property::Left, 0.0)
        .with("b", Property::Top, 200.0)
        .with("b", Property::Opacity, 1.0);
    let mut queue = new_queue();

    let short = queue
        .animate(&mut store, "a", [(Property::Left, 30.0)], 40, "easeIn")
        .unwrap();
    let long = queue
        .animate(
            &mut store,
            "b",
            EndPoints::new()
                .with(Property::Top, 50.0)
                .with(Property::Opacity, 0.0),
            100,
            "easeOut",
        )
        .unwrap();
    assert_eq!(queue.scheduler().requested_count(), 1);

    // 0 -> 50ms: the short tween finishes, the long one is halfway
    assert!(frame(&mut queue, &mut store, 50.0));
    assert!(!queue.is_animating(short));
    assert!(queue.is_animating(long));
    assert_eq!(store.value(&"a", Property::Left), Some(30.0));
    // easeOut at 50%: 200 + -150 * 0.75
    assert_eq!(store.value(&"b", Property::Top), Some(87.5));
    assert_eq!(store.value(&"b", Property::Opacity), Some(0.25));

    // 50 -> 100ms: everything done, loop released
    assert!(!frame(&mut queue, &mut store, 50.0));
    assert!(!queue.is_running());
    assert_eq!(store.value(&"b", Property::Top), Some(50.0));
    assert_eq!(store.value(&"b", Property::Opacity), Some(0.0));
    assert_eq!(queue.active_count(), 0);
}

/// Test that an unknown easing name interpolates exactly like linear
#[test]
fn test_unknown_easing_matches_linear() {
    let mut store = MemoryStore::new()
        .with("bounce", Property::Width, 10.0)
        .with("linear", Property::Width, 10.0);
    let mut queue = new_queue();

    let bounce = queue
        .animate(&mut store, "bounce", [(Property::Width, 90.0)], 200, "bounce")
        .unwrap();
    queue
        .animate(&mut store, "linear", [(Property::Width, 90.0)], 200, Easing::Linear)
        .unwrap();
    assert_eq!(queue.get(bounce).map(|r| r.easing()), Some(Easing::Linear));

    // Two interior samples: 25% and 75%
    frame(&mut queue, &mut store, 50.0);
    assert_eq!(store.value(&"bounce", Property::Width), Some(30.0));
    assert_eq!(
        store.value(&"bounce", Property::Width),
        store.value(&"linear", Property::Width)
    );

    frame(&mut queue, &mut store, 100.0);
    assert_eq!(store.value(&"bounce", Property::Width), Some(70.0));
    assert_eq!(
        store.history(&"bounce", Property::Width),
        store.history(&"linear", Property::Width)
    );
}

/// Test that a zero-duration tween commits its end value on the first tick
#[test]
fn test_zero_duration_policy() {
    let mut store = MemoryStore::new().with("a", Property::Height, 12.0);
    let mut queue = new_queue();

    let id = queue
        .animate(&mut store, "a", [(Property::Height, 48.0)], 0, "easeOut")
        .unwrap();
    // Submitted like any other tween
    assert!(queue.is_running());
    assert!(queue.is_animating(id));

    // No time needs to pass
    assert!(!frame(&mut queue, &mut store, 0.0));
    assert_eq!(store.history(&"a", Property::Height), vec![12.0, 48.0]);
    assert_eq!(queue.tick_count(), 1);
    assert!(queue.is_idle());
}

/// Test that dropped frames do not change when a tween ends
#[test]
fn test_dropped_frames_keep_wall_clock_duration() {
    let mut store = MemoryStore::new().with("a", Property::Left, 0.0);
    let mut queue = new_queue();
    queue
        .animate(&mut store, "a", [(Property::Left, 10.0)], 100, "linear")
        .unwrap();

    // One long stall covers the whole duration
    assert!(!frame(&mut queue, &mut store, 250.0));
    assert_eq!(store.value(&"a", Property::Left), Some(10.0));
    assert_eq!(queue.tick_count(), 1);
}

/// Test that the loop restarts after going idle
#[test]
fn test_loop_restarts_after_idle() {
    let mut store = MemoryStore::new().with("a", Property::Left, 0.0);
    let mut queue = new_queue();

    queue
        .animate(&mut store, "a", [(Property::Left, 10.0)], 10, "linear")
        .unwrap();
    assert!(!frame(&mut queue, &mut store, 10.0));
    assert_eq!(queue.scheduler().requested_count(), 1);

    // Idle stretch: no requests, no ticks
    queue.clock_mut().advance(500.0);
    assert!(!queue.on_frame(&mut store).unwrap());
    assert_eq!(queue.tick_count(), 1);

    queue
        .animate(&mut store, "a", [(Property::Left, 0.0)], 10, "linear")
        .unwrap();
    assert_eq!(queue.scheduler().requested_count(), 2);
    assert!(!frame(&mut queue, &mut store, 10.0));
    assert_eq!(store.value(&"a", Property::Left), Some(0.0));
}

/// Test that separate queues keep separate loops and active sets
#[test]
fn test_queues_are_isolated() {
    let mut store = MemoryStore::new()
        .with("a", Property::Left, 0.0)
        .with("b", Property::Left, 0.0);
    let mut first = new_queue();
    let mut second = new_queue();

    first
        .animate(&mut store, "a", [(Property::Left, 10.0)], 10, "linear")
        .unwrap();
    second
        .animate(&mut store, "b", [(Property::Left, 10.0)], 1_000, "linear")
        .unwrap();

    assert!(!frame(&mut first, &mut store, 10.0));
    assert!(second.is_running());
    assert_eq!(second.active_count(), 1);
    assert_eq!(store.value(&"b", Property::Left), Some(0.0));

    second.stop();
    assert!(!second.is_running());
    assert_eq!(first.scheduler().cancelled_count(), 0);
    assert_eq!(second.scheduler().cancelled_count(), 1);
}

/// Test loosely typed end points parsed from CSS-like strings
#[test]
fn test_parsed_end_points() {
    let mut store = MemoryStore::new();
    store.set_raw("a", Property::MarginLeft, "8px");
    store.set_raw("a", Property::FontSize, "16px");
    let mut queue = new_queue();

    let points = EndPoints::parse([("marginLeft", "24px"), ("font-size", "20")]).unwrap();
    queue
        .animate(&mut store, "a", points, 40, Some("easeIn"))
        .unwrap();

    assert!(frame(&mut queue, &mut store, 20.0));
    // easeIn at 50%: start + delta / 4
    assert_eq!(store.value(&"a", Property::MarginLeft), Some(12.0));
    assert_eq!(store.value(&"a", Property::FontSize), Some(17.0));

    assert!(!frame(&mut queue, &mut store, 20.0));
    assert_eq!(store.raw(&"a", Property::MarginLeft), Some("24px"));
    assert_eq!(store.raw(&"a", Property::FontSize), Some("20px"));
}

/// Store that rejects writes once its budget is spent
struct BudgetStore {
    inner: MemoryStore<&'static str>,
    writes_left: usize,
}

impl PropertyStore<&'static str> for BudgetStore {
    fn read(&self, target: &&'static str, property: Property) -> blinc_tween::Result<String> {
        self.inner.read(target, property)
    }

    fn write(
        &mut self,
        target: &&'static str,
        property: Property,
        value: StyleValue,
    ) -> blinc_tween::Result<()> {
        if self.writes_left == 0 {
            return Err(TweenError::Write {
                property,
                reason: "detached".to_string(),
            });
        }
        self.writes_left -= 1;
        self.inner.write(target, property, value)
    }
}

/// Test that a write failing partway through pinning queues nothing
#[test]
fn test_pin_failure_keeps_earlier_pins_and_queues_nothing() {
    let mut inner = MemoryStore::new();
    inner.set_raw("a", Property::Left, "5.5px");
    inner.set_raw("a", Property::Top, "7px");
    let mut store = BudgetStore {
        inner,
        writes_left: 1,
    };
    let mut queue = new_queue();

    let result = queue.animate(
        &mut store,
        "a",
        EndPoints::new()
            .with(Property::Left, 50.0)
            .with(Property::Top, 70.0),
        100,
        "linear",
    );

    assert!(matches!(
        result,
        Err(TweenError::Write {
            property: Property::Top,
            ..
        })
    ));
    assert!(queue.is_idle());
    assert!(!queue.is_running());
    assert_eq!(queue.scheduler().requested_count(), 0);

    // First property was pinned to its own current value, second untouched
    assert_eq!(store.inner.history(&"a", Property::Left), vec![5.5]);
    assert_eq!(store.inner.raw(&"a", Property::Left), Some("5.5px"));
    assert!(store.inner.history(&"a", Property::Top).is_empty());
    assert_eq!(store.inner.raw(&"a", Property::Top), Some("7px"));
}

/// Test that a default queue driven to idle leaves no frame outstanding
#[test]
fn test_default_queue_runs_to_idle_without_pending_frame() {
    let mut store = MemoryStore::new().with("a", Property::Width, 0.0);
    let mut queue: AnimationQueue<&'static str> = AnimationQueue::default();

    queue
        .animate(&mut store, "a", [(Property::Width, 12.0)], 5, "easeIn")
        .unwrap();
    assert!(queue.scheduler().is_pending());

    let ticks = blinc_tween::run_until_idle(&mut queue, &mut store).unwrap();

    assert!(ticks >= 1);
    assert!(!queue.is_running());
    assert!(!queue.scheduler().is_pending());
    assert_eq!(queue.scheduler().cancelled_count(), 0);
    assert_eq!(store.value(&"a", Property::Width), Some(12.0));
}
