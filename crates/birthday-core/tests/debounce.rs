use birthday_core::{Debouncer, ManualClock};

#[test]
fn fires_latest_arguments_after_quiet_period() {
    let clock = ManualClock::new(0);
    let mut debouncer =
        Debouncer::with_clock(|query: &str| query.len(), 1_000.0, clock.clone()).unwrap();

    debouncer.call("Foo");
    clock.set(200);
    debouncer.call("Barbaz");
    clock.set(1_100);
    assert_eq!(debouncer.poll(), None::<usize>);
    clock.set(1_200);
    assert_eq!(debouncer.poll(), Some(6));
    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(), None::<usize>);
}

#[test]
fn cancel_discards_pending_call() {
    let clock = ManualClock::new(0);
    let mut fired = 0;
    let mut debouncer = Debouncer::with_clock(|()| fired += 1, 10.0, clock.clone()).unwrap();
    debouncer.call(());
    assert_eq!(debouncer.cancel(), Some(()));
    clock.advance(50);
    assert_eq!(debouncer.poll(), None);
    drop(debouncer);
    assert_eq!(fired, 0);
}

#[test]
fn negative_delay_is_rejected() {
    assert!(Debouncer::<_, ()>::new(|()| (), -5.0).is_err());
}

#[test]
fn debug_shows_pending_timestamp() {
    let clock = ManualClock::new(42);
    let mut debouncer = Debouncer::with_clock(|n: u8| n, 10.0, clock).unwrap();
    assert!(format!("{debouncer:?}").contains("pending_since: None"));

    debouncer.call(1);
    let shown = format!("{debouncer:?}");
    assert!(shown.starts_with("Debouncer"));
    assert!(shown.contains("pending_since: Some(42)"));
}
