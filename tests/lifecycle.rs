use std::{cell::Cell, rc::Rc, time::Duration};
use wrappy::{cancelable, expirify, expirify_with, once, time::ManualClock};

#[test]
fn expirify_rejects_a_zero_timeout() {
    let result = expirify(|(): ()| (), Duration::ZERO);
    assert!(matches!(result, Err(wrappy::InvalidTimeout)));
}

#[test]
fn expirify_forwards_before_the_deadline_and_expires_at_it() {
    let clock = ManualClock::new();
    let mut double =
        expirify_with(|n: u32| n * 2, Duration::from_millis(50), clock.clone())
            .expect("positive timeout");

    assert_eq!(double.call(4), Some(8));

    clock.advance(Duration::from_millis(49));
    assert!(double.is_active());
    assert_eq!(double.call(5), Some(10));

    clock.advance(Duration::from_millis(1));
    assert!(!double.is_active());
    assert_eq!(double.call(6), None);

    clock.advance(Duration::from_millis(100));
    assert_eq!(double.call(7), None);
}

#[test]
fn expirify_expires_even_if_never_called_while_active() {
    let clock = ManualClock::new();
    let mut greet = expirify_with(
        |name: &str| format!("hello, {}", name),
        Duration::from_millis(10),
        clock.clone(),
    )
    .expect("positive timeout");

    clock.advance(Duration::from_millis(10));

    assert_eq!(greet.call("nobody"), None);
}

#[test]
fn expirify_releases_the_held_function_on_expiry() {
    struct SetOnDrop(Rc<Cell<bool>>);

    impl Drop for SetOnDrop {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    let dropped = Rc::new(Cell::new(false));
    let guard = SetOnDrop(dropped.clone());
    let clock = ManualClock::new();
    let mut wrapped = expirify_with(
        move |(): ()| {
            let _ = &guard;
        },
        Duration::from_millis(10),
        clock.clone(),
    )
    .expect("positive timeout");

    clock.advance(Duration::from_millis(10));
    assert!(!dropped.get());

    assert_eq!(wrapped.call(()), None);
    assert!(dropped.get());
}

#[test]
fn cancelable_forwards_until_canceled() {
    let mut shout = cancelable(|name: &str| format!("{}!", name));

    assert_eq!(shout.call("hey").as_deref(), Some("hey!"));
    assert!(!shout.is_canceled());

    shout.cancel();

    assert!(shout.is_canceled());
    assert_eq!(shout.call("still there?"), None);
}

#[test]
fn cancel_is_idempotent() {
    let calls = Cell::new(0);
    let mut counter = cancelable(|(): ()| calls.set(calls.get() + 1));

    counter.cancel();
    counter.cancel();

    assert!(counter.is_canceled());
    assert_eq!(counter.call(()), None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn once_forwards_exactly_one_call() {
    let invocations = Cell::new(0u32);
    let mut add = once(|(a, b): (i32, i32)| {
        invocations.set(invocations.get() + 1);
        a + b
    });

    assert_eq!(add.call((2, 3)), Some(5));
    assert!(add.is_spent());
    assert_eq!(add.call((10, 10)), None);
    assert_eq!(invocations.get(), 1);
}

#[test]
fn once_accepts_a_consuming_function() {
    let message = String::from("spent");
    let mut take = once(move |(): ()| message);

    assert_eq!(take.call(()).as_deref(), Some("spent"));
    assert_eq!(take.call(()), None);
}
