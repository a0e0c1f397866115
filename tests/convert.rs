use futures::executor::block_on;
use std::cell::Cell;
use wrappy::{
    asyncify, callback::Callback, callback::Failure, callbackify, promisify,
    promisify_sync,
};

#[test]
fn asyncify_reports_success_through_the_callback() {
    let mut add = asyncify(|(a, b): (i32, i32)| Ok::<_, String>(a + b));
    let entered = Cell::new(0);

    add.call((5, 7), |outcome| {
        entered.set(entered.get() + 1);
        assert_eq!(outcome.unwrap(), 12);
    });

    assert_eq!(entered.get(), 1);
}

#[test]
fn asyncify_routes_error_values_into_the_callback() {
    let mut failing = asyncify(|(): ()| Err::<i32, _>("boom"));
    let mut seen = None;

    failing.call((), |outcome| seen = Some(outcome));

    match seen.expect("callback not entered") {
        Err(Failure::Rejected(message)) => assert_eq!(message, "boom"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn asyncify_contains_a_panic_of_the_wrapped_function() {
    let mut exploding =
        asyncify(|(): ()| -> Result<i32, String> { panic!("blew up") });
    let mut seen = None;

    exploding.call((), |outcome| seen = Some(outcome));

    assert!(matches!(seen, Some(Err(Failure::Panicked(_)))));
}

#[test]
fn promisify_resolves_with_the_callback_datum() {
    let mut add = promisify(|(a, b): (i32, i32), cb: Callback<i32, String>| {
        cb.succeed(a + b);
    });

    let sum = block_on(add.call((5, 7)));

    assert_eq!(sum.unwrap(), 12);
}

#[test]
fn promisify_rejects_with_the_callback_error() {
    let mut failing = promisify(|(): (), cb: Callback<i32, &str>| {
        cb.fail("not a number");
    });

    match block_on(failing.call(())) {
        Err(Failure::Rejected(message)) => assert_eq!(message, "not a number"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn promisify_reports_a_discarded_completion_handle() {
    let mut silent = promisify(|(): (), cb: Callback<i32, String>| drop(cb));

    assert!(matches!(block_on(silent.call(())), Err(Failure::Dropped)));
}

#[test]
fn promisify_contains_a_panic_before_settlement() {
    let mut exploding =
        promisify(|(): (), _cb: Callback<i32, String>| panic!("early"));

    assert!(matches!(
        block_on(exploding.call(())),
        Err(Failure::Panicked(_))
    ));
}

#[test]
fn promisify_settlement_survives_a_later_panic() {
    let mut eager = promisify(|(): (), cb: Callback<i32, String>| {
        cb.succeed(1);
        panic!("after settling");
    });

    assert_eq!(block_on(eager.call(())).unwrap(), 1);
}

#[test]
fn promisify_sync_resolves_with_the_returned_value() {
    let mut add = promisify_sync(|(a, b): (i32, i32)| Ok::<_, String>(a + b));

    assert_eq!(block_on(add.call((5, 7))).unwrap(), 12);
}

#[test]
fn promisify_sync_rejects_with_a_returned_error_value() {
    let mut failing = promisify_sync(|(): ()| Err::<i32, _>("sentinel"));

    match block_on(failing.call(())) {
        Err(Failure::Rejected(message)) => assert_eq!(message, "sentinel"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn promisify_sync_contains_a_panic() {
    let mut exploding =
        promisify_sync(|(): ()| -> Result<i32, String> { panic!("thrown") });

    assert!(matches!(
        block_on(exploding.call(())),
        Err(Failure::Panicked(_))
    ));
}

#[test]
fn callbackify_delivers_the_resolution_to_the_callback() {
    let mut add = callbackify(|(a, b): (i32, i32)| async move {
        Ok::<_, String>(a + b)
    });
    let mut seen = None;

    block_on(add.call((2, 3), |outcome| seen = Some(outcome)));

    assert_eq!(seen.expect("callback not entered").unwrap(), 5);
}

#[test]
fn callbackify_delivers_the_rejection_to_the_callback() {
    let mut failing =
        callbackify(|(): ()| async { Err::<i32, _>("rejected") });
    let mut seen = None;

    block_on(failing.call((), |outcome| seen = Some(outcome)));

    match seen.expect("callback not entered") {
        Err(Failure::Rejected(message)) => assert_eq!(message, "rejected"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn callbackify_contains_a_panic_inside_the_future() {
    let mut exploding = callbackify(|(): ()| async { panic!("inside") });
    let mut seen: Option<Result<i32, Failure<String>>> = None;

    block_on(exploding.call((), |outcome| seen = Some(outcome)));

    assert!(matches!(seen, Some(Err(Failure::Panicked(_)))));
}

#[test]
fn callbackify_contains_a_panic_while_producing_the_future() {
    let mut exploding = callbackify(
        |(): ()| -> std::future::Ready<Result<i32, String>> {
            panic!("constructor")
        },
    );
    let mut seen = None;

    block_on(exploding.call((), |outcome| seen = Some(outcome)));

    assert!(matches!(seen, Some(Err(Failure::Panicked(_)))));
}

#[test]
fn callbackify_enters_the_callback_exactly_once() {
    let mut add =
        callbackify(|(): ()| async { Ok::<_, String>(1) });
    let entered = Cell::new(0);

    block_on(add.call((), |_outcome| entered.set(entered.get() + 1)));

    assert_eq!(entered.get(), 1);
}

#[test]
fn callbackify_after_promisify_round_trips() {
    let mut promisified =
        promisify(|(a, b): (i32, i32), cb: Callback<i32, String>| {
            cb.succeed(a * b)
        });
    let mut round_trip = callbackify(move |args: (i32, i32)| {
        promisified.call(args)
    });
    let mut seen = None;

    block_on(round_trip.call((6, 7), |outcome| seen = Some(outcome)));

    assert_eq!(seen.expect("callback not entered").unwrap(), 42);
}
