//! Integration tests for the boundary between raw futures and outcomes.
//!
//! Covers panic containment through nested joins, conversion of raw
//! errors, and the explicit exits (`to_future`, `throw_if_*`).

mod common;

use common::*;
use futures_lite::future::block_on;
use resolute::combinator::{throw_if_failed, throw_if_failed_with};
use resolute::future_outcome::{
    all_array_m, bind, force_outcome, from_future, from_future_with, map_error, to_future,
};
use resolute::{pipe_async, Outcome, PanicPayload, Rejection};
use std::future::Future;
use std::pin::Pin;

type BoxedOutcome = Pin<Box<dyn Future<Output = Outcome<u32, String>>>>;

#[derive(Debug, PartialEq)]
enum FetchError {
    NotFound(String),
    Crashed(String),
}

impl From<PanicPayload> for FetchError {
    fn from(payload: PanicPayload) -> Self {
        Self::Crashed(payload.message().to_string())
    }
}

async fn fetch(id: u32) -> Result<u32, std::io::Error> {
    Delay::ms(5).await;
    if id == 0 {
        return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such record"));
    }
    Ok(id * 100)
}

// ============================================================================
// Panic containment
// ============================================================================

#[test]
fn force_outcome_contains_panic_inside_join() {
    init_test_logging();
    test_phase!("panic inside a join child");

    let children: Vec<BoxedOutcome> = vec![
        Box::pin(delayed(5, Outcome::<u32, String>::Succeeded(1))),
        Box::pin(async {
            Delay::ms(10).await;
            if true {
                panic!("child exploded");
            }
            Outcome::<u32, String>::Succeeded(2)
        }),
        Box::pin(delayed(200, Outcome::<u32, String>::Succeeded(3))),
    ];
    let guarded = force_outcome(map_error(all_array_m(children), |failure| failure.item));
    let out = block_on(guarded);

    assert_eq!(out, Outcome::Failed("panic: child exploded".to_string()));
    test_complete!("force_outcome_contains_panic_inside_join");
}

#[test]
fn force_outcome_maps_panic_into_domain_error() {
    init_test_logging();

    let out: Outcome<u32, FetchError> = block_on(force_outcome(bind(
        Outcome::<u32, FetchError>::Succeeded(4),
        |id| async move {
            if id > 3 {
                panic!("id {id} out of range");
            }
            Outcome::Succeeded(id)
        },
    )));

    assert_eq!(out, Outcome::Failed(FetchError::Crashed("id 4 out of range".into())));
}

// ============================================================================
// Raw futures
// ============================================================================

#[test]
fn from_future_wraps_io_results() {
    init_test_logging();

    assert_eq!(block_on(from_future(fetch(7))), Outcome::Succeeded(700));
    assert_eq!(
        block_on(from_future(fetch(0))),
        Outcome::Failed("no such record".to_string())
    );
}

#[test]
fn from_future_with_distinguishes_panics() {
    init_test_logging();

    let classify = |rejection: Rejection<std::io::Error>| match rejection {
        Rejection::Error(err) => FetchError::NotFound(err.to_string()),
        Rejection::Panicked(payload) => FetchError::from(payload),
    };

    let missing = block_on(from_future_with(fetch(0), classify));
    assert_eq!(missing, Outcome::Failed(FetchError::NotFound("no such record".into())));

    let crashed = block_on(from_future_with(
        async {
            Delay::ms(1).await;
            if true {
                panic!("driver fault");
            }
            Ok::<u32, std::io::Error>(0)
        },
        classify,
    ));
    assert_eq!(crashed, Outcome::Failed(FetchError::Crashed("driver fault".into())));
}

// ============================================================================
// Exits
// ============================================================================

#[test]
fn pipeline_exits_through_to_future_and_throw() {
    init_test_logging();
    test_phase!("pipeline exits");

    let pipeline = pipe_async(3_u32)
        .then(|id| from_future(fetch(id)))
        .then(|r| bind(r, |v| delayed(5, Outcome::Succeeded(v + 1))));
    let raw = block_on(to_future(pipeline));
    assert_eq!(raw, Ok(301));

    let failed = block_on(from_future(fetch(0)));
    let thrown = throw_if_failed("record lookup failed", failed.clone()).unwrap_err();
    assert_eq!(thrown.message(), "record lookup failed");

    let mapped = throw_if_failed_with(|e: String| format!("lookup: {e}"), failed).unwrap_err();
    assert_eq!(mapped.to_string(), "lookup: no such record");
    test_complete!("pipeline_exits_through_to_future_and_throw");
}
