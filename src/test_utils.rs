//! Test utilities for unit tests.
//!
//! This module provides shared helpers:
//! - Consistent tracing-based logging initialization
//! - Phase/section macros for readable test output
//! - Manual polling helpers for join futures
//! - Outcome assertion macros

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Once};
use std::task::{Context, Poll, Wake, Waker};
use tracing_subscriber::fmt::format::FmtSpan;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging with trace-level output.
///
/// Safe to call multiple times; only initializes once.
pub fn init_test_logging() {
    init_test_logging_with_level(tracing::Level::TRACE);
}

/// Initialize test logging with a custom level.
///
/// The first call wins; later calls are no-ops.
pub fn init_test_logging_with_level(level: tracing::Level) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(false)
            .try_init();
    });
}

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

/// A waker that does nothing when woken.
pub fn noop_waker() -> Waker {
    Arc::new(NoopWaker).into()
}

/// Polls a future exactly once with a no-op waker.
pub fn poll_once<F: Future + Unpin>(fut: &mut F) -> Poll<F::Output> {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    Pin::new(fut).poll(&mut cx)
}

/// Log a test phase transition with a visual separator.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(phase = %$name, "========================================");
        tracing::info!(phase = %$name, "TEST PHASE: {}", $name);
        tracing::info!(phase = %$name, "========================================");
    };
}

/// Log test completion.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = %$name, "test completed successfully: {}", $name);
    };
}

/// Assert that an outcome succeeded with a specific value.
#[macro_export]
macro_rules! assert_outcome_succeeded {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::types::Outcome::Succeeded(v) => assert_eq!(v, $expected),
            other => unreachable!("expected Outcome::Succeeded({:?}), got {:?}", $expected, other),
        }
    };
}

/// Assert that an outcome failed.
#[macro_export]
macro_rules! assert_outcome_failed {
    ($outcome:expr) => {
        match $outcome {
            $crate::types::Outcome::Failed(_) => {}
            other => unreachable!("expected Outcome::Failed, got {:?}", other),
        }
    };
}
