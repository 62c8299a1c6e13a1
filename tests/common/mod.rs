#![allow(dead_code)]
#![allow(unused_imports)]
//! Shared integration test utilities.
//!
//! Import with:
//! ```
//! mod common;
//! use common::*;
//! ```

use parking_lot::Mutex;
use proptest::prelude::ProptestConfig;
use proptest::test_runner::RngSeed;
use resolute::Outcome;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use std::task::{Context, Poll, Waker};
use std::thread;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

static INIT_LOGGING: Once = Once::new();

/// Default seed for property tests when running under CI.
pub const DEFAULT_PROPTEST_SEED: u64 = 0x5EED5EED;

const PROPTEST_SEED_ENV: &str = "RESOLUTE_PROPTEST_SEED";
const PROPTEST_MAX_SHRINK_ITERS_ENV: &str = "RESOLUTE_PROPTEST_MAX_SHRINK_ITERS";

/// Configuration for property tests with optional deterministic seed support.
#[derive(Debug, Clone)]
pub struct PropertyTestConfig {
    /// Fixed seed for reproducibility (overrides CI default when set).
    pub seed: Option<u64>,
    /// Number of successful cases required.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl PropertyTestConfig {
    /// Build a config with defaults for property tests.
    #[must_use]
    pub fn new(cases: u32) -> Self {
        Self {
            seed: read_proptest_seed(),
            cases,
            max_shrink_iters: read_max_shrink_iters()
                .unwrap_or(ProptestConfig::default().max_shrink_iters),
        }
    }

    /// Convert into a ProptestConfig, applying deterministic seed rules.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        let mut config = ProptestConfig::with_cases(self.cases);

        // Honor existing PROPTEST_RNG_SEED, otherwise apply our own.
        if matches!(config.rng_seed, RngSeed::Random) {
            if let Some(seed) = self.seed {
                config.rng_seed = RngSeed::Fixed(seed);
            }
        }

        config.max_shrink_iters = self.max_shrink_iters;
        config
    }
}

/// Build a ProptestConfig with deterministic seed support for CI.
#[must_use]
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    PropertyTestConfig::new(cases).to_proptest_config()
}

fn read_proptest_seed() -> Option<u64> {
    if let Ok(value) = std::env::var(PROPTEST_SEED_ENV) {
        return value.parse::<u64>().ok();
    }

    if std::env::var("CI").is_ok() {
        return Some(DEFAULT_PROPTEST_SEED);
    }

    None
}

fn read_max_shrink_iters() -> Option<u32> {
    std::env::var(PROPTEST_MAX_SHRINK_ITERS_ENV)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
}

/// Initialize test logging with trace-level output.
pub fn init_test_logging() {
    init_test_logging_with_level(tracing::Level::TRACE);
}

/// Initialize test logging with a custom level.
pub fn init_test_logging_with_level(level: tracing::Level) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(false)
            .try_init();
    });
}

// ============================================================================
// Timers and detached work
// ============================================================================

struct Shared<T> {
    value: Mutex<Option<T>>,
    waker: Mutex<Option<Waker>>,
}

impl<T> Shared<T> {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            value: Mutex::new(None),
            waker: Mutex::new(None),
        })
    }

    fn complete(&self, value: T) {
        *self.value.lock() = Some(value);
        if let Some(waker) = self.waker.lock().take() {
            waker.wake();
        }
    }

    fn poll_take(&self, cx: &mut Context<'_>) -> Poll<T> {
        // Register before checking so a completion between the two is not lost.
        *self.waker.lock() = Some(cx.waker().clone());
        self.value.lock().take().map_or(Poll::Pending, Poll::Ready)
    }
}

/// Timer future backed by a sleeping thread.
///
/// The clock starts on first poll, so a lazily built future only begins
/// counting once a join polls it.
pub struct Delay {
    duration: Duration,
    shared: Option<Arc<Shared<()>>>,
}

impl Delay {
    /// Creates a timer that fires after `ms` milliseconds.
    #[must_use]
    pub fn ms(ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(ms),
            shared: None,
        }
    }
}

impl Future for Delay {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let duration = self.duration;
        let shared = self.shared.get_or_insert_with(|| {
            let shared = Shared::new();
            let timer = Arc::clone(&shared);
            thread::spawn(move || {
                thread::sleep(duration);
                timer.complete(());
            });
            shared
        });
        shared.poll_take(cx)
    }
}

/// An outcome delivered after `ms` milliseconds.
pub async fn delayed<T, E>(ms: u64, outcome: Outcome<T, E>) -> Outcome<T, E> {
    Delay::ms(ms).await;
    outcome
}

/// Handle to work started eagerly on its own thread.
pub struct Detached<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Future for Detached<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        self.shared.poll_take(cx)
    }
}

/// Starts work immediately, independent of whether anyone awaits it.
///
/// Returns the handle and a flag that flips once the work has finished.
/// Dropping the handle does not stop the work.
pub fn spawn_detached<T, E>(ms: u64, outcome: Outcome<T, E>) -> (Detached<Outcome<T, E>>, Arc<AtomicBool>)
where
    T: Send + 'static,
    E: Send + 'static,
{
    let shared = Shared::new();
    let finished = Arc::new(AtomicBool::new(false));
    let worker = Arc::clone(&shared);
    let flag = Arc::clone(&finished);
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(ms));
        flag.store(true, Ordering::SeqCst);
        worker.complete(outcome);
    });
    (Detached { shared }, finished)
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

/// Log a test section within a phase.
#[macro_export]
macro_rules! test_section {
    ($name:expr) => {
        tracing::debug!(section = %$name, "--- {} ---", $name);
    };
}

/// Log test completion.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = %$name, "test completed successfully: {}", $name);
    };
}
