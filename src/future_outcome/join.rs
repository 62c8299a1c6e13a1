//! Concurrent joins over futures of outcomes.
//!
//! The join futures own their children and poll **every** still-pending
//! child on every poll pass, in original index order. No child waits for
//! another to be awaited first, so all of them make progress together.
//!
//! # Semantics
//!
//! ```text
//! all_array_a([f0, f1, ..., fn]):     collect-all
//!   wait until every child settled
//!   if any failed: Failed([IndexedFailure { index, item }, ...])  // ascending index
//!   else:          Succeeded([v0, v1, ..., vn])                   // original order
//!
//! all_array_m([f0, f1, ..., fn]):     early exit
//!   on the first poll pass that observes a failure:
//!     Failed(IndexedFailure { index, item })  // lowest failing index in that pass
//!   once every child succeeded:
//!     Succeeded([v0, v1, ..., vn])
//! ```
//!
//! `all_m` (tuples) and `all_obj` (keyed) follow the early-exit rule.
//!
//! # Ordering
//!
//! Each child's output is stored in a slot at its original position. Output
//! is assembled from slots, never from settlement order.
//!
//! # Early exit
//!
//! Nothing is cancelled. When a join resolves early it drops the children
//! still pending and stops polling them. Work the caller detached before
//! handing over the future (a spawned thread or task) keeps running.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::types::{IndexedFailure, Outcome};

/// One child of a join: pending, settled, or already taken.
pub struct Slot<F, T, E> {
    state: SlotState<F, T, E>,
}

enum SlotState<F, T, E> {
    Pending(Pin<Box<F>>),
    Settled(Outcome<T, E>),
    Taken,
}

// The child future is boxed and settled outputs are never pinned.
impl<F, T, E> Unpin for Slot<F, T, E> {}

impl<F, T, E> Slot<F, T, E>
where
    F: Future<Output = Outcome<T, E>>,
{
    fn new(future: F) -> Self {
        Self {
            state: SlotState::Pending(Box::pin(future)),
        }
    }

    /// Polls the child if it is still pending. Returns true once settled.
    fn poll_settle(&mut self, cx: &mut Context<'_>) -> bool {
        match &mut self.state {
            SlotState::Pending(future) => match future.as_mut().poll(cx) {
                Poll::Ready(outcome) => {
                    self.state = SlotState::Settled(outcome);
                    true
                }
                Poll::Pending => false,
            },
            SlotState::Settled(_) | SlotState::Taken => true,
        }
    }

    /// Takes the failure payload if the child settled as a failure.
    fn take_failure(&mut self) -> Option<E> {
        match std::mem::replace(&mut self.state, SlotState::Taken) {
            SlotState::Settled(Outcome::Failed(e)) => Some(e),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Takes the settled outcome.
    fn take(&mut self) -> Option<Outcome<T, E>> {
        match std::mem::replace(&mut self.state, SlotState::Taken) {
            SlotState::Settled(outcome) => Some(outcome),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Takes the success value if the child settled as a success.
    fn take_value(&mut self) -> Option<T> {
        match self.take()? {
            Outcome::Succeeded(v) => Some(v),
            Outcome::Failed(e) => {
                self.state = SlotState::Settled(Outcome::Failed(e));
                None
            }
        }
    }
}

/// Polls every slot once, in order. Returns the number still pending and
/// the lowest-index failure observed in this pass.
fn poll_pass<F, T, E>(
    slots: &mut [Slot<F, T, E>],
    cx: &mut Context<'_>,
    stop_at_failure: bool,
) -> (usize, Option<IndexedFailure<E>>)
where
    F: Future<Output = Outcome<T, E>>,
{
    let mut pending = 0;
    let mut failure = None;
    for (index, slot) in slots.iter_mut().enumerate() {
        if !slot.poll_settle(cx) {
            pending += 1;
            continue;
        }
        if stop_at_failure && failure.is_none() {
            failure = slot.take_failure().map(|e| IndexedFailure::new(index, e));
        }
    }
    (pending, failure)
}

/// Future returned by [`all_array_a`].
#[must_use = "futures do nothing unless polled"]
pub struct AllArrayA<F, T, E> {
    slots: Vec<Slot<F, T, E>>,
}

impl<F, T, E> Future for AllArrayA<F, T, E>
where
    F: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<Vec<T>, Vec<IndexedFailure<E>>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        let (pending, _) = poll_pass(&mut this.slots, cx, false);
        if pending > 0 {
            return Poll::Pending;
        }

        let mut values = Vec::with_capacity(this.slots.len());
        let mut failures = Vec::new();
        for (index, slot) in this.slots.iter_mut().enumerate() {
            match slot.take().expect("AllArrayA polled after completion") {
                Outcome::Succeeded(v) => values.push(v),
                Outcome::Failed(e) => failures.push(IndexedFailure::new(index, e)),
            }
        }
        tracing::trace!(
            children = this.slots.len(),
            failures = failures.len(),
            "all_array_a settled"
        );
        if failures.is_empty() {
            Poll::Ready(Outcome::Succeeded(values))
        } else {
            Poll::Ready(Outcome::Failed(failures))
        }
    }
}

/// Future returned by [`all_array_m`].
#[must_use = "futures do nothing unless polled"]
pub struct AllArrayM<F, T, E> {
    slots: Vec<Slot<F, T, E>>,
}

impl<F, T, E> Future for AllArrayM<F, T, E>
where
    F: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<Vec<T>, IndexedFailure<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        let (pending, failure) = poll_pass(&mut this.slots, cx, true);
        if let Some(failure) = failure {
            tracing::trace!(
                index = failure.index,
                pending,
                children = this.slots.len(),
                "all_array_m short-circuited on failure"
            );
            this.slots.clear();
            return Poll::Ready(Outcome::Failed(failure));
        }
        if pending > 0 {
            return Poll::Pending;
        }

        let values = this
            .slots
            .iter_mut()
            .map(|slot| slot.take_value().expect("AllArrayM polled after completion"))
            .collect();
        Poll::Ready(Outcome::Succeeded(values))
    }
}

/// Future returned by [`all_obj`].
#[must_use = "futures do nothing unless polled"]
pub struct AllObj<K, F, T, E, C> {
    keys: Vec<K>,
    slots: Vec<Slot<F, T, E>>,
    _output: PhantomData<fn() -> C>,
}

impl<K, F, T, E, C> Unpin for AllObj<K, F, T, E, C> {}

impl<K, F, T, E, C> Future for AllObj<K, F, T, E, C>
where
    F: Future<Output = Outcome<T, E>>,
    C: FromIterator<(K, T)>,
{
    type Output = Outcome<C, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        let (pending, failure) = poll_pass(&mut this.slots, cx, true);
        if let Some(failure) = failure {
            tracing::trace!(
                position = failure.index,
                pending,
                "all_obj short-circuited on failure"
            );
            this.slots.clear();
            this.keys.clear();
            return Poll::Ready(Outcome::Failed(failure.item));
        }
        if pending > 0 {
            return Poll::Pending;
        }

        let keys = std::mem::take(&mut this.keys);
        let entries = keys
            .into_iter()
            .zip(this.slots.iter_mut())
            .map(|(key, slot)| {
                let value = slot.take_value().expect("AllObj polled after completion");
                (key, value)
            })
            .collect();
        Poll::Ready(Outcome::Succeeded(entries))
    }
}

/// Future returned by the tuple [`all_m`].
#[must_use = "futures do nothing unless polled"]
pub struct AllM<S> {
    slots: S,
}

/// A tuple of join slots that can be polled as a unit.
pub trait SlotTuple {
    /// What the join resolves to.
    type Output;

    /// Polls every pending slot once and decides whether the join is done.
    fn poll_slots(&mut self, cx: &mut Context<'_>) -> Poll<Self::Output>;
}

impl<S: SlotTuple + Unpin> Future for AllM<S> {
    type Output = S::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.slots.poll_slots(cx)
    }
}

/// Tuples of futures that can be joined with early exit.
///
/// Output and error types are trait parameters so they are inferred from
/// the element futures.
pub trait JoinTuple<O, E> {
    /// The join future.
    type Future: Future<Output = Outcome<O, IndexedFailure<E>>>;

    /// Starts the join.
    fn into_all_m(self) -> Self::Future;
}

macro_rules! impl_join_tuple {
    ($($value:ident $fut:ident $var:ident $idx:tt),+) => {
        impl<E, $($value, $fut),+> SlotTuple for ($(Slot<$fut, $value, E>,)+)
        where
            $($fut: Future<Output = Outcome<$value, E>>),+
        {
            type Output = Outcome<($($value,)+), IndexedFailure<E>>;

            fn poll_slots(&mut self, cx: &mut Context<'_>) -> Poll<Self::Output> {
                let mut pending = 0_usize;
                let mut failure: Option<IndexedFailure<E>> = None;
                $(
                    if self.$idx.poll_settle(cx) {
                        if failure.is_none() {
                            failure = self.$idx.take_failure().map(|e| IndexedFailure::new($idx, e));
                        }
                    } else {
                        pending += 1;
                    }
                )+
                if let Some(failure) = failure {
                    tracing::trace!(index = failure.index, pending, "all_m short-circuited on failure");
                    return Poll::Ready(Outcome::Failed(failure));
                }
                if pending > 0 {
                    return Poll::Pending;
                }
                Poll::Ready(Outcome::Succeeded((
                    $(self.$idx.take_value().expect("AllM polled after completion"),)+
                )))
            }
        }

        impl<E, $($value, $fut),+> JoinTuple<($($value,)+), E> for ($($fut,)+)
        where
            $($fut: IntoFuture<Output = Outcome<$value, E>>),+
        {
            type Future = AllM<($(Slot<<$fut as IntoFuture>::IntoFuture, $value, E>,)+)>;

            fn into_all_m(self) -> Self::Future {
                let ($($var,)+) = self;
                AllM {
                    slots: ($(Slot::new($var.into_future()),)+),
                }
            }
        }
    };
}

impl_join_tuple!(A FA a 0);
impl_join_tuple!(A FA a 0, B FB b 1);
impl_join_tuple!(A FA a 0, B FB b 1, C FC c 2);
impl_join_tuple!(A FA a 0, B FB b 1, C FC c 2, D FD d 3);
impl_join_tuple!(A FA a 0, B FB b 1, C FC c 2, D FD d 3, G FG g 4);
impl_join_tuple!(A FA a 0, B FB b 1, C FC c 2, D FD d 3, G FG g 4, H FH h 5);
impl_join_tuple!(A FA a 0, B FB b 1, C FC c 2, D FD d 3, G FG g 4, H FH h 5, I FI i 6);
impl_join_tuple!(A FA a 0, B FB b 1, C FC c 2, D FD d 3, G FG g 4, H FH h 5, I FI i 6, J FJ j 7);

/// Collect-all join: waits for every child, then reports every failure.
///
/// Failures carry their original index and are sorted by it. Empty input
/// resolves on the first poll with an empty success.
pub fn all_array_a<I, F, T, E>(futures: I) -> AllArrayA<F::IntoFuture, T, E>
where
    I: IntoIterator<Item = F>,
    F: IntoFuture<Output = Outcome<T, E>>,
{
    AllArrayA {
        slots: futures
            .into_iter()
            .map(|f| Slot::new(f.into_future()))
            .collect(),
    }
}

/// Early-exit join: resolves with the first failure observed.
///
/// Latency is bounded by the fastest failing child. Success needs every
/// child, so it resolves only when the last one has succeeded.
pub fn all_array_m<I, F, T, E>(futures: I) -> AllArrayM<F::IntoFuture, T, E>
where
    I: IntoIterator<Item = F>,
    F: IntoFuture<Output = Outcome<T, E>>,
{
    AllArrayM {
        slots: futures
            .into_iter()
            .map(|f| Slot::new(f.into_future()))
            .collect(),
    }
}

/// Keyed early-exit join.
///
/// All entries run together. The first failure observed wins; when several
/// entries fail in the same poll pass, the earliest in iteration order
/// wins. On success the output collection holds every key with its value.
pub fn all_obj<K, I, F, T, E, C>(entries: I) -> AllObj<K, F::IntoFuture, T, E, C>
where
    I: IntoIterator<Item = (K, F)>,
    F: IntoFuture<Output = Outcome<T, E>>,
    C: FromIterator<(K, T)>,
{
    let (keys, slots) = entries
        .into_iter()
        .map(|(key, f)| (key, Slot::new(f.into_future())))
        .unzip();
    AllObj {
        keys,
        slots,
        _output: PhantomData,
    }
}

/// Heterogeneous tuple join with early exit.
///
/// Resolves with the first failure observed (tagged with its position), or
/// with the tuple of values in positional order.
pub fn all_m<T, O, E>(futures: T) -> T::Future
where
    T: JoinTuple<O, E>,
{
    futures.into_all_m()
}
