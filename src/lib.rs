//! Resolute: a typed success/failure algebra with async joins.
//!
//! # Overview
//!
//! Resolute models fallible computations as values. An [`Outcome`] is either
//! `Succeeded(value)` or `Failed(error)`; a [`Maybe`] is either `Some(value)`
//! or `None`. Combinators chain, validate, merge and aggregate those values
//! without reaching for early returns, and the same combinators are lifted
//! onto futures so asynchronous pipelines compose the same way.
//!
//! # Core Guarantees
//!
//! - **Failures are values**: nothing in the algebra panics or returns `Err`
//!   except the explicit boundary functions (`throw_if_*`, `to_future`)
//! - **Order is preserved**: aggregations report results by input position
//!   or key, never by completion order
//! - **Short-circuit is observable**: early-exit joins resolve as soon as the
//!   first failure is seen, and sequential runners stop calling later stages
//! - **Panics are contained**: `from_future` and `force_outcome` convert a
//!   panicking future into a failure
//!
//! # Module Structure
//!
//! - [`types`]: `Outcome`, `Maybe`, indexed failures, merge and truthiness traits
//! - [`combinator`]: Constructors, projections and aggregations over values
//! - [`future_outcome`]: The same operations over futures, plus concurrent joins
//! - [`pipe`]: Left-to-right value threading, synchronous and asynchronous
//! - [`error`]: Boundary and rejection error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_inception)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]

pub mod combinator;
pub mod error;
pub mod future_outcome;
pub mod pipe;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-exports for convenient access to core types
pub use combinator::Partition;
pub use error::{BoundaryError, Rejection};
pub use pipe::{pipe, pipe_async, Pipe, PipeAsync};
pub use types::{IndexedFailure, Maybe, Merge, OkFlag, Outcome, PanicPayload, Truthy};
