//! Outcome combinators over futures.
//!
//! This module lifts the synchronous algebra onto futures of outcomes and
//! absorbs raw futures into it:
//!
//! - [`boundary`]: `from_future`, `from_future_with`, `to_future`, `force_outcome`
//! - [`lift`]: async `bind`, `map_success`, `map_error`, `gate`, `tap_success`, `tap_error`
//! - [`join`]: concurrent joins `all_array_a`, `all_array_m`, `all_obj`, tuple `all_m`
//!
//! Every function takes either a bare [`Outcome`](crate::Outcome) or any
//! `IntoFuture` producing one. Scheduling is cooperative: suspension happens
//! only at `.await` points in these combinators and in caller-supplied
//! futures.

pub mod boundary;
pub mod join;
pub mod lift;

pub use boundary::{force_outcome, from_future, from_future_with, to_future, CatchUnwind};
pub use join::{
    all_array_a, all_array_m, all_m, all_obj, AllArrayA, AllArrayM, AllM, AllObj, JoinTuple,
};
pub use lift::{
    bind, gate, map_error, map_error_async, map_success, map_success_async, tap_error,
    tap_error_async, tap_success, tap_success_async,
};
