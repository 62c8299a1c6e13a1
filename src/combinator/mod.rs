//! Synchronous combinators over values already in hand.
//!
//! - [`outcome`]: constructors, projections, `all_*` aggregations and
//!   boundary converters for [`Outcome`](crate::Outcome)
//! - [`maybe`]: the same for [`Maybe`](crate::Maybe)
//! - [`tuple`]: heterogeneous tuple `all_m` and `execute_while_successful`
//!
//! Single-value combinators (`bind`, `map_success`, `gate`, `augment`, ...)
//! are methods on the types themselves.

pub mod maybe;
pub mod outcome;
pub mod tuple;

pub use outcome::{
    all_array_a, all_array_m, all_obj, filter_errors, filter_successes, from_bool, from_nullable,
    from_option, map_while_successful, partition, require_falsy, require_non_empty_array,
    require_ok, require_one_element_array, require_truthy, throw_if_failed, throw_if_failed_with,
    throw_if_succeeded, throw_if_succeeded_with, Partition,
};
pub use tuple::{all_m, execute_while_successful, AllTuple, ExecuteTuple};
