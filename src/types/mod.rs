//! Core types for the outcome algebra.
//!
//! - [`outcome`]: Two-valued outcome type, indexed failures, panic payloads
//! - [`maybe`]: Optional value type with a shared `None`
//! - [`merge`]: Shallow object merge used by `augment`
//! - [`truthy`]: Predicates behind the `require_*` constructors

pub mod maybe;
pub mod merge;
pub mod outcome;
pub mod truthy;

pub use maybe::Maybe;
pub use merge::Merge;
pub use outcome::{IndexedFailure, Outcome, PanicPayload};
pub use truthy::{OkFlag, Truthy};
