//! Heterogeneous tuple combinators.
//!
//! Tuples of differently typed outcomes (or closures producing them) are
//! handled by a fixed family of implementations for arities 1 through 8.
//! All elements share one failure type.

use crate::types::Outcome;

/// Positional "all" over a tuple of outcomes.
pub trait AllTuple {
    /// Tuple of success values, in the same positions.
    type Output;
    /// Shared failure type.
    type Error;

    /// Returns the first failure by position, or every value.
    fn all_m(self) -> Outcome<Self::Output, Self::Error>;
}

/// Left-to-right execution of a tuple of fallible closures.
///
/// The output and error types are trait parameters so they can be inferred
/// from the closures' return types.
pub trait ExecuteTuple<O, E> {
    /// Invokes the closures in order, stopping at the first failure.
    fn execute_while_successful(self) -> Outcome<O, E>;
}

macro_rules! impl_tuple_combinators {
    ($($value:ident $func:ident $var:ident),+) => {
        impl<E, $($value),+> AllTuple for ($(Outcome<$value, E>,)+) {
            type Output = ($($value,)+);
            type Error = E;

            fn all_m(self) -> Outcome<Self::Output, E> {
                let ($($var,)+) = self;
                $(
                    let $var = match $var {
                        Outcome::Succeeded(v) => v,
                        Outcome::Failed(e) => return Outcome::Failed(e),
                    };
                )+
                Outcome::Succeeded(($($var,)+))
            }
        }

        impl<E, $($value, $func),+> ExecuteTuple<($($value,)+), E> for ($($func,)+)
        where
            $($func: FnOnce() -> Outcome<$value, E>),+
        {
            fn execute_while_successful(self) -> Outcome<($($value,)+), E> {
                let ($($var,)+) = self;
                $(
                    let $var = match $var() {
                        Outcome::Succeeded(v) => v,
                        Outcome::Failed(e) => return Outcome::Failed(e),
                    };
                )+
                Outcome::Succeeded(($($var,)+))
            }
        }
    };
}

impl_tuple_combinators!(A FA a);
impl_tuple_combinators!(A FA a, B FB b);
impl_tuple_combinators!(A FA a, B FB b, C FC c);
impl_tuple_combinators!(A FA a, B FB b, C FC c, D FD d);
impl_tuple_combinators!(A FA a, B FB b, C FC c, D FD d, G FG g);
impl_tuple_combinators!(A FA a, B FB b, C FC c, D FD d, G FG g, H FH h);
impl_tuple_combinators!(A FA a, B FB b, C FC c, D FD d, G FG g, H FH h, I FI i);
impl_tuple_combinators!(A FA a, B FB b, C FC c, D FD d, G FG g, H FH h, I FI i, J FJ j);

/// Returns the first failure by position, or the tuple of values.
pub fn all_m<T: AllTuple>(outcomes: T) -> Outcome<T::Output, T::Error> {
    outcomes.all_m()
}

/// Invokes zero-argument closures left to right, stopping at the first failure.
pub fn execute_while_successful<T, O, E>(funcs: T) -> Outcome<O, E>
where
    T: ExecuteTuple<O, E>,
{
    funcs.execute_while_successful()
}
