//! Truthiness and ok-flag predicates behind the `require_*` constructors.

use super::maybe::Maybe;
use super::outcome::Outcome;

/// Values that can be judged "truthy".
///
/// Zero, empty strings, `false`, NaN and absent optionals are falsy;
/// everything else is truthy.
pub trait Truthy {
    /// Returns true if the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),+) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Maybe<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Values that carry an `ok` flag, such as status reports.
pub trait OkFlag {
    /// Returns the value of the flag.
    fn ok_flag(&self) -> bool;
}

impl<T, E> OkFlag for Result<T, E> {
    fn ok_flag(&self) -> bool {
        self.is_ok()
    }
}

impl<T, E> OkFlag for Outcome<T, E> {
    fn ok_flag(&self) -> bool {
        self.is_succeeded()
    }
}

impl OkFlag for std::process::ExitStatus {
    fn ok_flag(&self) -> bool {
        self.success()
    }
}

impl<T: OkFlag + ?Sized> OkFlag for &T {
    fn ok_flag(&self) -> bool {
        (**self).ok_flag()
    }
}
