//! The combinator surface shared by [`Result`] and [`Option`].

use crate::describe::Describe;
use crate::error::UnwrapError;
use crate::option::Option;
use crate::result::Result;

/// Types that either hold a value of type `T` or a residual in its place.
///
/// [`Result`] holds its error as the residual; [`Option`] holds `()`. Each
/// type realizes the contract independently, so generic code can transform
/// and extract values without caring which one it has.
///
/// # Examples
///
/// ```
/// use verdict::{err, ok, some, Outcome};
///
/// fn doubled_or_zero<O: Outcome<i32>>(outcome: O) -> i32 {
///     outcome.map(|x| x * 2).into_option().unwrap_or(0)
/// }
///
/// assert_eq!(doubled_or_zero(some(4)), 8);
/// assert_eq!(doubled_or_zero(ok::<i32, &str>(4)), 8);
/// assert_eq!(doubled_or_zero(err::<i32, &str>("boom")), 0);
/// ```
pub trait Outcome<T>: Sized {
    /// What is held in place of a value: the error for `Result`, `()` for `Option`.
    type Residual;

    /// The same container over a different value type.
    type Mapped<U>: Outcome<U, Residual = Self::Residual>;

    /// Returns `true` if a value is held.
    fn has_value(&self) -> bool;

    /// Transforms the held value, passing the residual through.
    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(T) -> U;

    /// Returns the held value, or `default`.
    fn unwrap_or(self, default: T) -> T;

    /// Returns the held value, or computes one from the residual.
    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Self::Residual) -> T;

    /// Converts into an [`Option`], discarding the residual.
    fn into_option(self) -> Option<T>;

    /// Returns the held value, or the error `unwrap` would raise.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if no value is held.
    fn try_unwrap(self) -> std::result::Result<T, UnwrapError>;

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Raises the [`UnwrapError`] produced by [`Outcome::try_unwrap`].
    fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] carrying `message` verbatim if no value is held.
    fn expect(self, message: &str) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(_) => UnwrapError::new(message).raise(),
        }
    }
}

impl<T, E: Describe> Outcome<T> for Result<T, E> {
    type Residual = E;
    type Mapped<U> = Result<U, E>;

    fn has_value(&self) -> bool {
        self.is_ok()
    }

    fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Result::map(self, f)
    }

    fn unwrap_or(self, default: T) -> T {
        Result::unwrap_or(self, default)
    }

    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        Result::unwrap_or_else(self, f)
    }

    fn into_option(self) -> Option<T> {
        self.ok()
    }

    fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        Result::try_unwrap(self)
    }
}

impl<T> Outcome<T> for Option<T> {
    type Residual = ();
    type Mapped<U> = Option<U>;

    fn has_value(&self) -> bool {
        self.is_some()
    }

    fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        Option::map(self, f)
    }

    fn unwrap_or(self, default: T) -> T {
        Option::unwrap_or(self, default)
    }

    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(()) -> T,
    {
        Option::unwrap_or_else(self, || f(()))
    }

    fn into_option(self) -> Option<T> {
        self
    }

    fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        Option::try_unwrap(self)
    }
}
