//! The success-or-failure type.

use serde::{Deserialize, Serialize};

use crate::describe::Describe;
use crate::error::UnwrapError;
use crate::option::Option;

const UNWRAP_ERR_OK: &str = "called `Result::unwrap_err()` on an `Ok` value";

/// The outcome of a computation that may fail.
///
/// Holds exactly one of a success value or an error value. Errors are data:
/// they surface as a control-flow failure only through the `unwrap` and
/// `expect` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Result<T, E> {
    /// Success, holding a value.
    Ok(T),
    /// Failure, holding an error.
    Err(E),
}

/// Wraps a success value.
///
/// # Examples
///
/// ```
/// use verdict::{ok, Result};
///
/// let result: Result<i32, String> = ok(42);
/// assert_eq!(result.map(|x| x + 1).unwrap(), 43);
/// ```
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Wraps an error value.
///
/// # Examples
///
/// ```
/// use verdict::{err, Result};
///
/// let result: Result<i32, &str> = err("boom");
/// assert_eq!(result.map_err(str::len).unwrap_err(), 4);
/// ```
pub fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

impl<T, E> Result<T, E> {
    /// Returns `true` if the result is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Result::Err(_))
    }

    /// Returns `true` if the result is `Ok` and the value satisfies `predicate`.
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Result::Ok(value) => predicate(value),
            Result::Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err` and the error satisfies `predicate`.
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Result::Ok(_) => false,
            Result::Err(error) => predicate(error),
        }
    }

    /// Converts into an [`Option`] of the success value, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Result::Ok(value) => Option::Some(value),
            Result::Err(_) => Option::None,
        }
    }

    /// Converts into an [`Option`] of the error value, discarding the success value.
    pub fn err(self) -> Option<E> {
        match self {
            Result::Ok(_) => Option::None,
            Result::Err(error) => Option::Some(error),
        }
    }

    /// Borrows the payload.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Returns `other` if the result is `Ok`, otherwise keeps the error.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => other,
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Calls `f` with the success value, or keeps the error without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::{err, ok, Result};
    ///
    /// fn half(x: i32) -> Result<i32, String> {
    ///     if x % 2 == 0 { ok(x / 2) } else { err(format!("{x} is odd")) }
    /// }
    ///
    /// assert_eq!(ok(8).and_then(half).and_then(half), ok(2));
    /// assert_eq!(ok(6).and_then(half).and_then(half), err("3 is odd".to_string()));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Same as [`Result::and_then`].
    pub fn flat_map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(f)
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(_) => other,
        }
    }

    /// Calls `f` with the error to recover, or keeps the success value.
    pub fn or_else<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => f(error),
        }
    }

    /// Transforms the success value.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Transforms the error value.
    pub fn map_err<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(f(error)),
        }
    }

    /// Returns `f(value)` on `Ok`, otherwise `default`.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(_) => default,
        }
    }

    /// Returns `f(value)` on `Ok`, otherwise `default(error)`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(error) => default(error),
        }
    }

    /// Calls `f` with a reference to the success value.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Result::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error value.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Result::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => f(error),
        }
    }

    /// Returns the success value, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => T::default(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] carrying `message` verbatim if the result is `Err`.
    pub fn expect(self, message: &str) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => UnwrapError::new(message).raise(),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] carrying `message` verbatim if the result is `Ok`.
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Result::Ok(_) => UnwrapError::new(message).raise(),
            Result::Err(error) => error,
        }
    }

    /// Returns the error value, or the error `unwrap_err` would raise.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` with a fixed message if the result is `Ok`.
    pub fn try_unwrap_err(self) -> std::result::Result<E, UnwrapError> {
        match self {
            Result::Ok(_) => Err(UnwrapError::new(UNWRAP_ERR_OK)),
            Result::Err(error) => Ok(error),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] if the result is `Ok`. The success value is
    /// not rendered, so any `T` is accepted.
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(unwrap_error) => unwrap_error.raise(),
        }
    }

    /// Converts into the standard library's result.
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E: Describe> Result<T, E> {
    /// Returns the success value, or the rendered error as an [`UnwrapError`].
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` whose message is the rendered error payload.
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(UnwrapError::new(error.describe().to_string())),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] if the result is `Err`. The message is the
    /// error payload rendered through [`Describe`].
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}
