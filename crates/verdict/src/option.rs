//! The presence-or-absence type.

use serde::{Deserialize, Serialize};

use crate::error::UnwrapError;
use crate::result::Result;

/// Message raised by [`Option::unwrap`] on `None`.
const UNWRAP_NONE: &str = "called `Option::unwrap()` on a `None` value";

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Option<T> {
    /// Absence of a value.
    None,
    /// Presence of a value.
    Some(T),
}

/// Wraps a present value.
///
/// # Examples
///
/// ```
/// use verdict::some;
///
/// assert_eq!(some(5).map(|x| x * 2).unwrap_or(0), 10);
/// ```
pub fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// The absent value.
///
/// # Examples
///
/// ```
/// use verdict::{none, Option};
///
/// let absent: Option<i32> = none();
/// assert_eq!(absent.map(|x| x * 2).unwrap_or(0), 0);
/// ```
pub const fn none<T>() -> Option<T> {
    Option::None
}

impl<T> Option<T> {
    /// Returns `true` if a value is present.
    pub fn is_some(&self) -> bool {
        matches!(self, Option::Some(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Option::None)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Option::Some(value) => predicate(value),
            Option::None => false,
        }
    }

    /// Borrows the payload.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => Option::None,
        }
    }

    /// Transforms the present value.
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => Option::Some(f(value)),
            Option::None => Option::None,
        }
    }

    /// Returns `f(value)` if present, otherwise `default`.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => f(value),
            Option::None => default,
        }
    }

    /// Returns `f(value)` if present, otherwise `default()`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => f(value),
            Option::None => default(),
        }
    }

    /// Calls `f` with a reference to the present value.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Option::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Option::Some(value) if predicate(&value) => Option::Some(value),
            Option::Some(_) | Option::None => Option::None,
        }
    }

    /// Returns `other` if a value is present, otherwise `None`.
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Option::Some(_) => other,
            Option::None => Option::None,
        }
    }

    /// Calls `f` with the present value, or stays `None` without calling `f`.
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Option::Some(value) => f(value),
            Option::None => Option::None,
        }
    }

    /// Same as [`Option::and_then`].
    pub fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    /// Returns `self` if a value is present, otherwise `other`.
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => other,
        }
    }

    /// Returns `self` if a value is present, otherwise `f()`.
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => f(),
        }
    }

    /// Returns the one present value if exactly one side holds a value.
    pub fn xor(self, other: Option<T>) -> Option<T> {
        match (self, other) {
            (Option::Some(value), Option::None) | (Option::None, Option::Some(value)) => {
                Option::Some(value)
            }
            (Option::Some(_), Option::Some(_)) | (Option::None, Option::None) => Option::None,
        }
    }

    /// Converts into a [`Result`], using `error` when absent.
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Option::Some(value) => Result::Ok(value),
            Option::None => Result::Err(error),
        }
    }

    /// Converts into a [`Result`], computing the error when absent.
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Option::Some(value) => Result::Ok(value),
            Option::None => Result::Err(f()),
        }
    }

    /// Returns the present value, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => default,
        }
    }

    /// Returns the present value, or computes one.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Option::Some(value) => value,
            Option::None => f(),
        }
    }

    /// Returns the present value, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Option::Some(value) => value,
            Option::None => T::default(),
        }
    }

    /// Returns the present value, or an [`UnwrapError`] if absent.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` if the option is `None`.
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        match self {
            Option::Some(value) => Ok(value),
            Option::None => Err(UnwrapError::new(UNWRAP_NONE)),
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] if the option is `None`.
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Raises an [`UnwrapError`] carrying `message` verbatim if the option is `None`.
    pub fn expect(self, message: &str) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => UnwrapError::new(message).raise(),
        }
    }

    /// Converts into the standard library's option.
    pub fn into_std(self) -> std::option::Option<T> {
        self.into()
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Option::None
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(option: std::option::Option<T>) -> Self {
        match option {
            Some(value) => Option::Some(value),
            None => Option::None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }
}
