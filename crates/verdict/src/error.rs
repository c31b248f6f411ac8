//! The error raised when a value is demanded from the wrong variant.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

/// Tracing target for unwrap failures.
pub(crate) const UNWRAP_TARGET: &str = "verdict::unwrap";

thread_local! {
    // The error behind the unwind currently in flight on this thread.
    static RAISED: Cell<Option<UnwrapError>> = const { Cell::new(None) };
}

/// Raised by `unwrap`, `expect` and their `_err` counterparts when the
/// receiver holds the other variant.
///
/// The error carries a single human-readable message and nothing else. It is
/// raised as a panic with that message, so an uncaught failure reports it like
/// any other panic. [`catch_unwrap`] recovers the `UnwrapError` itself; the
/// `try_unwrap` family returns the same value as data instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Creates a new unwrap error with a message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts into the message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Panics with the message, leaving `self` for [`catch_unwrap`].
    #[allow(clippy::panic)]
    pub(crate) fn raise(self) -> ! {
        tracing::debug!(target: UNWRAP_TARGET, reason = %self.message, "unwrap failed");
        let message = self.message.clone();
        RAISED.with(|slot| slot.set(Some(self)));
        panic!("{message}")
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
}

/// Runs `f`, turning a raised [`UnwrapError`] back into data.
///
/// Panics that do not carry an `UnwrapError` keep unwinding.
///
/// # Examples
///
/// ```
/// use verdict::{catch_unwrap, err, Result};
///
/// let failed: Result<i32, &str> = err("boom");
/// let caught = catch_unwrap(|| failed.unwrap()).unwrap_err();
/// assert_eq!(caught.message(), "boom");
/// ```
///
/// # Errors
///
/// Returns the `UnwrapError` raised inside `f`.
pub fn catch_unwrap<T, F>(f: F) -> std::result::Result<T, UnwrapError>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match RAISED.with(Cell::take) {
            Some(error) if panic_message(payload.as_ref()) == Some(error.message()) => Err(error),
            _ => panic::resume_unwind(payload),
        },
    }
}
