//! Rendering of payloads into unwrap failure messages.
//!
//! A payload that fails to unwrap is rendered through one of four closed
//! categories. Each payload type picks its category by implementing
//! [`Describe`]; the category then decides the text.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

/// Rendering category of a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A callable. Renders as `[Function]`.
    Function,
    /// A composite value. Renders as its compact JSON form.
    Structured(String),
    /// An opaque unique token. Renders as `[Symbol]`.
    Symbol,
    /// A primitive. Renders as its natural string form.
    Atomic(String),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Function => f.write_str("[Function]"),
            Payload::Symbol => f.write_str("[Symbol]"),
            Payload::Structured(text) | Payload::Atomic(text) => f.write_str(text),
        }
    }
}

/// Types that can be rendered into an unwrap failure message.
///
/// # Examples
///
/// ```
/// use verdict::{Describe, Payload, Structured, Symbol};
///
/// assert_eq!(42_i32.describe().to_string(), "42");
/// assert_eq!(Symbol::new("token").describe(), Payload::Symbol);
/// assert_eq!(Structured(vec![1, 2]).describe().to_string(), "[1,2]");
/// ```
pub trait Describe {
    /// Picks the rendering category for this value.
    fn describe(&self) -> Payload;
}

macro_rules! describe_atomic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(&self) -> Payload {
                    Payload::Atomic(self.to_string())
                }
            }
        )*
    };
}

describe_atomic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl Describe for Cow<'_, str> {
    fn describe(&self) -> Payload {
        Payload::Atomic(self.to_string())
    }
}

impl Describe for () {
    fn describe(&self) -> Payload {
        Payload::Atomic("()".to_string())
    }
}

// Serializable containers render as structured JSON without a `Structured`
// wrapper at the call site.

impl<T: Serialize> Describe for [T] {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<T: Serialize, const N: usize> Describe for [T; N] {
    fn describe(&self) -> Payload {
        Structured(self.as_slice()).describe()
    }
}

impl<T: Serialize> Describe for Vec<T> {
    fn describe(&self) -> Payload {
        Structured(self.as_slice()).describe()
    }
}

impl<T: Serialize> Describe for BTreeSet<T> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<T: Serialize + Eq + Hash, S: BuildHasher> Describe for HashSet<T, S> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<K: Serialize, V: Serialize> Describe for BTreeMap<K, V> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<K: Serialize + Eq + Hash, V: Serialize, S: BuildHasher> Describe for HashMap<K, V, S> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<T: Serialize> Describe for std::option::Option<T> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<T: Serialize> Describe for crate::Option<T> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

impl<T: Serialize, E: Serialize> Describe for crate::Result<T, E> {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

macro_rules! describe_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Serialize),+> Describe for ($($name,)+) {
                fn describe(&self) -> Payload {
                    Structured(self).describe()
                }
            }
        )*
    };
}

describe_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> Payload {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> Payload {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe(&self) -> Payload {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe(&self) -> Payload {
        (**self).describe()
    }
}

impl Describe for serde_json::Value {
    fn describe(&self) -> Payload {
        match self {
            serde_json::Value::String(text) => Payload::Atomic(text.clone()),
            serde_json::Value::Number(number) => Payload::Atomic(number.to_string()),
            serde_json::Value::Bool(flag) => Payload::Atomic(flag.to_string()),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Payload::Structured(self.to_string()),
        }
    }
}

impl<R> Describe for fn() -> R {
    fn describe(&self) -> Payload {
        Payload::Function
    }
}

impl<A, R> Describe for fn(A) -> R {
    fn describe(&self) -> Payload {
        Payload::Function
    }
}

impl<A, B, R> Describe for fn(A, B) -> R {
    fn describe(&self) -> Payload {
        Payload::Function
    }
}

impl<R> Describe for dyn Fn() -> R {
    fn describe(&self) -> Payload {
        Payload::Function
    }
}

impl<A, R> Describe for dyn Fn(A) -> R {
    fn describe(&self) -> Payload {
        Payload::Function
    }
}

/// Renders any serializable value as compact JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Structured<T>(pub T);

impl<T: Serialize> Describe for Structured<T> {
    fn describe(&self) -> Payload {
        match serde_json::to_string(&self.0) {
            Ok(json) => Payload::Structured(json),
            Err(error) => {
                tracing::warn!(target: crate::error::UNWRAP_TARGET, %error, "payload is not serializable");
                Payload::Atomic(error.to_string())
            }
        }
    }
}

/// Renders any `Display` value through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Describe for Shown<T> {
    fn describe(&self) -> Payload {
        Payload::Atomic(self.0.to_string())
    }
}

/// An opaque named token.
///
/// Symbols compare by name but never reveal it in unwrap messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(&'static str);

impl Symbol {
    /// Creates a symbol with a descriptive name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the symbol's name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Describe for Symbol {
    fn describe(&self) -> Payload {
        Payload::Symbol
    }
}
