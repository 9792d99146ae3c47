//! Function values with an explicit arity.
//!
//! Rust closures have no runtime parameter count and cannot accept a
//! variable number of heterogeneous positional arguments. Every combinator
//! in this crate therefore works on [`Function`], a shared callable that
//! takes an owned [`Arguments`] list and carries:
//!
//! - a process-unique [`FunctionId`] used as its identity,
//! - a declared [`Arity`], the parameter count it was built with,
//! - an optional restricted arity, set only by
//!   [`restrict_arity`](crate::arity::restrict_arity),
//! - an optional name used in diagnostics.
//!
//! Values flowing through a function implement [`Spreadable`]; the crate
//! provides the dynamic [`Value`] type for that purpose.
//!
//! # Examples
//!
//! ```rust
//! use arity_combinators::args;
//! use arity_combinators::function::{Arity, Function, Value};
//!
//! let sum = Function::binary(|first: Value, second: Value| {
//!     Ok(Value::Int(first.as_int()? + second.as_int()?))
//! });
//!
//! assert_eq!(sum.declared_arity(), Arity::Fixed(2));
//! assert_eq!(sum.apply(args![2, 3]), Ok(Value::Int(5)));
//! ```

mod args_macro;
pub mod arguments;
mod value;

pub use arguments::{drop_head, partition, split_at, take_head};
pub use value::{Spreadable, Value};

use crate::error::CombinatorError;
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of arguments stored inline before an argument list spills to the
/// heap.
pub const INLINE_ARGUMENTS: usize = 4;

/// An ordered argument list passed to a [`Function`].
pub type Arguments<V> = SmallVec<[V; INLINE_ARGUMENTS]>;

/// The result of applying a [`Function`].
pub type CallResult<V> = Result<V, CombinatorError>;

type Body<V> = Rc<dyn Fn(Arguments<V>) -> CallResult<V>>;

/// Identity of a [`Function`].
///
/// Minted once per constructed function and shared by its clones. Two
/// independently built functions never share an identity, whatever their
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(u64);

impl FunctionId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "fn#{}", self.0)
    }
}

/// The parameter count a function was declared with.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::function::Arity;
///
/// assert_eq!(Arity::Fixed(2).count(), 2);
/// // Like a rest-parameter function, a variadic one declares no parameters.
/// assert_eq!(Arity::Variadic.count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many named parameters.
    Fixed(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Returns the declared parameter count, `0` for variadic functions.
    pub const fn count(self) -> usize {
        match self {
            Self::Fixed(count) => count,
            Self::Variadic => 0,
        }
    }

    /// Returns `true` for [`Arity::Variadic`].
    pub const fn is_variadic(self) -> bool {
        matches!(self, Self::Variadic)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => write!(formatter, "{count}"),
            Self::Variadic => formatter.write_str("variadic"),
        }
    }
}

/// A shared callable over argument lists of `V`.
///
/// Cloning is cheap and preserves the [`FunctionId`].
pub struct Function<V = Value> {
    id: FunctionId,
    declared: Arity,
    restricted: Option<usize>,
    name: Option<&'static str>,
    body: Body<V>,
}

impl<V: 'static> Function<V> {
    /// Creates a function declared with `arity` parameters.
    ///
    /// The body receives the argument list exactly as supplied; the declared
    /// arity is not enforced (see
    /// [`restrict_arity`](crate::arity::restrict_arity) for that).
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Arguments<V>) -> CallResult<V> + 'static,
    {
        Self::with_declared(Arity::Fixed(arity), body)
    }

    /// Creates a function that accepts any number of arguments.
    pub fn variadic<F>(body: F) -> Self
    where
        F: Fn(Arguments<V>) -> CallResult<V> + 'static,
    {
        Self::with_declared(Arity::Variadic, body)
    }

    fn with_declared<F>(declared: Arity, body: F) -> Self
    where
        F: Fn(Arguments<V>) -> CallResult<V> + 'static,
    {
        Self {
            id: FunctionId::next(),
            declared,
            restricted: None,
            name: None,
            body: Rc::new(body),
        }
    }
}

impl<V: Spreadable> Function<V> {
    /// Creates a one-parameter function.
    ///
    /// A missing argument is replaced by `V::default()`; extra arguments are
    /// ignored.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(V) -> CallResult<V> + 'static,
    {
        Self::new(1, move |arguments| {
            let mut arguments = arguments.into_iter();
            body(arguments.next().unwrap_or_default())
        })
    }

    /// Creates a two-parameter function.
    ///
    /// Missing arguments are replaced by `V::default()`; extra arguments are
    /// ignored.
    pub fn binary<F>(body: F) -> Self
    where
        F: Fn(V, V) -> CallResult<V> + 'static,
    {
        Self::new(2, move |arguments| {
            let mut arguments = arguments.into_iter();
            let first = arguments.next().unwrap_or_default();
            let second = arguments.next().unwrap_or_default();
            body(first, second)
        })
    }
}

impl<V> Function<V> {
    /// Attaches a diagnostic name. Names never affect identity.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub(crate) fn with_restriction(mut self, arity: usize) -> Self {
        self.restricted = Some(arity);
        self
    }

    /// Returns this function's identity.
    pub const fn id(&self) -> FunctionId {
        self.id
    }

    /// Returns the parameter count this function was declared with.
    pub const fn declared_arity(&self) -> Arity {
        self.declared
    }

    /// Returns the arity this function is restricted to, if any.
    pub const fn restricted_arity(&self) -> Option<usize> {
        self.restricted
    }

    /// Returns the diagnostic name, if any.
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Applies the function to an argument list.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body produces.
    pub fn apply(&self, arguments: Arguments<V>) -> CallResult<V> {
        (self.body)(arguments)
    }

    /// Applies the function to any sequence of arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body produces.
    pub fn call<I>(&self, arguments: I) -> CallResult<V>
    where
        I: IntoIterator<Item = V>,
    {
        self.apply(arguments.into_iter().collect())
    }
}

impl<V> Clone for Function<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            declared: self.declared,
            restricted: self.restricted,
            name: self.name,
            body: Rc::clone(&self.body),
        }
    }
}

impl<V> fmt::Debug for Function<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("id", &self.id)
            .field("declared", &self.declared)
            .field("restricted", &self.restricted)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Function<Value>: Send, Sync);
