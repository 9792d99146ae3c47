//! # arity-combinators
//!
//! Function combinators that compose, parallelize and restrict functions of
//! any arity, with explicit arity tracking.
//!
//! ## Overview
//!
//! Rust closures cannot report how many parameters they take, and a
//! function produced by composition has no meaningful fixed parameter count
//! anyway. This library therefore works on [`Function`](function::Function)
//! values that carry their arity, and keeps an
//! [`ArityRegistry`](arity::ArityRegistry) that the spread combinators
//! consult to decide where to cut an argument list.
//!
//! - **Functions**: [`Function`](function::Function), [`Value`](function::Value),
//!   argument lists and slicing helpers
//! - **Arity**: [`restrict_arity`](arity::restrict_arity),
//!   [`get_arity`](arity::get_arity), [`ArityRegistry`](arity::ArityRegistry)
//! - **Composition**: `compose_one`, `compose_two`, `iterate_n`, `compose!`
//! - **Parallel and spread combination**: `parallel_combine`,
//!   `spread_combine_one`, `spread_combine_two`, `spread_apply`,
//!   `spread_combine_three`
//!
//! ## Feature Flags
//!
//! - `compose`: sequential and parallel combinators (default)
//! - `spread`: the spread combinator family (default)
//! - `fxhash`: faster hashing for the arity registry
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arity_combinators::prelude::*;
//! use arity_combinators::args;
//!
//! let sum = Function::binary(|x: Value, y: Value| Ok(Value::Int(x.as_int()? + y.as_int()?)));
//!
//! let both = spread_apply(sum.clone(), sum);
//! assert_eq!(get_arity(&both), 4);
//! assert_eq!(both.apply(args![1, 2, 3, 4]), Ok(Value::from(vec![3, 7])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use arity_combinators::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arity::*;
    pub use crate::error::*;
    pub use crate::function::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod arity;
mod error;
pub mod function;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::{ArityMismatchError, CombinatorError};
