//! Function combinators.
//!
//! This module builds new [`Function`](crate::function::Function)s out of
//! existing ones. It enables declarative, point-free programming patterns
//! over argument lists of any length.
//!
//! # Overview
//!
//! - [`compose_one`], [`compose_two`], [`compose!`]: sequential composition
//! - [`iterate_n`]: repeated self-composition
//! - [`parallel_combine`]: two branches over the same arguments
//! - [`spread_combine_one`], [`spread_combine_two`], [`spread_apply`],
//!   [`spread_combine_three`]: two branches over disjoint slices of the
//!   arguments, cut by arity (requires the `spread` feature)
//!
//! # Examples
//!
//! ```
//! use arity_combinators::args;
//! use arity_combinators::compose::{compose_one, iterate_n};
//! use arity_combinators::function::{Function, Value};
//!
//! let square = Function::unary(|x: Value| Ok(Value::Int(x.as_int()? * x.as_int()?)));
//! let sum = Function::binary(|x: Value, y: Value| Ok(Value::Int(x.as_int()? + y.as_int()?)));
//!
//! assert_eq!(compose_one(square.clone(), sum).apply(args![2, 3]), Ok(Value::Int(25)));
//! assert_eq!(iterate_n(3, square).apply(args![5]), Ok(Value::Int(390_625)));
//! ```
//!
//! # Laws
//!
//! - **Composition**: `compose_one(f, g)(x) == f(g(x))`
//! - **Identity**: `iterate_n(0, f)(x) == x`
//! - **Iteration**: `iterate_n(n + 1, f)(x) == f(iterate_n(n, f)(x))`
//! - **Parallel**: `parallel_combine(h, f, g)(args) == h(f(args), g(args))`
//! - **Spread**: `spread_apply(f, g)(args) == [f(args[..a]), g(args[a..a + b])]`
//!   where `a` and `b` are the branch arities

mod compose_macro;
mod parallel;
mod sequential;
#[cfg(feature = "spread")]
mod spread;

pub use parallel::parallel_combine;
pub use sequential::{compose_one, compose_two, identity, iterate_n};
#[cfg(feature = "spread")]
pub use spread::{spread_apply, spread_combine_one, spread_combine_three, spread_combine_two};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
