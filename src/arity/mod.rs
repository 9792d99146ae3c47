//! Arity tracking.
//!
//! A combinator-produced [`Function`](crate::function::Function) is
//! variadic, so its declared parameter count says nothing about how many
//! arguments it really needs. This module keeps that information:
//!
//! - [`ArityRegistry`]: arity records keyed by
//!   [`FunctionId`](crate::function::FunctionId), with one process-wide
//!   instance.
//! - [`restrict_arity`]: wraps a function so it only accepts a fixed number
//!   of arguments, and records that number for the wrapper.
//! - [`get_arity`]: the arity the spread combinators split on.
//!
//! # Examples
//!
//! ```rust
//! use arity_combinators::args;
//! use arity_combinators::arity::{get_arity, restrict_arity};
//! use arity_combinators::function::{Function, Value};
//!
//! let first: Function = Function::variadic(|arguments| {
//!     Ok(arguments.into_iter().next().unwrap_or_default())
//! });
//! assert_eq!(get_arity(&first), 0);
//!
//! let first = restrict_arity(first, 1);
//! assert_eq!(get_arity(&first), 1);
//! assert_eq!(first.apply(args!["only"]), Ok(Value::from("only")));
//! ```

mod registry;
mod restrict;

pub use registry::ArityRegistry;
pub use restrict::{get_arity, restrict_arity};
