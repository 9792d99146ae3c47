//! The `compose!` macro for chaining [`compose_one`](crate::compose::compose_one).
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes [`Function`](crate::function::Function)s from right to left.
///
/// `compose!(f, g, h)` is `compose_one(f, compose_one(g, h))`: the rightmost
/// function receives every argument, each function to its left receives the
/// single result of the one before.
///
/// # Examples
///
/// ```
/// use arity_combinators::{args, compose};
/// use arity_combinators::function::{Function, Value};
///
/// let add_one = Function::unary(|x: Value| Ok(Value::Int(x.as_int()? + 1)));
/// let double = Function::unary(|x: Value| Ok(Value::Int(x.as_int()? * 2)));
/// let sum = Function::binary(|x: Value, y: Value| Ok(Value::Int(x.as_int()? + y.as_int()?)));
///
/// // add_one(double(sum(2, 3))) = 11
/// let composed = compose!(add_one, double, sum);
/// assert_eq!(composed.apply(args![2, 3]), Ok(Value::Int(11)));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, ...) = compose_one(f, compose!(g, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose_one(
            $outer_function,
            $crate::compose!($($remaining_functions),+),
        )
    };
}
