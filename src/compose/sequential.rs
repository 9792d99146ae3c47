//! Sequential composition and iteration.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`compose_one`]: `f(g(...))`, feeding `g`'s single result to `f`
//! - [`compose_two`]: `f(...g(...))`, spreading `g`'s sequence result into `f`
//! - [`iterate_n`]: the `n`-fold self-composition of a unary function
//!
//! None of these consult arity; the produced functions are variadic.

use crate::error::CombinatorError;
use crate::function::{Function, Spreadable};
use smallvec::smallvec;

/// Returns the value unchanged.
///
/// [`iterate_n`] with a count of zero yields this function lifted into a
/// [`Function`].
///
/// # Examples
///
/// ```
/// use arity_combinators::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes `outer` after `inner`.
///
/// The result calls `inner` with every argument it receives, then calls
/// `outer` with `inner`'s result as its only argument. Neither arity is
/// checked.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::compose_one;
/// use arity_combinators::function::{Function, Value};
///
/// let square = Function::unary(|x: Value| Ok(Value::Int(x.as_int()? * x.as_int()?)));
/// let sum = Function::binary(|x: Value, y: Value| Ok(Value::Int(x.as_int()? + y.as_int()?)));
///
/// let square_of_sum = compose_one(square, sum);
/// assert_eq!(square_of_sum.apply(args![2, 3]), Ok(Value::Int(25)));
/// ```
pub fn compose_one<V: 'static>(outer: Function<V>, inner: Function<V>) -> Function<V> {
    Function::variadic(move |arguments| {
        let intermediate = inner.apply(arguments)?;
        outer.apply(smallvec![intermediate])
    })
}

/// Composes `outer` after `inner`, spreading `inner`'s result.
///
/// The result calls `inner` with every argument it receives. `inner` must
/// produce a sequence, whose elements become `outer`'s argument list. If
/// `outer` expects a single sequence argument it still receives the
/// elements spread out.
///
/// # Errors
///
/// Calls fail with [`CombinatorError::NotSpreadable`] when `inner` returns
/// something that is not a sequence.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::compose_two;
/// use arity_combinators::function::{Function, Value};
///
/// let squares = Function::binary(|x: Value, y: Value| {
///     Ok(Value::from(vec![x.as_int()? * x.as_int()?, y.as_int()? * y.as_int()?]))
/// });
/// let sum = Function::binary(|x: Value, y: Value| Ok(Value::Int(x.as_int()? + y.as_int()?)));
///
/// let sum_of_squares = compose_two(sum, squares);
/// assert_eq!(sum_of_squares.apply(args![2, 3]), Ok(Value::Int(13)));
/// ```
pub fn compose_two<V: Spreadable>(outer: Function<V>, inner: Function<V>) -> Function<V> {
    Function::variadic(move |arguments| {
        let intermediate = inner.apply(arguments)?;
        let spread = intermediate
            .spread()
            .map_err(|value| CombinatorError::not_spreadable(&value))?;
        outer.apply(spread)
    })
}

/// Returns the `count`-fold self-composition of `function`.
///
/// `iterate_n(0, f)` is the identity function. For `count > 0` the result
/// behaves as `compose_one(f, iterate_n(count - 1, f))`: it takes its first
/// argument and feeds it through `function` `count` times, stopping at the
/// first error. The applications run in a loop, so the stack depth does not
/// grow with `count`.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::iterate_n;
/// use arity_combinators::function::{Function, Value};
///
/// let square = Function::unary(|x: Value| Ok(Value::Int(x.as_int()? * x.as_int()?)));
///
/// assert_eq!(iterate_n(3, square.clone()).apply(args![5]), Ok(Value::Int(390_625)));
/// assert_eq!(iterate_n(0, square).apply(args![5]), Ok(Value::Int(5)));
/// ```
pub fn iterate_n<V: Spreadable>(count: usize, function: Function<V>) -> Function<V> {
    if count == 0 {
        return Function::unary(|value| Ok(identity(value))).named("identity");
    }
    Function::variadic(move |arguments| {
        let mut value = arguments.into_iter().next().unwrap_or_default();
        for _ in 0..count {
            value = function.apply(smallvec![value])?;
        }
        Ok(value)
    })
    .named("iterate_n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::function::{Arity, Value};

    fn increment() -> Function {
        Function::unary(|x: Value| Ok(Value::Int(x.as_int()? + 1)))
    }

    fn failing() -> Function {
        Function::variadic(|_| Err(CombinatorError::raised("boom")))
    }

    #[test]
    fn test_compose_one_is_variadic() {
        let composed = compose_one(increment(), increment());
        assert_eq!(composed.declared_arity(), Arity::Variadic);
    }

    #[test]
    fn test_compose_one_propagates_inner_error() {
        let composed = compose_one(increment(), failing());
        assert_eq!(
            composed.apply(args![1]),
            Err(CombinatorError::raised("boom"))
        );
    }

    #[test]
    fn test_compose_two_rejects_scalar_result() {
        let composed = compose_two(increment(), increment());
        assert_eq!(
            composed.apply(args![1]),
            Err(CombinatorError::NotSpreadable {
                found: "Int(2)".to_string()
            })
        );
    }

    #[test]
    fn test_compose_two_spreads_sequence_argument() {
        let count: Function = Function::variadic(|arguments| {
            Ok(Value::Int(i64::try_from(arguments.len()).unwrap_or(i64::MAX)))
        });
        let wrap: Function =
            Function::unary(|list: Value| Ok(Value::from(vec![list])));
        let three_items: Function =
            Function::variadic(|_| Ok(Value::from(vec![1, 2, 3])));

        // The inner list arrives as one argument after unwrapping a level.
        let composed = compose_two(count.clone(), compose_one(wrap, three_items.clone()));
        assert_eq!(composed.apply(args![]), Ok(Value::Int(1)));

        // Without the extra level, the sequence is spread.
        let composed = compose_two(count, three_items);
        assert_eq!(composed.apply(args![]), Ok(Value::Int(3)));
    }

    #[test]
    fn test_iterate_n_zero_is_identity() {
        let identity_function = iterate_n(0, failing());
        assert_eq!(identity_function.apply(args!["x"]), Ok(Value::from("x")));
        assert_eq!(identity_function.name(), Some("identity"));
    }

    #[test]
    fn test_iterate_n_counts_applications() {
        assert_eq!(
            iterate_n(10, increment()).apply(args![0]),
            Ok(Value::Int(10))
        );
    }

    #[test]
    fn test_iterate_n_large_count_runs_without_deep_nesting() {
        assert_eq!(
            iterate_n(200_000, increment()).apply(args![0]),
            Ok(Value::Int(200_000))
        );
    }

    #[test]
    fn test_iterate_n_matches_nested_compose_one() {
        let nested = compose_one(increment(), compose_one(increment(), increment()));
        assert_eq!(
            iterate_n(3, increment()).apply(args![4, 99]),
            nested.apply(args![4, 99])
        );
    }

    #[test]
    fn test_iterate_n_stops_at_first_error() {
        let iterated = iterate_n(3, failing());
        assert_eq!(
            iterated.apply(args![0]),
            Err(CombinatorError::raised("boom"))
        );
    }
}
