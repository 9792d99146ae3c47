//! Spread combination: two branches over disjoint slices of the arguments.
//!
//! Every variant gives the first branch the leading `a1` arguments, where
//! `a1` is the first branch's arity. The variants differ in how the arities
//! are obtained, what the second branch receives and what they do with the
//! two results:
//!
//! | combinator               | split arity                 | result               | restricted to |
//! |--------------------------|-----------------------------|----------------------|---------------|
//! | [`spread_combine_one`]   | declared count of `first`   | `combiner(r1, r2)`   | no            |
//! | [`spread_combine_two`]   | [`get_arity`] of each       | `combiner(r1, r2)`   | `a1 + a2`     |
//! | [`spread_apply`]         | [`get_arity`] of each       | `[r1, r2]`           | `a1 + a2`     |
//! | [`spread_combine_three`] | [`get_arity`] of each       | `combiner(...[r1, r2])` | no         |
//!
//! [`spread_combine_one`] hands the second branch every argument after the
//! first `a1`. The [`get_arity`] variants hand it exactly the next `a2`; as
//! their produced functions are restricted to `a1 + a2`, a call with any
//! other argument count fails with
//! [`ArityMismatch`](crate::CombinatorError::ArityMismatch) before the split
//! runs.

use crate::arity::{get_arity, restrict_arity};
use crate::compose::compose_two;
use crate::function::{Arguments, CallResult, Function, Spreadable, partition, split_at};
use smallvec::smallvec;

/// Splits by the first branch's declared parameter count and merges with
/// `combiner`.
///
/// The second branch receives every argument after the first branch's
/// share. Only [`Arity::count`](crate::function::Arity::count) is consulted,
/// so a variadic or restricted first branch receives no arguments at all;
/// [`spread_combine_two`] handles those.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::spread_combine_one;
/// use arity_combinators::function::{Function, Value};
///
/// let join = Function::binary(|a: Value, b: Value| {
///     Ok(Value::from(format!("{} {}", a.as_str()?, b.as_str()?)))
/// });
/// let echo = Function::unary(Ok);
///
/// let combined = spread_combine_one(join.clone(), echo, join);
/// assert_eq!(
///     combined.apply(args!["fOne", "gOne", "gTwo"]),
///     Ok(Value::from("fOne gOne gTwo"))
/// );
/// ```
pub fn spread_combine_one<V: Spreadable>(
    combiner: Function<V>,
    first: Function<V>,
    second: Function<V>,
) -> Function<V> {
    let first_arity = first.declared_arity().count();
    Function::variadic(move |arguments| {
        let (head, tail) = split_at(arguments, first_arity);
        let first_result = first.apply(head)?;
        let second_result = second.apply(tail)?;
        combiner.apply(smallvec![first_result, second_result])
    })
    .named("spread_combine_one")
}

/// Splits by the registry-aware arity of both branches and merges with
/// `combiner`.
///
/// Both arities are read once, when the combinator is built. The produced
/// function is [restricted](restrict_arity) to their sum, so it reports a
/// usable arity when nested inside another spread combinator.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::arity::get_arity;
/// use arity_combinators::compose::spread_combine_two;
/// use arity_combinators::function::{Function, Value};
///
/// let sum = Function::binary(|a: Value, b: Value| Ok(Value::Int(a.as_int()? + b.as_int()?)));
/// let product = Function::binary(|a: Value, b: Value| Ok(Value::Int(a.as_int()? * b.as_int()?)));
///
/// let combined = spread_combine_two(sum.clone(), sum, product);
/// assert_eq!(get_arity(&combined), 4);
/// assert_eq!(combined.apply(args![1, 2, 3, 4]), Ok(Value::Int(15)));
/// ```
pub fn spread_combine_two<V: Spreadable>(
    combiner: Function<V>,
    first: Function<V>,
    second: Function<V>,
) -> Function<V> {
    let first_arity = get_arity(&first);
    let second_arity = get_arity(&second);
    let combined = Function::variadic(move |arguments| {
        let (first_result, second_result) =
            apply_branches(&first, &second, first_arity, second_arity, arguments)?;
        combiner.apply(smallvec![first_result, second_result])
    })
    .named("spread_combine_two");
    restrict_arity(combined, first_arity + second_arity)
}

/// Splits by the registry-aware arity of both branches and returns both
/// results as a two-element aggregate.
///
/// The produced function is [restricted](restrict_arity) to the sum of the
/// branch arities.
///
/// # Errors
///
/// Calls with more or fewer than `a1 + a2` arguments fail with
/// [`ArityMismatch`](crate::CombinatorError::ArityMismatch); extra arguments
/// are rejected rather than ignored. [`spread_combine_one`] is the variant
/// that passes trailing arguments on to its second branch.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::spread_apply;
/// use arity_combinators::function::{Function, Value};
///
/// let sum = Function::binary(|a: Value, b: Value| Ok(Value::Int(a.as_int()? + b.as_int()?)));
/// let concat = Function::binary(|a: Value, b: Value| {
///     Ok(Value::from(format!("{}{}", a.as_str()?, b.as_str()?)))
/// });
///
/// let both = spread_apply(sum, concat);
/// assert_eq!(
///     both.apply(args![5, 2, "test", "one"]),
///     Ok(Value::from(vec![Value::Int(7), Value::from("testone")]))
/// );
/// assert!(both.apply(args![5, 2, "test", "one", "extra"]).unwrap_err().is_arity_mismatch());
/// ```
pub fn spread_apply<V: Spreadable>(first: Function<V>, second: Function<V>) -> Function<V> {
    let first_arity = get_arity(&first);
    let second_arity = get_arity(&second);
    let applied = Function::variadic(move |arguments| {
        let (first_result, second_result) =
            apply_branches(&first, &second, first_arity, second_arity, arguments)?;
        Ok(V::gather(smallvec![first_result, second_result]))
    })
    .named("spread_apply");
    restrict_arity(applied, first_arity + second_arity)
}

/// [`spread_apply`] followed by [`compose_two`]: the two branch results are
/// spread into `combiner` as its two arguments.
///
/// The outer composition is variadic, so unlike [`spread_combine_two`] the
/// produced function reports an arity of `0`; the inner [`spread_apply`]
/// still rejects argument lists of the wrong length.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::spread_combine_three;
/// use arity_combinators::function::{Function, Value};
///
/// let sum = Function::binary(|a: Value, b: Value| Ok(Value::Int(a.as_int()? + b.as_int()?)));
/// let combined = spread_combine_three(sum.clone(), sum.clone(), sum);
/// assert_eq!(combined.apply(args![1, 2, 3, 4]), Ok(Value::Int(10)));
/// ```
pub fn spread_combine_three<V: Spreadable>(
    combiner: Function<V>,
    first: Function<V>,
    second: Function<V>,
) -> Function<V> {
    compose_two(combiner, spread_apply(first, second)).named("spread_combine_three")
}

fn apply_branches<V>(
    first: &Function<V>,
    second: &Function<V>,
    first_arity: usize,
    second_arity: usize,
    arguments: Arguments<V>,
) -> CallResult<(V, V)> {
    let (head, middle) = partition(arguments, first_arity, second_arity);
    Ok((first.apply(head)?, second.apply(middle)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::arity::ArityRegistry;
    use crate::error::CombinatorError;
    use crate::function::{Arity, Value};

    fn sum() -> Function {
        Function::binary(|a: Value, b: Value| Ok(Value::Int(a.as_int()? + b.as_int()?)))
    }

    fn count() -> Function {
        Function::variadic(|arguments| {
            Ok(Value::Int(i64::try_from(arguments.len()).unwrap_or(i64::MAX)))
        })
    }

    fn pair() -> Function {
        Function::binary(|a: Value, b: Value| Ok(Value::from(vec![a, b])))
    }

    #[test]
    fn test_spread_combine_one_gives_remainder_to_second() {
        let echo: Function = Function::unary(Ok);
        let combined = spread_combine_one(pair(), echo, count());
        assert_eq!(
            combined.apply(args![9, 1, 1, 1, 1]),
            Ok(Value::from(vec![9, 4]))
        );
    }

    #[test]
    fn test_spread_combine_one_ignores_restriction() {
        // The restricted first branch declares no parameters, so it is
        // handed an empty list and rejects it.
        let restricted_sum = restrict_arity(sum(), 2);
        let combined = spread_combine_one(pair(), restricted_sum, count());
        assert_eq!(
            combined.apply(args![1, 2, 3]),
            Err(CombinatorError::arity_mismatch(2, 0))
        );
    }

    #[test]
    fn test_spread_combine_one_is_unrestricted() {
        let combined = spread_combine_one(pair(), sum(), sum());
        assert_eq!(combined.declared_arity(), Arity::Variadic);
        assert_eq!(combined.restricted_arity(), None);
        assert_eq!(get_arity(&combined), 0);
    }

    #[test]
    fn test_spread_combine_two_uses_restricted_arity() {
        let restricted_count = restrict_arity(count(), 3);
        let combined = spread_combine_two(pair(), restricted_count, sum());
        assert_eq!(get_arity(&combined), 5);
        assert_eq!(
            combined.apply(args![0, 0, 0, 4, 5]),
            Ok(Value::from(vec![3, 9]))
        );
    }

    #[test]
    fn test_spread_combine_two_consults_registry() {
        let variadic_count = count();
        ArityRegistry::global().record(variadic_count.id(), 2);
        let combined = spread_combine_two(pair(), variadic_count, count());

        // Split arities were captured at construction: 2 for the recorded
        // branch and 0 for the plain variadic one.
        assert_eq!(
            combined.apply(args![1, 1]),
            Ok(Value::from(vec![2, 0]))
        );
    }

    #[test]
    fn test_spread_combine_two_rejects_extra_arguments() {
        let combined = spread_combine_two(pair(), sum(), sum());
        assert_eq!(
            combined.apply(args![1, 2, 3, 4, 5]),
            Err(CombinatorError::arity_mismatch(4, 5))
        );
    }

    #[test]
    fn test_spread_combinators_nest() {
        let inner = spread_combine_two(sum(), sum(), sum());
        let outer = spread_combine_two(pair(), inner, sum());
        assert_eq!(get_arity(&outer), 6);
        assert_eq!(
            outer.apply(args![1, 2, 3, 4, 5, 6]),
            Ok(Value::from(vec![10, 11]))
        );
    }

    #[test]
    fn test_spread_apply_restricted_to_total_arity() {
        let applied = spread_apply(sum(), sum());
        assert_eq!(applied.restricted_arity(), Some(4));
        assert_eq!(
            applied.apply(args![1, 2, 3, 4]),
            Ok(Value::from(vec![3, 7]))
        );
        assert!(applied.apply(args![1, 2, 3]).unwrap_err().is_arity_mismatch());
    }

    #[test]
    fn test_spread_apply_rejects_extra_arguments() {
        let applied = spread_apply(sum(), sum());
        assert_eq!(
            applied.apply(args![1, 2, 3, 4, 5]),
            Err(CombinatorError::arity_mismatch(4, 5))
        );
    }

    #[test]
    fn test_apply_branches_drops_trailing_arguments() {
        let (first, second) = apply_branches(&count(), &count(), 2, 1, args![1, 2, 3, 4, 5])
            .unwrap();
        assert_eq!(first, Value::Int(2));
        assert_eq!(second, Value::Int(1));
    }

    #[test]
    fn test_spread_combine_three_spreads_pair_into_combiner() {
        let combined = spread_combine_three(pair(), sum(), sum());
        assert_eq!(combined.declared_arity(), Arity::Variadic);
        assert_eq!(
            combined.apply(args![1, 1, 2, 2]),
            Ok(Value::from(vec![2, 4]))
        );
        assert!(combined.apply(args![1]).unwrap_err().is_arity_mismatch());
    }
}
