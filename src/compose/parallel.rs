//! Parallel combination: two branches over the same arguments.

use crate::function::{Function, Spreadable};
use smallvec::smallvec;

/// Applies `first` and `second` to the same arguments and merges the
/// results with `combiner`.
///
/// The argument list is gathered into one aggregate value (see
/// [`Spreadable::gather`]) and each branch receives that aggregate as its
/// only argument. Both branches run before `combiner` is called, whatever
/// the first branch returned; an error from either branch is returned
/// as is. Arity plays no part.
///
/// # Examples
///
/// ```
/// use arity_combinators::args;
/// use arity_combinators::compose::parallel_combine;
/// use arity_combinators::function::{Function, Value};
///
/// let length = Function::unary(|list: Value| Ok(Value::Int(list.as_list()?.len() as i64)));
/// let first = Function::unary(|list: Value| Ok(list.as_list()?[0].clone()));
/// let pair = Function::binary(|a: Value, b: Value| Ok(Value::from(vec![a, b])));
///
/// let summary = parallel_combine(pair, length, first);
/// assert_eq!(
///     summary.apply(args![7, 8, 9]),
///     Ok(Value::from(vec![Value::Int(3), Value::Int(7)]))
/// );
/// ```
pub fn parallel_combine<V: Spreadable>(
    combiner: Function<V>,
    first: Function<V>,
    second: Function<V>,
) -> Function<V> {
    Function::variadic(move |arguments| {
        let aggregate = V::gather(arguments);
        let first_result = first.apply(smallvec![aggregate.clone()])?;
        let second_result = second.apply(smallvec![aggregate])?;
        combiner.apply(smallvec![first_result, second_result])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::CombinatorError;
    use crate::function::Value;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_both_branches_receive_full_list() {
        let echo: Function = Function::unary(Ok);
        let pair = Function::binary(|a: Value, b: Value| Ok(Value::from(vec![a, b])));
        let combined = parallel_combine(pair, echo.clone(), echo);

        let full = Value::from(vec![1, 2]);
        assert_eq!(
            combined.apply(args![1, 2]),
            Ok(Value::from(vec![full.clone(), full]))
        );
    }

    #[test]
    fn test_second_branch_runs_after_falsy_first() {
        let calls = Rc::new(Cell::new(0));
        let counted = {
            let calls = Rc::clone(&calls);
            Function::unary(move |_: Value| {
                calls.set(calls.get() + 1);
                Ok(Value::Bool(true))
            })
        };
        let falsy: Function = Function::unary(|_| Ok(Value::Bool(false)));
        let both = Function::binary(|a: Value, b: Value| {
            Ok(Value::Bool(a.is_truthy() && b.is_truthy()))
        });

        let combined = parallel_combine(both, falsy, counted);
        assert_eq!(combined.apply(args![0]), Ok(Value::Bool(false)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_branch_error_propagates() {
        let failing: Function = Function::unary(|_| Err(CombinatorError::raised("branch")));
        let echo: Function = Function::unary(Ok);
        let pair = Function::binary(|a: Value, b: Value| Ok(Value::from(vec![a, b])));

        let combined = parallel_combine(pair, echo, failing);
        assert_eq!(
            combined.apply(args![1]),
            Err(CombinatorError::raised("branch"))
        );
    }

    #[test]
    fn test_empty_argument_list_gathers_to_empty_aggregate() {
        let length: Function =
            Function::unary(|list: Value| Ok(Value::Int(list.as_list()?.len() as i64)));
        let sum = Function::binary(|a: Value, b: Value| Ok(Value::Int(a.as_int()? + b.as_int()?)));
        let combined = parallel_combine(sum, length.clone(), length);
        assert_eq!(combined.apply(args![]), Ok(Value::Int(0)));
    }
}
