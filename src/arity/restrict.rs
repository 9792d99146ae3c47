//! Arity restriction and lookup.

use super::ArityRegistry;
use crate::error::CombinatorError;
use crate::function::{Arguments, Function};

/// Wraps `function` so that it only accepts exactly `arity` arguments.
///
/// The returned function:
///
/// - carries `arity` as its [restricted arity](Function::restricted_arity),
///   which [`get_arity`] reports to downstream combinators,
/// - checks every call against the `arity` captured here, failing with
///   [`CombinatorError::ArityMismatch`] on any other argument count,
/// - otherwise forwards the arguments to `function` unchanged.
///
/// Nothing is written to the [global registry](ArityRegistry::global), so
/// dropping the wrapper leaves no state behind. An explicit registry entry
/// for the wrapper changes what [`get_arity`] reports but never the count
/// the wrapper enforces. An arity of `0` yields a function that only
/// accepts an empty argument list.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::args;
/// use arity_combinators::arity::{get_arity, restrict_arity};
/// use arity_combinators::function::{Function, Value};
///
/// let sum_all: Function = Function::<Value>::variadic(|arguments| {
///     let mut total = 0;
///     for argument in &arguments {
///         total += argument.as_int()?;
///     }
///     Ok(Value::Int(total))
/// });
///
/// let sum = restrict_arity(sum_all, 2);
/// assert_eq!(get_arity(&sum), 2);
/// assert_eq!(sum.apply(args![2, 2]), Ok(Value::Int(4)));
/// assert!(sum.apply(args![2, 2, 2]).unwrap_err().is_arity_mismatch());
/// ```
pub fn restrict_arity<V: 'static>(function: Function<V>, arity: usize) -> Function<V> {
    let name = function.name();
    let restricted = Function::variadic(move |arguments: Arguments<V>| {
        if arguments.len() != arity {
            tracing::debug!(
                expected = arity,
                actual = arguments.len(),
                name = name.unwrap_or("<anonymous>"),
                "rejected call with mismatched arity"
            );
            return Err(CombinatorError::arity_mismatch(arity, arguments.len()));
        }
        function.apply(arguments)
    })
    .with_restriction(arity);

    let restricted = match name {
        Some(name) => restricted.named(name),
        None => restricted,
    };

    tracing::trace!(id = %restricted.id(), arity, "restricted function arity");
    restricted
}

/// Returns the arity combinators should assume for `function`.
///
/// In order of precedence: the entry recorded for its identity in the
/// [global registry](ArityRegistry::global), its
/// [restricted arity](Function::restricted_arity), its
/// [declared count](crate::function::Arity::count).
///
/// # Examples
///
/// ```rust
/// use arity_combinators::arity::get_arity;
/// use arity_combinators::function::{Function, Value};
///
/// let pair: Function = Function::new(2, |_| Ok(Value::Unit));
/// assert_eq!(get_arity(&pair), 2);
///
/// let any: Function = Function::variadic(|_| Ok(Value::Unit));
/// assert_eq!(get_arity(&any), 0);
/// ```
pub fn get_arity<V>(function: &Function<V>) -> usize {
    let fallback = function
        .restricted_arity()
        .unwrap_or_else(|| function.declared_arity().count());
    ArityRegistry::global().lookup(function.id(), fallback)
}
