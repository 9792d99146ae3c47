//! Slicing helpers for argument lists.
//!
//! The spread combinators cut one flat argument list into consecutive
//! segments sized by each branch's arity. Indices past the end of the list
//! are clamped, so none of these helpers can fail.

use super::Arguments;

/// Splits `arguments` into the first `index` elements and the rest.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::args;
/// use arity_combinators::function::{split_at, Value};
///
/// let (head, tail) = split_at::<Value>(args![1, 2, 3], 1);
/// assert_eq!(head.as_slice(), &[Value::Int(1)]);
/// assert_eq!(tail.as_slice(), &[Value::Int(2), Value::Int(3)]);
/// ```
pub fn split_at<V>(mut arguments: Arguments<V>, index: usize) -> (Arguments<V>, Arguments<V>) {
    let index = index.min(arguments.len());
    let tail = arguments.drain(index..).collect();
    (arguments, tail)
}

/// Keeps the first `count` elements.
pub fn take_head<V>(mut arguments: Arguments<V>, count: usize) -> Arguments<V> {
    arguments.truncate(count);
    arguments
}

/// Discards the first `count` elements.
pub fn drop_head<V>(arguments: Arguments<V>, count: usize) -> Arguments<V> {
    split_at(arguments, count).1
}

/// Cuts `arguments` into `[0, first)` and `[first, first + second)`.
///
/// Elements at or beyond `first + second` are dropped.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::args;
/// use arity_combinators::function::{partition, Value};
///
/// let (head, middle) = partition::<Value>(args![1, 2, 3, 4, 5], 2, 2);
/// assert_eq!(head.len(), 2);
/// assert_eq!(middle.as_slice(), &[Value::Int(3), Value::Int(4)]);
/// ```
pub fn partition<V>(
    arguments: Arguments<V>,
    first: usize,
    second: usize,
) -> (Arguments<V>, Arguments<V>) {
    let (head, rest) = split_at(arguments, first);
    (head, take_head(rest, second))
}
