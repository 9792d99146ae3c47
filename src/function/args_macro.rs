//! The `args!` macro for building argument lists.

/// Builds an [`Arguments`](crate::function::Arguments) list, converting each
/// element with [`Into`].
///
/// # Examples
///
/// ```rust
/// use arity_combinators::args;
/// use arity_combinators::function::{Arguments, Value};
///
/// let arguments: Arguments<Value> = args![5, 2, "test", "one"];
/// assert_eq!(arguments.len(), 4);
/// assert_eq!(arguments[2], Value::from("test"));
///
/// let empty: Arguments<Value> = args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::function::Arguments::new()
    };

    ($($argument:expr),+ $(,)?) => {{
        let mut arguments = $crate::function::Arguments::new();
        $(arguments.push(::core::convert::Into::into($argument));)+
        arguments
    }};
}
