//! Values that can flow through combinators.

use super::Arguments;
use crate::error::CombinatorError;
use std::collections::BTreeMap;
use std::fmt;

/// A value type usable as both a single argument and an argument list.
///
/// Combinators need to move between the two views: [`parallel_combine`]
/// hands each branch the whole argument list as one aggregate value, and
/// [`compose_two`] spreads a sequence result back into positional
/// arguments. `Default` supplies the value standing in for an argument that
/// was not passed.
///
/// [`parallel_combine`]: crate::compose::parallel_combine
/// [`compose_two`]: crate::compose::compose_two
pub trait Spreadable: Clone + Default + fmt::Debug + 'static {
    /// Packs an argument list into a single aggregate value.
    fn gather(arguments: Arguments<Self>) -> Self;

    /// Unpacks an aggregate value into positional arguments.
    ///
    /// # Errors
    ///
    /// Returns the value unchanged if it is not a sequence.
    fn spread(self) -> Result<Arguments<Self>, Self>;
}

/// A dynamically typed value.
///
/// # Examples
///
/// ```rust
/// use arity_combinators::function::Value;
///
/// let food = Value::record([("type", Value::from("pizza")), ("expirationDays", Value::from(0))]);
/// assert_eq!(food.get("type"), Some(&Value::from("pizza")));
/// assert!(!food.get("expirationDays").is_some_and(Value::is_truthy));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered sequence.
    List(Vec<Self>),
    /// Named fields.
    Record(BTreeMap<String, Self>),
}

impl Value {
    /// Builds a record from `(name, value)` pairs.
    pub fn record<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Record(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Returns the name of this value's kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    fn mismatch(&self, expected: &'static str) -> CombinatorError {
        CombinatorError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Returns the integer held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::TypeMismatch`] for any other kind.
    pub fn as_int(&self) -> Result<i64, CombinatorError> {
        match self {
            Self::Int(value) => Ok(*value),
            other => Err(other.mismatch("int")),
        }
    }

    /// Returns the number held by this value, widening integers.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::TypeMismatch`] for non-numeric kinds.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Result<f64, CombinatorError> {
        match self {
            Self::Float(value) => Ok(*value),
            Self::Int(value) => Ok(*value as f64),
            other => Err(other.mismatch("float")),
        }
    }

    /// Returns the boolean held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::TypeMismatch`] for any other kind.
    pub fn as_bool(&self) -> Result<bool, CombinatorError> {
        match self {
            Self::Bool(value) => Ok(*value),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Returns the string held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::TypeMismatch`] for any other kind.
    pub fn as_str(&self) -> Result<&str, CombinatorError> {
        match self {
            Self::Str(value) => Ok(value),
            other => Err(other.mismatch("string")),
        }
    }

    /// Returns the elements of a list value.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::TypeMismatch`] for any other kind.
    pub fn as_list(&self) -> Result<&[Self], CombinatorError> {
        match self {
            Self::List(values) => Ok(values),
            other => Err(other.mismatch("list")),
        }
    }

    /// Returns a field of a record value, `None` for missing fields and
    /// non-records.
    pub fn get(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Truthiness: unit, `false`, zero, NaN and the empty string are falsy,
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Unit => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0 && !value.is_nan(),
            Self::Str(value) => !value.is_empty(),
            Self::List(_) | Self::Record(_) => true,
        }
    }
}

impl Spreadable for Value {
    fn gather(arguments: Arguments<Self>) -> Self {
        Self::List(arguments.into_vec())
    }

    fn spread(self) -> Result<Arguments<Self>, Self> {
        match self {
            Self::List(values) => Ok(Arguments::from_vec(values)),
            other => Err(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => formatter.write_str("()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => formatter.write_str(value),
            Self::List(values) => {
                formatter.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str("]")
            }
            Self::Record(fields) => {
                formatter.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{name}: {value}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
