//! Bound values and the argument union.

use serde::{Deserialize, Serialize};

use crate::expression::Expression;

/// Dynamic value type for bulk insert bindings.
///
/// The builder never looks inside a value; this is only the default scalar
/// type, and the one [`bind`](crate::bind) knows how to hand to sqlx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
}

/// One argument passed to [`ValuesBuilder::add`](crate::ValuesBuilder::add).
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<V = Value> {
    /// A leaf value; takes one placeholder.
    Scalar(V),
    /// A nested expression; its leaves take one placeholder each.
    Expr(Expression<V>),
}

impl<V> Arg<V> {
    /// Wrap a scalar value.
    pub fn scalar(value: V) -> Self {
        Arg::Scalar(value)
    }

    /// Number of scalar leaves under this argument.
    pub fn leaf_count(&self) -> usize {
        match self {
            Arg::Scalar(_) => 1,
            Arg::Expr(expr) => expr.leaf_count(),
        }
    }

    /// Literal template text under this argument, in bytes.
    pub(crate) fn literal_len(&self) -> usize {
        match self {
            Arg::Scalar(_) => 0,
            Arg::Expr(expr) => {
                expr.template().literal_len()
                    + expr.args().iter().map(Arg::literal_len).sum::<usize>()
            }
        }
    }

    /// Move every scalar leaf into `out`, depth first, left to right.
    pub(crate) fn flatten_into(self, out: &mut Vec<V>) {
        match self {
            Arg::Scalar(value) => out.push(value),
            Arg::Expr(expr) => {
                for arg in expr.into_args() {
                    arg.flatten_into(out);
                }
            }
        }
    }
}

impl<V> From<Expression<V>> for Arg<V> {
    fn from(expr: Expression<V>) -> Self {
        Arg::Expr(expr)
    }
}

impl From<Value> for Arg<Value> {
    fn from(value: Value) -> Self {
        Arg::Scalar(value)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }

            impl From<$ty> for Arg<Value> {
                fn from(v: $ty) -> Self {
                    Arg::Scalar(Value::from(v))
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => String,
    &str => String,
    Vec<u8> => Bytes,
    &[u8] => Bytes,
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Option<T>> for Arg<Value> {
    fn from(v: Option<T>) -> Self {
        Arg::Scalar(Value::from(v))
    }
}

/// Build a row of [`Arg<Value>`](Arg) from mixed scalars and expressions.
///
/// ```
/// use qail_values::{row, Expression, ValuesBuilder};
///
/// let mut b = ValuesBuilder::new();
/// b.add(row![1, "foo", Expression::new("lower(%s)", ["BAR"])]);
/// assert_eq!(b.values(), "($1,$2,lower($3))");
/// ```
#[macro_export]
macro_rules! row {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::Arg::<$crate::Value>::from($arg)),*]
    };
}
