//! Hand accumulated arguments to sqlx.
//!
//! This module only binds; executing the statement is up to the caller.
//!
//! ```rust,ignore
//! let sql = b.statement("INSERT INTO points (x, y) VALUES %s");
//! let result = b.bind(sqlx::query(&sql)).execute(&pool).await?;
//! ```

use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::Any;

use crate::builder::ValuesBuilder;
use crate::value::Value;

/// A query against the `Any` driver.
pub type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

/// Bind each value onto `query`, in order.
///
/// `Null` binds a typed `NULL` so later positions keep their numbers.
pub fn bind_values<'q>(mut query: AnyQuery<'q>, values: &'q [Value]) -> AnyQuery<'q> {
    for value in values {
        query = match value {
            Value::Null => query.bind(None::<i64>),
            Value::Bool(v) => query.bind(*v),
            Value::Int(v) => query.bind(*v),
            Value::Float(v) => query.bind(*v),
            Value::String(v) => query.bind(v.as_str()),
            Value::Bytes(v) => query.bind(v.as_slice()),
        };
    }
    query
}

impl ValuesBuilder<Value> {
    /// Bind all accumulated arguments onto `query`.
    pub fn bind<'q>(&'q self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        bind_values(query, self.args())
    }
}
