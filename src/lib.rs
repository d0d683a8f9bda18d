//! # qail-values — bulk INSERT VALUES blocks
//!
//! > **One row in, one block out.**
//!
//! Builds the `VALUES` part of a bulk insert: a list of placeholder blocks
//! and the flat list of values to bind, numbered in the same order.
//!
//! ## Quick Example
//!
//! ```
//! use qail_values::prelude::*;
//!
//! let mut b = ValuesBuilder::new();
//! b.add(row![1, "foo"]);
//! b.add(row![2, "bar"]);
//!
//! assert_eq!(b.values(), "($1,$2),\n($3,$4)");
//! assert_eq!(b.args().len(), 4);
//! ```
//!
//! ## Expressions
//!
//! Non-scalar arguments carry their own template. Their values are spliced
//! into the bind list; their placeholders fill the template.
//!
//! ```
//! use qail_values::prelude::*;
//!
//! let mut b = ValuesBuilder::new();
//! b.add([Expression::new("ST_SetSRID(ST_Point(%s, %s), 4326)", [10.1, 20.2])]);
//!
//! assert_eq!(b.values(), "(ST_SetSRID(ST_Point($1, $2), 4326))");
//! assert_eq!(b.args(), &[Value::Float(10.1), Value::Float(20.2)]);
//! ```
//!
//! ## Placeholders
//!
//! | Format         | Output        | Databases       |
//! |----------------|---------------|-----------------|
//! | `Dollar`       | `$1, $2, ...` | PostgreSQL      |
//! | `QuestionMark` | `?, ?, ...`   | MySQL, SQLite   |

pub mod bind;
pub mod builder;
pub mod config;
pub mod error;
pub mod expression;
pub mod placeholder;
pub mod template;
pub mod value;

pub use builder::ValuesBuilder;
pub use config::ValuesConfig;
pub use error::{ValuesError, ValuesResult};
pub use expression::Expression;
pub use placeholder::PlaceholderFormat;
pub use template::Template;
pub use value::{Arg, Value};

pub mod prelude {
    pub use crate::bind::{bind_values, AnyQuery};
    pub use crate::builder::ValuesBuilder;
    pub use crate::config::ValuesConfig;
    pub use crate::error::*;
    pub use crate::expression::Expression;
    pub use crate::placeholder::PlaceholderFormat;
    pub use crate::row;
    pub use crate::template::Template;
    pub use crate::value::{Arg, Value};
}
