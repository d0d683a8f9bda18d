//! Nested expressions such as `ST_SetSRID(ST_Point(%s, %s), 4326)`.

use crate::error::ValuesResult;
use crate::template::Template;
use crate::value::{Arg, Value};

/// A non-scalar argument: a sub-template plus its own arguments.
///
/// The arguments are spliced into the flat bind list; the sub-template is
/// rendered with their placeholders and takes the place of a single value
/// in the block.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression<V = Value> {
    template: Template,
    args: Vec<Arg<V>>,
}

impl<V> Expression<V> {
    /// Create an expression. Never fails; mismatched slots render as
    /// described on [`Template::render`].
    pub fn new<I>(template: impl Into<Template>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg<V>>,
    {
        Self {
            template: template.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an expression whose template has exactly one slot per argument.
    pub fn try_new<I>(template: impl Into<String>, args: I) -> ValuesResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arg<V>>,
    {
        let args: Vec<Arg<V>> = args.into_iter().map(Into::into).collect();
        let template = Template::parse(template, args.len())?;
        Ok(Self { template, args })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn args(&self) -> &[Arg<V>] {
        &self.args
    }

    /// Number of scalar leaves, counted through nested expressions.
    pub fn leaf_count(&self) -> usize {
        self.args.iter().map(Arg::leaf_count).sum()
    }

    pub(crate) fn into_args(self) -> Vec<Arg<V>> {
        self.args
    }
}
