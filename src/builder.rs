//! The bulk insert values builder.
//!
//! Each [`ValuesBuilder::add`] call turns one row of arguments into one
//! block of placeholders and appends the row's scalars to a flat bind list:
//!
//! ```text
//! add(1, "foo")                    -> ($1,$2)                    args: 1, "foo"
//! add(ST_Point(%s, %s)[10.1, 20.2]) -> (ST_Point($3, $4))         args: 10.1, 20.2
//!
//! values()                         -> ($1,$2),\n(ST_Point($3, $4))
//! ```

use crate::config::ValuesConfig;
use crate::placeholder::PlaceholderFormat;
use crate::template::Template;
use crate::value::{Arg, Value};

/// Separator between blocks in [`ValuesBuilder::values`].
pub const BLOCK_SEPARATOR: &str = ",\n";

/// Accumulates rows for a bulk `INSERT ... VALUES`.
///
/// Not meant to be shared between threads without a lock; use one builder
/// per statement.
#[derive(Debug, Clone)]
pub struct ValuesBuilder<V = Value> {
    config: ValuesConfig,
    next: usize,
    args: Vec<V>,
    blocks: Vec<String>,
    sized: bool,
}

impl ValuesBuilder<Value> {
    /// Create a builder with default configuration: `(%s)` blocks, dollar placeholders.
    pub fn new() -> Self {
        Self::with_config(ValuesConfig::default())
    }
}

impl<V> Default for ValuesBuilder<V> {
    fn default() -> Self {
        Self::with_config(ValuesConfig::default())
    }
}

impl<V> ValuesBuilder<V> {
    /// Create a builder from a configuration. Invalid settings fall back to defaults.
    pub fn with_config(config: ValuesConfig) -> Self {
        Self {
            config: config.normalized(),
            next: 1,
            args: Vec::new(),
            blocks: Vec::new(),
            sized: false,
        }
    }

    /// Add one block of arguments.
    ///
    /// An empty row is a no-op: no placeholder is consumed and no block is
    /// emitted.
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg<V>>,
    {
        let values: Vec<Arg<V>> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return;
        }

        let leaves: usize = values.iter().map(Arg::leaf_count).sum();
        self.reserve(leaves);

        let format = self.config.placeholder_format;
        let mut block = String::with_capacity(self.estimate_block_len(&values, leaves));
        let next = &mut self.next;
        self.config
            .template
            .render_with(&mut block, |_, out| write_args(&values, format, next, out));
        self.blocks.push(block);

        for value in values {
            value.flatten_into(&mut self.args);
        }
    }

    /// All arguments added so far, flattened, in placeholder order.
    pub fn args(&self) -> &[V] {
        &self.args
    }

    /// All blocks joined by `",\n"`. Empty when nothing was added.
    pub fn values(&self) -> String {
        let Some((first, rest)) = self.blocks.split_first() else {
            return String::new();
        };

        let size = self.blocks.iter().map(String::len).sum::<usize>()
            + rest.len() * BLOCK_SEPARATOR.len();

        let mut out = String::with_capacity(size);
        out.push_str(first);
        for block in rest {
            out.push_str(BLOCK_SEPARATOR);
            out.push_str(block);
        }
        out
    }

    /// Substitute [`values`](Self::values) into the first `%s` of a statement.
    ///
    /// ```
    /// use qail_values::ValuesBuilder;
    ///
    /// let mut b = ValuesBuilder::new();
    /// b.add([1, 2]);
    /// assert_eq!(
    ///     b.statement("INSERT INTO pairs (a, b) VALUES %s"),
    ///     "INSERT INTO pairs (a, b) VALUES ($1,$2)"
    /// );
    /// ```
    pub fn statement(&self, template: &str) -> String {
        let values = self.values();
        Template::new(template).render(&[values])
    }

    /// Clear accumulated blocks and arguments, keeping the configuration.
    pub fn reset(&mut self) {
        self.next = 1;
        self.args.clear();
        self.blocks.clear();
        self.sized = false;
    }

    /// Individual block texts.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Position the next scalar will be bound to.
    pub fn next_placeholder(&self) -> usize {
        self.next
    }

    /// Effective configuration, after fallbacks.
    pub fn config(&self) -> &ValuesConfig {
        &self.config
    }

    /// Consume the builder, returning the values text and the arguments.
    pub fn into_parts(self) -> (String, Vec<V>) {
        let values = self.values();
        (values, self.args)
    }

    /// Size buffers from the expected block count on the first block after
    /// construction or reset. A hint too large to allocate is ignored.
    fn reserve(&mut self, leaves: usize) {
        let expected = self.config.expected_blocks;
        if self.sized || expected == 0 {
            return;
        }
        self.sized = true;

        let reserved = self
            .args
            .try_reserve(expected.saturating_mul(leaves))
            .and_then(|()| self.blocks.try_reserve(expected));
        match reserved {
            Ok(()) => tracing::debug!(
                "Reserved {} blocks of {} argument(s) each",
                expected,
                leaves
            ),
            Err(e) => tracing::debug!("Ignoring capacity hint of {} blocks: {}", expected, e),
        }
    }

    fn estimate_block_len(&self, values: &[Arg<V>], leaves: usize) -> usize {
        let width = self
            .config
            .placeholder_format
            .max_width(self.next + leaves.saturating_sub(1));
        let literals: usize = values.iter().map(Arg::literal_len).sum();
        self.config.template.literal_len() + literals + leaves * width + values.len()
    }
}

/// Write comma-separated placeholder fragments for a row.
fn write_args<V>(args: &[Arg<V>], format: PlaceholderFormat, next: &mut usize, out: &mut String) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_arg(arg, format, next, out);
    }
}

/// Write the placeholder fragment for one argument, advancing `next` by its leaves.
fn write_arg<V>(arg: &Arg<V>, format: PlaceholderFormat, next: &mut usize, out: &mut String) {
    match arg {
        Arg::Scalar(_) => {
            format.write(*next, out);
            *next += 1;
        }
        Arg::Expr(expr) => {
            let args = expr.args();
            expr.template().render_with(out, |slot, out| {
                if let Some(arg) = args.get(slot) {
                    write_arg(arg, format, next, out);
                }
            });
            // Arguments without a slot are still bound.
            for arg in args.iter().skip(expr.template().slots()) {
                *next += arg.leaf_count();
            }
        }
    }
}
