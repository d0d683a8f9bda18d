//! `%s` slot templates using nom.
//!
//! Block templates (`(%s)`), expression templates (`ST_Point(%s, %s)`) and
//! statement templates (`INSERT INTO t (a, b) VALUES %s`) share one format:
//!
//! ```text
//! ST_SetSRID(ST_Point(%s, %s), 4326)
//! ──────┬───────────  ┬  ┬ ───┬────
//!       │             │  │    └── Literal
//!       │             │  └── Slot 1
//!       │             └── Slot 0
//!       └── Literal
//! ```
//!
//! `%%` is an escaped `%`. Any other `%` sequence is kept as literal text.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    combinator::{map, value},
    multi::fold_many0,
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::error::{ValuesError, ValuesResult};

/// The substitution marker.
pub const SLOT: &str = "%s";

/// Default block template: one parenthesized row.
pub const DEFAULT_BLOCK_TEMPLATE: &str = "(%s)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot,
}

/// A template split into literal text and `%s` slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    slots: usize,
    literal_len: usize,
}

impl Template {
    /// Parse a template, accepting any number of slots.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = match parse_segments(&source) {
            Ok(("", segments)) => segments,
            // Every input is consumed by the segment grammar; keep the text verbatim otherwise.
            _ => vec![Segment::Literal(source.clone())],
        };

        let mut slots = 0;
        let mut literal_len = 0;
        for segment in &segments {
            match segment {
                Segment::Literal(text) => literal_len += text.len(),
                Segment::Slot => slots += 1,
            }
        }

        Self {
            source,
            segments,
            slots,
            literal_len,
        }
    }

    /// Parse a template that must contain exactly `expected` slots.
    pub fn parse(source: impl Into<String>, expected: usize) -> ValuesResult<Self> {
        let template = Self::new(source);
        if template.slots != expected {
            return Err(ValuesError::slots(template.source, expected, template.slots));
        }
        Ok(template)
    }

    /// The template text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of `%s` slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Length in bytes of the rendered literal text, slots excluded.
    pub fn literal_len(&self) -> usize {
        self.literal_len
    }

    /// Render into `out`, letting `fill` write the content of each slot.
    ///
    /// `fill` is called once per slot, left to right, with the slot index.
    pub fn render_with<F>(&self, out: &mut String, mut fill: F)
    where
        F: FnMut(usize, &mut String),
    {
        let mut slot = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot => {
                    fill(slot, out);
                    slot += 1;
                }
            }
        }
    }

    /// Render with positional fragments.
    ///
    /// Slots without a fragment render empty; surplus fragments are ignored.
    pub fn render<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        let fragments_len: usize = fragments
            .iter()
            .take(self.slots)
            .map(|f| f.as_ref().len())
            .sum();
        let mut out = String::with_capacity(self.literal_len + fragments_len);
        self.render_with(&mut out, |slot, out| {
            if let Some(fragment) = fragments.get(slot) {
                out.push_str(fragment.as_ref());
            }
        });
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_TEMPLATE)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}

/// Parse one segment: slot, escaped percent, literal run, or a lone percent.
fn parse_segment(input: &str) -> IResult<&str, Segment> {
    alt((
        value(Segment::Slot, tag(SLOT)),
        map(tag("%%"), |_| Segment::Literal("%".to_string())),
        map(is_not("%"), |s: &str| Segment::Literal(s.to_string())),
        map(tag("%"), |_| Segment::Literal("%".to_string())),
    ))(input)
}

/// Parse all segments, merging adjacent literals.
fn parse_segments(input: &str) -> IResult<&str, Vec<Segment>> {
    fold_many0(parse_segment, Vec::new, |mut acc: Vec<Segment>, segment| {
        match segment {
            Segment::Literal(text) => match acc.last_mut() {
                Some(Segment::Literal(prev)) => prev.push_str(&text),
                _ => acc.push(Segment::Literal(text)),
            },
            Segment::Slot => acc.push(Segment::Slot),
        }
        acc
    })(input)
}
