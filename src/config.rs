//! Builder configuration.
//!
//! Configuration is applied once, at construction. Every field has a
//! default and every invalid setting degrades to that default instead of
//! failing:
//!
//! ```toml
//! # values.toml
//! template = "(%s, now())"
//! placeholder_format = "question-mark"
//! expected_blocks = 500
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ValuesError, ValuesResult};
use crate::placeholder::PlaceholderFormat;
use crate::template::Template;

/// Configuration for a [`ValuesBuilder`](crate::ValuesBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesConfig {
    /// Template wrapping each block; must hold exactly one `%s` slot.
    /// Default: `(%s)`.
    pub template: Template,
    /// Placeholder dialect. Default: dollar.
    pub placeholder_format: PlaceholderFormat,
    /// Expected number of blocks, used only to pre-size buffers.
    pub expected_blocks: usize,
}

impl Default for ValuesConfig {
    fn default() -> Self {
        Self {
            template: Template::default(),
            placeholder_format: PlaceholderFormat::default(),
            expected_blocks: 0,
        }
    }
}

impl ValuesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block template. A template without exactly one slot is
    /// replaced by the default.
    pub fn with_template(mut self, template: impl Into<Template>) -> Self {
        self.template = template.into();
        self.normalized()
    }

    pub fn with_placeholder_format(mut self, format: PlaceholderFormat) -> Self {
        self.placeholder_format = format;
        self
    }

    /// Hint how many blocks will be added. Never affects output.
    pub fn with_expected_blocks(mut self, blocks: usize) -> Self {
        self.expected_blocks = blocks;
        self
    }

    /// Load configuration from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> ValuesResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ValuesError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Replace settings that would break the builder with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.template.slots() != 1 {
            tracing::warn!(
                "Block template '{}' has {} slot(s), falling back to '{}'",
                self.template,
                self.template.slots(),
                Template::default()
            );
            self.template = Template::default();
        }
        self
    }
}
