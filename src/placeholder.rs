//! Placeholder dialects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Positional placeholder style for bound values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceholderFormat {
    /// `$1, $2, ...` (PostgreSQL style).
    #[default]
    Dollar,
    /// `?, ?, ...` (MySQL/SQLite style).
    QuestionMark,
}

impl PlaceholderFormat {
    /// Resolve a format by name. Unknown names fall back to [`PlaceholderFormat::Dollar`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "question-mark" | "question_mark" | "questionmark" | "question" | "?" | "mysql"
            | "sqlite" => Self::QuestionMark,
            _ => Self::Dollar,
        }
    }

    /// Canonical name, as accepted by [`PlaceholderFormat::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Dollar => "dollar",
            Self::QuestionMark => "question-mark",
        }
    }

    /// Append the placeholder for 1-based position `index` to `out`.
    pub fn write(self, index: usize, out: &mut String) {
        match self {
            Self::QuestionMark => out.push('?'),
            Self::Dollar => {
                let mut buf = itoa::Buffer::new();
                out.push('$');
                out.push_str(buf.format(index));
            }
        }
    }

    /// Widest placeholder this format emits for positions up to `last`.
    pub fn max_width(self, last: usize) -> usize {
        match self {
            Self::QuestionMark => 1,
            Self::Dollar => 1 + last.checked_ilog10().unwrap_or(0) as usize + 1,
        }
    }
}

impl fmt::Display for PlaceholderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlaceholderFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Serialize for PlaceholderFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PlaceholderFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_dollar() {
        let mut s = String::new();
        PlaceholderFormat::Dollar.write(12, &mut s);
        assert_eq!(s, "$12");
    }

    #[test]
    fn test_write_question_mark() {
        let mut s = String::new();
        PlaceholderFormat::QuestionMark.write(12, &mut s);
        assert_eq!(s, "?");
    }

    #[test]
    fn test_default_is_dollar() {
        assert_eq!(PlaceholderFormat::default(), PlaceholderFormat::Dollar);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PlaceholderFormat::from_name("question-mark"), PlaceholderFormat::QuestionMark);
        assert_eq!(PlaceholderFormat::from_name(" SQLite "), PlaceholderFormat::QuestionMark);
        assert_eq!(PlaceholderFormat::from_name("dollar"), PlaceholderFormat::Dollar);
        assert_eq!(PlaceholderFormat::from_name("colon"), PlaceholderFormat::Dollar);
        assert_eq!("?".parse::<PlaceholderFormat>(), Ok(PlaceholderFormat::QuestionMark));
    }

    #[test]
    fn test_max_width() {
        assert_eq!(PlaceholderFormat::Dollar.max_width(0), 2);
        assert_eq!(PlaceholderFormat::Dollar.max_width(9), 2);
        assert_eq!(PlaceholderFormat::Dollar.max_width(10), 3);
        assert_eq!(PlaceholderFormat::Dollar.max_width(1000), 5);
        assert_eq!(PlaceholderFormat::QuestionMark.max_width(1000), 1);
    }
}
