use std::fmt;

use thiserror::Error;

/// Which side of the `=` separator an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors produced when parsing a single rule line.
///
/// Every variant carries the offending text so callers can report it
/// without re-reading the source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("comment marker reached the rule parser in '{text}'")]
    UnexpectedComment { text: String },

    #[error("expected exactly one '=' separator in '{text}'")]
    SeparatorCount { text: String },

    #[error("malformed parentheses in '{text}'")]
    Parentheses { text: String },

    #[error("unknown {side} keyword '({keyword})'")]
    UnknownKeyword { side: Side, keyword: String },
}

/// Parse failure for a block of rule source, locating the offending line.
///
/// Construction of a [`RuleSet`](crate::RuleSet) is abandoned wholesale on
/// the first failing line; partial rule sets are never returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parse error at line {line}: {source}")]
pub struct ParseError {
    /// 0-based index of the offending source line.
    pub line: usize,
    #[source]
    pub source: LineError,
}
