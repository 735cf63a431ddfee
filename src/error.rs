use thiserror::Error;

use crate::parse::ParseError;
use crate::rewrite::TimeLimitError;

/// Unified error type covering parsing, execution, and I/O.
///
/// Returned by convenience methods like [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum MarkrewError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    TimeLimit(#[from] TimeLimitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
