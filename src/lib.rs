//! A priority-ordered string-rewriting engine with a text-based rule
//! language, in the family of Markov algorithms and Thue.

mod error;
mod parse;
mod rewrite;
mod types;

pub use error::MarkrewError;
pub use parse::{LineError, ParseError, Side, parse};
pub use rewrite::TimeLimitError;
pub use types::{
    DEFAULT_ITERATION_LIMIT, Describer, MatchMode, ResultMode, RewriteState, Rule, RuleSet,
};
