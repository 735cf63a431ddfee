use std::fmt;

use super::modes::{MatchMode, ResultMode};
use super::state::RewriteState;
use crate::parse::LineError;

/// One parsed rewrite directive: a literal pattern, a literal replacement,
/// and two modifiers controlling match position and result placement.
///
/// Rules are created by [`RuleSet::from_source()`](crate::RuleSet::from_source)
/// or by parsing a single line with [`Rule::parse()`]. A `(once)` rule
/// permanently disables itself after its first application; the flag resets
/// only by re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
    pub match_mode: MatchMode,
    pub result_mode: ResultMode,
    pub(crate) disabled: bool,
    pub(crate) index: usize,
}

impl Rule {
    /// Parse a single source line.
    ///
    /// Whitespace is stripped first; an all-whitespace line yields
    /// `Ok(None)`. Comments must already have been removed — a stray `#`
    /// is an error at this level.
    ///
    /// # Errors
    ///
    /// Returns [`LineError`] if the line violates the rule grammar.
    pub fn parse(line: &str) -> Result<Option<Self>, LineError> {
        crate::parse::parse_line(line)
    }

    /// Whether this rule has disabled itself (a `(once)` rule that applied).
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Position within the owning rule set. Display only; execution order
    /// is list order, which equals index order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Attempt one match-and-replace against `state`.
    ///
    /// Returns `false` with no side effects when the rule is disabled, the
    /// state is terminated, or the pattern does not match. On success the
    /// state is rewritten, a `(return)` rule terminates the state, and a
    /// `(once)` rule disables itself.
    pub fn try_apply(&mut self, state: &mut RewriteState) -> bool {
        if self.disabled || state.is_terminated() {
            return false;
        }

        let data = state.data();
        let idx = match self.match_mode {
            MatchMode::AtStart => {
                if !data.starts_with(&self.pattern) {
                    return false;
                }
                0
            }
            MatchMode::AtEnd => {
                if !data.ends_with(&self.pattern) {
                    return false;
                }
                data.len() - self.pattern.len()
            }
            // Leftmost match. An empty pattern matches trivially at 0.
            MatchMode::Anywhere | MatchMode::Once => match data.find(&self.pattern) {
                Some(idx) => idx,
                None => return false,
            },
        };

        let left = &data[..idx];
        let right = &data[idx + self.pattern.len()..];
        let new = match self.result_mode {
            ResultMode::InPlace => format!("{left}{}{right}", self.replacement),
            ResultMode::PrependAtStart => format!("{}{left}{right}", self.replacement),
            ResultMode::AppendAtEnd => format!("{left}{right}{}", self.replacement),
            ResultMode::Return => self.replacement.clone(),
        };

        state.set_data(new, self);
        if self.result_mode == ResultMode::Return {
            state.terminate();
        }
        if self.match_mode == MatchMode::Once {
            self.disabled = true;
        }
        true
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. ", self.index)?;
        if self.disabled {
            f.write_str("# ")?;
        }
        if let Some(kw) = self.match_mode.keyword() {
            write!(f, "({kw})")?;
        }
        write!(f, "{}=", self.pattern)?;
        if let Some(kw) = self.result_mode.keyword() {
            write!(f, "({kw})")?;
        }
        f.write_str(&self.replacement)
    }
}
