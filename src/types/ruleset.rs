use std::fmt;

use super::rule::Rule;
use super::state::RewriteState;
use crate::error::MarkrewError;
use crate::parse::{self, ParseError};
use crate::rewrite::{self, TimeLimitError};

/// Default pass budget for [`RuleSet::execute()`].
pub const DEFAULT_ITERATION_LIMIT: usize = 100_000;

/// An ordered sequence of [`Rule`]s with the fixpoint execution loop.
///
/// The sequence is fixed after construction; the only execution-scoped
/// mutation is each `(once)` rule flipping its own disabled flag, which is
/// why execution takes `&mut self`. Clone the set to run executions
/// independently; a clone taken after a run carries over any spent
/// `(once)` rules.
///
/// # Example
///
/// ```
/// use markrew::RuleSet;
///
/// let mut rules = RuleSet::from_source("on=\nno=false").unwrap();
/// assert_eq!(rules.execute("onno").unwrap(), "false");
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from source text.
    ///
    /// One rule per line; `#` starts a comment; blank lines are ignored.
    /// Non-empty lines map 1:1 to rules in source order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] identifying the first malformed line;
    /// construction is abandoned wholesale.
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Ok(Self {
            rules: parse::parse(source)?,
        })
    }

    /// Read a rule file and build a rule set from it.
    ///
    /// # Errors
    ///
    /// Returns [`MarkrewError`] on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, MarkrewError> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self::from_source(&source)?)
    }

    /// Rewrite `input` to a fixpoint with the default pass budget
    /// [`DEFAULT_ITERATION_LIMIT`].
    ///
    /// `input` may be a plain string, or a prepared [`RewriteState`] when
    /// the caller wants a describer or tracing attached.
    ///
    /// Each pass scans the rules in declaration order and applies at most
    /// the first one that matches. Execution halts when a full pass applies
    /// nothing, which includes the pass after a `(return)` rule fired.
    ///
    /// # Errors
    ///
    /// Returns [`TimeLimitError`] if the pass budget is exhausted before a
    /// fixpoint is reached.
    pub fn execute(&mut self, input: impl Into<RewriteState>) -> Result<String, TimeLimitError> {
        self.execute_with_limit(input, DEFAULT_ITERATION_LIMIT)
    }

    /// Rewrite `input` to a fixpoint with an explicit pass budget.
    ///
    /// # Errors
    ///
    /// Returns [`TimeLimitError`] after exactly `limit` successful passes
    /// without reaching a fixpoint.
    pub fn execute_with_limit(
        &mut self,
        input: impl Into<RewriteState>,
        limit: usize,
    ) -> Result<String, TimeLimitError> {
        let mut state = input.into();
        rewrite::run(&mut self.rules, &mut state, limit)?;
        Ok(state.into_data())
    }

    /// The parsed rules, in index order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render all rules, one per line, in index order. Disabled rules
    /// carry a `# ` marker after the index.
    #[must_use]
    pub fn render_rules(&self) -> String {
        self.rules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_rules())
    }
}
