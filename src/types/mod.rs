mod modes;
mod rule;
mod ruleset;
mod state;

pub use modes::{MatchMode, ResultMode};
pub use rule::Rule;
pub use ruleset::{DEFAULT_ITERATION_LIMIT, RuleSet};
pub use state::{Describer, RewriteState};
