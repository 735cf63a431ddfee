use thiserror::Error;

use crate::types::{RewriteState, Rule};

/// The pass budget was exhausted before the rewrite reached a fixpoint.
///
/// Signals a non-terminating (or merely very long) rewriting sequence;
/// no partial string is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("iteration limit of {limit} passes exceeded")]
pub struct TimeLimitError {
    /// The pass budget that was hit.
    pub limit: usize,
}

/// Drive `state` to a fixpoint under `rules`.
///
/// A pass scans the rules in order and applies at most the first match;
/// a pass that applies nothing halts the run. Every successful pass counts
/// against `limit`.
pub(crate) fn run(
    rules: &mut [Rule],
    state: &mut RewriteState,
    limit: usize,
) -> Result<(), TimeLimitError> {
    if state.trace_enabled() {
        eprintln!("{}", state.render());
    }

    let mut passes: usize = 0;
    while run_pass(rules, state) {
        passes += 1;
        if passes >= limit {
            return Err(TimeLimitError { limit });
        }
    }
    Ok(())
}

/// First-match-wins: at most one rewrite happens per pass. Disabled rules
/// and a terminated state simply fail their check.
fn run_pass(rules: &mut [Rule], state: &mut RewriteState) -> bool {
    rules.iter_mut().any(|rule| rule.try_apply(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn parse_rules(source: &str) -> Vec<Rule> {
        parse::parse(source).unwrap()
    }

    #[test]
    fn halts_when_no_rule_matches() {
        let mut rules = parse_rules("x=y");
        let mut state = RewriteState::new("abc");
        run(&mut rules, &mut state, 10).unwrap();
        assert_eq!(state.data(), "abc");
    }

    #[test]
    fn applies_one_rule_per_pass() {
        let mut rules = parse_rules("a=b\nb=c");
        let mut state = RewriteState::new("ab");
        // Pass 1 rewrites the 'a' (first match wins), pass 2 and 3 each
        // rewrite one 'b'.
        assert!(run_pass(&mut rules, &mut state));
        assert_eq!(state.data(), "bb");
        assert!(run_pass(&mut rules, &mut state));
        assert_eq!(state.data(), "cb");
        assert!(run_pass(&mut rules, &mut state));
        assert_eq!(state.data(), "cc");
        assert!(!run_pass(&mut rules, &mut state));
    }

    #[test]
    fn limit_is_hit_after_exactly_that_many_passes() {
        let mut rules = parse_rules("a=aa");
        let mut state = RewriteState::new("a");
        let err = run(&mut rules, &mut state, 5).unwrap_err();
        assert_eq!(err, TimeLimitError { limit: 5 });
    }

    #[test]
    fn limit_exactly_at_fixpoint_still_fails() {
        // "aaa" -> "bbb" takes 3 successful passes; a budget of 3 is
        // consumed before the halting pass runs.
        let mut rules = parse_rules("a=b");
        let mut state = RewriteState::new("aaa");
        let err = run(&mut rules, &mut state, 3).unwrap_err();
        assert_eq!(err.limit, 3);

        let mut rules = parse_rules("a=b");
        let mut state = RewriteState::new("aaa");
        run(&mut rules, &mut state, 4).unwrap();
        assert_eq!(state.data(), "bbb");
    }

    #[test]
    fn terminated_state_halts_next_pass() {
        let mut rules = parse_rules("x=(return)DONE\na=b");
        let mut state = RewriteState::new("xa");
        run(&mut rules, &mut state, 10).unwrap();
        assert_eq!(state.data(), "DONE");
        assert!(state.is_terminated());
    }

    #[test]
    fn error_display() {
        let err = TimeLimitError { limit: 100 };
        assert_eq!(err.to_string(), "iteration limit of 100 passes exceeded");
    }
}
