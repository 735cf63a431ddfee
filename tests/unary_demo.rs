//! End-to-end exercise of the engine on a non-trivial program: a rule set
//! that reduces words over `a`/`b`/`c` into a unary `o`/`n` notation, with
//! a second rule set acting as a describer that names recognized prefixes.

use markrew::{RewriteState, RuleSet};

fn reducer() -> RuleSet {
    RuleSet::from_source(
        "
        aa=ononnoa
        ab=ononnob
        ac=ononnoc
        oa=oononno
        b=oonnoonnno
        c=ooonnnooonnnno
        noono=onnoo
        nooonno=oonnnoo
        noooonnno=ooonnnnoo
        ononno=true
        oonnoonnno=true
        ooonnnooonnnno=true
        trueo=o
        on=
        no=false",
    )
    .unwrap()
}

fn describer_rules() -> RuleSet {
    RuleSet::from_source(
        "
        (start)ooonnn=(end)C
        (start)true=(end)-true-
        (start)oonn=(end)B
        (start)on=(end)A
        (start)no=(end)'",
    )
    .unwrap()
}

#[test]
fn single_letter_words_reduce_to_true() {
    assert_eq!(reducer().execute("b").unwrap(), "true");
    assert_eq!(reducer().execute("c").unwrap(), "true");
}

#[test]
fn unmatched_word_falls_through_to_false() {
    // "onno" loses its "on" pair, then "no" rewrites to false.
    assert_eq!(reducer().execute("onno").unwrap(), "false");
}

#[test]
fn describer_translates_unary_prefixes() {
    assert_eq!(describer_rules().execute("onno").unwrap(), "A'");
    assert_eq!(describer_rules().execute("true").unwrap(), "-true-");
}

#[test]
fn describer_annotates_state_rendering_only() {
    let state = RewriteState::new("onno").with_describer(|s| {
        describer_rules()
            .execute(s)
            .unwrap_or_else(|_| s.to_owned())
    });
    assert_eq!(state.render(), "onno (A')");

    // The describer has no influence on rewriting itself.
    let annotated = reducer()
        .execute(RewriteState::new("onno").with_describer(|s| {
            describer_rules()
                .execute(s)
                .unwrap_or_else(|_| s.to_owned())
        }))
        .unwrap();
    let plain = reducer().execute("onno").unwrap();
    assert_eq!(annotated, plain);
}

#[test]
fn traced_run_produces_the_same_result() {
    let traced = reducer()
        .execute(RewriteState::new("b").with_trace(true))
        .unwrap();
    assert_eq!(traced, "true");
}

#[test]
fn full_program_is_deterministic_and_terminates() {
    let first = reducer().execute("abba").unwrap();
    let second = reducer().execute("abba").unwrap();
    assert_eq!(first, second);
}
