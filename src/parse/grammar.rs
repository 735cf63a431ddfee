use winnow::combinator::{delimited, eof, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

/// A structurally valid rule line; keywords are not yet validated.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct RawRule<'i> {
    pub(super) kw1: Option<&'i str>,
    pub(super) pattern: &'i str,
    pub(super) kw2: Option<&'i str>,
    pub(super) replacement: &'i str,
}

// Pattern, replacement, and keyword text all exclude the three
// structural characters. Stray parens or separators therefore fail the
// whole-line parse rather than leaking into a rule body.
fn body_char(c: char) -> bool {
    c != '(' && c != ')' && c != '='
}

fn keyword<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('(', take_while(0.., body_char), ')').parse_next(input)
}

/// One side of a rule: an optional `(keyword)` prefix and a literal body.
fn side<'i>(input: &mut &'i str) -> ModalResult<(Option<&'i str>, &'i str)> {
    (opt(keyword), take_while(0.., body_char)).parse_next(input)
}

pub(super) fn rule_line<'i>(input: &mut &'i str) -> ModalResult<RawRule<'i>> {
    let ((kw1, pattern), _, (kw2, replacement), _) = (side, '=', side, eof).parse_next(input)?;
    Ok(RawRule {
        kw1,
        pattern,
        kw2,
        replacement,
    })
}
