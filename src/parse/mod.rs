mod error;
mod grammar;

pub use error::{LineError, ParseError, Side};

use winnow::Parser;

use crate::types::{MatchMode, ResultMode, Rule};

/// Parse a block of rule source into rules, in source order.
///
/// `#` starts a comment that runs to the end of the line; blank lines
/// (after comment stripping) are ignored. Whitespace is insignificant
/// everywhere, including inside patterns and replacements.
///
/// # Errors
///
/// Returns [`ParseError`] with the 0-based index of the first malformed
/// line; no partial result is produced.
pub fn parse(source: &str) -> Result<Vec<Rule>, ParseError> {
    let mut rules = Vec::new();
    for (line, raw) in source.lines().enumerate() {
        let uncommented = match raw.split_once('#') {
            Some((head, _)) => head,
            None => raw,
        };
        match parse_line(uncommented) {
            Ok(Some(mut rule)) => {
                rule.index = rules.len();
                rules.push(rule);
            }
            Ok(None) => {}
            Err(err) => return Err(ParseError { line, source: err }),
        }
    }
    Ok(rules)
}

/// Parse a single comment-free rule line. `Ok(None)` for a blank line.
pub(crate) fn parse_line(line: &str) -> Result<Option<Rule>, LineError> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Ok(None);
    }
    if stripped.contains('#') {
        return Err(LineError::UnexpectedComment { text: stripped });
    }

    let raw = grammar::rule_line
        .parse(stripped.as_str())
        .map_err(|_| classify(&stripped))?;

    let match_mode = match raw.kw1 {
        None => MatchMode::Anywhere,
        Some(kw) => MatchMode::from_keyword(kw).ok_or_else(|| LineError::UnknownKeyword {
            side: Side::Left,
            keyword: kw.to_owned(),
        })?,
    };
    let result_mode = match raw.kw2 {
        None => ResultMode::InPlace,
        Some(kw) => ResultMode::from_keyword(kw).ok_or_else(|| LineError::UnknownKeyword {
            side: Side::Right,
            keyword: kw.to_owned(),
        })?,
    };

    Ok(Some(Rule {
        pattern: raw.pattern.to_owned(),
        replacement: raw.replacement.to_owned(),
        match_mode,
        result_mode,
        disabled: false,
        index: 0,
    }))
}

/// Turn a structural grammar failure into the specific line error.
fn classify(text: &str) -> LineError {
    if text.matches('=').count() == 1 {
        LineError::Parentheses {
            text: text.to_owned(),
        }
    } else {
        LineError::SeparatorCount {
            text: text.to_owned(),
        }
    }
}
