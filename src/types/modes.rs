/// Where a rule's pattern may match, and whether the rule self-disables.
///
/// Parsed from the optional left-side keyword: none, `(once)`, `(start)`,
/// or `(end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Leftmost occurrence anywhere in the string.
    Anywhere,
    /// Like [`Anywhere`](Self::Anywhere), but the rule disables itself
    /// after one successful application.
    Once,
    /// The pattern must be a prefix of the string.
    AtStart,
    /// The pattern must be a suffix of the string.
    AtEnd,
}

/// How a rule's replacement combines with the text around the match.
///
/// Parsed from the optional right-side keyword: none, `(return)`,
/// `(start)`, or `(end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMode {
    /// Substitute the replacement where the match was.
    InPlace,
    /// The replacement becomes the whole string and the run terminates.
    Return,
    /// Delete the matched span; place the replacement at the very front.
    PrependAtStart,
    /// Delete the matched span; place the replacement at the very end.
    AppendAtEnd,
}

impl MatchMode {
    pub(crate) fn from_keyword(kw: &str) -> Option<Self> {
        match kw {
            "once" => Some(Self::Once),
            "start" => Some(Self::AtStart),
            "end" => Some(Self::AtEnd),
            _ => None,
        }
    }

    /// The keyword rendered in rule display, if any.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Anywhere => None,
            Self::Once => Some("once"),
            Self::AtStart => Some("start"),
            Self::AtEnd => Some("end"),
        }
    }
}

impl ResultMode {
    pub(crate) fn from_keyword(kw: &str) -> Option<Self> {
        match kw {
            "return" => Some(Self::Return),
            "start" => Some(Self::PrependAtStart),
            "end" => Some(Self::AppendAtEnd),
            _ => None,
        }
    }

    /// The keyword rendered in rule display, if any.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::InPlace => None,
            Self::Return => Some("return"),
            Self::PrependAtStart => Some("start"),
            Self::AppendAtEnd => Some("end"),
        }
    }
}
