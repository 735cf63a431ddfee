use std::fmt;

use super::rule::Rule;

/// Display-only callback annotating the current string.
pub type Describer = Box<dyn Fn(&str) -> String>;

/// Mutable execution state: the current string plus a terminal flag.
///
/// [`RuleSet::execute()`](crate::RuleSet::execute) wraps a plain string
/// into a fresh state automatically; construct one directly to attach a
/// [describer](Self::with_describer) or enable [tracing](Self::with_trace).
/// A state lives for one execution and is consumed for its final string.
pub struct RewriteState {
    data: String,
    terminated: bool,
    describer: Option<Describer>,
    trace: bool,
}

impl RewriteState {
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            terminated: false,
            describer: None,
            trace: false,
        }
    }

    /// Attach a display-only describer.
    ///
    /// The describer is consulted only by [`render()`](Self::render); it
    /// never influences which rule matches or how it rewrites.
    #[must_use]
    pub fn with_describer(mut self, describer: impl Fn(&str) -> String + 'static) -> Self {
        self.describer = Some(Box::new(describer));
        self
    }

    /// Emit each applied rule and the resulting state on stderr.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The current string value.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Whether a terminal rule has fired. Once true, no rule may match.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Consume the state, returning the final string.
    #[must_use]
    pub fn into_data(self) -> String {
        self.data
    }

    /// The display rendering: `data`, or `data (describer(data))` when a
    /// describer is attached.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.describer {
            Some(describe) => format!("{} ({})", self.data, describe(&self.data)),
            None => self.data.clone(),
        }
    }

    pub(crate) fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Mutation hook for successful rule applications. Trace output is a
    /// side channel only; it must never alter behavior.
    pub(crate) fn set_data(&mut self, new: String, rule: &Rule) {
        if self.trace {
            eprintln!("\t{rule}");
        }
        self.data = new;
        if self.trace {
            eprintln!("{}", self.render());
        }
    }

    pub(crate) fn terminate(&mut self) {
        self.terminated = true;
    }
}

impl From<&str> for RewriteState {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<String> for RewriteState {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for RewriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for RewriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewriteState")
            .field("data", &self.data)
            .field("terminated", &self.terminated)
            .field("describer", &self.describer.is_some())
            .field("trace", &self.trace)
            .finish()
    }
}
