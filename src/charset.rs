//! Character substitution table.
//!
//! The table maps typographic punctuation and a handful of accented Latin
//! letters to ASCII or numeric HTML entities. Rules run in declaration order,
//! each one a plain replace-all over the output of the rule before it.
//!
//! Matching is done on raw bytes. Patterns are UTF-8, so they only ever match
//! UTF-8 text, and bytes of any other encoding pass through untouched.

use bstr::ByteSlice;

/// A single literal substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Exact text to search for.
    pub input: &'static str,

    /// Text inserted in place of every match.
    pub want: &'static str,
}

impl Rule {
    #[inline]
    pub const fn new(input: &'static str, want: &'static str) -> Self {
        Self { input, want }
    }

    /// Replaces every non-overlapping occurrence of `input` in `line`.
    ///
    /// Returns `None` when the line holds no match, so callers can skip the
    /// allocation.
    fn apply(&self, line: &[u8]) -> Option<Vec<u8>> {
        line.contains_str(self.input).then(|| line.replace(self.input, self.want))
    }
}

/// An ordered, immutable list of [`Rule`]s.
#[derive(Debug, Clone, Copy)]
pub struct Charset {
    rules: &'static [Rule],
}

impl Charset {
    #[inline]
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// Runs every rule over `line` in order.
    ///
    /// Later rules see the output of earlier ones, so `-` becomes `&#45;` and
    /// then `&amp;#45;`.
    pub fn apply(&self, line: &[u8]) -> Vec<u8> {
        self.rules.iter().fold(line.to_vec(), |acc, rule| rule.apply(&acc).unwrap_or(acc))
    }
}

/// Substitutions in application order.
pub const RULES: &[Rule] = &[
    Rule::new("\u{2019}", "'"),
    Rule::new("\u{201D}", "\""),
    Rule::new("\u{201C}", "\""),
    // Shadowed by the three rules above; they never match.
    Rule::new("\u{2019}", "&#39;"),
    Rule::new("\u{201D}", "&#34;"),
    Rule::new("\u{201C}", "&#34;"),
    Rule::new("-", "&#45;"),
    Rule::new("&", "&amp;"),
    Rule::new("à", "&#224;"),
    Rule::new("â", "&#226;"),
    Rule::new("è", "&#232;"),
    Rule::new("é", "&#233;"),
    Rule::new("ê", "&#234;"),
    Rule::new("ë", "&#235;"),
];

/// The process-wide substitution table.
pub static CHARSET: Charset = Charset::new(RULES);
