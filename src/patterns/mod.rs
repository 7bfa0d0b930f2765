//! The pattern catalog (C1): the closed set of recognizers and their
//! metadata. Patterns are immutable after construction and shared read-only
//! across every request handler.

pub mod catalog;
pub mod validators;

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;

use self::validators::ValidatorOutcome;

/// A validator rejects matches a regex alone can't rule out, e.g. private IP
/// ranges or account-id numeric bounds.
pub type Validator = fn(&str) -> ValidatorOutcome;

/// A single named recognizer: a compiled regex plus the metadata needed to
/// mint a token and to arbitrate conflicts with other patterns.
pub struct Pattern {
    pub name: &'static str,
    pub regex: Regex,
    /// Lower values win conflicts first; see SPEC_FULL.md §4.1 for bands.
    pub priority: u32,
    pub type_tag: &'static str,
    /// A `{:03d}`-style template; the `{}` is replaced with a zero-padded
    /// counter value via [`expand_template`].
    pub replacement_template: &'static str,
    pub validator: Option<Validator>,
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("type_tag", &self.type_tag)
            .finish()
    }
}

impl Pattern {
    /// Runs the validator, if any, defaulting to accept when there is none.
    pub fn validate(&self, matched_text: &str) -> ValidatorOutcome {
        match self.validator {
            Some(validate) => validate(matched_text),
            None => (true, "no_validator"),
        }
    }
}

/// Expands a `replacement_template` like `"AWS_LAMBDA_ARN_{:03d}"` with a
/// counter value, zero-padded to at least three digits. Counters beyond 999
/// simply widen the field; the token grammar in `crate::token` accepts that.
pub fn expand_template(template: &str, counter: u64) -> String {
    template.replace("{:03d}", &format!("{:03}", counter))
}

/// The immutable, priority-ordered set of recognizers.
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Builds the catalog described in SPEC_FULL.md §4.1. Regex compile
    /// failure here is fatal at startup, by design: a broken pattern must
    /// never silently disappear from masking coverage.
    pub fn build() -> Self {
        let mut patterns = catalog::patterns();
        // Stable sort: priority ascending, ties broken by name so `iter()`
        // is a deterministic total order independent of declaration order.
        patterns.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.name.cmp(b.name)));
        Self { patterns }
    }

    pub fn lookup(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Iterates patterns in priority-ascending order (most specific first),
    /// stable by name for equal priority.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn types(&self) -> BTreeSet<&'static str> {
        self.patterns.iter().map(|p| p.type_tag).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds_and_is_priority_ordered() {
        let catalog = PatternCatalog::build();
        assert!(catalog.len() >= 50);

        let priorities: Vec<u32> = catalog.iter().map(|p| p.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn pattern_names_are_unique() {
        let catalog = PatternCatalog::build();
        let mut names: Vec<&str> = catalog.iter().map(|p| p.name).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before, "pattern names must be unique");
    }

    #[test]
    fn expand_template_zero_pads_to_three_digits() {
        assert_eq!(expand_template("AWS_LAMBDA_ARN_{:03d}", 1), "AWS_LAMBDA_ARN_001");
        assert_eq!(expand_template("AWS_LAMBDA_ARN_{:03d}", 1234), "AWS_LAMBDA_ARN_1234");
    }

    #[test]
    fn lookup_finds_known_pattern() {
        let catalog = PatternCatalog::build();
        assert!(catalog.lookup("lambda_arn").is_some());
        assert!(catalog.lookup("does_not_exist").is_none());
    }
}
