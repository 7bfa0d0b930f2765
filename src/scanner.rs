//! The scanner (C2): runs the pattern catalog over text and emits every
//! candidate match, unresolved. Conflict resolution is the resolver's job.

use crate::patterns::{Pattern, PatternCatalog};

/// One pattern firing on a specific span. Candidates are transient: they
/// live only for the duration of a single `mask_text` call.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub pattern_name: &'static str,
    pub type_tag: &'static str,
    pub priority: u32,
    pub replacement_template: &'static str,
}

impl Candidate {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &Candidate) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn from_pattern_match(pattern: &Pattern, m: regex::Match<'_>) -> Self {
        Candidate {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_owned(),
            pattern_name: pattern.name,
            type_tag: pattern.type_tag,
            priority: pattern.priority,
            replacement_template: pattern.replacement_template,
        }
    }
}

/// Runs every pattern in the catalog over `text` in priority order, dropping
/// any match a validator rejects. Does not deduplicate overlapping matches.
pub fn scan(catalog: &PatternCatalog, text: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for pattern in catalog.iter() {
        for m in pattern.regex.find_iter(text) {
            let (accepted, _reason) = pattern.validate(m.as_str());
            if accepted {
                candidates.push(Candidate::from_pattern_match(pattern, m));
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_lambda_arn_and_embedded_account_id() {
        let catalog = PatternCatalog::build();
        let text = "Deploy arn:aws:lambda:us-east-1:123456789012:function:ProcessPayment";
        let candidates = scan(&catalog, text);

        assert!(candidates.iter().any(|c| c.pattern_name == "lambda_arn"));
        // The scanner itself does not suppress the subsumed account id; that
        // is the resolver's job once spans are known to overlap.
        assert!(candidates.iter().any(|c| c.pattern_name == "account_id"));
    }

    #[test]
    fn scan_rejects_private_ip_via_validator() {
        let catalog = PatternCatalog::build();
        let candidates = scan(&catalog, "Private 10.0.0.1 and public 8.8.8.8");

        let public_ips: Vec<&str> = candidates
            .iter()
            .filter(|c| c.pattern_name == "public_ip")
            .map(|c| c.text.as_str())
            .collect();

        assert_eq!(public_ips, vec!["8.8.8.8"]);
    }

    #[test]
    fn scan_returns_nothing_for_malformed_uuid() {
        let catalog = PatternCatalog::build();
        let candidates = scan(&catalog, "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz");
        assert!(candidates.is_empty());
    }
}
