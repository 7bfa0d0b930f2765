//! The token grammar (§6): a stable external contract kept strictly outside
//! any catalog pattern so masked output can never be rescanned and mangled.

use once_cell::sync::Lazy;
use regex::Regex;

/// `AWS_` + uppercase alphanumerics/underscores + `_` + >=3 decimal digits.
/// Every `replacement_template` in the catalog expands into this shape.
static TOKEN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"AWS_[A-Z][A-Z0-9_]*_[0-9]{3,}").expect("token grammar must compile"));

pub fn is_token(text: &str) -> bool {
    match TOKEN_SHAPE.find(text) {
        Some(m) => m.start() == 0 && m.end() == text.len(),
        None => false,
    }
}

/// Finds every token-shaped span in `text`, left to right.
pub fn find_tokens(text: &str) -> impl Iterator<Item = regex::Match<'_>> {
    TOKEN_SHAPE.find_iter(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_well_formed_tokens() {
        assert!(is_token("AWS_LAMBDA_ARN_001"));
        assert!(is_token("AWS_S3_BUCKET_1234"));
    }

    #[test]
    fn rejects_non_tokens() {
        assert!(!is_token("not a token"));
        assert!(!is_token("AWS_LAMBDA_ARN_"));
        assert!(!is_token("aws_lambda_arn_001"));
    }

    #[test]
    fn finds_tokens_embedded_in_prose() {
        let text = "Your bucket AWS_S3_BUCKET_001 is in AWS_VPC_001 and unknown AWS_GHOST_999";
        let found: Vec<&str> = find_tokens(text).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["AWS_S3_BUCKET_001", "AWS_VPC_001", "AWS_GHOST_999"]);
    }
}
