//! The masking engine (C5) and unmasking engine (C6): the top-level
//! `mask_text`/`unmask_text` operations that orchestrate the scanner,
//! resolver, and mapping store.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::patterns::{expand_template, PatternCatalog};
use crate::resolver;
use crate::scanner;
use crate::store::{MappingStore, StoreError};
use crate::token;

/// The set of `token -> original` mappings created or re-used during one
/// `mask_text` call. Purely informational: the store remains authoritative.
pub type MaskingDelta = BTreeMap<String, String>;

pub struct MaskingEngine {
    catalog: PatternCatalog,
    store: Arc<dyn MappingStore>,
    default_ttl: Option<Duration>,
}

impl MaskingEngine {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self::with_ttl(store, None)
    }

    /// Mints new mappings with `default_ttl` (`store.save`'s TTL), per
    /// `StoreSettings::default_ttl`. `None` means mappings never expire.
    pub fn with_ttl(store: Arc<dyn MappingStore>, default_ttl: Option<Duration>) -> Self {
        Self {
            catalog: PatternCatalog::build(),
            store,
            default_ttl,
        }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Masks every recognized identifier in `text`, returning the rewritten
    /// text and the delta of tokens minted or reused for this call.
    ///
    /// Empty input is a no-op (§7: "input malformed" is not an error).
    pub async fn mask_text(&self, text: &str) -> Result<(String, MaskingDelta), StoreError> {
        if text.is_empty() {
            return Ok((String::new(), MaskingDelta::new()));
        }

        let candidates = scanner::scan(&self.catalog, text);
        if candidates.is_empty() {
            return Ok((text.to_owned(), MaskingDelta::new()));
        }

        let mut matches = resolver::resolve(candidates);
        // Reverse-sorted by start so splicing from the tail never disturbs
        // indices of matches we haven't rewritten yet.
        matches.sort_by(|a, b| b.start.cmp(&a.start));

        let mut masked = text.to_owned();
        let mut delta = MaskingDelta::new();

        for m in matches {
            let existing = self.store.lookup_token(&m.text).await?;
            let token = match existing {
                Some(token) => token,
                None => {
                    let counter = self.store.next_counter(m.type_tag).await?;
                    let token = expand_template(m.replacement_template, counter);
                    self.store.save(&token, &m.text, self.default_ttl).await?;
                    token
                }
            };

            masked.replace_range(m.start..m.end, &token);
            delta.insert(token, m.text);
        }

        Ok((masked, delta))
    }
}

pub struct UnmaskingEngine {
    store: Arc<dyn MappingStore>,
}

impl UnmaskingEngine {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Restores originals for every token the store recognizes in `text`.
    /// Tokens the store doesn't know about (never minted, or TTL-expired)
    /// are left in place, not an error.
    pub async fn unmask_text(&self, text: &str) -> Result<String, StoreError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let spans: Vec<(usize, usize, String)> = token::find_tokens(text)
            .map(|m| (m.start(), m.end(), m.as_str().to_owned()))
            .collect();

        if spans.is_empty() {
            return Ok(text.to_owned());
        }

        let mut result = text.to_owned();
        for (start, end, token) in spans.into_iter().rev() {
            if let Some(original) = self.store.lookup_original(&token).await? {
                result.replace_range(start..end, &original);
            }
        }

        Ok(result)
    }
}
