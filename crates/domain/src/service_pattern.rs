use fancy_regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Upper bound on the compiled size of the parts of a pattern handed to the
/// linear engine, keeps huge alternations from being accepted
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Steps the backtracking engine may take for a single match attempt
const BACKTRACK_LIMIT: usize = 1_000_000;

#[derive(Error, Debug)]
pub enum InvalidPatternError {
    #[error("Service pattern: `{pattern}` is not a valid regular expression: {reason}")]
    Malformed { pattern: String, reason: String },
}

/// A case insensitive regular expression matched against the `service_id`
/// of registered services.
///
/// Backtracking syntax (lookaround, back references, atomic groups) is
/// accepted, as it is by the document store's `$regex`. The same source
/// string is handed to the store.
#[derive(Debug, Clone)]
pub struct ServicePattern {
    source: String,
    regex: Regex,
}

impl ServicePattern {
    pub fn new(pattern: &str) -> Result<Self, InvalidPatternError> {
        let regex = RegexBuilder::new(&format!("(?i){}", pattern))
            .delegate_size_limit(PATTERN_SIZE_LIMIT)
            .backtrack_limit(BACKTRACK_LIMIT)
            .build()
            .map_err(|e| InvalidPatternError::Malformed {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Unanchored match, a pattern matches if it is found anywhere in `service_id`.
    /// A match that exceeds the backtrack limit counts as no match.
    pub fn is_match(&self, service_id: &str) -> bool {
        self.regex.is_match(service_id).unwrap_or(false)
    }
}
