//! Handle extraction core
//!
//! Scans arbitrary text for fediverse handles in two surface forms, the
//! inline `@user@instance` form and the profile URL form
//! `https://instance/@user`, then normalizes and deduplicates them.
//!
//! Cleanup follows the strict policy: candidates with extra `@`
//! separators are rejected outright and disallowed characters are
//! stripped from both parts. Handles that differ only in case or in
//! Unicode normalization form are kept as distinct entries; that is a
//! known limitation of this tool, not something it tries to repair.

pub mod handle;

pub use handle::Handle;

use log::debug;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

pub struct HandleExtractor {
    inline_regex: Regex,
    profile_url_regex: Regex,
    profile_url_parts: Regex,
}

impl Default for HandleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleExtractor {
    pub fn new() -> Self {
        // Local part: word chars, dots, hyphens. Domain: same, but must
        // end in a word char so trailing sentence punctuation stays out.
        let inline_regex = Regex::new(r"@[\w.-]+@[\w.-]*\w")
            .expect("Invalid inline handle regex");

        // Host and local part are maximal non-slash, non-whitespace runs.
        let profile_url_regex = Regex::new(r"https?://[^/\s]+/@[^/\s]+/?")
            .expect("Invalid profile URL regex");

        let profile_url_parts = Regex::new(r"^https?://([^/\s]+)/@([^/\s]+)/?$")
            .expect("Invalid profile URL capture regex");

        Self {
            inline_regex,
            profile_url_regex,
            profile_url_parts,
        }
    }

    /// Extract the deduplicated set of canonical handles from a text blob.
    ///
    /// This is the whole pipeline: candidate recognition, strict cleanup,
    /// deduplication. Text with nothing handle-shaped in it yields an
    /// empty set; extraction itself never fails.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut handles = BTreeSet::new();

        for candidate in self.candidates(text) {
            match Handle::from_candidate(&candidate) {
                Some(handle) => {
                    handles.insert(handle.canonical());
                }
                None => debug!("Dropping malformed candidate: {}", candidate),
            }
        }

        handles
    }

    /// Candidate recognition: both rules run independently over the whole
    /// text and their results are unioned by exact string equality.
    ///
    /// Profile URL matches are converted to canonical handle form here;
    /// inline matches are kept as matched. Overlapping matches (a literal
    /// handle embedded in a URL path) may produce two candidates for the
    /// same text span; cleanup filters the malformed one downstream.
    pub fn candidates(&self, text: &str) -> HashSet<String> {
        let mut candidates = HashSet::new();

        for m in self.inline_regex.find_iter(text) {
            candidates.insert(m.as_str().to_string());
        }

        for m in self.profile_url_regex.find_iter(text) {
            if let Some(converted) = self.convert_profile_url(m.as_str()) {
                candidates.insert(converted);
            }
        }

        candidates
    }

    /// Convert a profile URL to canonical handle form, e.g.
    /// `https://instan.ce/@user/` becomes `@user@instan.ce`.
    pub fn convert_profile_url(&self, url: &str) -> Option<String> {
        let caps = self.profile_url_parts.captures(url)?;
        let domain = caps.get(1)?.as_str();
        let local = caps.get(2)?.as_str().trim_end_matches('/');
        Some(format!("@{}@{}", local, domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_free_text_yields_empty_set() {
        let extractor = HandleExtractor::new();
        let text = "Nothing to see here, just ordinary prose about birds.";

        assert!(extractor.extract(text).is_empty());
    }

    #[test]
    fn test_inline_handle_extraction() {
        let extractor = HandleExtractor::new();
        let text = "You can reach me at @alice@example.social for updates.";

        let handles = extractor.extract(text);
        assert_eq!(handles.len(), 1);
        assert!(handles.contains("@alice@example.social"));
    }

    #[test]
    fn test_repeated_handle_appears_once() {
        let extractor = HandleExtractor::new();
        let text = "@alice@example.social wrote back to @alice@example.social: @alice@example.social";

        let handles = extractor.extract(text);
        assert_eq!(handles.len(), 1);
    }

    #[test]
    fn test_profile_url_with_and_without_trailing_slash() {
        let extractor = HandleExtractor::new();

        let with = extractor.extract("see https://example.social/@alice/ sometime");
        let without = extractor.extract("see https://example.social/@alice sometime");

        assert_eq!(with, without);
        assert!(with.contains("@alice@example.social"));
    }

    #[test]
    fn test_profile_url_conversion() {
        let extractor = HandleExtractor::new();

        assert_eq!(
            extractor.convert_profile_url("https://instan.ce/@user"),
            Some("@user@instan.ce".to_string())
        );
        assert_eq!(
            extractor.convert_profile_url("http://small.town/@user/"),
            Some("@user@small.town".to_string())
        );
        assert_eq!(extractor.convert_profile_url("https://instan.ce/about"), None);
    }

    #[test]
    fn test_trailing_punctuation_stays_out_of_the_match() {
        let extractor = HandleExtractor::new();
        let text = "(boost @alice@example.social).";

        let handles = extractor.extract(text);
        assert_eq!(handles.len(), 1);
        assert!(handles.contains("@alice@example.social"));
    }

    #[test]
    fn test_handle_inside_url_path_is_rejected_after_conversion() {
        let extractor = HandleExtractor::new();

        // The URL rule matches the whole thing and conversion yields a
        // candidate with three separators, which strict cleanup drops.
        // The inline rule still sees the embedded @alice@bob span.
        let handles = extractor.extract("https://example.social/@alice@bob");
        assert!(!handles.contains("@alice@bob@example.social"));
        assert_eq!(handles, BTreeSet::from(["@alice@bob".to_string()]));
    }

    #[test]
    fn test_url_junk_is_stripped_from_local_part() {
        let extractor = HandleExtractor::new();

        let handles = extractor.extract("profile: https://example.social/@ali*ce");
        assert!(handles.contains("@alice@example.social"));
    }

    #[test]
    fn test_case_variants_stay_distinct() {
        let extractor = HandleExtractor::new();
        let text = "@Alice@example.social and @alice@example.social";

        let handles = extractor.extract(text);
        assert_eq!(handles.len(), 2);
    }

    #[test]
    fn test_handle_does_not_span_whitespace() {
        let extractor = HandleExtractor::new();

        let handles = extractor.extract("@alice @example.social");
        assert!(handles.is_empty());
    }

    #[test]
    fn test_extract_is_idempotent_on_its_own_output() {
        let extractor = HandleExtractor::new();
        let text = "Follow @alice@example.social and https://other.town/@bob/ today.";

        let first = extractor.extract(text);
        let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
        let second = extractor.extract(&joined);

        assert_eq!(first, second);
    }

    #[test]
    fn test_mixed_forms_end_to_end() {
        let extractor = HandleExtractor::new();
        let text = "Follow @alice@example.social and https://other.town/@bob/ today.";

        let handles = extractor.extract(text);
        assert_eq!(handles.len(), 2);
        assert!(handles.contains("@alice@example.social"));
        assert!(handles.contains("@bob@other.town"));
    }
}
