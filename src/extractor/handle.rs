//! Canonical handle representation and strict-policy cleanup

/// A fediverse handle split into its two meaningful parts.
///
/// Canonical rendering is `@local@domain`. Equality is exact string
/// equality of the parts: no case folding and no Unicode normalization,
/// so `@Alice@example.social` and `@alice@example.social` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
    local: String,
    domain: String,
}

impl Handle {
    /// Parse a raw candidate under the strict cleanup policy.
    ///
    /// The candidate must split on `@` into exactly three parts (an empty
    /// leading part, the local part, the domain). A third `@` separator
    /// means two handles ran together without whitespace and the whole
    /// candidate is rejected. Characters outside the allowed sets are
    /// stripped from the local part and domain; if either part ends up
    /// empty the candidate is rejected.
    pub fn from_candidate(candidate: &str) -> Option<Handle> {
        let parts: Vec<&str> = candidate.split('@').collect();
        if parts.len() != 3 {
            return None;
        }

        let local: String = parts[1].chars().filter(|&c| is_local_char(c)).collect();
        let domain: String = parts[2].chars().filter(|&c| is_domain_char(c)).collect();

        if local.is_empty() || domain.is_empty() {
            return None;
        }

        Some(Handle { local, domain })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Render as `@local@domain`.
    pub fn canonical(&self) -> String {
        format!("@{}@{}", self.local, self.domain)
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}@{}", self.local, self.domain)
    }
}

// Word characters here mean Unicode alphanumerics plus underscore,
// matching the `\w` class used by the recognition patterns.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_local_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '-'
}

fn is_domain_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_candidate() {
        let handle = Handle::from_candidate("@alice@example.social").unwrap();

        assert_eq!(handle.local(), "alice");
        assert_eq!(handle.domain(), "example.social");
        assert_eq!(handle.canonical(), "@alice@example.social");
    }

    #[test]
    fn test_runs_together_candidate_is_dropped() {
        // Three @-separators means two handles got concatenated.
        assert!(Handle::from_candidate("@alice@bob@example.social").is_none());
    }

    #[test]
    fn test_single_separator_is_dropped() {
        assert!(Handle::from_candidate("@example.social").is_none());
        assert!(Handle::from_candidate("alice@example.social").is_none());
    }

    #[test]
    fn test_interior_junk_is_stripped() {
        let handle = Handle::from_candidate("@ali*ce@example.social").unwrap();
        assert_eq!(handle.canonical(), "@alice@example.social");
    }

    #[test]
    fn test_empty_part_after_stripping_is_dropped() {
        assert!(Handle::from_candidate("@***@example.social").is_none());
        assert!(Handle::from_candidate("@alice@!!!").is_none());
    }

    #[test]
    fn test_normalization_is_a_fixed_point() {
        for canonical in ["@alice@example.social", "@bob.smith@other-town.net"] {
            let reparsed = Handle::from_candidate(canonical).unwrap();
            assert_eq!(reparsed.canonical(), canonical);
        }
    }

    #[test]
    fn test_case_is_preserved() {
        let handle = Handle::from_candidate("@Alice@Example.social").unwrap();
        assert_eq!(handle.canonical(), "@Alice@Example.social");
    }
}
