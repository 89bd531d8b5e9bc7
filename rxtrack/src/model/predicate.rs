//! Filters applied to prescription lists.

use std::fmt;

use super::prescription::Prescription;

/// Matches prescriptions whose name contains any of the keywords.
///
/// Matching is a case-insensitive substring test, so `asp` matches
/// `Aspirin`. Blank keywords never match anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Builds a predicate from whitespace-separated user text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace().map(str::to_string).collect())
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn test(&self, prescription: &Prescription) -> bool {
        self.keywords
            .iter()
            .any(|keyword| prescription.name().contains_ignore_case(keyword))
    }
}

impl fmt::Display for NameContainsKeywordsPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keywords=[{}]", self.keywords.join(", "))
    }
}

/// The filter currently applied to a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PrescriptionFilter {
    #[default]
    ShowAll,
    NameContainsKeywords(NameContainsKeywordsPredicate),
}

impl PrescriptionFilter {
    #[must_use]
    pub fn test(&self, prescription: &Prescription) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(predicate) => predicate.test(prescription),
        }
    }
}

impl From<NameContainsKeywordsPredicate> for PrescriptionFilter {
    fn from(predicate: NameContainsKeywordsPredicate) -> Self {
        Self::NameContainsKeywords(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{aspirin, zomig};

    fn keywords(words: &[&str]) -> NameContainsKeywordsPredicate {
        NameContainsKeywordsPredicate::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn equality_follows_keyword_list() {
        let first = keywords(&["first"]);
        let first_and_second = keywords(&["first", "second"]);

        assert_eq!(first, first.clone());
        assert_eq!(first, keywords(&["first"]));
        assert_ne!(first, first_and_second);
        assert_ne!(first_and_second, keywords(&["second", "first"]));
        assert_ne!(first, keywords(&["first", "first"]));
    }

    #[test]
    fn one_keyword_matches() {
        assert!(keywords(&["Aspirin"]).test(&aspirin()));
    }

    #[test]
    fn any_of_several_keywords_matches() {
        assert!(keywords(&["Ibuprofen", "Rapimelt"]).test(&zomig()));
    }

    #[test]
    fn substring_in_any_position_matches() {
        for word in ["Asp", "pir", "irin", "aSpIrIn", "ASPIRIN"] {
            assert!(keywords(&[word]).test(&aspirin()), "{word} should match");
        }
    }

    #[test]
    fn zero_keywords_match_nothing() {
        assert!(!keywords(&[]).test(&aspirin()));
        assert!(!NameContainsKeywordsPredicate::from_text("   ").test(&aspirin()));
    }

    #[test]
    fn blank_keyword_matches_nothing() {
        assert!(!keywords(&[" "]).test(&aspirin()));
        assert!(!keywords(&[""]).test(&aspirin()));
    }

    #[test]
    fn unrelated_keyword_does_not_match() {
        assert!(!keywords(&["Ibuprofen"]).test(&aspirin()));
    }

    #[test]
    fn from_text_splits_on_whitespace() {
        let predicate = NameContainsKeywordsPredicate::from_text("  Aspirin \t Zolmitriptan ");
        assert_eq!(predicate, keywords(&["Aspirin", "Zolmitriptan"]));
    }

    #[test]
    fn show_all_matches_everything() {
        assert!(PrescriptionFilter::ShowAll.test(&aspirin()));
        assert!(!PrescriptionFilter::from(keywords(&["zzz"])).test(&aspirin()));
    }
}
