//! Vocabulary-driven skill scan shared by resume and JD extraction.

use std::collections::BTreeSet;

use tracing::debug;

use crate::vocabulary::SkillVocabulary;

/// Returns the subset of the vocabulary found in `text` as whole-word,
/// case-insensitive matches. Deterministic, order-irrelevant, never fails;
/// an empty set simply means no recognized skill appeared.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for (token, pattern) in vocabulary.patterns() {
        if pattern.is_match(text) {
            found.insert(token.to_string());
        }
    }
    debug!(found = found.len(), vocabulary = vocabulary.len(), "skill scan complete");
    found
}
