//! Branch inference from free text. The resume variant is first-match-wins in
//! table order; the JD variant collects every branch mentioned.

use tracing::{debug, warn};

use crate::vocabulary::{Branch, BranchKeywordTable};

/// Candidate's branch: the first table entry with any keyword present in the
/// lowercased text. When several branches are mentioned, whichever is earlier
/// in the table wins -- a documented heuristic limitation, controlled by the
/// injected table's order rather than any hidden constant.
pub fn extract_branch(lower_text: &str, table: &BranchKeywordTable) -> Option<Branch> {
    match table.first_match(lower_text) {
        Some((branch, keyword)) => {
            debug!(%branch, keyword, "branch found");
            Some(branch)
        }
        None => {
            warn!("no branch found");
            None
        }
    }
}

/// Allowed branches for a job posting: every branch mentioned anywhere in the
/// text. `None` (rather than an empty list) means the posting is open to all
/// branches.
pub fn extract_branches(lower_text: &str, table: &BranchKeywordTable) -> Option<Vec<Branch>> {
    let branches = table.all_matches(lower_text);
    if branches.is_empty() {
        warn!("no branch restrictions found, open to all");
        None
    } else {
        debug!(?branches, "branch restrictions found");
        Some(branches)
    }
}
