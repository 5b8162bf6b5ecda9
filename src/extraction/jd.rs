//! Job-description extraction pipeline. Same aggregation structure as the
//! resume pipeline, aimed at requirement-shaped fields. A posting created from
//! a JD file merges with manual entry at the call site (manual wins).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extraction::{academics, branch, compensation, skills};
use crate::normalize::DocumentText;
use crate::vocabulary::{Branch, BranchKeywordTable, SkillVocabulary};
use crate::JobRequirement;

/// Characters of text retained as the free-text description fallback.
const DESCRIPTION_KEEP_CHARS: usize = 1000;

/// Requirement fields pulled out of one job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    pub skills: BTreeSet<String>,
    pub min_cgpa: Option<f64>,
    pub max_backlogs: Option<u32>,
    /// `None` means open to all branches.
    pub allowed_branches: Option<Vec<Branch>>,
    pub package_lpa: Option<f64>,
    /// First 1,000 characters of the normalized text.
    pub description: String,
}

impl ParsedJobDescription {
    /// Lifts the extraction into a [`JobRequirement`] record for callers that
    /// post a job straight from a JD file with no manual fields.
    pub fn into_requirement(self) -> JobRequirement {
        JobRequirement {
            skills: self.skills.into_iter().collect(),
            min_cgpa: self.min_cgpa,
            max_backlogs: self.max_backlogs,
            allowed_branches: self.allowed_branches,
            package_lpa: self.package_lpa,
            description: self.description,
        }
    }
}

/// JD pipeline with its injected vocabularies. The skill vocabulary must be
/// the same one used for resumes or matching stops being symmetric.
#[derive(Debug, Clone, Default)]
pub struct JdExtractor {
    vocabulary: SkillVocabulary,
    branches: BranchKeywordTable,
}

impl JdExtractor {
    pub fn new(vocabulary: SkillVocabulary, branches: BranchKeywordTable) -> Self {
        Self { vocabulary, branches }
    }

    /// Total function: a JD that yields nothing produces an unconstrained
    /// requirement record, never an error.
    pub fn parse(&self, raw_text: &str) -> ParsedJobDescription {
        let doc = DocumentText::new(raw_text);

        let parsed = ParsedJobDescription {
            skills: skills::extract_skills(doc.text(), &self.vocabulary),
            min_cgpa: academics::extract_min_cgpa(doc.text()),
            max_backlogs: academics::extract_max_backlogs(doc.text()),
            allowed_branches: branch::extract_branches(doc.lower(), &self.branches),
            package_lpa: compensation::extract_package(doc.text()),
            description: doc.text().chars().take(DESCRIPTION_KEEP_CHARS).collect(),
        };

        info!(
            skills = parsed.skills.len(),
            min_cgpa = ?parsed.min_cgpa,
            max_backlogs = ?parsed.max_backlogs,
            branches = ?parsed.allowed_branches,
            "jd extraction complete"
        );
        parsed
    }
}
