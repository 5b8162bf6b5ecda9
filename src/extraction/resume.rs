//! Resume extraction pipeline: a straight aggregation of independent field
//! extractors over one normalized text blob. No extractor's result feeds
//! another's, and the pipeline adds no validation beyond the minimum-text
//! guard at the facade.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::extraction::{academics, branch, contact, skills};
use crate::normalize::DocumentText;
use crate::vocabulary::{BranchKeywordTable, SkillVocabulary};
use crate::{AcademicRecord, ExtractedContact};

/// Minimum characters of extracted text before parsing is worth attempting;
/// anything shorter almost always means an image-only or corrupted document.
pub const MIN_TEXT_CHARS: usize = 50;

/// Characters of raw text retained on the parse result for storage.
const RAW_TEXT_KEEP_CHARS: usize = 2000;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error(
        "extracted text is too short ({len} chars, need at least {MIN_TEXT_CHARS}); \
         the document may be image-based or corrupted"
    )]
    TextTooShort { len: usize },
}

/// Everything the pipeline pulled out of one resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(flatten)]
    pub contact: ExtractedContact,
    #[serde(flatten)]
    pub academics: AcademicRecord,
    pub skills: BTreeSet<String>,
    /// First 2,000 characters of the normalized text, kept for storage.
    pub raw_text: String,
}

/// Resume pipeline with its injected vocabularies.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    vocabulary: SkillVocabulary,
    branches: BranchKeywordTable,
}

impl ResumeExtractor {
    pub fn new(vocabulary: SkillVocabulary, branches: BranchKeywordTable) -> Self {
        Self { vocabulary, branches }
    }

    /// Runs every field extractor once over the same normalized text.
    /// Deterministic and side-effect-free; the only failure mode is input too
    /// short to have been a successful document conversion.
    pub fn parse(&self, raw_text: &str) -> Result<ParsedResume, ExtractionError> {
        let doc = DocumentText::new(raw_text);
        let len = doc.char_len();
        if len < MIN_TEXT_CHARS {
            return Err(ExtractionError::TextTooShort { len });
        }

        let name = contact::extract_name(doc.text());
        let parsed = ParsedResume {
            contact: ExtractedContact {
                email: contact::extract_email(doc.text()),
                phone: contact::extract_phone(doc.text()),
                first_name: name.first,
                middle_name: name.middle,
                last_name: name.last,
            },
            academics: AcademicRecord {
                cgpa: academics::extract_cgpa(doc.text()),
                backlogs: None,
                branch: branch::extract_branch(doc.lower(), &self.branches),
                academic_year: academics::extract_academic_year(doc.text()),
            },
            skills: skills::extract_skills(doc.text(), &self.vocabulary),
            raw_text: doc.text().chars().take(RAW_TEXT_KEEP_CHARS).collect(),
        };

        info!(
            chars = len,
            skills = parsed.skills.len(),
            cgpa = ?parsed.academics.cgpa,
            branch = ?parsed.academics.branch,
            "resume extraction complete"
        );
        Ok(parsed)
    }
}
