pub mod advisor;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod profile;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use vocabulary::{Branch, BranchKeywordTable, SkillVocabulary};

/// Placement state of a candidate. Placed candidates are hard-ineligible for
/// further job matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStatus {
    Placed,
    #[default]
    Unplaced,
}

/// Contact fields extracted from a document. The wire names (`f_name` etc.)
/// follow the portal's existing JSON contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "f_name")]
    pub first_name: Option<String>,
    #[serde(rename = "m_name")]
    pub middle_name: Option<String>,
    #[serde(rename = "l_name")]
    pub last_name: Option<String>,
}

/// Academic fields shared by candidate profiles and resume extractions.
///
/// Absent values mean "unknown" on the candidate side and "unconstrained" on
/// the job side; no field here is ever guessed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    /// CGPA on the 0-10 scale. Percentages found in documents are rescaled
    /// (divided by 10) before landing here.
    pub cgpa: Option<f64>,
    pub backlogs: Option<u32>,
    pub branch: Option<Branch>,
    /// Year of admission (not graduation).
    pub academic_year: Option<i32>,
}

/// Stored candidate record as the persistence layer hands it to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "f_name")]
    pub first_name: Option<String>,
    #[serde(rename = "m_name")]
    pub middle_name: Option<String>,
    #[serde(rename = "l_name")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub register_number: Option<String>,
    pub cgpa: Option<f64>,
    pub backlogs: Option<u32>,
    pub branch: Option<Branch>,
    pub academic_year: Option<i32>,
    /// Replaced wholesale on every resume upload, never merged.
    pub skills: Vec<String>,
    pub placement_status: PlacementStatus,
}

/// Job posting requirements, assembled from manual entry and/or JD extraction
/// (manual fields take precedence at the call site).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub skills: Vec<String>,
    pub min_cgpa: Option<f64>,
    pub max_backlogs: Option<u32>,
    /// `None` or an empty list both mean "open to all branches".
    pub allowed_branches: Option<Vec<Branch>>,
    /// Annual compensation in LPA, bounded to [1, 100] at extraction time.
    pub package_lpa: Option<f64>,
    pub description: String,
}

impl JobRequirement {
    /// Whether the posting restricts branches at all.
    pub fn restricts_branches(&self) -> bool {
        self.allowed_branches
            .as_ref()
            .map(|b| !b.is_empty())
            .unwrap_or(false)
    }
}

pub use advisor::{advise, SuggestionReport};
pub use extraction::jd::{JdExtractor, ParsedJobDescription};
pub use extraction::resume::{ExtractionError, ParsedResume, ResumeExtractor};
pub use matching::scoring::{evaluate, MatchEngine, MatchReport};
