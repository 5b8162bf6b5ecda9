//! Eligibility gating and weighted match scoring.

pub mod eligibility;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use eligibility::{check_eligibility, EligibilityCheck, EligibilityChecks};
pub use scoring::{evaluate, MatchEngine, MatchReport, ScoreBreakdown};
pub use skills::{skill_matches, skills_match, SkillsAnalysis};
pub use weights::{Weights, MATCH_WEIGHTS};
