//! Substring-symmetric skill matching between a candidate's skill list and a
//! job's required skills.

use serde::{Deserialize, Serialize};

/// Neutral score assigned when a job lists no required skills: the component
/// cannot be evaluated and should neither reward nor punish.
pub const NO_REQUIREMENTS_SCORE: u32 = 70;

/// Skill component of a match report. Matched/missing lists keep the job
/// posting's original spelling; `score` equals `match_percentage` whenever
/// requirements exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: u32,
}

/// Two skill tokens match when either contains the other as a substring after
/// lowercasing and trimming. Deliberately over-matches near-variants
/// ("react" vs "reactjs") at the cost of some false positives.
pub fn skill_matches(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Scores the candidate's skills against the job's required skills:
/// `round(100 * matched / required)`, or the neutral default when the job
/// specifies none.
pub fn skills_match(candidate_skills: &[String], required_skills: &[String]) -> SkillsAnalysis {
    if required_skills.is_empty() {
        return SkillsAnalysis {
            score: NO_REQUIREMENTS_SCORE,
            ..SkillsAnalysis::default()
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for required in required_skills {
        let hit = candidate_skills.iter().any(|c| skill_matches(c, required));
        if hit {
            matched.push(required.clone());
        } else {
            missing.push(required.clone());
        }
    }

    let pct = (100.0 * matched.len() as f64 / required_skills.len() as f64).round() as u32;
    SkillsAnalysis {
        score: pct,
        matched_skills: matched,
        missing_skills: missing,
        match_percentage: pct,
    }
}
