//! Weighted match scoring. Gates first; only an eligible candidate is scored,
//! and an ineligible one short-circuits to an overall score of 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::eligibility::{check_eligibility, EligibilityChecks};
use super::skills::{skills_match, SkillsAnalysis};
use super::weights::Weights;
use crate::{CandidateProfile, JobRequirement};

/// Per-component scores, each 0-100. Field names are part of the JSON
/// contract with the portal UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub profile_completeness: u32,
    pub academic_performance: u32,
}

/// Full match report for one candidate against one job. Ephemeral: computed
/// per request and serialized as-is; only `overall_score` is persisted, by the
/// caller, alongside the application record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub overall_score: u32,
    pub eligible: bool,
    pub eligibility_checks: EligibilityChecks,
    pub skills_analysis: SkillsAnalysis,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    weights: Weights,
}

/// Convenience wrapper over [`MatchEngine::evaluate`] with the canonical
/// weights.
pub fn evaluate(
    profile: &CandidateProfile,
    candidate_skills: &[String],
    job: &JobRequirement,
) -> MatchReport {
    MatchEngine::default().evaluate(profile, candidate_skills, job)
}

impl MatchEngine {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// Pure, deterministic, and idempotent: identical inputs always produce an
    /// identical report.
    pub fn evaluate(
        &self,
        profile: &CandidateProfile,
        candidate_skills: &[String],
        job: &JobRequirement,
    ) -> MatchReport {
        let eligibility_checks = check_eligibility(profile, job);
        if !eligibility_checks.all_passed {
            // Hard gate failed: no partial credit, score is 0 by definition.
            return MatchReport {
                overall_score: 0,
                eligible: false,
                eligibility_checks,
                recommendations: vec![
                    "You do not meet the eligibility criteria for this job".into(),
                ],
                ..MatchReport::default()
            };
        }

        let skills_analysis = skills_match(candidate_skills, &job.skills);
        let completeness = profile_completeness(profile);
        let academic = academic_score(profile);

        let overall_score = (f64::from(skills_analysis.score) * self.weights.skills
            + f64::from(completeness.score) * self.weights.completeness
            + f64::from(academic) * self.weights.academic)
            .round() as u32;

        let mut recommendations = completeness.recommendations;
        recommendations.push(recommendation_for(overall_score).into());

        debug!(
            overall_score,
            skills = skills_analysis.score,
            completeness = completeness.score,
            academic,
            "match scored"
        );

        MatchReport {
            overall_score,
            eligible: true,
            eligibility_checks,
            breakdown: ScoreBreakdown {
                skills: skills_analysis.score,
                profile_completeness: completeness.score,
                academic_performance: academic,
            },
            skills_analysis,
            recommendations,
        }
    }
}

struct CompletenessScore {
    score: u32,
    recommendations: Vec<String>,
}

/// Share of populated fields among the seven the portal considers essential.
/// Missing fields feed a "complete your profile" recommendation.
fn profile_completeness(profile: &CandidateProfile) -> CompletenessScore {
    let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    let fields: [(&str, bool); 7] = [
        ("first name", has(&profile.first_name)),
        ("last name", has(&profile.last_name)),
        ("email", has(&profile.email)),
        ("register number", has(&profile.register_number)),
        ("cgpa", profile.cgpa.is_some()),
        ("branch", profile.branch.is_some()),
        ("academic year", profile.academic_year.is_some()),
    ];

    let filled = fields.iter().filter(|(_, present)| *present).count();
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    let score = (100.0 * filled as f64 / fields.len() as f64).round() as u32;
    let recommendations = if missing.is_empty() {
        vec![]
    } else {
        vec![format!("Complete your profile: {}", missing.join(", "))]
    };

    CompletenessScore { score, recommendations }
}

/// Base 50, plus a CGPA-banded bonus (any known CGPA earns at least the
/// floor), plus 10 for a clean backlog record; capped at 100.
fn academic_score(profile: &CandidateProfile) -> u32 {
    let mut score = 50;

    if let Some(cgpa) = profile.cgpa {
        score += if cgpa >= 9.0 {
            40
        } else if cgpa >= 8.5 {
            35
        } else if cgpa >= 8.0 {
            30
        } else if cgpa >= 7.5 {
            25
        } else {
            15
        };
    }

    if profile.backlogs.unwrap_or(0) == 0 {
        score += 10;
    }

    score.min(100)
}

fn recommendation_for(overall_score: u32) -> &'static str {
    if overall_score >= 80 {
        "Excellent match! You are a strong candidate for this position."
    } else if overall_score >= 60 {
        "Good match! Consider applying to this position."
    } else if overall_score >= 40 {
        "Moderate match. You may want to upskill before applying."
    } else {
        "Low match. Consider developing relevant skills first."
    }
}
