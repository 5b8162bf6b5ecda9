//! Resume quality advisor: checklist suggestions plus an ATS-readiness score,
//! computed from a fresh extraction and the stored profile together. A field
//! only counts as missing when neither source has it.
//!
//! Everything here is informational, never blocking.

use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::extraction::resume::ParsedResume;
use crate::CandidateProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One actionable improvement, ranked. Lower priority number = show first.
/// Output-only, like every advisor type: the portal never sends these back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub field: &'static str,
    pub issue: String,
    pub suggestion: &'static str,
    pub impact: Impact,
    pub priority: u8,
}

/// Qualitative band for the readiness percentage. The color accompanies the
/// level in the UI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub level: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsReadiness {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub rating: Rating,
}

/// Full advisor output, serialized as-is for the portal UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub ats_readiness: AtsReadiness,
    pub missing: Vec<&'static str>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub summary: String,
}

/// Runs the fixed checklist and the readiness scoring. Pure; no I/O.
pub fn advise(parsed: &ParsedResume, profile: &CandidateProfile) -> SuggestionReport {
    let mut suggestions = Vec::new();
    let mut warnings = Vec::new();
    let mut missing = Vec::new();

    if parsed.academics.cgpa.is_none() && profile.cgpa.is_none() {
        missing.push("CGPA/GPA");
        suggestions.push(Suggestion {
            field: "CGPA",
            issue: "CGPA not found in resume".into(),
            suggestion: "Add your CGPA clearly in the education section \
                         (e.g., \"CGPA: 8.09/10\" or \"Grade: 8.09\")",
            impact: Impact::High,
            priority: 1,
        });
    }

    if parsed.academics.academic_year.is_none() && profile.academic_year.is_none() {
        missing.push("Academic Year");
        suggestions.push(Suggestion {
            field: "Academic Year",
            issue: "Year of admission not found".into(),
            suggestion: "Clearly mention your admission year \
                         (e.g., \"Bachelor of Technology (2022-2026)\" or \"Batch of 2022\")",
            impact: Impact::High,
            priority: 2,
        });
    }

    let skill_count = parsed.skills.len();
    if skill_count < 5 {
        warnings.push("Limited technical skills detected".to_string());
        suggestions.push(Suggestion {
            field: "Skills",
            issue: format!("Only {skill_count} skills detected"),
            suggestion: "Add a dedicated \"Technical Skills\" or \"Skills\" section with \
                         relevant technologies, programming languages, and tools",
            impact: Impact::High,
            priority: 3,
        });
    }

    // Register numbers rarely appear on resumes and can be entered during
    // registration, so this never rises above a warning.
    if profile.register_number.is_none() {
        warnings.push(
            "Register number not found (but can be entered during registration)".to_string(),
        );
    }

    if parsed.contact.phone.is_none() {
        missing.push("Phone Number");
        suggestions.push(Suggestion {
            field: "Contact",
            issue: "Phone number not detected".into(),
            suggestion: "Add your phone number in the contact section clearly \
                         (e.g., \"+91-1234567890\" or \"Phone: 1234567890\")",
            impact: Impact::Medium,
            priority: 4,
        });
    }

    if parsed.contact.email.is_none() {
        missing.push("Email");
        suggestions.push(Suggestion {
            field: "Contact",
            issue: "Email not detected".into(),
            suggestion: "Add your professional email address in the contact section",
            impact: Impact::High,
            priority: 5,
        });
    }

    if (5..10).contains(&skill_count) {
        suggestions.push(Suggestion {
            field: "Skills",
            issue: "Good skill count but could be improved".into(),
            suggestion: "Consider adding more relevant skills like frameworks, \
                         databases, or tools you know",
            impact: Impact::Low,
            priority: 6,
        });
    }

    suggestions.sort_by_key(|s| s.priority);
    let ats_readiness = ats_readiness(parsed, profile);
    let summary = summarize(&ats_readiness, missing.len(), warnings.len());

    debug!(
        percentage = ats_readiness.percentage,
        missing = missing.len(),
        warnings = warnings.len(),
        "advisor report built"
    );

    SuggestionReport {
        ats_readiness,
        missing,
        warnings,
        suggestions,
        summary,
    }
}

/// Fixed point allocation: contact 20, education 30, skills up to 40 banded
/// by count, name 10.
fn ats_readiness(parsed: &ParsedResume, profile: &CandidateProfile) -> AtsReadiness {
    let mut score = 0;
    let max_score = 100;

    if parsed.contact.email.is_some() {
        score += 10;
    }
    if parsed.contact.phone.is_some() {
        score += 10;
    }

    if parsed.academics.cgpa.is_some() || profile.cgpa.is_some() {
        score += 15;
    }
    if parsed.academics.academic_year.is_some() || profile.academic_year.is_some() {
        score += 10;
    }
    if parsed.academics.branch.is_some() || profile.branch.is_some() {
        score += 5;
    }

    score += match parsed.skills.len() {
        n if n >= 15 => 40,
        n if n >= 10 => 30,
        n if n >= 5 => 20,
        _ => 10,
    };

    if parsed.contact.first_name.is_some() && parsed.contact.last_name.is_some() {
        score += 10;
    }

    let percentage = (100.0 * f64::from(score) / f64::from(max_score)).round() as u32;
    AtsReadiness {
        score,
        max_score,
        percentage,
        rating: rating_for(percentage),
    }
}

fn rating_for(percentage: u32) -> Rating {
    if percentage >= 90 {
        Rating { level: "Excellent", color: "green" }
    } else if percentage >= 75 {
        Rating { level: "Good", color: "blue" }
    } else if percentage >= 60 {
        Rating { level: "Fair", color: "orange" }
    } else {
        Rating { level: "Needs Improvement", color: "red" }
    }
}

fn summarize(readiness: &AtsReadiness, missing_count: usize, warnings_count: usize) -> String {
    let mut summary = format!(
        "Your resume is {} for ATS systems ({}%). ",
        readiness.rating.level.to_lowercase(),
        readiness.percentage
    );

    if missing_count > 0 {
        let verb = if missing_count > 1 { "s are" } else { " is" };
        summary.push_str(&format!("{missing_count} critical field{verb} missing. "));
    }

    if warnings_count > 0 {
        let (there, plural) = if warnings_count > 1 { ("are", "s") } else { ("is", "") };
        summary.push_str(&format!(
            "There {there} {warnings_count} area{plural} that could be improved. "
        ));
    }

    summary.push_str(if readiness.percentage >= 90 {
        "Great job! Your resume is well-optimized for ATS."
    } else if readiness.percentage >= 75 {
        "Your resume is good but there's room for improvement."
    } else {
        "Consider updating your resume with the suggested improvements."
    });

    summary
}
