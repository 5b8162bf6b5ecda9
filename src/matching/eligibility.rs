//! Hard eligibility gates. Each check is independent and all must pass;
//! failing any voids the match score entirely -- these encode institutional
//! policy, not preference, so partial credit is meaningless.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CandidateProfile, JobRequirement, PlacementStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCheck {
    pub passed: bool,
    pub message: String,
}

impl Default for EligibilityCheck {
    fn default() -> Self {
        Self { passed: true, message: String::new() }
    }
}

impl EligibilityCheck {
    fn fail(message: String) -> Self {
        Self { passed: false, message }
    }

    fn pass(message: String) -> Self {
        Self { passed: true, message }
    }
}

/// Per-criterion results plus the conjunction. Field names are part of the
/// JSON contract with the portal UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityChecks {
    pub placement_check: EligibilityCheck,
    pub cgpa_check: EligibilityCheck,
    pub backlogs_check: EligibilityCheck,
    pub branch_check: EligibilityCheck,
    pub all_passed: bool,
}

/// Runs all four gates. Unknown candidate CGPA passes the CGPA gate
/// (lenient-by-absence); unknown backlogs count as zero; unknown branch fails
/// a branch-restricted job.
pub fn check_eligibility(profile: &CandidateProfile, job: &JobRequirement) -> EligibilityChecks {
    let mut checks = EligibilityChecks {
        placement_check: check_placement(profile),
        cgpa_check: check_cgpa(profile, job),
        backlogs_check: check_backlogs(profile, job),
        branch_check: check_branch(profile, job),
        all_passed: false,
    };
    checks.all_passed = checks.placement_check.passed
        && checks.cgpa_check.passed
        && checks.backlogs_check.passed
        && checks.branch_check.passed;
    debug!(all_passed = checks.all_passed, "eligibility evaluated");
    checks
}

fn check_placement(profile: &CandidateProfile) -> EligibilityCheck {
    if profile.placement_status == PlacementStatus::Placed {
        EligibilityCheck::fail("Already placed candidates are not eligible".into())
    } else {
        EligibilityCheck::default()
    }
}

fn check_cgpa(profile: &CandidateProfile, job: &JobRequirement) -> EligibilityCheck {
    let (Some(min_cgpa), Some(cgpa)) = (job.min_cgpa, profile.cgpa) else {
        // No requirement, or requirement with unknown CGPA: pass.
        return EligibilityCheck::default();
    };

    if cgpa < min_cgpa {
        EligibilityCheck::fail(format!("Required CGPA: {min_cgpa}, Your CGPA: {cgpa}"))
    } else {
        EligibilityCheck::pass(format!("CGPA requirement met ({cgpa} >= {min_cgpa})"))
    }
}

fn check_backlogs(profile: &CandidateProfile, job: &JobRequirement) -> EligibilityCheck {
    let Some(max_backlogs) = job.max_backlogs else {
        return EligibilityCheck::default();
    };
    let backlogs = profile.backlogs.unwrap_or(0);

    if backlogs > max_backlogs {
        EligibilityCheck::fail(format!("Maximum backlogs: {max_backlogs}, Yours: {backlogs}"))
    } else {
        EligibilityCheck::pass(format!(
            "Backlog requirement met ({backlogs} <= {max_backlogs})"
        ))
    }
}

fn check_branch(profile: &CandidateProfile, job: &JobRequirement) -> EligibilityCheck {
    let allowed = match &job.allowed_branches {
        Some(branches) if !branches.is_empty() => branches,
        // No restriction never fails, whatever the candidate's branch.
        _ => return EligibilityCheck::default(),
    };

    let allowed_display = allowed
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    match profile.branch {
        Some(branch) if allowed.contains(&branch) => {
            EligibilityCheck::pass(format!("Branch requirement met ({branch})"))
        }
        Some(branch) => EligibilityCheck::fail(format!(
            "Allowed: {allowed_display}, Yours: {branch}"
        )),
        None => EligibilityCheck::fail(format!(
            "Allowed: {allowed_display}, Yours: Not specified"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Branch;

    fn base_profile() -> CandidateProfile {
        CandidateProfile {
            cgpa: Some(8.0),
            backlogs: Some(0),
            branch: Some(Branch::Cse),
            ..CandidateProfile::default()
        }
    }

    fn base_job() -> JobRequirement {
        JobRequirement {
            min_cgpa: Some(7.0),
            max_backlogs: Some(0),
            allowed_branches: Some(vec![Branch::Cse, Branch::It]),
            ..JobRequirement::default()
        }
    }

    #[test]
    fn all_gates_pass_for_qualified_candidate() {
        let checks = check_eligibility(&base_profile(), &base_job());
        assert!(checks.all_passed);
        assert!(checks.cgpa_check.message.contains("met"));
    }

    #[test]
    fn placed_candidates_fail_the_placement_gate() {
        let mut profile = base_profile();
        profile.placement_status = PlacementStatus::Placed;
        let checks = check_eligibility(&profile, &base_job());
        assert!(!checks.placement_check.passed);
        assert!(!checks.all_passed);
    }

    #[test]
    fn cgpa_below_minimum_fails_with_reason() {
        let mut profile = base_profile();
        profile.cgpa = Some(6.5);
        let checks = check_eligibility(&profile, &base_job());
        assert!(!checks.cgpa_check.passed);
        assert_eq!(checks.cgpa_check.message, "Required CGPA: 7, Your CGPA: 6.5");
    }

    #[test]
    fn unknown_cgpa_passes_leniently() {
        let mut profile = base_profile();
        profile.cgpa = None;
        let checks = check_eligibility(&profile, &base_job());
        assert!(checks.cgpa_check.passed);
        assert!(checks.all_passed);
    }

    #[test]
    fn backlogs_over_limit_fail_even_with_good_cgpa() {
        let mut profile = base_profile();
        profile.cgpa = Some(7.5);
        profile.backlogs = Some(1);
        let checks = check_eligibility(&profile, &base_job());
        assert!(checks.cgpa_check.passed);
        assert!(!checks.backlogs_check.passed);
        assert!(!checks.all_passed);
    }

    #[test]
    fn unknown_backlogs_default_to_zero() {
        let mut profile = base_profile();
        profile.backlogs = None;
        let checks = check_eligibility(&profile, &base_job());
        assert!(checks.backlogs_check.passed);
    }

    #[test]
    fn unknown_branch_fails_restricted_job() {
        let mut profile = base_profile();
        profile.branch = None;
        let checks = check_eligibility(&profile, &base_job());
        assert!(!checks.branch_check.passed);
        assert!(checks.branch_check.message.contains("Not specified"));
    }

    #[test]
    fn wrong_branch_fails_with_allowed_list() {
        let mut profile = base_profile();
        profile.branch = Some(Branch::Mech);
        let checks = check_eligibility(&profile, &base_job());
        assert!(!checks.branch_check.passed);
        assert_eq!(checks.branch_check.message, "Allowed: CSE, IT, Yours: MECH");
    }

    #[test]
    fn unrestricted_branch_never_fails() {
        let mut job = base_job();
        job.allowed_branches = None;
        let mut profile = base_profile();
        profile.branch = None;
        assert!(check_eligibility(&profile, &job).branch_check.passed);

        job.allowed_branches = Some(vec![]);
        profile.branch = Some(Branch::Civil);
        assert!(check_eligibility(&profile, &job).branch_check.passed);
    }
}
