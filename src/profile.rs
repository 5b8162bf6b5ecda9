//! Re-upload merge: how a fresh resume extraction folds into the stored
//! candidate record.

use tracing::debug;

use crate::extraction::resume::ParsedResume;
use crate::CandidateProfile;

impl CandidateProfile {
    /// Applies a fresh extraction to this profile, field by field: a value the
    /// parser found overwrites the stored one, an absent value preserves it.
    /// Skills are the exception and are replaced wholesale, so stale skills
    /// from an old resume never linger. Placement status and register number
    /// are never resume-derived and stay untouched.
    pub fn apply_resume(&mut self, parsed: &ParsedResume) {
        merge_field(&mut self.first_name, &parsed.contact.first_name);
        merge_field(&mut self.middle_name, &parsed.contact.middle_name);
        merge_field(&mut self.last_name, &parsed.contact.last_name);
        merge_field(&mut self.email, &parsed.contact.email);
        merge_field(&mut self.phone, &parsed.contact.phone);
        merge_field(&mut self.cgpa, &parsed.academics.cgpa);
        merge_field(&mut self.backlogs, &parsed.academics.backlogs);
        merge_field(&mut self.branch, &parsed.academics.branch);
        merge_field(&mut self.academic_year, &parsed.academics.academic_year);

        self.skills = parsed.skills.iter().cloned().collect();

        debug!(skills = self.skills.len(), "profile updated from resume");
    }

    /// Builds a brand-new profile from a first upload.
    pub fn from_resume(parsed: &ParsedResume) -> Self {
        let mut profile = Self::default();
        profile.apply_resume(parsed);
        profile
    }
}

fn merge_field<T: Clone>(stored: &mut Option<T>, fresh: &Option<T>) {
    if fresh.is_some() {
        *stored = fresh.clone();
    }
}
