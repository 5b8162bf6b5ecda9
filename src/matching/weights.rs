//! Component weights for the overall match score.

/// Canonical weight split: skills dominate, academics next, profile
/// completeness last. The three components are each 0-100, so the weighted
/// sum stays in 0-100.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.50,
    completeness: 0.20,
    academic: 0.30,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub completeness: f64,
    pub academic: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.completeness + self.academic
    }
}

impl Default for Weights {
    fn default() -> Self {
        MATCH_WEIGHTS
    }
}
