//! Compensation (package/CTC) extraction from job descriptions.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    static ref PACKAGE_PATTERNS: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:package|ctc|salary|compensation)[\s:]*(?:inr|rs\.?|₹)?\s*(\d+(?:\.\d+)?)\s*(?:lpa|lakhs?|l)"
        )
        .unwrap(),
        Regex::new(r"(?i)(?:inr|rs\.?|₹)?\s*(\d+(?:\.\d+)?)\s*(?:lpa|lakhs?)\s*(?:per annum|ctc|package)")
            .unwrap(),
    ];
}

/// Annual package in LPA, accepted only in [1, 100]. Absent means the posting
/// did not state compensation, not zero.
pub fn extract_package(text: &str) -> Option<f64> {
    for pattern in PACKAGE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(value) = caps[1].parse::<f64>() {
                if (1.0..=100.0).contains(&value) {
                    debug!(package_lpa = value, "package found");
                    return Some(value);
                }
            }
        }
    }
    warn!("no package information found");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_anchored_package_phrasings() {
        assert_eq!(extract_package("Package: 12 LPA"), Some(12.0));
        assert_eq!(extract_package("CTC: INR 6.5 lakhs"), Some(6.5));
        assert_eq!(extract_package("salary rs. 4 lpa fixed"), Some(4.0));
    }

    #[test]
    fn reads_amount_first_phrasings() {
        assert_eq!(extract_package("offering 8 LPA per annum"), Some(8.0));
        assert_eq!(extract_package("₹10 lakhs package with benefits"), Some(10.0));
    }

    #[test]
    fn rejects_out_of_band_figures() {
        assert_eq!(extract_package("package: 500 lpa"), None);
        assert_eq!(extract_package("package: 0.5 lpa"), None);
    }

    #[test]
    fn absent_when_no_compensation_mentioned() {
        assert_eq!(extract_package("exciting startup role"), None);
    }
}
