//! Academic field extraction: CGPA (resume and JD variants), backlog limits,
//! and admission year.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::context_window;

/// Admission years older than this are treated as implausible for a current
/// placement cycle.
const MIN_ADMISSION_YEAR: i32 = 2015;

/// Bytes of surrounding text consulted when deciding whether a year range sits
/// in a degree context.
const YEAR_CONTEXT_MARGIN: usize = 200;

lazy_static! {
    // Tried in priority order; strongly anchored patterns first, weak
    // contextual anchors (degree lines with a decimal number) last.
    static ref CGPA_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)cgpa[\s:]*(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)gpa[\s:]*(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)grade[\s:]*(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)(\d+\.?\d*)\s*/\s*10").unwrap(),
        Regex::new(r"(?i)(\d+\.?\d*)\s*cgpa").unwrap(),
        Regex::new(r"(?i)bachelor.*?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)b\.?\s*tech.*?(\d+\.\d+)").unwrap(),
        Regex::new(r"(?i)computer science.*?(\d+\.\d+)").unwrap(),
    ];
    static ref PERCENT_RE: Regex =
        Regex::new(r"(?i)(?:percentage|%)[\s:]*(\d+\.?\d*)").unwrap();

    static ref MIN_CGPA_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:minimum|min|required)\s+(?:cgpa|gpa)[\s:]*(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)cgpa[\s:]*(?:of|>=|>|above)\s*(\d+\.?\d*)").unwrap(),
        Regex::new(r"(?i)(\d+\.?\d*)\s*(?:cgpa|gpa)\s+(?:and above|or above|minimum|required)")
            .unwrap(),
    ];

    static ref NO_BACKLOG_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:no|zero|0)\s+(?:active\s+)?backlogs?").unwrap(),
        Regex::new(r"(?i)backlogs?[\s:]*(?:no|zero|0|not allowed|nil)").unwrap(),
    ];
    static ref BACKLOG_COUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:maximum|max|up to)\s+(\d+)\s+backlogs?").unwrap(),
        Regex::new(r"(?i)(\d+)\s+backlogs?\s+(?:allowed|acceptable|maximum|max)").unwrap(),
    ];

    static ref YEAR_RANGE_RE: Regex =
        Regex::new(r"(?i)(20\d{2})\s*[-–—]\s*(20\d{2}|present|pursuing|passout)").unwrap();
    static ref ADMISSION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:admitted|admission|joined|enrolled).*?(20\d{2})").unwrap(),
        Regex::new(r"(?i)batch\s*(?:of)?\s*(20\d{2})").unwrap(),
    ];

    static ref DEGREE_CONTEXT: [&'static str; 5] =
        ["bachelor", "b.tech", "b tech", "computer science", "engineering"];
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// CGPA from a resume, always in [0, 10]. Anchored numeric patterns are tried
/// first; failing those, a percentage in (10, 100] is rescaled by /10 and
/// rounded to two decimals.
pub fn extract_cgpa(text: &str) -> Option<f64> {
    for pattern in CGPA_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(value) = caps[1].parse::<f64>() {
                if (0.0..=10.0).contains(&value) {
                    debug!(cgpa = value, "cgpa found");
                    return Some(value);
                }
            }
        }
    }

    for caps in PERCENT_RE.captures_iter(text) {
        if let Ok(value) = caps[1].parse::<f64>() {
            if value > 10.0 && value <= 100.0 {
                let cgpa = round2(value / 10.0);
                debug!(cgpa, percentage = value, "cgpa derived from percentage");
                return Some(cgpa);
            }
        }
    }

    warn!("no cgpa found");
    None
}

/// Minimum-CGPA requirement from a job description, same [0, 10] bound but
/// anchored to requirement phrasings ("minimum cgpa", "cgpa of X", "X cgpa and
/// above").
pub fn extract_min_cgpa(text: &str) -> Option<f64> {
    for pattern in MIN_CGPA_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(value) = caps[1].parse::<f64>() {
                if (0.0..=10.0).contains(&value) {
                    debug!(min_cgpa = value, "minimum cgpa found");
                    return Some(value);
                }
            }
        }
    }
    warn!("no minimum cgpa found");
    None
}

/// Maximum-backlog allowance from a job description. "No/zero backlogs"
/// phrasing short-circuits to `Some(0)`; `None` means unconstrained.
pub fn extract_max_backlogs(text: &str) -> Option<u32> {
    for pattern in NO_BACKLOG_PATTERNS.iter() {
        if pattern.is_match(text) {
            debug!("no-backlogs requirement found");
            return Some(0);
        }
    }

    for pattern in BACKLOG_COUNT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(value) = caps[1].parse::<u32>() {
                if value <= 10 {
                    debug!(max_backlogs = value, "backlog limit found");
                    return Some(value);
                }
            }
        }
    }

    warn!("no backlog requirement found");
    None
}

/// Latest admission year the fallback patterns will accept.
fn max_admission_year() -> i32 {
    Utc::now().year()
}

/// A year range whose end is at or beyond this is read as admission-to-
/// graduation, so its start year is the admission year.
fn graduation_year_floor() -> i32 {
    Utc::now().year() - 2
}

fn in_degree_context(text: &str, start: usize, end: usize) -> bool {
    let window = context_window(text, start, end, YEAR_CONTEXT_MARGIN).to_lowercase();
    DEGREE_CONTEXT.iter().any(|anchor| window.contains(anchor))
}

/// Admission year from a resume. Prefers a `YYYY-YYYY|present|pursuing|passout`
/// range inside degree context (the start year is taken when the range ends in
/// an open token or a near-future year); falls back to "admitted/joined/batch
/// of YYYY" phrasings bounded to a plausible window.
pub fn extract_academic_year(text: &str) -> Option<i32> {
    for caps in YEAR_RANGE_RE.captures_iter(text) {
        let full = caps.get(0).unwrap();
        if !in_degree_context(text, full.start(), full.end()) {
            continue;
        }

        let start_year: i32 = match caps[1].parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        let end_token = caps[2].to_lowercase();
        let open_ended = matches!(end_token.as_str(), "passout" | "pursuing" | "present");
        let far_future_end = end_token
            .parse::<i32>()
            .map(|end| end >= graduation_year_floor())
            .unwrap_or(false);

        if open_ended || far_future_end {
            debug!(year = start_year, range = full.as_str(), "academic year from range");
            return Some(start_year);
        }
    }

    for pattern in ADMISSION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(year) = caps[1].parse::<i32>() {
                if (MIN_ADMISSION_YEAR..=max_admission_year()).contains(&year) {
                    debug!(year, "academic year from admission phrasing");
                    return Some(year);
                }
            }
        }
    }

    warn!("no academic year found");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cgpa_reads_anchored_value() {
        assert_eq!(extract_cgpa("CGPA: 8.09/10"), Some(8.09));
        assert_eq!(extract_cgpa("GPA 9.1"), Some(9.1));
        assert_eq!(extract_cgpa("scored 8.5 / 10 overall"), Some(8.5));
    }

    #[test]
    fn cgpa_skips_out_of_range_candidates() {
        // 85 fails the [0,10] bound under every numeric pattern; the
        // percentage fallback rescales it instead.
        assert_eq!(extract_cgpa("percentage: 85"), Some(8.5));
    }

    #[test]
    fn cgpa_percentage_rescale_rounds_to_two_decimals() {
        assert_eq!(extract_cgpa("Percentage: 87.3"), Some(8.73));
    }

    #[test]
    fn cgpa_percentage_must_exceed_ten() {
        // A "percentage" of 9 is ambiguous with a CGPA and is not rescaled.
        assert_eq!(extract_cgpa("percentage: 9"), None);
    }

    #[test]
    fn cgpa_weak_degree_anchor_needs_decimal_point() {
        assert_eq!(extract_cgpa("Bachelor of Technology, scored 8.72"), Some(8.72));
        assert_eq!(extract_cgpa("Bachelor of Technology batch 8"), None);
    }

    #[test]
    fn cgpa_absent_when_nothing_qualifies() {
        assert_eq!(extract_cgpa("no academic figures here"), None);
    }

    #[test]
    fn min_cgpa_reads_requirement_phrasings() {
        assert_eq!(extract_min_cgpa("Minimum CGPA: 7.5"), Some(7.5));
        assert_eq!(extract_min_cgpa("Required CGPA: 7.0, Max Backlogs: 0"), Some(7.0));
        assert_eq!(extract_min_cgpa("CGPA of 6.5 required"), Some(6.5));
        assert_eq!(extract_min_cgpa("8.0 CGPA and above only"), Some(8.0));
    }

    #[test]
    fn min_cgpa_ignores_plain_cgpa_mentions() {
        assert_eq!(extract_min_cgpa("our average cgpa is strong"), None);
    }

    #[test]
    fn no_backlogs_phrasing_returns_zero_not_absent() {
        assert_eq!(extract_max_backlogs("no backlogs allowed"), Some(0));
        assert_eq!(extract_max_backlogs("Backlogs: nil"), Some(0));
        assert_eq!(extract_max_backlogs("Max Backlogs: 0"), Some(0));
        assert_eq!(extract_max_backlogs("zero active backlogs required"), Some(0));
    }

    #[test]
    fn backlog_count_phrasings_accept_bounded_values() {
        assert_eq!(extract_max_backlogs("maximum 2 backlogs"), Some(2));
        assert_eq!(extract_max_backlogs("up to 3 backlogs considered"), Some(3));
        assert_eq!(extract_max_backlogs("1 backlog allowed"), Some(1));
        assert_eq!(extract_max_backlogs("99 backlogs allowed"), None);
    }

    #[test]
    fn backlogs_absent_means_unconstrained() {
        assert_eq!(extract_max_backlogs("strong academic record expected"), None);
    }

    #[test]
    fn academic_year_from_open_ended_degree_range() {
        let text = "Bachelor of Technology in Computer Science (2022 - pursuing)";
        assert_eq!(extract_academic_year(text), Some(2022));
    }

    #[test]
    fn academic_year_range_needs_degree_context() {
        // A bare year range with no degree anchor nearby is ignored, and the
        // fallback phrasings are absent too.
        assert_eq!(extract_academic_year("worked 2022-2026 at a startup"), None);
    }

    #[test]
    fn academic_year_ignores_fully_past_ranges() {
        // A range ending well in the past reads as start-to-finish of some
        // earlier program, not the current admission.
        let past_end = graduation_year_floor() - 1;
        let text = format!("B.Tech graduate, 2015-{past_end}, engineering college");
        assert_eq!(extract_academic_year(&text), None);
    }

    #[test]
    fn year_bounds_track_the_clock() {
        // The admission window and the range-end floor are derived from the
        // current year so the heuristics age with the placement cycle. Any
        // change to these offsets shifts which resumes get a year at all.
        let current = Utc::now().year();
        assert_eq!(max_admission_year(), current);
        assert_eq!(graduation_year_floor(), current - 2);
        assert!(MIN_ADMISSION_YEAR <= graduation_year_floor());
    }

    #[test]
    fn academic_year_fallback_phrasings() {
        assert_eq!(extract_academic_year("admitted in 2021"), Some(2021));
        assert_eq!(extract_academic_year("Batch of 2023"), Some(2023));
        assert_eq!(extract_academic_year("joined way back in 2009"), None);
    }
}
