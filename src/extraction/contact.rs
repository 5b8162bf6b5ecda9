//! Contact extraction: email, phone, and the line-oriented name heuristic.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();

    // Tried strictly in order; the first pattern that matches anything wins
    // and laxer patterns are not consulted.
    static ref PHONE_PREFIXED_RE: Regex = Regex::new(r"(?:\+91[\s-]?)?[6-9]\d{9}").unwrap();
    static ref PHONE_MOBILE_RE: Regex = Regex::new(r"[6-9]\d{9}").unwrap();
    static ref PHONE_ANY10_RE: Regex = Regex::new(r"\d{10}").unwrap();

    static ref TEN_DIGITS_RE: Regex = Regex::new(r"\d{10}").unwrap();
    static ref SECTION_KEYWORD_RE: Regex =
        Regex::new(r"(?i)github|linkedin|portfolio|objective|summary|education|experience")
            .unwrap();
    static ref ALPHA_WORD_RE: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
}

/// First RFC-5322-ish email in document order.
pub fn extract_email(text: &str) -> Option<String> {
    match EMAIL_RE.find(text) {
        Some(m) => {
            debug!(email = m.as_str(), "email found");
            Some(m.as_str().to_string())
        }
        None => {
            warn!("no email found");
            None
        }
    }
}

/// First phone number, preferring +91-prefixed Indian mobiles, then bare
/// mobiles (leading digit 6-9), then any 10-digit run.
pub fn extract_phone(text: &str) -> Option<String> {
    for pattern in [&*PHONE_PREFIXED_RE, &*PHONE_MOBILE_RE, &*PHONE_ANY10_RE] {
        if let Some(m) = pattern.find(text) {
            debug!(phone = m.as_str(), "phone found");
            return Some(m.as_str().to_string());
        }
    }
    warn!("no phone found");
    None
}

/// Name triple split from a resume header line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameParts {
    pub first: Option<String>,
    pub middle: Option<String>,
    pub last: Option<String>,
}

fn split_name(words: &[&str]) -> NameParts {
    NameParts {
        first: words.first().map(|w| w.to_string()),
        middle: if words.len() > 2 {
            Some(words[1..words.len() - 1].join(" "))
        } else {
            None
        },
        last: if words.len() > 1 {
            words.last().map(|w| w.to_string())
        } else {
            None
        },
    }
}

/// Scans the first five substantial lines for something name-shaped: 2-4
/// alphabetic words, under 50 characters, not a contact/section line.
///
/// Known-weak fallback, kept deliberately: when nothing qualifies, the first
/// line is split unconditionally so downstream code always gets a name tuple.
/// A header line can therefore surface as a nonsense "name".
pub fn extract_name(text: &str) -> NameParts {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 2)
        .collect();

    for line in lines.iter().take(5) {
        if line.contains('@')
            || TEN_DIGITS_RE.is_match(line)
            || SECTION_KEYWORD_RE.is_match(line)
        {
            continue;
        }

        let words: Vec<&str> = line
            .split_whitespace()
            .filter(|w| ALPHA_WORD_RE.is_match(w) && w.len() > 1)
            .collect();

        if (2..=4).contains(&words.len()) && line.len() < 50 {
            debug!(line, "name line found");
            return split_name(&words);
        }
    }

    warn!("name detection unclear, splitting first line");
    let first_line = lines.first().copied().unwrap_or("");
    let words: Vec<&str> = first_line
        .split_whitespace()
        .filter(|w| w.len() > 1)
        .collect();
    split_name(&words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_email_in_document_order() {
        let text = "Contact: asha.verma@college.edu\nBackup: averma@gmail.com";
        assert_eq!(extract_email(text).as_deref(), Some("asha.verma@college.edu"));
    }

    #[test]
    fn rejects_single_letter_tld() {
        assert_eq!(extract_email("broken@host.x"), None);
    }

    #[test]
    fn phone_prefers_prefixed_indian_mobile() {
        let text = "Call +91 9876543210 or office 0123456789";
        assert_eq!(extract_phone(text).as_deref(), Some("+91 9876543210"));
    }

    #[test]
    fn phone_falls_back_to_any_ten_digit_run() {
        // No 6-9 leading mobile anywhere; laxest pattern applies.
        assert_eq!(extract_phone("ref 0123456789").as_deref(), Some("0123456789"));
    }

    #[test]
    fn phone_absent_when_no_ten_digit_run() {
        assert_eq!(extract_phone("call 12345"), None);
    }

    #[test]
    fn name_skips_contact_and_section_lines() {
        let text = "asha.verma@college.edu\n9876543210\nEDUCATION\nAsha Rani Verma\nB.Tech CSE";
        let name = extract_name(text);
        assert_eq!(name.first.as_deref(), Some("Asha"));
        assert_eq!(name.middle.as_deref(), Some("Rani"));
        assert_eq!(name.last.as_deref(), Some("Verma"));
    }

    #[test]
    fn two_word_name_has_no_middle() {
        let name = extract_name("Asha Verma\nresume body");
        assert_eq!(name.first.as_deref(), Some("Asha"));
        assert_eq!(name.middle, None);
        assert_eq!(name.last.as_deref(), Some("Verma"));
    }

    #[test]
    fn falls_back_to_first_line_when_nothing_qualifies() {
        // Every candidate line is disqualified, so the first line is split
        // unconditionally even when it is clearly not a name.
        let text = "CURRICULUM VITAE 2024 EDITION WITH A VERY LONG HEADER LINE\nEducation";
        let name = extract_name(text);
        assert_eq!(name.first.as_deref(), Some("CURRICULUM"));
        assert_eq!(name.last.as_deref(), Some("LINE"));
    }

    #[test]
    fn empty_text_yields_empty_name() {
        assert_eq!(extract_name(""), NameParts::default());
    }
}
