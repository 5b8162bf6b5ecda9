//! Document text normalization. Converters hand the engine raw UTF-8 text
//! decoded from a PDF/DOCX; this module turns that into a normalized view the
//! extractors share: NFKC-folded, horizontal whitespace collapsed, line
//! structure preserved (name extraction is line-oriented), plus a lowercase
//! shadow for keyword search.

use unicode_normalization::UnicodeNormalization;

/// A normalized document with a case-preserving view and a lowercase view.
///
/// Both views have identical byte offsets only when the text is ASCII, so the
/// extractors never mix offsets between them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentText {
    text: String,
    lower: String,
}

impl DocumentText {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let lower = text.to_lowercase();
        Self { text, lower }
    }

    /// Case-preserving normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase view for keyword search.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn normalize(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();

    let mut out = String::with_capacity(folded.len());
    for line in folded.replace("\r\n", "\n").replace('\r', "\n").lines() {
        let mut last_was_space = false;
        let trimmed = line.trim();
        for ch in trimmed.chars() {
            if ch == ' ' || ch == '\t' {
                if !last_was_space {
                    out.push(' ');
                }
                last_was_space = true;
            } else {
                out.push(ch);
                last_was_space = false;
            }
        }
        out.push('\n');
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_horizontal_whitespace_but_keeps_lines() {
        let doc = DocumentText::new("Asha   Verma\t\tCSE\nCGPA:    8.2");
        assert_eq!(doc.text(), "Asha Verma CSE\nCGPA: 8.2");
    }

    #[test]
    fn preserves_case_in_text_and_lowers_shadow() {
        let doc = DocumentText::new("Asha VERMA");
        assert_eq!(doc.text(), "Asha VERMA");
        assert_eq!(doc.lower(), "asha verma");
    }

    #[test]
    fn folds_fullwidth_compatibility_characters() {
        // Full-width letters and digits from OCR-ish converters fold to ASCII.
        let doc = DocumentText::new("ＣＧＰＡ： ８.５");
        assert_eq!(doc.lower(), "cgpa: 8.5");
    }

    #[test]
    fn normalizes_crlf_and_trims_line_edges() {
        let doc = DocumentText::new("  Asha Verma  \r\nB.Tech CSE\r");
        assert_eq!(doc.text(), "Asha Verma\nB.Tech CSE");
    }

    #[test]
    fn empty_input_stays_empty() {
        let doc = DocumentText::new("");
        assert_eq!(doc.text(), "");
        assert_eq!(doc.char_len(), 0);
    }
}
