//! Field extractors. Every extractor is a total function `&str -> Option<T>`
//! (or a set for multi-valued fields): pattern misses are routed into
//! "unknown"/"unconstrained" semantics downstream, never into errors. Each
//! pattern family lives behind a named function so the heuristics stay
//! independently testable and tunable.

pub mod academics;
pub mod branch;
pub mod compensation;
pub mod contact;
pub mod jd;
pub mod resume;
pub mod skills;

/// Slice `text` around `start..end` with `margin` bytes of context on both
/// sides, clamped to char boundaries so multi-byte text cannot panic.
pub(crate) fn context_window(text: &str, start: usize, end: usize, margin: usize) -> &str {
    let mut lo = start.saturating_sub(margin);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + margin).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_window_clamps_to_text_bounds() {
        let text = "abcdef";
        assert_eq!(context_window(text, 2, 3, 2), "abcde");
        assert_eq!(context_window(text, 0, 1, 100), "abcdef");
    }

    #[test]
    fn context_window_respects_char_boundaries() {
        let text = "résumé text";
        // Offsets landing inside the two-byte 'é' must widen, not panic.
        let window = context_window(text, 2, 3, 1);
        assert!(window.contains('é'));
    }
}
