//! Character-exact text helpers
//!
//! Every size bound in the pipeline (chunk size, extraction windows, shrink,
//! fallback prefix) counts characters, not bytes, so multi-byte transcripts
//! never get sliced mid-character.

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The prefix of `s` holding at most `n` characters.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Partitions `s` into consecutive, non-overlapping windows of exactly `n`
/// characters; the final window may be shorter. Empty input yields no windows.
pub fn char_windows(s: &str, n: usize) -> Vec<&str> {
    debug_assert!(n > 0, "window size must be positive");
    let mut windows = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let head = char_prefix(rest, n);
        windows.push(head);
        rest = &rest[head.len()..];
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_characters_not_bytes() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
    }

    #[test]
    fn char_prefix_respects_boundaries() {
        assert_eq!(char_prefix("hello", 3), "hel");
        assert_eq!(char_prefix("hello", 10), "hello");
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("", 5), "");
        assert_eq!(char_prefix("abc", 0), "");
    }

    #[test]
    fn char_windows_partition_without_loss_or_overlap() {
        let text = "abcdefghij";
        let windows = char_windows(text, 4);
        assert_eq!(windows, vec!["abcd", "efgh", "ij"]);
        assert_eq!(windows.concat(), text);
    }

    #[test]
    fn char_windows_exact_multiple_has_no_short_tail() {
        let windows = char_windows("abcdef", 3);
        assert_eq!(windows, vec!["abc", "def"]);
    }

    #[test]
    fn char_windows_empty_input_yields_nothing() {
        assert!(char_windows("", 5).is_empty());
    }

    #[test]
    fn char_windows_handle_multibyte_text() {
        let text = "日本語のテキスト";
        let windows = char_windows(text, 3);
        assert_eq!(windows, vec!["日本語", "のテキ", "スト"]);
        assert_eq!(windows.concat(), text);
    }
}
