// Text Processing Service
// Display-side cleanup for post text

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\u{3000}\u{00A0}]+").expect("whitespace pattern is valid"))
}

/// Fold smart quotes and collapse all whitespace (line breaks included) so a
/// post renders on one line.
pub fn normalize_post_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let s = text
        .replace(['\u{201c}', '\u{201d}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace('\u{2014}', "-");

    whitespace_re().replace_all(&s, " ").trim().to_string()
}

/// Cut to at most `max_chars` characters, appending "..." when cut.
/// `max_chars == 0` disables truncation.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Read one post per non-blank line.
pub fn split_posts(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|ln| ln.trim())
        .filter(|ln| !ln.is_empty())
        .map(|ln| ln.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_post_text() {
        let input = "  \u{201c}Great\u{201d}   launch\n\ntoday \u{2014} it\u{2019}s live  ";
        assert_eq!(normalize_post_text(input), "\"Great\" launch today - it's live");
        assert_eq!(normalize_post_text(""), "");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_for_display("hello", 200), "hello");
        assert_eq!(truncate_for_display("hello", 5), "hello");
        assert_eq!(truncate_for_display("hello", 0), "hello");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let text = "héllo wörld 🚀🚀🚀";
        let cut = truncate_for_display(text, 13);
        assert_eq!(cut, "héllo wörld 🚀...");
    }

    #[test]
    fn test_split_posts_skips_blank_lines() {
        let posts = split_posts("first\n\n  second  \r\n\t\nthird");
        assert_eq!(posts, vec!["first", "second", "third"]);
    }
}
