use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `width` columns, ending in an ellipsis when shortened.
pub(crate) fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("main.rs", 10), "main.rs");
        assert_eq!(truncate("main.rs", 7), "main.rs");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("main.rs", 5), "main\u{2026}");
        assert_eq!(truncate("main.rs", 1), "\u{2026}");
        assert_eq!(truncate("main.rs", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(truncate("日本語.txt", 4), "日\u{2026}");
    }
}
