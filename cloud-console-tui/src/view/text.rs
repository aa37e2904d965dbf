//! Column formatting helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads or truncates `s` to exactly `width` display columns.
///
/// Width is measured in terminal cells, so wide characters count double;
/// truncated values end in an ellipsis.
pub fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current <= width {
        let mut out = s.to_string();
        out.push_str(&" ".repeat(width - current));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_values() {
        assert_eq!(pad("web", 6), "web   ");
    }

    #[test]
    fn truncates_long_values_with_ellipsis() {
        let out = pad("a-very-long-instance-name", 10);
        assert_eq!(UnicodeWidthStr::width(out.as_str()), 10);
        assert!(out.contains('…'));
    }
}
