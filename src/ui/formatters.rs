//! Shared formatting utilities for UI components.

use unicode_width::UnicodeWidthChar;

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format a fraction as a percentage with one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
///
/// Keeps the tail of the text when `keep_end` is set, which suits a field
/// being typed into.
pub fn truncate_to_width(text: &str, width: usize, keep_end: bool) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut kept = Vec::new();
    let chars: Vec<char> = if keep_end {
        text.chars().rev().collect()
    } else {
        text.chars().collect()
    };
    for c in chars {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }

    if keep_end {
        kept.reverse();
        format!("…{}", kept.into_iter().collect::<String>())
    } else {
        format!("{}…", kept.into_iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_pick_precision() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(150.0), "150");
        assert_eq!(format_axis_label(2.5), "2.5");
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("hello", 10, false), "hello");
        assert_eq!(truncate_to_width("hello world", 6, false), "hello…");
        assert_eq!(truncate_to_width("hello world", 6, true), "…world");
        assert_eq!(truncate_to_width("日本語テキスト", 5, false), "日本…");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(1.0 / 3.0), "33.3%");
    }
}
