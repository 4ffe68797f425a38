//! Shared number and text formatting helpers used by every tool.
//!
//! The rounding helpers reproduce the arithmetic of the published calculators
//! exactly, so `js_round(2.5)` is `3` and `js_round(-2.5)` is `-2`.

/// Rounds to the nearest integer, with half-way values going towards
/// positive infinity.
pub fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds up to the given number of decimal places.
pub fn ceil_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).ceil() / factor
}

/// Parses the leading number of a string, ignoring trailing garbage.
///
/// `"12.5g"` parses as `12.5`, `"  7"` as `7`, and `"abc"` as `None`.
pub fn parse_lenient(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let rest = &s[end..];
    if rest.starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Optional exponent, only consumed when it is complete.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Parses leniently and falls back to zero.
pub fn coerce_or_zero(input: &str) -> f64 {
    parse_lenient(input).filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Formats with a fixed number of decimals, dropping an all-zero fraction.
///
/// `format_number(70.0, 1)` is `"70"`, `format_number(70.26, 1)` is `"70.3"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    match fixed.split_once('.') {
        Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole.to_string(),
        _ => fixed,
    }
}

/// Formats a number as a whole percentage, e.g. `"42%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", js_round(value) as i64)
}

const FRACTIONS: [(f64, &str); 9] = [
    (0.125, "⅛"),
    (0.25, "¼"),
    (0.333, "⅓"),
    (0.375, "⅜"),
    (0.5, "½"),
    (0.625, "⅝"),
    (0.666, "⅔"),
    (0.75, "¾"),
    (0.875, "⅞"),
];

/// Formats a quantity using unicode vulgar fractions where one is close.
///
/// `1.5` becomes `"1½"`, `0.33` becomes `"⅓"`, and values with no close
/// fraction fall back to two decimals.
pub fn format_fraction(value: f64) -> String {
    let whole = value.floor();
    let decimal = value - whole;

    if decimal < 0.05 {
        return format!("{}", whole as i64);
    }

    let mut closest: Option<&str> = None;
    let mut closest_diff = f64::INFINITY;
    for (fraction, glyph) in FRACTIONS {
        let diff = (fraction - decimal).abs();
        if diff < closest_diff && diff < 0.05 {
            closest_diff = diff;
            closest = Some(glyph);
        }
    }

    match closest {
        Some(glyph) if whole > 0.0 => format!("{}{}", whole as i64, glyph),
        Some(glyph) => glyph.to_string(),
        None => format!("{:.2}", value),
    }
}

/// Naive English pluralization for unit and item labels.
pub fn pluralize(word: &str, count: f64) -> String {
    if count == 1.0 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        return format!("{}ies", stem);
    }
    if word.ends_with('s') || word.ends_with("sh") || word.ends_with("ch") || word.ends_with('x') {
        return format!("{}es", word);
    }
    format!("{}s", word)
}

/// Uppercases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every space-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Shortens text to `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Formats a duration in minutes as `"45 min"`, `"2h"` or `"1h 15m"`.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}h", hours)
    }
}

/// Coarse band a pairing score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
    Low,
    Unexpected,
}

/// Maps a 0-100 pairing score to its display label and tier.
pub fn match_quality(score: u32) -> (&'static str, MatchTier) {
    if score >= 90 {
        ("Excellent Match", MatchTier::High)
    } else if score >= 75 {
        ("Great Match", MatchTier::High)
    } else if score >= 60 {
        ("Good Match", MatchTier::Medium)
    } else if score >= 40 {
        ("Worth Trying", MatchTier::Low)
    } else {
        ("Experimental", MatchTier::Unexpected)
    }
}
