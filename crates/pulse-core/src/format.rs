// File: crates/pulse-core/src/format.rs
// Summary: Display formatting for chart labels and dashboard figures (grouping, currency, relative time).

use chrono::{DateTime, Utc};

/// en-US style number: thousands separators, at most three fraction digits, no trailing zeros.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() { return value.to_string(); }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let negative = value < 0.0 && (int_part != "0" || !frac.is_empty());

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative { out.push('-'); }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Dollar amount with a fixed number of decimals, e.g. `$15,750.00`.
pub fn currency(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}${}", group_digits(int_part))
    } else {
        format!("{sign}${}.{frac}", group_digits(int_part))
    }
}

/// Signed percentage with one decimal, e.g. `+12.5%`.
pub fn percent_change(value: f64) -> String {
    format!("{value:+.1}%")
}

/// Coarse "time ago" label: `Just now`, `5m ago`, `2h ago`, `3d ago`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}
