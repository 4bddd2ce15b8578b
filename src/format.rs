use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Formats a byte count with a 1024-based unit and exactly two decimals,
/// e.g. `1536` → `"1.50 KB"`. Zero is `"0 B"`; anything past TB stays in TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let unit = unit_index(bytes);
    let divisor = 1024u128.pow(unit as u32);

    // Hundredths of a unit, rounded half-up on the exact quotient.
    let hundredths = (u128::from(bytes) * 200 + divisor) / (divisor * 2);
    format!(
        "{}.{:02} {}",
        hundredths / 100,
        hundredths % 100,
        UNITS[unit]
    )
}

/// Largest `i` with `1024^i <= bytes`, capped at the last unit.
fn unit_index(bytes: u64) -> usize {
    let mut unit = 0;
    let mut threshold: u64 = 1024;
    while unit < UNITS.len() - 1 && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }
    unit
}
