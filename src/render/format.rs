use chrono::{DateTime, Utc};

/// Comma thousands separators, en-US grouping.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Grouped number, "N/A" when missing (repo metrics).
pub fn format_count(n: Option<u64>) -> String {
    match n {
        Some(v) => group_thousands(v),
        None => "N/A".to_string(),
    }
}

/// Grouped number, "0" when missing (user and contributor counts).
pub fn format_count_or_zero(n: Option<u64>) -> String {
    group_thousands(n.unwrap_or(0))
}

/// Long-form calendar date, e.g. "January 5, 2024".
pub fn format_date_long(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Short-form calendar date, e.g. "Jan 5, 2024".
pub fn format_date_short(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Byte count shown in kilobytes with two decimals.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Daily contribution intensity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Intensity {
    pub fn for_count(count: u64) -> Self {
        match count {
            0 => Intensity::None,
            1..=2 => Intensity::Low,
            3..=5 => Intensity::Medium,
            6..=10 => Intensity::High,
            _ => Intensity::VeryHigh,
        }
    }

    /// Calendar cell glyph.
    pub fn glyph(self) -> char {
        match self {
            Intensity::None => '·',
            Intensity::Low => '░',
            Intensity::Medium => '▒',
            Intensity::High => '▓',
            Intensity::VeryHigh => '█',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::None => "None",
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
            Intensity::VeryHigh => "Very High",
        }
    }
}
