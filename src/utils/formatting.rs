//! Formatting utilities used for CLI and chart outputs.

/// Percentage rounded for display, e.g. `pct(81.5, 1)` → "81.5%".
pub fn pct(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Rounded number without the percent sign, for chart rows.
pub fn round_to(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Integer with '.' as thousands separator (1200 → "1.200").
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

/// Horizontal bar for terminal charts: one block per `step` percent.
pub fn bar(value: f64, step: f64) -> String {
    if step <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let n = (value / step).round() as usize;
    "█".repeat(n)
}
