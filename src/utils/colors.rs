/// ANSI color helper utilities for terminal output.
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Coverage colour: ≥ 80 green, ≥ 50 yellow, below red.
pub fn color_for_coverage(value: f64) -> &'static str {
    if value >= 80.0 {
        GREEN
    } else if value >= 50.0 {
        YELLOW
    } else {
        RED
    }
}
