use serde::{Deserialize, Serialize};
use std::fmt;

/// Campaign phase a survey record belongs to ("Ciclo 01" .. "Ciclo 06").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityCycle(u8);

impl ActivityCycle {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 6;

    pub fn new(n: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&n).then_some(Self(n))
    }

    pub fn all() -> Vec<ActivityCycle> {
        (Self::FIRST..=Self::LAST).map(ActivityCycle).collect()
    }

    pub fn label(&self) -> String {
        format!("Ciclo {:02}", self.0)
    }

    /// Accepts "Ciclo 01", "ciclo 1", "Cycle 02" or a bare number.
    pub fn parse_input(input: &str) -> Option<Self> {
        let s = input.trim();
        let lower = s.to_lowercase();
        let digits = lower
            .strip_prefix("ciclo")
            .or_else(|| lower.strip_prefix("cycle"))
            .unwrap_or(&lower)
            .trim();

        digits.parse::<u8>().ok().and_then(Self::new)
    }
}

impl fmt::Display for ActivityCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciclo {:02}", self.0)
    }
}

impl TryFrom<String> for ActivityCycle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_input(&value).ok_or_else(|| format!("invalid activity cycle '{value}'"))
    }
}

impl From<ActivityCycle> for String {
    fn from(c: ActivityCycle) -> Self {
        c.label()
    }
}
