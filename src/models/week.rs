use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Epidemiological week index, always within 1..=53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EpiWeek(u8);

impl EpiWeek {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 53;

    pub fn new(n: u8) -> AppResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(AppError::InvalidWeek(n.to_string()))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn all() -> Vec<EpiWeek> {
        (Self::MIN..=Self::MAX).map(EpiWeek).collect()
    }

    /// Chart label used by the weekly coverage line ("SE 3").
    pub fn label(&self) -> String {
        format!("SE {}", self.0)
    }
}

impl fmt::Display for EpiWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for EpiWeek {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EpiWeek> for u8 {
    fn from(w: EpiWeek) -> Self {
        w.0
    }
}
