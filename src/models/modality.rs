use serde::{Deserialize, Serialize};
use std::fmt;

/// Work modality of a field visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkModality {
    #[serde(rename = "LI")]
    Survey, // LI
    #[serde(rename = "LI + T")]
    SurveyTreatment, // LI + T
    #[serde(rename = "PE")]
    StrategicPoint, // PE
    #[serde(rename = "TR")]
    Treatment, // TR
}

impl WorkModality {
    pub const ALL: [WorkModality; 4] = [
        WorkModality::Survey,
        WorkModality::SurveyTreatment,
        WorkModality::StrategicPoint,
        WorkModality::Treatment,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WorkModality::Survey => "LI",
            WorkModality::SurveyTreatment => "LI + T",
            WorkModality::StrategicPoint => "PE",
            WorkModality::Treatment => "TR",
        }
    }

    /// Exact code → enum (case-sensitive, as stored on records)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Helper: convert user input from the CLI.
    /// Accepts the exact code, upper/lower case, and "LI+T" without spaces.
    pub fn parse_input(input: &str) -> Option<Self> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        match compact.as_str() {
            "LI" => Some(WorkModality::Survey),
            "LI+T" => Some(WorkModality::SurveyTreatment),
            "PE" => Some(WorkModality::StrategicPoint),
            "TR" => Some(WorkModality::Treatment),
            _ => None,
        }
    }
}

impl fmt::Display for WorkModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
