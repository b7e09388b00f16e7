use super::{cycle::ActivityCycle, modality::WorkModality, week::EpiWeek};
use serde::Serialize;

/// The four optional conditions narrowing the record set.
///
/// `week`, `modality` and `cycle` use `None` for "no filter". `locality`
/// is free text: the empty string means "no filter", anything else is a
/// case-insensitive substring to look for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub week: Option<EpiWeek>,
    pub modality: Option<WorkModality>,
    pub locality: String,
    pub cycle: Option<ActivityCycle>,
}

impl FilterCriteria {
    pub fn is_unset(&self) -> bool {
        self.week.is_none()
            && self.modality.is_none()
            && self.locality.is_empty()
            && self.cycle.is_none()
    }

    /// Merge a partial update; fields the update does not mention stay as they are.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(week) = update.week {
            self.week = week;
        }
        if let Some(modality) = update.modality {
            self.modality = modality;
        }
        if let Some(locality) = update.locality {
            self.locality = locality;
        }
        if let Some(cycle) = update.cycle {
            self.cycle = cycle;
        }
    }
}

/// Partial update for [`FilterCriteria`].
///
/// The outer `Option` says whether the field is touched at all; the inner
/// value is the new setting (`None` / empty string clears that filter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub week: Option<Option<EpiWeek>>,
    pub modality: Option<Option<WorkModality>>,
    pub locality: Option<String>,
    pub cycle: Option<Option<ActivityCycle>>,
}

impl FilterUpdate {
    pub fn week(mut self, week: Option<EpiWeek>) -> Self {
        self.week = Some(week);
        self
    }

    pub fn modality(mut self, modality: Option<WorkModality>) -> Self {
        self.modality = Some(modality);
        self
    }

    pub fn locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn cycle(mut self, cycle: Option<ActivityCycle>) -> Self {
        self.cycle = Some(cycle);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.week.is_none()
            && self.modality.is_none()
            && self.locality.is_none()
            && self.cycle.is_none()
    }
}
