pub mod cycle;
pub mod filter;
pub mod modality;
pub mod record;
pub mod reference;
pub mod summary;
pub mod week;

pub use cycle::ActivityCycle;
pub use filter::{FilterCriteria, FilterUpdate};
pub use modality::WorkModality;
pub use record::{RecordInput, SurveyRecord};
pub use summary::{
    CategorySlice, CategoryTotals, DashboardSnapshot, LocalityRow, OverallStats, WeeklyCoverage,
};
pub use week::EpiWeek;
