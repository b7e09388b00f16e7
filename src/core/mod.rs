pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod import;
pub mod logic;
pub mod projector;
pub mod sample;
pub mod store;

pub use dashboard::Dashboard;
pub use filter::matches;
pub use projector::project;
pub use store::RecordStore;
