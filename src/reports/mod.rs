//! Reports built on top of the stored expenses

pub mod summary;

pub use summary::{CategoryTotal, SpendingSummary, SummaryPeriod};
