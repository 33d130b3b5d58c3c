//! Reports derived from the cleaned roster.

pub mod addition;
pub mod participation;

pub use addition::report_additions;
pub use participation::{ParticipationSummary, report_participation};
