use std::fmt;

use tracing::{info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::io::json_write;
use crate::model::Table;
use crate::model::columns::{ACADEMIC_SUPERVISOR, COLLEGE_OR_SCHOOL, FINAL_STATUS, FULL_NAME};

pub const PASS: &str = "Pass";
pub const NO_PASS: &str = "No Pass";
pub const WITHDRAW: &str = "Withdraw";

/// Columns of the participation projection, in output order.
pub const PARTICIPATION_COLUMNS: [&str; 4] =
    [FULL_NAME, FINAL_STATUS, COLLEGE_OR_SCHOOL, ACADEMIC_SUPERVISOR];

/// Outcome tallies for one run. The status counts are independent, so rows
/// with any other status are counted in none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipationSummary {
    pub participants: usize,
    pub pass_count: usize,
    pub no_pass_count: usize,
    pub withdraw_count: usize,
    /// Number of labels in the College or School domain.
    pub college_school_count: usize,
}

impl ParticipationSummary {
    /// Tallies a table holding at least the participation columns.
    pub fn from_table(table: &Table) -> Result<Self> {
        let status = table.column(FINAL_STATUS)?;
        Ok(Self {
            participants: table.row_count(),
            pass_count: status.count_equal(PASS),
            no_pass_count: status.count_equal(NO_PASS),
            withdraw_count: status.count_equal(WITHDRAW),
            college_school_count: table.column(COLLEGE_OR_SCHOOL)?.category_count(),
        })
    }
}

impl fmt::Display for ParticipationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Participants from {} units of CUNY. {} passed, {} did not pass, and {} withdrew.",
            self.college_school_count, self.pass_count, self.no_pass_count, self.withdraw_count
        )
    }
}

/// Projects the participation columns, logs the outcome tallies and persists
/// the projection as `participation_data_<end_date>.json`.
#[instrument(level = "info", skip_all)]
pub fn report_participation(roster: &Table, config: &Config) -> Result<ParticipationSummary> {
    let participation = roster.select(&PARTICIPATION_COLUMNS)?;
    let summary = ParticipationSummary::from_table(&participation)?;
    info!(
        participants = summary.participants,
        pass = summary.pass_count,
        no_pass = summary.no_pass_count,
        withdraw = summary.withdraw_count,
        colleges = summary.college_school_count,
        "{summary}"
    );

    json_write::write_table(
        &config.participation_data_path(),
        &participation,
        &PARTICIPATION_COLUMNS,
        config.json_orient,
    )?;

    Ok(summary)
}
