use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::Result;
use crate::io::{excel_write, json_write};
use crate::model::columns::{
    ACADEMIC_SUPERVISOR, ALTERNATE_EMAIL, COLLEGE_OR_SCHOOL, CUNY_EMAIL, DISCIPLINE, FINAL_STATUS,
    FIRST_NAME, FULL_NAME, LAST_NAME, SUPERVISOR_EMAIL,
};
use crate::model::{Column, ScalarValue, Table};

pub const NAME: &str = "Name";
pub const DATE: &str = "Date";
pub const SEMESTER: &str = "Semester";
pub const STATUS: &str = "Status";
pub const CONCENTRATION: &str = "Concentration / Program";
pub const SECONDARY_CONCENTRATION: &str = "Secondary C / P";
pub const COLLEGE_SCHOOL: &str = "College/School";
pub const EMAIL_ADDRESS: &str = "Email Address";
pub const COMMENT: &str = "Comment";

/// Masterlist columns, in the order the masterlist expects them.
pub const ADDITION_COLUMNS: [&str; 9] = [
    NAME,
    DATE,
    SEMESTER,
    STATUS,
    CONCENTRATION,
    SECONDARY_CONCENTRATION,
    COLLEGE_SCHOOL,
    EMAIL_ADDRESS,
    COMMENT,
];

const UNUSED_COLUMNS: [&str; 5] = [
    ACADEMIC_SUPERVISOR,
    ALTERNATE_EMAIL,
    FIRST_NAME,
    LAST_NAME,
    SUPERVISOR_EMAIL,
];

const SHEET_NAME: &str = "Masterlist Addition";

/// Reshapes the cleaned roster into the masterlist schema.
pub fn build_additions(roster: &Table, config: &Config) -> Result<Table> {
    let mut additions = roster.clone();
    additions.drop_columns(&UNUSED_COLUMNS)?;
    additions.rename_columns(&[
        (CUNY_EMAIL, EMAIL_ADDRESS),
        (COLLEGE_OR_SCHOOL, COLLEGE_SCHOOL),
        (DISCIPLINE, CONCENTRATION),
        (config.comment_column.as_str(), COMMENT),
        (FULL_NAME, NAME),
        (FINAL_STATUS, STATUS),
    ]);

    let rows = additions.row_count();
    additions.push_column(Column::constant(
        DATE,
        ScalarValue::from(config.end_date.as_str()),
        rows,
    ))?;
    additions.push_column(Column::constant(
        SEMESTER,
        ScalarValue::from(config.term.as_str()),
        rows,
    ))?;
    additions.push_column(Column::constant(
        SECONDARY_CONCENTRATION,
        ScalarValue::from(" "),
        rows,
    ))?;

    if !additions.has_column(COMMENT) {
        warn!(
            column = %config.comment_column,
            "comment column not found in rosters; Comment will be empty"
        );
        additions.push_column(Column::constant(COMMENT, ScalarValue::Null, rows))?;
    }

    additions.select(&ADDITION_COLUMNS)
}

/// Builds the masterlist addition and persists it as
/// `reports/masterlist_addition_<end_date>.json`, plus an `.xlsx` copy when
/// Excel reports are enabled.
#[instrument(level = "info", skip_all)]
pub fn report_additions(roster: &Table, config: &Config) -> Result<Table> {
    let additions = build_additions(roster, config)?;

    let json_path = config.masterlist_addition_path("json");
    json_write::write_table(&json_path, &additions, &ADDITION_COLUMNS, config.json_orient)?;
    info!(rows = additions.row_count(), path = %json_path.display(), "masterlist addition written");

    if config.excel_reports {
        let xlsx_path = config.masterlist_addition_path("xlsx");
        excel_write::write_table(&xlsx_path, SHEET_NAME, &additions, &ADDITION_COLUMNS)?;
        info!(path = %xlsx_path.display(), "masterlist addition workbook written");
    }

    Ok(additions)
}
