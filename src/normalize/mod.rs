use tracing::{debug, instrument, warn};

use crate::config::{CategoryDomains, Config};
use crate::error::{Result, ToolError};
use crate::io::json_write;
use crate::model::columns::{
    ACADEMIC_SUPERVISOR, ALTERNATE_EMAIL, COLLEGE_OR_SCHOOL, CUNY_EMAIL, DISCIPLINE,
    DROPPED_COLUMNS, FINAL_STATUS, FIRST_NAME, FULL_NAME, LAST_NAME, SUPERVISOR_EMAIL,
};
use crate::model::{CategoryDomain, Column, ScalarValue, Table};

const TITLE_CASE_COLUMNS: [&str; 4] = [FIRST_NAME, LAST_NAME, ACADEMIC_SUPERVISOR, DISCIPLINE];
const LOWER_CASE_COLUMNS: [&str; 3] = [SUPERVISOR_EMAIL, ALTERNATE_EMAIL, CUNY_EMAIL];

/// Cleans the combined roster and persists it as `pto_data_<end_date>.json`.
#[instrument(level = "info", skip_all, fields(rows = roster.row_count()))]
pub fn normalize(roster: Table, config: &Config) -> Result<Table> {
    let roster = apply_rules(roster, &config.domains)?;

    let path = config.pto_data_path();
    json_write::write_table(&path, &roster, &roster.column_names(), config.json_orient)?;
    debug!(path = %path.display(), columns = roster.columns().len(), "cleaned roster written");

    Ok(roster)
}

/// Applies the per-column text rules, derives `Full Name`, marks the
/// categorical columns and drops the columns no report uses.
pub fn apply_rules(mut roster: Table, domains: &CategoryDomains) -> Result<Table> {
    for name in TITLE_CASE_COLUMNS {
        roster.column_mut(name)?.map_text(title_case);
    }
    for name in LOWER_CASE_COLUMNS {
        roster.column_mut(name)?.map_text(str::to_lowercase);
    }
    roster.column_mut(COLLEGE_OR_SCHOOL)?.map_text(str::to_uppercase);
    roster.column_mut(FINAL_STATUS)?.map_text(title_case);

    let full_names = full_names(&roster)?;
    roster.push_column(Column::new(FULL_NAME, full_names))?;

    categorize(
        roster.column_mut(FINAL_STATUS)?,
        domains.final_status.as_deref(),
        title_case,
    );
    categorize(
        roster.column_mut(COLLEGE_OR_SCHOOL)?,
        domains.college_or_school.as_deref(),
        str::to_uppercase,
    );

    roster.drop_columns(&DROPPED_COLUMNS)?;
    Ok(roster)
}

fn full_names(roster: &Table) -> Result<Vec<ScalarValue>> {
    let first = roster.column(FIRST_NAME)?;
    let last = roster.column(LAST_NAME)?;

    (0..roster.row_count())
        .map(|row| {
            let first_name = name_part(first, row)?;
            let last_name = name_part(last, row)?;
            Ok(ScalarValue::String(format!("{last_name}, {first_name}")))
        })
        .collect()
}

/// Numeric and boolean cells are rendered as text; integral numbers drop
/// their fractional part.
fn name_part(column: &Column, row: usize) -> Result<String> {
    let text = match &column.values[row] {
        ScalarValue::String(value) if !value.trim().is_empty() => value.clone(),
        ScalarValue::Number(value) if value.fract() == 0.0 => format!("{value:.0}"),
        ScalarValue::Number(value) => value.to_string(),
        ScalarValue::Boolean(value) => value.to_string(),
        ScalarValue::String(_) | ScalarValue::Null => {
            return Err(ToolError::MissingName {
                row,
                column: column.name.clone(),
            });
        }
    };
    Ok(text)
}

/// Configured labels are normalized with the column's own rule so that the
/// configuration is case-insensitive. Values outside the configured labels
/// are kept and join the domain.
fn categorize<F>(column: &mut Column, allowed: Option<&[String]>, rule: F)
where
    F: Fn(&str) -> String,
{
    let domain = match allowed {
        Some(labels) => CategoryDomain::from_labels(labels.iter().map(|label| rule(label.as_str()))),
        None => CategoryDomain::observed(&column.values),
    };
    let unlisted = column.set_domain(domain);
    if !unlisted.is_empty() {
        warn!(
            column = %column.name,
            ?unlisted,
            "values outside the configured categories were kept"
        );
    }
}

/// Title-cases text: a cased letter that follows an uncased character is
/// uppercased, every other cased letter is lowercased.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_cased = false;

    for ch in value.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased && previous_cased {
            result.extend(ch.to_lowercase());
        } else if cased {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        previous_cased = cased;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("ann"), "Ann");
        assert_eq!(title_case("NO PASS"), "No Pass");
        assert_eq!(title_case("mary-kate o'brien"), "Mary-Kate O'Brien");
        assert_eq!(title_case("  de la cruz"), "  De La Cruz");
    }

    #[test]
    fn title_case_treats_digits_as_boundaries() {
        assert_eq!(title_case("3rd cohort"), "3Rd Cohort");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn full_name_requires_both_parts() {
        let roster = Table::from_rows(
            vec![FIRST_NAME.into(), LAST_NAME.into()],
            vec![
                vec!["Ann".into(), "Smith".into()],
                vec!["Bob".into(), ScalarValue::Null],
            ],
        );

        let error = full_names(&roster).unwrap_err();

        assert!(matches!(
            error,
            ToolError::MissingName { row: 1, column } if column == LAST_NAME
        ));
    }

    #[test]
    fn numeric_name_parts_are_rendered_as_text() {
        let roster = Table::from_rows(
            vec![FIRST_NAME.into(), LAST_NAME.into()],
            vec![vec![ScalarValue::Number(7.0), "Smith".into()]],
        );

        let names = full_names(&roster).unwrap();

        assert_eq!(names, vec![ScalarValue::from("Smith, 7")]);
    }

    #[test]
    fn blank_name_part_is_missing() {
        let roster = Table::from_rows(
            vec![FIRST_NAME.into(), LAST_NAME.into()],
            vec![vec!["   ".into(), "Smith".into()]],
        );

        let error = full_names(&roster).unwrap_err();

        assert!(matches!(
            error,
            ToolError::MissingName { row: 0, column } if column == FIRST_NAME
        ));
    }
}
