use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use calamine::{DataType, Range, Reader, open_workbook_auto};
use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::model::columns::{FIRST_NAME, UNNAMED_PREFIX};
use crate::model::{ScalarValue, Table};

/// Reads every roster spreadsheet in `directory` and concatenates them into a
/// single table. Files are visited in file-name order and rows keep their
/// order within each file.
#[instrument(level = "info", skip_all, fields(directory = %directory.display()))]
pub fn load_rosters(directory: &Path) -> Result<Table> {
    if !directory.is_dir() {
        return Err(ToolError::MissingInput(directory.to_path_buf()));
    }

    let paths = roster_paths(directory)?;
    if paths.is_empty() {
        return Err(ToolError::EmptyInput(directory.to_path_buf()));
    }

    let mut combined = Table::default();
    for path in &paths {
        let roster = read_roster(path)?;
        debug!(path = %path.display(), rows = roster.row_count(), "read roster");
        combined.append(roster);
    }

    let participants = combined.column(FIRST_NAME)?.count_non_null();
    info!(
        participants,
        files = paths.len(),
        "{participants} participants found. Please manually check this against the \
         source spreadsheets in order to test for data loss."
    );

    Ok(combined)
}

/// Reads the first worksheet of a roster file. The first row is the header.
pub fn read_roster(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|source| ToolError::RosterRead {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            ToolError::InvalidWorkbook(format!("{} has no worksheets", path.display()))
        })?
        .map_err(|source| ToolError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;

    table_from_range(&range).ok_or_else(|| {
        ToolError::InvalidWorkbook(format!("{} has no header row", path.display()))
    })
}

fn table_from_range(range: &Range<DataType>) -> Option<Table> {
    let column_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows();
    let headers = header_names(rows.next()?, column_offset);

    let records = rows
        .map(|row| row.iter().map(cell_to_scalar).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|cell| !is_blank(cell)))
        .collect();

    Some(Table::from_rows(headers, records))
}

/// Blank headers are named after their absolute column index; repeated
/// headers get a numeric suffix.
fn header_names(row: &[DataType], column_offset: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = cell_to_string(cell).trim().to_string();
            let name = if name.is_empty() {
                format!("{UNNAMED_PREFIX}{}", column_offset + idx)
            } else {
                name
            };

            let occurrences = seen.entry(name.clone()).or_insert(0);
            let unique = if *occurrences == 0 {
                name
            } else {
                format!("{name}.{occurrences}")
            };
            *occurrences += 1;
            unique
        })
        .collect()
}

fn roster_paths(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name.starts_with("~$") {
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_scalar(cell: &DataType) -> ScalarValue {
    match cell {
        DataType::String(value) if value.is_empty() => ScalarValue::Null,
        DataType::String(value) => ScalarValue::String(value.clone()),
        DataType::Float(value) => ScalarValue::Number(*value),
        DataType::Int(value) => ScalarValue::Number(*value as f64),
        DataType::Bool(value) => ScalarValue::Boolean(*value),
        DataType::Empty | DataType::Error(_) => ScalarValue::Null,
        other => ScalarValue::String(other.to_string()),
    }
}

fn is_blank(cell: &ScalarValue) -> bool {
    match cell {
        ScalarValue::String(value) => value.trim().is_empty(),
        other => other.is_null(),
    }
}
