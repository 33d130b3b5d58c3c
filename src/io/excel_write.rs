use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::{ScalarValue, Table};

/// Writes the listed columns of `table` to a single-sheet workbook with a
/// header row and an autofilter table over the data.
pub fn write_table(path: &Path, sheet_name: &str, table: &Table, columns: &[&str]) -> Result<()> {
    let selected = table.select(columns)?;
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col_idx, column) in selected.columns().iter().enumerate() {
        let col_idx = col_idx as u16;
        worksheet.write_string(0, col_idx, &column.name)?;

        for (row_idx, value) in column.values.iter().enumerate() {
            let row_idx = (row_idx + 1) as u32;
            match value {
                ScalarValue::String(text) => {
                    worksheet.write_string(row_idx, col_idx, text)?;
                }
                ScalarValue::Number(number) => {
                    worksheet.write_number(row_idx, col_idx, *number)?;
                }
                ScalarValue::Boolean(flag) => {
                    worksheet.write_boolean(row_idx, col_idx, *flag)?;
                }
                ScalarValue::Null => {}
            }
        }
    }

    if selected.row_count() > 0 {
        let mut excel_table = rust_xlsxwriter::Table::new();
        excel_table.set_autofilter(true);
        let col_end = (selected.columns().len() as u16).saturating_sub(1);
        let row_end = selected.row_count() as u32;
        worksheet.add_table(0, 0, row_end, col_end, &excel_table)?;
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    workbook.save(path)?;
    Ok(())
}
