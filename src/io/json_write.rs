use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Result;
use crate::model::{Column, Table};

/// Layout of a table written as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonOrient {
    /// `[{"column": value, ...}, ...]`, one object per row.
    #[default]
    Records,
    /// `{"column": {"0": value, ...}, ...}`, keyed by row index.
    Columns,
}

/// Writes the listed columns of `table`, in the listed order, as compact JSON.
/// Parent directories are created and an existing file is overwritten.
pub fn write_table(path: &Path, table: &Table, columns: &[&str], orient: JsonOrient) -> Result<()> {
    let view = TableView::new(table, columns)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    match orient {
        JsonOrient::Records => serde_json::to_writer(&mut writer, &RecordsView(&view))?,
        JsonOrient::Columns => serde_json::to_writer(&mut writer, &ColumnsView(&view))?,
    }
    writer.flush()?;
    Ok(())
}

struct TableView<'a> {
    columns: Vec<&'a Column>,
    row_count: usize,
}

impl<'a> TableView<'a> {
    fn new(table: &'a Table, names: &[&str]) -> Result<Self> {
        let columns = names
            .iter()
            .map(|name| table.column(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            columns,
            row_count: table.row_count(),
        })
    }
}

struct RecordsView<'a>(&'a TableView<'a>);

impl Serialize for RecordsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(self.0.row_count))?;
        for index in 0..self.0.row_count {
            rows.serialize_element(&RowView {
                view: self.0,
                index,
            })?;
        }
        rows.end()
    }
}

struct RowView<'a> {
    view: &'a TableView<'a>,
    index: usize,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_map(Some(self.view.columns.len()))?;
        for column in &self.view.columns {
            row.serialize_entry(&column.name, &column.values[self.index])?;
        }
        row.end()
    }
}

struct ColumnsView<'a>(&'a TableView<'a>);

impl Serialize for ColumnsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut columns = serializer.serialize_map(Some(self.0.columns.len()))?;
        for column in &self.0.columns {
            columns.serialize_entry(&column.name, &IndexedValues(column))?;
        }
        columns.end()
    }
}

struct IndexedValues<'a>(&'a Column);

impl Serialize for IndexedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut values = serializer.serialize_map(Some(self.0.values.len()))?;
        for (index, value) in self.0.values.iter().enumerate() {
            values.serialize_entry(&index.to_string(), value)?;
        }
        values.end()
    }
}
