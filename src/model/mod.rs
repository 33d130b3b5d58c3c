use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use crate::error::{Result, ToolError};

pub mod columns;

/// Represents a single cell value in a roster table.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Plain string literal.
    String(String),
    /// Floating point number literal. Spreadsheet integers are widened.
    Number(f64),
    /// Boolean literal.
    Boolean(bool),
    /// Empty cell.
    Null,
}

impl ScalarValue {
    /// Returns the string payload, if the value holds one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ScalarValue::String(value) => serializer.serialize_str(value),
            ScalarValue::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            ScalarValue::Number(_) | ScalarValue::Null => serializer.serialize_unit(),
            ScalarValue::Boolean(value) => serializer.serialize_bool(*value),
        }
    }
}

/// Closed set of labels a categorical column may take.
///
/// Labels are kept sorted so that anything derived from the domain, such as
/// the number of distinct categories, does not depend on row order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryDomain {
    labels: BTreeSet<String>,
}

impl CategoryDomain {
    /// Creates a domain from an explicit list of labels.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a domain from the string labels present in `values`.
    pub fn observed(values: &[ScalarValue]) -> Self {
        Self::from_labels(values.iter().filter_map(ScalarValue::as_str))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// A named column of cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<ScalarValue>,
    domain: Option<CategoryDomain>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            values,
            domain: None,
        }
    }

    /// Creates a column repeating `value` for `len` rows.
    pub fn constant(name: impl Into<String>, value: ScalarValue, len: usize) -> Self {
        Self::new(name, vec![value; len])
    }

    /// Rewrites every string value with `transform`; other values are kept.
    pub fn map_text<F>(&mut self, transform: F)
    where
        F: Fn(&str) -> String,
    {
        for value in &mut self.values {
            if let ScalarValue::String(text) = value {
                *text = transform(text);
            }
        }
    }

    pub fn domain(&self) -> Option<&CategoryDomain> {
        self.domain.as_ref()
    }

    /// Marks the column as categorical. String values missing from `domain`
    /// are added to it and returned in sorted order.
    pub fn set_domain(&mut self, mut domain: CategoryDomain) -> Vec<String> {
        let unlisted: BTreeSet<String> = self
            .values
            .iter()
            .filter_map(ScalarValue::as_str)
            .filter(|value| !domain.contains(value))
            .map(str::to_string)
            .collect();
        domain.labels.extend(unlisted.iter().cloned());
        self.domain = Some(domain);
        unlisted.into_iter().collect()
    }

    /// Number of distinct categories: the domain size for categorical
    /// columns, otherwise the number of distinct string values.
    pub fn category_count(&self) -> usize {
        match &self.domain {
            Some(domain) => domain.len(),
            None => CategoryDomain::observed(&self.values).len(),
        }
    }

    pub fn count_non_null(&self) -> usize {
        self.values.iter().filter(|value| !value.is_null()).count()
    }

    pub fn count_equal(&self, label: &str) -> usize {
        self.values
            .iter()
            .filter(|value| value.as_str() == Some(label))
            .count()
    }
}

/// An ordered collection of equally sized columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Builds a table from a header and row-major cells. Short rows are padded
    /// with nulls; cells beyond the header are ignored.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<ScalarValue>>) -> Self {
        let row_count = rows.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(row_count)))
            .collect();

        for mut row in rows {
            row.resize(columns.len(), ScalarValue::Null);
            for (column, cell) in columns.iter_mut().zip(row) {
                column.values.push(cell);
            }
        }

        Self { columns, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| ToolError::MissingColumn(name.to_string()))
    }

    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.name == name)
            .ok_or_else(|| ToolError::MissingColumn(name.to_string()))
    }

    /// Adds a column, replacing any existing column of the same name in place.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.columns.is_empty() && self.row_count == 0 {
            self.row_count = column.values.len();
        }
        if column.values.len() != self.row_count {
            return Err(ToolError::ColumnLength {
                column: column.name,
                expected: self.row_count,
                actual: column.values.len(),
            });
        }

        match self.position(&column.name) {
            Some(index) => self.columns[index] = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Removes the named columns. Nothing is removed unless all of them exist.
    pub fn drop_columns(&mut self, names: &[&str]) -> Result<()> {
        if let Some(missing) = names.iter().find(|name| !self.has_column(name)) {
            return Err(ToolError::MissingColumn(missing.to_string()));
        }
        self.columns
            .retain(|column| !names.contains(&column.name.as_str()));
        Ok(())
    }

    /// Renames columns according to `(from, to)` pairs. Absent sources are
    /// skipped; an existing column named `to` is replaced.
    pub fn rename_columns(&mut self, mapping: &[(&str, &str)]) {
        for (from, to) in mapping {
            if from == to || !self.has_column(from) {
                continue;
            }
            self.columns.retain(|column| column.name != *to);
            if let Some(index) = self.position(from) {
                self.columns[index].name = (*to).to_string();
            }
        }
    }

    /// Returns a new table holding copies of the named columns in the given
    /// order.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let columns = names
            .iter()
            .map(|name| self.column(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        Ok(Table {
            columns,
            row_count: self.row_count,
        })
    }

    /// Appends the rows of `other`, aligning columns by name. Columns missing
    /// on either side are filled with nulls; new columns keep first-seen order.
    pub fn append(&mut self, other: Table) {
        if self.columns.is_empty() && self.row_count == 0 {
            *self = other;
            return;
        }

        let existing_rows = self.row_count;
        let appended_rows = other.row_count;

        for incoming in other.columns {
            match self.position(&incoming.name) {
                Some(index) => {
                    let column = &mut self.columns[index];
                    column.values.extend(incoming.values);
                    column.domain = None;
                }
                None => {
                    let mut values = vec![ScalarValue::Null; existing_rows];
                    values.extend(incoming.values);
                    self.columns.push(Column::new(incoming.name, values));
                }
            }
        }

        let row_count = existing_rows + appended_rows;
        for column in &mut self.columns {
            column.values.resize(row_count, ScalarValue::Null);
        }
        self.row_count = row_count;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }
}
