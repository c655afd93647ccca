//! DataFrame
//!
//! An ordered collection of [`Series`] sharing a row axis, with optional row
//! labels. The row count is derived from the longest column, never stored.
//! Row insertion pads short columns (and non-empty labels) with nulls before
//! the new row is applied, and validates the whole row up front so a failed
//! insert leaves the frame untouched.

use serde::{Deserialize, Serialize};

use crate::data::{Cell, Series};
use crate::error::{GridError, Result};

/// Selects a column by position or by name (first match wins)
#[derive(Debug, Clone, Copy)]
pub enum ColumnRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for ColumnRef<'_> {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

impl<'a> From<&'a str> for ColumnRef<'a> {
    fn from(name: &'a str) -> Self {
        ColumnRef::Name(name)
    }
}

/// A labeled, typed, columnar table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    /// Optional frame name
    name: Option<String>,

    /// Row labels; empty means the frame is unlabeled
    row_labels: Vec<Option<String>>,

    /// The columns, in order; duplicate names are permitted
    columns: Vec<Series>,
}

impl DataFrame {
    // =========================================================================
    // Construction
    // =========================================================================

    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn from_columns(columns: impl IntoIterator<Item = Series>) -> Self {
        Self {
            name: None,
            row_labels: Vec::new(),
            columns: columns.into_iter().collect(),
        }
    }

    pub fn with_row_labels(mut self, labels: Vec<Option<String>>) -> Self {
        self.row_labels = labels;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn row_labels(&self) -> &[Option<String>] {
        &self.row_labels
    }

    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows: the longest column's length, 0 when there are none
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Series::len).max().unwrap_or(0)
    }

    /// Column by position or name; name lookup returns the first match
    pub fn column<'a>(&self, by: impl Into<ColumnRef<'a>>) -> Option<&Series> {
        match by.into() {
            ColumnRef::Index(i) => self.columns.get(i),
            ColumnRef::Name(name) => self.columns.iter().find(|c| c.name() == Some(name)),
        }
    }

    pub fn column_mut<'a>(&mut self, by: impl Into<ColumnRef<'a>>) -> Option<&mut Series> {
        match by.into() {
            ColumnRef::Index(i) => self.columns.get_mut(i),
            ColumnRef::Name(name) => self.columns.iter_mut().find(|c| c.name() == Some(name)),
        }
    }

    /// Cell at (column, row)
    pub fn cell<'a>(&self, by: impl Into<ColumnRef<'a>>, row: usize) -> Option<&Cell> {
        self.column(by).and_then(|c| c.get(row))
    }

    /// Replace the cell at (column, row)
    pub fn set_cell<'a>(
        &mut self,
        by: impl Into<ColumnRef<'a>>,
        row: usize,
        value: impl Into<Cell>,
    ) -> Result<()> {
        let by = by.into();
        let len = self.columns.len();
        match self.column_mut(by) {
            Some(column) => column.set(row, value),
            None => match by {
                ColumnRef::Index(index) => Err(GridError::IndexOutOfBounds { index, len }),
                ColumnRef::Name(name) => Err(GridError::ColumnNotFound(name.to_string())),
            },
        }
    }

    /// Iterate rows as (label, cells)
    pub fn rows(&self) -> impl Iterator<Item = (Option<&str>, Vec<&Cell>)> {
        static NULL_CELL: Cell = Cell::Null;
        (0..self.row_count()).map(move |r| {
            let label = self.row_labels.get(r).and_then(|l| l.as_deref());
            let cells = self
                .columns
                .iter()
                .map(|c| c.get(r).unwrap_or(&NULL_CELL))
                .collect();
            (label, cells)
        })
    }

    // =========================================================================
    // Column Mutation
    // =========================================================================

    /// Append a column
    pub fn push_column(&mut self, column: Series) {
        self.columns.push(column);
    }

    /// Replace the column at `index`
    pub fn set_column(&mut self, index: usize, column: Series) -> Result<()> {
        let len = self.columns.len();
        match self.columns.get_mut(index) {
            Some(slot) => {
                *slot = column;
                Ok(())
            }
            None => Err(GridError::IndexOutOfBounds { index, len }),
        }
    }

    /// Replace the first column with the given name, or append when absent
    pub fn set_column_by_name(&mut self, name: &str, column: Series) {
        match self.columns.iter().position(|c| c.name() == Some(name)) {
            Some(i) => self.columns[i] = column,
            None => self.columns.push(column),
        }
    }

    // =========================================================================
    // Row Mutation
    // =========================================================================

    /// Append a row
    ///
    /// `cells` must hold one value per column. Short columns are padded with
    /// nulls to the current row count first; non-empty row labels are padded
    /// the same way. Validation happens before any mutation.
    pub fn add_row(
        &mut self,
        cells: impl IntoIterator<Item = impl Into<Cell>>,
        label: Option<&str>,
    ) -> Result<()> {
        let row = self.check_row(cells)?;
        let n = self.row_count();

        self.pad_columns(n)?;
        for (column, cell) in self.columns.iter_mut().zip(row) {
            column.push(cell)?;
        }
        self.apply_label(n, n, label);
        Ok(())
    }

    /// Insert a row at `index`, shifting later rows down
    pub fn insert_row(
        &mut self,
        index: usize,
        cells: impl IntoIterator<Item = impl Into<Cell>>,
        label: Option<&str>,
    ) -> Result<()> {
        let n = self.row_count();
        if index > n {
            return Err(GridError::IndexOutOfBounds { index, len: n });
        }
        let row = self.check_row(cells)?;

        self.pad_columns(n)?;
        for (column, cell) in self.columns.iter_mut().zip(row) {
            column.insert(index, cell)?;
        }
        self.apply_label(n, index, label);
        Ok(())
    }

    /// Validate a row's width and every cell before mutating anything
    fn check_row(
        &self,
        cells: impl IntoIterator<Item = impl Into<Cell>>,
    ) -> Result<Vec<Cell>> {
        let row: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(GridError::ShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        let n = self.row_count();
        for (column, cell) in self.columns.iter().zip(&row) {
            column.check_cell(cell)?;
            if column.len() < n && !column.nullable() {
                // Padding would insert nulls into a non-nullable column.
                return Err(GridError::NullNotAllowed);
            }
        }
        Ok(row)
    }

    fn pad_columns(&mut self, to: usize) -> Result<()> {
        for column in &mut self.columns {
            while column.len() < to {
                column.push(Cell::Null)?;
            }
        }
        Ok(())
    }

    /// Pad labels to `n` rows and place `label` at `index`
    ///
    /// A frame stays unlabeled until the first explicit label arrives.
    fn apply_label(&mut self, n: usize, index: usize, label: Option<&str>) {
        if label.is_none() && self.row_labels.is_empty() {
            return;
        }
        while self.row_labels.len() < n {
            self.row_labels.push(None);
        }
        self.row_labels.insert(index, label.map(str::to_string));
    }
}
